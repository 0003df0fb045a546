//! Field notifications and the listener registry.
//!
//! Listeners are registered explicitly on the [`crate::PlayField`] that owns
//! them; there is no global event bus. Everything runs on the caller's thread,
//! so listeners are plain `FnMut` closures and are called synchronously, in
//! registration order, after the state change they describe has completed.

use std::fmt;

use serde::Serialize;

use crate::transformation::BlockTransformation;

/// Something observable happened on the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldEvent {
    /// A move or rotation was committed to the block and the grid.
    TransformationApplied { transformation: BlockTransformation },
    /// The active block could not move down and is now part of the grid.
    BlockPlaced,
    /// Full rows were removed right after a placement.
    RowsCompleted { count: u32 },
}

/// A subscriber callback.
pub type Listener = Box<dyn FnMut(&FieldEvent)>;

/// Ordered set of subscribers owned by a field.
#[derive(Default)]
pub struct Listeners {
    inner: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: Listener) {
        self.inner.push(listener);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub(crate) fn emit(&mut self, event: &FieldEvent) {
        for listener in self.inner.iter_mut() {
            listener(event);
        }
    }
}

impl From<Vec<Listener>> for Listeners {
    fn from(inner: Vec<Listener>) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.inner.len())
            .finish()
    }
}
