//! Delay gate - a flag that stays raised for a fixed span of game time.
//!
//! Used to freeze input for a moment after rows complete. Requests that
//! arrive while the gate is up are dropped, not queued.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelayGate {
    remaining_ms: u32,
}

impl DelayGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the gate for `duration_ms`. Restarting replaces any time left.
    pub fn start(&mut self, duration_ms: u32) {
        self.remaining_ms = duration_ms;
    }

    /// Advance by `elapsed_ms`; returns whether the gate is still up.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
