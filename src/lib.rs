//! Blockfall (workspace facade crate).
//!
//! Re-exports the simulation crates under `blockfall::{core,types}` and adds
//! the outer configuration layer used by the `blockfall-sim` binary.

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod settings;
