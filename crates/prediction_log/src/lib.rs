//! Durable prediction log and drift statistics.
//!
//! Every interactively scored client is appended to an unbounded CSV log
//! keyed by timestamp; the drift monitor reads it back to track the mean
//! client age over a trailing window. The log is advisory: concurrent
//! writers are not coordinated and a corrupt log is replaced, not repaired.

mod drift;
mod entry;
mod log;

pub use drift::*;
pub use entry::*;
pub use log::*;
