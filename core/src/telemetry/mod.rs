//! telemetry/mod.rs
//! Run statistics: mutable counters, a wall-clock timer and an immutable
//! snapshot with the derived compression figures.
//!
//! Counters are returned by value from each run loop; nothing here is global.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
