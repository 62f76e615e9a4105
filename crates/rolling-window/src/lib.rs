//! Rolling Windows
//!
//! Bounded FIFO history for temporal signal tracking: oldest entries are
//! evicted on overflow, and f64 timestamp windows support sliding
//! time-window counts on top of the capacity bound.

mod window;

pub use window::BoundedWindow;
