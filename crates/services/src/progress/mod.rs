mod aggregator;
mod watcher;

// Public API of the progress subsystem.
pub use aggregator::ProgressAggregator;
pub use plan_core::ProgressSnapshot;
pub use watcher::{ProgressConfig, ProgressWatcher};
