#![forbid(unsafe_code)]

pub mod content;
pub mod model;
pub mod progress;
pub mod time;

pub use content::shipped_curriculum;
pub use progress::{ProgressSnapshot, percent};
pub use time::Clock;
