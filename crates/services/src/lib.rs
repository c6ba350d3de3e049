#![forbid(unsafe_code)]

pub mod app_services;
pub mod checklist_service;
pub mod error;
pub mod progress;

pub use app_services::AppServices;
pub use checklist_service::{ChecklistService, WeekCount};
pub use error::{AppServicesError, ChecklistServiceError};
pub use progress::{ProgressAggregator, ProgressConfig, ProgressSnapshot, ProgressWatcher};
