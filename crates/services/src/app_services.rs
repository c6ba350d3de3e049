use std::sync::Arc;

use plan_core::model::Curriculum;
use plan_core::shipped_curriculum;
use storage::repository::{ChangeFeed, Storage};

use crate::checklist_service::ChecklistService;
use crate::error::AppServicesError;
use crate::progress::{ProgressAggregator, ProgressConfig, ProgressWatcher};

/// Assembles app-facing services over one storage backend and the shipped curriculum.
#[derive(Clone)]
pub struct AppServices {
    curriculum: Arc<Curriculum>,
    checklists: Arc<ChecklistService>,
    progress: Arc<ProgressAggregator>,
    changes: ChangeFeed,
    config: ProgressConfig,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// shipped curriculum does not validate.
    pub async fn new_sqlite(db_url: &str, config: ProgressConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, config)
    }

    /// Build services over an in-memory store (tests, previews).
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the shipped curriculum does not validate.
    pub fn in_memory(config: ProgressConfig) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::in_memory(), config)
    }

    /// Build services over an existing storage with the shipped curriculum.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the shipped curriculum does not validate.
    pub fn from_storage(storage: Storage, config: ProgressConfig) -> Result<Self, AppServicesError> {
        let curriculum = Arc::new(shipped_curriculum()?);
        Ok(Self::with_curriculum(storage, curriculum, config))
    }

    #[must_use]
    pub fn with_curriculum(
        storage: Storage,
        curriculum: Arc<Curriculum>,
        config: ProgressConfig,
    ) -> Self {
        let checklists = Arc::new(ChecklistService::new(Arc::clone(&storage.kv)));
        let progress = Arc::new(ProgressAggregator::new(
            Arc::clone(&storage.kv),
            Arc::clone(&curriculum),
        ));
        tracing::info!(
            phases = curriculum.phases().len(),
            weeks = curriculum.week_count(),
            checklist_items = progress.total_possible(),
            "app services ready"
        );
        Self {
            curriculum,
            checklists,
            progress,
            changes: storage.changes,
            config,
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    #[must_use]
    pub fn checklists(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklists)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressAggregator> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn progress_config(&self) -> ProgressConfig {
        self.config
    }

    /// Start a progress watcher for one display session.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn start_progress_watcher(&self) -> ProgressWatcher {
        ProgressWatcher::start(self.progress(), self.changes.subscribe(), self.config)
    }
}
