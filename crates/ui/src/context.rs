use std::sync::Arc;

use plan_core::model::Curriculum;
use services::{AppServices, ChecklistService, ProgressAggregator, ProgressWatcher};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn curriculum(&self) -> Arc<Curriculum>;
    fn checklists(&self) -> Arc<ChecklistService>;
    fn progress(&self) -> Arc<ProgressAggregator>;

    /// Start the overall-progress watcher for one mounted header.
    fn start_progress_watcher(&self) -> ProgressWatcher;
}

impl UiApp for AppServices {
    fn curriculum(&self) -> Arc<Curriculum> {
        AppServices::curriculum(self)
    }

    fn checklists(&self) -> Arc<ChecklistService> {
        AppServices::checklists(self)
    }

    fn progress(&self) -> Arc<ProgressAggregator> {
        AppServices::progress(self)
    }

    fn start_progress_watcher(&self) -> ProgressWatcher {
        AppServices::start_progress_watcher(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    curriculum: Arc<Curriculum>,
    checklists: Arc<ChecklistService>,
    progress: Arc<ProgressAggregator>,
    links: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>, links: LinkOpenerRef) -> Self {
        Self {
            app: Arc::clone(app),
            curriculum: app.curriculum(),
            checklists: app.checklists(),
            progress: app.progress(),
            links,
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
    pub fn links(&self) -> LinkOpenerRef {
        Arc::clone(&self.links)
    }

    #[must_use]
    pub fn start_progress_watcher(&self) -> ProgressWatcher {
        self.app.start_progress_watcher()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>, links: LinkOpenerRef) -> AppContext {
    AppContext::new(app, links)
}
