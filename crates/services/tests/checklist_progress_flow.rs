use std::sync::Arc;

use plan_core::model::{ChecklistKey, ChecklistState, PhaseId, WeekNumber};
use plan_core::shipped_curriculum;
use services::{
    AppServices, ChecklistService, ChecklistServiceError, ProgressAggregator, ProgressConfig,
};
use storage::repository::{InMemoryStore, KeyValueStore, StorageError};

/// A backend whose every call fails.
struct BrokenStore;

#[async_trait::async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn keys_with_prefix(&self, _prefix: &str) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

/// An in-memory backend that yields to the scheduler before every call.
struct YieldingStore(InMemoryStore);

#[async_trait::async_trait]
impl KeyValueStore for YieldingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        tokio::task::yield_now().await;
        self.0.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::task::yield_now().await;
        self.0.set(key, value).await
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        tokio::task::yield_now().await;
        self.0.keys_with_prefix(prefix).await
    }
}

fn key(phase: u8, week: u8) -> ChecklistKey {
    ChecklistKey::new(PhaseId::new(phase), WeekNumber::new(week))
}

fn services(store: &InMemoryStore) -> (ChecklistService, ProgressAggregator) {
    let backend: Arc<dyn KeyValueStore> = Arc::new(store.clone());
    let curriculum = Arc::new(shipped_curriculum().expect("curriculum"));
    (
        ChecklistService::new(Arc::clone(&backend)),
        ProgressAggregator::new(backend, curriculum),
    )
}

#[tokio::test]
async fn unopened_weeks_load_all_clear() {
    let store = InMemoryStore::new();
    let (checklists, _) = services(&store);
    let curriculum = shipped_curriculum().unwrap();

    for key in curriculum.checklist_keys() {
        let len = curriculum.checklist_len(key).unwrap();
        let state = checklists.load(key, len).await;
        assert_eq!(state, ChecklistState::all_clear(len), "{key}");
    }
    // Loading never creates records.
    assert!(store.keys_with_prefix("checklist-").await.unwrap().is_empty());
}

#[tokio::test]
async fn load_is_idempotent() {
    let store = InMemoryStore::new();
    store
        .set("checklist-1-5", "[false,true,false,true,false]")
        .await
        .unwrap();
    let (checklists, _) = services(&store);

    let first = checklists.load(key(1, 5), 5).await;
    let second = checklists.load(key(1, 5), 5).await;
    assert_eq!(first, second);
    assert_eq!(first.items(), &[false, true, false, true, false]);
}

#[tokio::test]
async fn toggle_round_trips_through_the_store() {
    let store = InMemoryStore::new();
    let (checklists, _) = services(&store);

    checklists.toggle(key(0, 3), 5, 2).await.unwrap();
    let state = checklists.load(key(0, 3), 5).await;
    assert_eq!(state.items(), &[false, false, true, false, false]);

    checklists.toggle(key(0, 3), 5, 2).await.unwrap();
    let state = checklists.load(key(0, 3), 5).await;
    assert_eq!(state, ChecklistState::all_clear(5));
}

#[tokio::test]
async fn progress_stays_within_bounds() {
    let store = InMemoryStore::new();
    let (checklists, progress) = services(&store);
    let curriculum = shipped_curriculum().unwrap();

    assert_eq!(progress.compute_overall_progress().await, 0);

    for key in curriculum.checklist_keys() {
        let len = curriculum.checklist_len(key).unwrap();
        for index in 0..len {
            checklists.toggle(key, len, index).await.unwrap();
            let percent = progress.compute_overall_progress().await;
            assert!(percent <= 100);
        }
    }
    assert_eq!(progress.compute_overall_progress().await, 100);

    // Junk alongside complete records cannot push past 100.
    store
        .set("checklist-0-99", "[true,true,true,true,true,true,true,true]")
        .await
        .unwrap();
    store.set("checklist-extra", "[true,true,true]").await.unwrap();
    assert_eq!(progress.compute_overall_progress().await, 100);
}

#[tokio::test]
async fn two_of_sixty_five_rounds_to_three_percent() {
    let store = InMemoryStore::new();
    store
        .set("checklist-0-1", "[true,true,false,false,false]")
        .await
        .unwrap();
    let (_, progress) = services(&store);

    assert_eq!(progress.total_possible(), 65);
    assert_eq!(progress.compute_overall_progress().await, 3);
}

#[tokio::test]
async fn malformed_record_contributes_nothing() {
    let store = InMemoryStore::new();
    store.set("checklist-0-2", "not-json").await.unwrap();
    let (checklists, progress) = services(&store);

    assert_eq!(progress.compute_overall_progress().await, 0);

    store
        .set("checklist-0-1", "[true,true,false,false,false]")
        .await
        .unwrap();
    assert_eq!(progress.compute_overall_progress().await, 3);

    // The week view still opens with defaults.
    assert_eq!(
        checklists.load(key(0, 2), 5).await,
        ChecklistState::all_clear(5)
    );
}

#[tokio::test]
async fn out_of_range_toggle_changes_nothing() {
    let store = InMemoryStore::new();
    store
        .set("checklist-0-1", "[true,false,false,false,false]")
        .await
        .unwrap();
    let (checklists, _) = services(&store);

    let state = checklists.toggle(key(0, 1), 5, 999).await.unwrap();
    assert_eq!(state.items(), &[true, false, false, false, false]);
    assert_eq!(
        store.get("checklist-0-1").await.unwrap().as_deref(),
        Some("[true,false,false,false,false]")
    );
}

#[tokio::test]
async fn out_of_range_toggle_on_unopened_week_writes_nothing() {
    let store = InMemoryStore::new();
    let (checklists, _) = services(&store);

    checklists.toggle(key(0, 1), 5, 5).await.unwrap();
    assert_eq!(store.get("checklist-0-1").await.unwrap(), None);
}

#[tokio::test]
async fn empty_store_reports_zero() {
    let store = InMemoryStore::new();
    let (_, progress) = services(&store);
    let snapshot = progress.snapshot().await;
    assert_eq!(snapshot.checked, 0);
    assert_eq!(snapshot.percent, 0);
}

#[tokio::test]
async fn app_services_share_one_store() {
    let app = AppServices::in_memory(ProgressConfig::default()).expect("services");
    let checklists = app.checklists();
    let curriculum = app.curriculum();

    let week = key(2, 13);
    let len = curriculum.checklist_len(week).unwrap();
    checklists.open_week(week, len).await;
    for index in 0..len {
        checklists.toggle(week, len, index).await.unwrap();
    }

    let counts = checklists.week_counts(&curriculum).await;
    let last = counts.last().unwrap();
    assert_eq!((last.key, last.checked, last.total), (week, 5, 5));
    // 5 / 65 = 7.7%
    assert_eq!(app.progress().compute_overall_progress().await, 8);
}

#[tokio::test]
async fn unavailable_store_degrades_reads_and_reports_writes() {
    let backend: Arc<dyn KeyValueStore> = Arc::new(BrokenStore);
    let curriculum = Arc::new(shipped_curriculum().expect("curriculum"));
    let checklists = ChecklistService::new(Arc::clone(&backend));
    let progress = ProgressAggregator::new(backend, curriculum);

    assert_eq!(checklists.load(key(0, 1), 5).await, ChecklistState::all_clear(5));
    assert_eq!(checklists.open_week(key(0, 1), 5).await, ChecklistState::all_clear(5));
    assert!(matches!(
        checklists.toggle(key(0, 1), 5, 0).await,
        Err(ChecklistServiceError::Storage(_))
    ));
    assert_eq!(progress.compute_overall_progress().await, 0);
}

#[tokio::test]
async fn overlapping_toggles_keep_every_flip() {
    let store = InMemoryStore::new();
    let checklists = ChecklistService::new(Arc::new(YieldingStore(store.clone())));
    let week = key(0, 1);

    let (first, second) = tokio::join!(
        checklists.toggle(week, 5, 0),
        checklists.toggle(week, 5, 1)
    );
    first.unwrap();
    second.unwrap();

    assert_eq!(
        store.get("checklist-0-1").await.unwrap().as_deref(),
        Some("[true,true,false,false,false]")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_toggles_on_one_week_all_land() {
    let store = InMemoryStore::new();
    let checklists = Arc::new(ChecklistService::new(Arc::new(YieldingStore(store.clone()))));
    let week = key(2, 13);

    let tasks: Vec<_> = (0..5)
        .map(|index| {
            let checklists = Arc::clone(&checklists);
            tokio::spawn(async move { checklists.toggle(week, 5, index).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let state = checklists.load(week, 5).await;
    assert!(state.is_complete());
}
