use std::sync::Arc;

use plan_core::model::{ChecklistKey, ChecklistState, Curriculum};
use storage::repository::KeyValueStore;
use tokio::sync::Mutex;

use crate::error::ChecklistServiceError;

/// What the store currently holds for one checklist key.
enum Stored {
    Missing,
    Valid(ChecklistState),
    Unusable,
}

/// Checked/total counts of one week, for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCount {
    pub key: ChecklistKey,
    pub checked: usize,
    pub total: usize,
}

/// Persists one boolean sequence per (phase, week) pair.
///
/// Each week's record is written only through this service; the progress
/// aggregator reads the same keys. Writes are serialised so a toggle's read
/// and write never interleave with another write.
#[derive(Clone)]
pub struct ChecklistService {
    store: Arc<dyn KeyValueStore>,
    writes: Arc<Mutex<()>>,
}

impl ChecklistService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Stored flags for `key`, or `expected_len` unchecked items when the
    /// record is missing, malformed, has the wrong length, or cannot be read.
    pub async fn load(&self, key: ChecklistKey, expected_len: usize) -> ChecklistState {
        match self.read(key, expected_len).await {
            Stored::Valid(state) => state,
            Stored::Missing | Stored::Unusable => ChecklistState::all_clear(expected_len),
        }
    }

    /// Load for a week view that is being opened, creating the all-clear
    /// record the first time the week is seen.
    ///
    /// A failed write is logged; the default state is still returned.
    pub async fn open_week(&self, key: ChecklistKey, expected_len: usize) -> ChecklistState {
        let _guard = self.writes.lock().await;
        match self.read(key, expected_len).await {
            Stored::Valid(state) => state,
            Stored::Unusable => ChecklistState::all_clear(expected_len),
            Stored::Missing => {
                let state = ChecklistState::all_clear(expected_len);
                if let Err(err) = self.store.set(&key.to_string(), &state.encode()).await {
                    tracing::warn!(%key, error = %err, "failed to create checklist record");
                }
                state
            }
        }
    }

    /// Flip item `index` of the week's checklist and persist the whole sequence.
    ///
    /// An out-of-range `index` leaves the record untouched and returns the
    /// current state.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistServiceError::Storage` if the updated record cannot be written.
    pub async fn toggle(
        &self,
        key: ChecklistKey,
        expected_len: usize,
        index: usize,
    ) -> Result<ChecklistState, ChecklistServiceError> {
        let _guard = self.writes.lock().await;
        let mut state = self.load(key, expected_len).await;
        if !state.toggle(index) {
            tracing::debug!(%key, index, len = state.len(), "ignoring out-of-range toggle");
            return Ok(state);
        }
        self.store.set(&key.to_string(), &state.encode()).await?;
        tracing::debug!(%key, index, checked = state.checked_count(), "checklist toggled");
        Ok(state)
    }

    /// Checked/total counts for every week of `curriculum`, in display order.
    pub async fn week_counts(&self, curriculum: &Curriculum) -> Vec<WeekCount> {
        let mut counts = Vec::with_capacity(curriculum.week_count());
        for phase in curriculum.phases() {
            for week in &phase.weeks {
                let key = phase.checklist_key(week);
                let total = week.checklist.len();
                let checked = self.load(key, total).await.checked_count();
                counts.push(WeekCount {
                    key,
                    checked,
                    total,
                });
            }
        }
        counts
    }

    async fn read(&self, key: ChecklistKey, expected_len: usize) -> Stored {
        let raw = match self.store.get(&key.to_string()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Stored::Missing,
            Err(err) => {
                tracing::warn!(%key, error = %err, "failed to read checklist record");
                return Stored::Unusable;
            }
        };
        match ChecklistState::decode_sized(&raw, expected_len) {
            Ok(state) => Stored::Valid(state),
            Err(err) => {
                tracing::warn!(%key, error = %err, "ignoring unusable checklist record");
                Stored::Unusable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_core::model::{PhaseId, WeekNumber};
    use storage::repository::InMemoryStore;

    fn key(phase: u8, week: u8) -> ChecklistKey {
        ChecklistKey::new(PhaseId::new(phase), WeekNumber::new(week))
    }

    #[tokio::test]
    async fn open_week_creates_record_once() {
        let store = InMemoryStore::new();
        let service = ChecklistService::new(Arc::new(store.clone()));

        let state = service.open_week(key(0, 1), 5).await;
        assert_eq!(state, ChecklistState::all_clear(5));
        assert_eq!(
            store.get("checklist-0-1").await.unwrap().as_deref(),
            Some("[false,false,false,false,false]")
        );

        service.toggle(key(0, 1), 5, 0).await.unwrap();
        let reopened = service.open_week(key(0, 1), 5).await;
        assert_eq!(reopened.items(), &[true, false, false, false, false]);
    }

    #[tokio::test]
    async fn open_week_leaves_unusable_record_alone() {
        let store = InMemoryStore::new();
        store.set("checklist-0-2", "[true]").await.unwrap();
        let service = ChecklistService::new(Arc::new(store.clone()));

        let state = service.open_week(key(0, 2), 5).await;
        assert_eq!(state, ChecklistState::all_clear(5));
        assert_eq!(
            store.get("checklist-0-2").await.unwrap().as_deref(),
            Some("[true]")
        );
    }

    #[tokio::test]
    async fn toggle_replaces_wrong_length_record() {
        let store = InMemoryStore::new();
        store.set("checklist-1-4", "[true,true]").await.unwrap();
        let service = ChecklistService::new(Arc::new(store.clone()));

        let state = service.toggle(key(1, 4), 5, 4).await.unwrap();
        assert_eq!(state.items(), &[false, false, false, false, true]);
        assert_eq!(
            store.get("checklist-1-4").await.unwrap().as_deref(),
            Some("[false,false,false,false,true]")
        );
    }
}
