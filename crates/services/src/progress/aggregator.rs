use std::collections::BTreeMap;
use std::sync::Arc;

use plan_core::ProgressSnapshot;
use plan_core::model::{ChecklistKey, ChecklistState, Curriculum, PhaseId};
use storage::repository::KeyValueStore;

/// Summarises checklist completion across the whole program.
///
/// Reads every persisted `checklist-*` record; it never writes. The item total
/// is the sum of checklist lengths in the curriculum it was built with.
#[derive(Clone)]
pub struct ProgressAggregator {
    store: Arc<dyn KeyValueStore>,
    curriculum: Arc<Curriculum>,
    total: usize,
}

impl ProgressAggregator {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, curriculum: Arc<Curriculum>) -> Self {
        let total = curriculum.total_checklist_items();
        Self {
            store,
            curriculum,
            total,
        }
    }

    #[must_use]
    pub fn total_possible(&self) -> usize {
        self.total
    }

    /// Overall completion percentage in `0..=100`.
    pub async fn compute_overall_progress(&self) -> u8 {
        self.snapshot().await.percent
    }

    /// Overall checked/total counts with the rounded percentage.
    pub async fn snapshot(&self) -> ProgressSnapshot {
        let checked: usize = self.checked_by_key().await.values().sum();
        ProgressSnapshot::new(checked, self.total)
    }

    /// Completion of a single phase; unknown phases report an empty snapshot.
    pub async fn phase_progress(&self, phase: PhaseId) -> ProgressSnapshot {
        let Some(definition) = self.curriculum.phase(phase) else {
            return ProgressSnapshot::empty(0);
        };
        let checked: usize = self
            .checked_by_key()
            .await
            .iter()
            .filter(|(key, _)| key.phase == phase)
            .map(|(_, checked)| checked)
            .sum();
        ProgressSnapshot::new(checked, definition.checklist_items())
    }

    /// Per-phase completion for every phase, in display order, from one scan.
    pub async fn phase_snapshots(&self) -> Vec<(PhaseId, ProgressSnapshot)> {
        let by_key = self.checked_by_key().await;
        self.curriculum
            .phases()
            .iter()
            .map(|phase| {
                let checked: usize = by_key
                    .iter()
                    .filter(|(key, _)| key.phase == phase.id)
                    .map(|(_, checked)| checked)
                    .sum();
                (
                    phase.id,
                    ProgressSnapshot::new(checked, phase.checklist_items()),
                )
            })
            .collect()
    }

    /// Checked item count of every usable record.
    ///
    /// Records that fail to parse, name a week outside the curriculum, or
    /// have the wrong length contribute nothing.
    async fn checked_by_key(&self) -> BTreeMap<ChecklistKey, usize> {
        let mut checked = BTreeMap::new();

        let keys = match self.store.keys_with_prefix(ChecklistKey::PREFIX).await {
            Ok(keys) => keys,
            Err(err) => {
                tracing::warn!(error = %err, "failed to enumerate checklist records");
                return checked;
            }
        };

        for raw_key in keys {
            let Ok(key) = raw_key.parse::<ChecklistKey>() else {
                tracing::debug!(key = %raw_key, "skipping unrecognised checklist key");
                continue;
            };
            let Some(expected) = self.curriculum.checklist_len(key) else {
                tracing::debug!(%key, "skipping checklist for unknown week");
                continue;
            };
            let raw = match self.store.get(&raw_key).await {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(%key, error = %err, "failed to read checklist record");
                    continue;
                }
            };
            match ChecklistState::decode_sized(&raw, expected) {
                Ok(state) => {
                    checked.insert(key, state.checked_count());
                }
                Err(err) => {
                    tracing::debug!(%key, error = %err, "skipping unusable checklist record");
                }
            }
        }

        checked
    }
}
