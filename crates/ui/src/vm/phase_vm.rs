use plan_core::model::{Curriculum, PhaseId};
use services::{ProgressSnapshot, WeekCount};

use crate::vm::progress_vm::ProgressBarVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseCardVm {
    pub id: u8,
    pub name: String,
    pub description: String,
    pub weeks_label: String,
    pub progress: ProgressBarVm,
    pub weeks: Vec<WeekBadgeVm>,
}

/// Compact per-week completion shown on a phase card, e.g. "W2 3/5".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekBadgeVm {
    pub week: u8,
    pub label: String,
    pub complete: bool,
}

impl From<&WeekCount> for WeekBadgeVm {
    fn from(count: &WeekCount) -> Self {
        Self {
            week: count.key.week.value(),
            label: format!("W{} {}/{}", count.key.week, count.checked, count.total),
            complete: count.total > 0 && count.checked == count.total,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickStatVm {
    pub label: &'static str,
    pub value: String,
}

/// Phase cards in display order; phases without a snapshot show 0%.
///
/// Week badges come from `week_counts`, filtered to each phase.
#[must_use]
pub fn map_phase_cards(
    curriculum: &Curriculum,
    snapshots: &[(PhaseId, ProgressSnapshot)],
    week_counts: &[WeekCount],
) -> Vec<PhaseCardVm> {
    curriculum
        .phases()
        .iter()
        .map(|phase| {
            let snapshot = snapshots
                .iter()
                .find(|(id, _)| *id == phase.id)
                .map_or_else(
                    || ProgressSnapshot::empty(phase.checklist_items()),
                    |(_, snapshot)| *snapshot,
                );
            PhaseCardVm {
                id: phase.id.value(),
                name: phase.name.clone(),
                description: phase.description.clone(),
                weeks_label: phase.weeks_label.clone(),
                progress: ProgressBarVm::from(snapshot),
                weeks: week_counts
                    .iter()
                    .filter(|count| count.key.phase == phase.id)
                    .map(WeekBadgeVm::from)
                    .collect(),
            }
        })
        .collect()
}

#[must_use]
pub fn quick_stats(curriculum: &Curriculum) -> Vec<QuickStatVm> {
    let projects = curriculum
        .phases()
        .iter()
        .flat_map(|phase| phase.weeks.iter())
        .filter(|week| !week.mini_project.name.trim().is_empty())
        .count();
    vec![
        QuickStatVm {
            label: "Phases",
            value: curriculum.phases().len().to_string(),
        },
        QuickStatVm {
            label: "Weeks",
            value: curriculum.week_count().to_string(),
        },
        QuickStatVm {
            label: "Projects",
            value: projects.to_string(),
        },
        QuickStatVm {
            label: "Checkpoints",
            value: curriculum.total_checklist_items().to_string(),
        },
    ]
}
