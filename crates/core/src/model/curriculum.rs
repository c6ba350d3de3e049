use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::model::ids::{ChecklistKey, PhaseId, WeekNumber};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("curriculum must contain at least one phase")]
    NoPhases,

    #[error("phase {0} has an empty name")]
    EmptyPhaseName(PhaseId),

    #[error("phase {0} is defined more than once")]
    DuplicatePhase(PhaseId),

    #[error("phase {0} has no weeks")]
    EmptyPhase(PhaseId),

    #[error("week {0} has an empty title")]
    EmptyWeekTitle(WeekNumber),

    #[error("week {0} is defined more than once")]
    DuplicateWeek(WeekNumber),

    #[error("week {week} has an empty checklist item at position {index}")]
    EmptyChecklistItem { week: WeekNumber, index: usize },

    #[error("week {week} resource {name:?} has an invalid url: {url}")]
    InvalidResourceUrl {
        week: WeekNumber,
        name: String,
        url: String,
    },
}

//
// ─── CONTENT TYPES ─────────────────────────────────────────────────────────────
//

/// A block of the daily breakdown, e.g. "Day 1-2" and its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBlock {
    pub day: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniProject {
    pub name: String,
    pub description: String,
}

/// An external learning link. The url is validated when the curriculum is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub number: WeekNumber,
    pub title: String,
    pub objectives: Vec<String>,
    pub daily_breakdown: Vec<DailyBlock>,
    pub mini_project: MiniProject,
    pub deliverables: Vec<String>,
    pub resources: Vec<Resource>,
    pub checklist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub id: PhaseId,
    pub name: String,
    pub description: String,
    /// Human label for the week range, e.g. "Weeks 1-3".
    pub weeks_label: String,
    pub weeks: Vec<Week>,
}

impl Phase {
    #[must_use]
    pub fn checklist_key(&self, week: &Week) -> ChecklistKey {
        ChecklistKey::new(self.id, week.number)
    }

    #[must_use]
    pub fn checklist_items(&self) -> usize {
        self.weeks.iter().map(|week| week.checklist.len()).sum()
    }
}

//
// ─── CURRICULUM ────────────────────────────────────────────────────────────────
//

/// The whole program: phases in display order, each holding its weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    phases: Vec<Phase>,
}

impl Curriculum {
    /// Build a curriculum, validating ids, titles, checklists and resource links.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` describing the first invalid entry found.
    pub fn new(phases: Vec<Phase>) -> Result<Self, ContentError> {
        if phases.is_empty() {
            return Err(ContentError::NoPhases);
        }

        let mut phase_ids = HashSet::new();
        let mut week_numbers = HashSet::new();
        for phase in &phases {
            if phase.name.trim().is_empty() {
                return Err(ContentError::EmptyPhaseName(phase.id));
            }
            if !phase_ids.insert(phase.id) {
                return Err(ContentError::DuplicatePhase(phase.id));
            }
            if phase.weeks.is_empty() {
                return Err(ContentError::EmptyPhase(phase.id));
            }
            for week in &phase.weeks {
                validate_week(week)?;
                if !week_numbers.insert(week.number) {
                    return Err(ContentError::DuplicateWeek(week.number));
                }
            }
        }

        Ok(Self { phases })
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == id)
    }

    #[must_use]
    pub fn week(&self, key: ChecklistKey) -> Option<&Week> {
        self.phase(key.phase)?
            .weeks
            .iter()
            .find(|week| week.number == key.week)
    }

    /// Number of checklist items defined for the week behind `key`.
    #[must_use]
    pub fn checklist_len(&self, key: ChecklistKey) -> Option<usize> {
        self.week(key).map(|week| week.checklist.len())
    }

    /// Sum of checklist lengths over every week of the program.
    #[must_use]
    pub fn total_checklist_items(&self) -> usize {
        self.phases.iter().map(Phase::checklist_items).sum()
    }

    #[must_use]
    pub fn week_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.weeks.len()).sum()
    }

    pub fn checklist_keys(&self) -> impl Iterator<Item = ChecklistKey> + '_ {
        self.phases
            .iter()
            .flat_map(|phase| phase.weeks.iter().map(|week| phase.checklist_key(week)))
    }

    /// Phase shown before `id` in display order.
    #[must_use]
    pub fn previous_phase(&self, id: PhaseId) -> Option<PhaseId> {
        let idx = self.position(id)?;
        idx.checked_sub(1).map(|prev| self.phases[prev].id)
    }

    /// Phase shown after `id` in display order.
    #[must_use]
    pub fn next_phase(&self, id: PhaseId) -> Option<PhaseId> {
        let idx = self.position(id)?;
        self.phases.get(idx + 1).map(|phase| phase.id)
    }

    fn position(&self, id: PhaseId) -> Option<usize> {
        self.phases.iter().position(|phase| phase.id == id)
    }
}

fn validate_week(week: &Week) -> Result<(), ContentError> {
    if week.title.trim().is_empty() {
        return Err(ContentError::EmptyWeekTitle(week.number));
    }
    if let Some(index) = week.checklist.iter().position(|item| item.trim().is_empty()) {
        return Err(ContentError::EmptyChecklistItem {
            week: week.number,
            index,
        });
    }
    for resource in &week.resources {
        let valid = Url::parse(&resource.url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !valid {
            return Err(ContentError::InvalidResourceUrl {
                week: week.number,
                name: resource.name.clone(),
                url: resource.url.clone(),
            });
        }
    }
    Ok(())
}
