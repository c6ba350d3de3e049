use plan_core::model::{ChecklistState, Week};

/// Collapsible panels of a weekly plan card, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeekSection {
    Objectives,
    Daily,
    Project,
    Deliverables,
    Resources,
    Checklist,
}

impl WeekSection {
    pub const ALL: [WeekSection; 6] = [
        WeekSection::Objectives,
        WeekSection::Daily,
        WeekSection::Project,
        WeekSection::Deliverables,
        WeekSection::Resources,
        WeekSection::Checklist,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            WeekSection::Objectives => "🎯 Learning Objectives",
            WeekSection::Daily => "📅 Daily Breakdown",
            WeekSection::Project => "🚀 Mini Project",
            WeekSection::Deliverables => "📦 Deliverables",
            WeekSection::Resources => "📚 Resources",
            WeekSection::Checklist => "✅ Completion Checklist",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            WeekSection::Objectives => "objectives",
            WeekSection::Daily => "daily",
            WeekSection::Project => "project",
            WeekSection::Deliverables => "deliverables",
            WeekSection::Resources => "resources",
            WeekSection::Checklist => "checklist",
        }
    }
}

/// At most one section is open; clicking the open one closes it.
#[must_use]
pub fn toggle_section(current: Option<WeekSection>, clicked: WeekSection) -> Option<WeekSection> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[must_use]
pub fn week_heading(week: &Week) -> String {
    format!("Week {}: {}", week.number, week.title)
}

/// e.g. "2 / 5 done".
#[must_use]
pub fn checklist_badge(state: &ChecklistState) -> String {
    format!("{} / {} done", state.checked_count(), state.len())
}
