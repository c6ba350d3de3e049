mod checklist;
mod curriculum;
mod ids;

pub use checklist::{ChecklistState, RecordError};
pub use curriculum::{
    ContentError, Curriculum, DailyBlock, MiniProject, Phase, Resource, Week,
};
pub use ids::{ChecklistKey, ParseIdError, PhaseId, WeekNumber};
