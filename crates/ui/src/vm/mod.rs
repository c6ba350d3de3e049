mod phase_vm;
mod progress_vm;
mod week_vm;

pub use phase_vm::{PhaseCardVm, QuickStatVm, WeekBadgeVm, map_phase_cards, quick_stats};
pub use progress_vm::ProgressBarVm;
pub use week_vm::{WeekSection, checklist_badge, toggle_section, week_heading};
