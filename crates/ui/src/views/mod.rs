mod header;
mod home;
mod phase;
mod state;
mod weekly_plan;

pub use header::DashboardHeader;
pub use home::HomeView;
pub use phase::PhaseView;
pub use state::ViewState;
pub use weekly_plan::WeeklyPlan;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
