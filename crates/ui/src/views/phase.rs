use dioxus::prelude::*;
use dioxus_router::Link;
use plan_core::model::PhaseId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::WeeklyPlan;

#[component]
pub fn PhaseView(id: u8) -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let phase_id = PhaseId::new(id);

    let Some(phase) = curriculum.phase(phase_id).cloned() else {
        tracing::debug!(phase = id, "unknown phase requested");
        return rsx! {
            div { class: "page not-found",
                h2 { "Phase not found" }
                Link { to: Route::Home {}, "Back to overview" }
            }
        };
    };
    let previous = curriculum.previous_phase(phase_id);
    let next = curriculum.next_phase(phase_id);

    rsx! {
        div { class: "page phase",
            section { class: "phase-banner",
                h2 { "{phase.name}" }
                p { class: "phase-weeks", "{phase.weeks_label}" }
                p { "{phase.description}" }
            }

            for week in phase.weeks.iter() {
                WeeklyPlan {
                    key: "{phase.id}-{week.number}",
                    phase: phase.id,
                    week: week.clone(),
                }
            }

            nav { class: "phase-pager",
                {previous.map(|prev| rsx! {
                    Link { class: "pager-prev", to: Route::Phase { id: prev.value() }, "← Previous phase" }
                })}
                {next.map(|next| rsx! {
                    Link { class: "pager-next", to: Route::Phase { id: next.value() }, "Next phase →" }
                })}
            }
        }
    }
}
