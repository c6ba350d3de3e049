use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewState;
use crate::vm::{PhaseCardVm, map_phase_cards, quick_stats};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    cards: Vec<PhaseCardVm>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let progress = ctx.progress();
    let checklists = ctx.checklists();
    let stats = quick_stats(&curriculum);

    let resource = use_resource(move || {
        let curriculum = curriculum.clone();
        let progress = progress.clone();
        let checklists = checklists.clone();
        async move {
            let snapshots = progress.phase_snapshots().await;
            let week_counts = checklists.week_counts(&curriculum).await;
            let cards = map_phase_cards(&curriculum, &snapshots, &week_counts);
            HomeData { cards }
        }
    });

    let state = ViewState::from_resource(&resource);

    rsx! {
        div { class: "page home",
            h2 { "Program Overview" }

            div { class: "quick-stats",
                for stat in stats {
                    div { key: "{stat.label}", class: "stat",
                        span { class: "stat-value", "{stat.value}" }
                        span { class: "stat-label", "{stat.label}" }
                    }
                }
            }

            match state {
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "phase-cards",
                        for card in data.cards {
                            PhaseCard { key: "{card.id}", card }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn PhaseCard(card: PhaseCardVm) -> Element {
    rsx! {
        Link { class: "phase-card", to: Route::Phase { id: card.id },
            h3 { "{card.name}" }
            p { class: "phase-weeks", "{card.weeks_label}" }
            p { class: "phase-description", "{card.description}" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "{card.progress.bar_style}" }
            }
            p { class: "phase-progress",
                "{card.progress.percent_label} · {card.progress.items_label}"
            }
            ul { class: "week-badges",
                for badge in card.weeks {
                    li {
                        key: "{badge.week}",
                        class: if badge.complete { "week-badge complete" } else { "week-badge" },
                        "{badge.label}"
                    }
                }
            }
        }
    }
}
