use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{DashboardHeader, HomeView, PhaseView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/phase/:id", PhaseView)] Phase { id: u8 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            DashboardHeader {}
            PhaseNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn PhaseNav() -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();

    rsx! {
        nav { class: "phase-nav",
            ul {
                li { Link { to: Route::Home {}, "Overview" } }
                for phase in curriculum.phases() {
                    li { key: "{phase.id}",
                        Link { to: Route::Phase { id: phase.id.value() }, "{phase.name}" }
                    }
                }
            }
        }
    }
}
