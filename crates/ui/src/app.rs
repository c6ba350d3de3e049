use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Internship Plan" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! { FatalError { details: format!("{errors:?}") } },
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn FatalError(details: String) -> Element {
    tracing::error!(%details, "render failed");
    rsx! {
        div { class: "fatal",
            h1 { "The plan could not be displayed" }
            p { "Your checklist progress is saved. Restart the app to continue." }
            pre { "{details}" }
        }
    }
}
