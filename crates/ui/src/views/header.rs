use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::ProgressBarVm;

/// Program-wide completion bar shown above every page.
///
/// Owns one progress watcher for as long as it is mounted; unmounting drops
/// the watcher, which stops its timer and change listener.
#[component]
pub fn DashboardHeader() -> Element {
    let ctx = use_context::<AppContext>();
    let watcher = use_hook(|| Rc::new(ctx.start_progress_watcher()));
    let mut snapshot = use_signal(|| watcher.current());

    use_future(move || {
        let mut rx = watcher.subscribe();
        async move {
            loop {
                let current = *rx.borrow_and_update();
                snapshot.set(current);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let vm = ProgressBarVm::from(snapshot());

    rsx! {
        header { class: "dashboard-header",
            h1 { "Internship Plan" }
            div { class: "program-progress",
                span { class: "progress-label", "Program Progress" }
                span { class: "progress-percent", "{vm.percent_label}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "{vm.bar_style}" }
            }
            p { class: "progress-items", "{vm.items_label}" }
        }
    }
}
