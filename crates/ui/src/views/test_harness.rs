use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, ProgressConfig};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::weekly_plan::WeekPlanTestHandles;
use crate::views::{DashboardHeader, HomeView, PhaseView};

/// Records links instead of launching a browser.
#[derive(Default)]
pub struct RecordingLinks {
    pub opened: Mutex<Vec<String>>,
}

impl UiLinkOpener for RecordingLinks {
    fn open_url(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_owned());
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Phase(u8),
    Header,
    PhaseWithHeader(u8),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    links: LinkOpenerRef,
    view: ViewKind,
    handles: WeekPlanTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app, Arc::clone(&props.links)));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Phase(id) => rsx! { PhaseView { id } },
        ViewKind::Header => rsx! { DashboardHeader {} },
        ViewKind::PhaseWithHeader(id) => rsx! {
            DashboardHeader {}
            PhaseView { id }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub links: Arc<RecordingLinks>,
    pub handles: WeekPlanTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending tasks until the rendered html satisfies `done`.
    pub async fn render_until(&mut self, done: impl Fn(&str) -> bool) -> String {
        let mut html = self.render();
        for _ in 0..40 {
            if done(&html) {
                break;
            }
            self.drive_async().await;
            html = self.render();
        }
        html
    }

    /// Run `f` inside the dom's runtime, as an event handler would.
    pub fn act<O>(&mut self, f: impl FnOnce() -> O) -> O {
        let out = self.dom.in_runtime(f);
        drive_dom(&mut self.dom);
        out
    }

    pub fn opened_links(&self) -> Vec<String> {
        self.links.opened.lock().unwrap().clone()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let config = ProgressConfig::with_poll_interval(Duration::from_millis(20));
    let app = Arc::new(AppServices::from_storage(storage.clone(), config).expect("services"));
    let recording = Arc::new(RecordingLinks::default());
    let links: LinkOpenerRef = recording.clone();
    let handles = WeekPlanTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            links,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        links: recording,
        handles,
    }
}
