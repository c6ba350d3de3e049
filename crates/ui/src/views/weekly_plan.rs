use std::sync::Arc;
#[cfg(test)]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dioxus::prelude::*;
use plan_core::model::{ChecklistKey, ChecklistState, PhaseId, Resource, Week};

use crate::context::AppContext;
use crate::vm::{WeekSection, checklist_badge, toggle_section, week_heading};

/// One week's card: collapsible content sections plus the persisted checklist.
#[component]
pub fn WeeklyPlan(phase: PhaseId, week: Week) -> Element {
    let ctx = use_context::<AppContext>();
    let record_key = ChecklistKey::new(phase, week.number);
    let len = week.checklist.len();

    let mut expanded = use_signal(|| None::<WeekSection>);
    let mut checklist = use_signal(|| ChecklistState::all_clear(len));

    let checklists = ctx.checklists();
    let loader = Arc::clone(&checklists);
    use_future(move || {
        let loader = Arc::clone(&loader);
        async move {
            checklist.set(loader.open_week(record_key, len).await);
        }
    });

    let on_toggle = use_callback(move |index: usize| {
        let checklists = Arc::clone(&checklists);
        spawn(async move {
            match checklists.toggle(record_key, len, index).await {
                Ok(state) => checklist.set(state),
                Err(err) => {
                    tracing::warn!(key = %record_key, index, error = %err, "failed to save checklist");
                }
            }
        });
    });

    let links = ctx.links();
    let open_link = use_callback(move |url: String| links.open_url(&url));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WeekPlanTestHandles>() {
                handles.register(
                    record_key,
                    WeekPlanHandle {
                        toggle: on_toggle,
                        open_link,
                        expanded,
                    },
                );
            }
        }
    }

    let heading = week_heading(&week);
    let badge = checklist_badge(&checklist.read());
    let card_class = if checklist.read().is_complete() {
        "week-card complete"
    } else {
        "week-card"
    };

    rsx! {
        article { class: "{card_class}",
            header { class: "week-header",
                h3 { "{heading}" }
                span { class: "week-badge", "{badge}" }
            }
            for section in WeekSection::ALL {
                div { key: "{section.slug()}", class: "week-section",
                    button {
                        class: "section-toggle",
                        onclick: move |_| {
                            let next = toggle_section(expanded(), section);
                            expanded.set(next);
                        },
                        "{section.title()}"
                    }
                    if expanded() == Some(section) {
                        SectionBody {
                            section,
                            week: week.clone(),
                            checklist: checklist(),
                            on_toggle,
                            on_open_link: open_link,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionBody(
    section: WeekSection,
    week: Week,
    checklist: ChecklistState,
    on_toggle: EventHandler<usize>,
    on_open_link: EventHandler<String>,
) -> Element {
    match section {
        WeekSection::Objectives => rsx! {
            ul { class: "objectives",
                for objective in week.objectives.iter() {
                    li { "{objective}" }
                }
            }
        },
        WeekSection::Daily => rsx! {
            div { class: "daily-breakdown",
                for block in week.daily_breakdown.iter() {
                    div { class: "day",
                        h4 { "{block.day}" }
                        ul {
                            for task in block.tasks.iter() {
                                li { "{task}" }
                            }
                        }
                    }
                }
            }
        },
        WeekSection::Project => rsx! {
            div { class: "mini-project",
                h4 { "{week.mini_project.name}" }
                p { "{week.mini_project.description}" }
            }
        },
        WeekSection::Deliverables => rsx! {
            ul { class: "deliverables",
                for deliverable in week.deliverables.iter() {
                    li { "{deliverable}" }
                }
            }
        },
        WeekSection::Resources => rsx! {
            ul { class: "resources",
                for resource in week.resources.iter() {
                    li { ResourceLink { resource: resource.clone(), on_open: on_open_link } }
                }
            }
        },
        WeekSection::Checklist => rsx! {
            ul { class: "checklist",
                for (index, item) in week.checklist.iter().enumerate() {
                    li { key: "{index}",
                        label {
                            input {
                                r#type: "checkbox",
                                checked: checklist.is_checked(index),
                                onchange: move |_| on_toggle.call(index),
                            }
                            span { "{item}" }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn ResourceLink(resource: Resource, on_open: EventHandler<String>) -> Element {
    let url = resource.url.clone();

    rsx! {
        a {
            href: "{resource.url}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_open.call(url.clone());
            },
            "{resource.name}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct WeekPlanHandle {
    pub(crate) toggle: Callback<usize>,
    pub(crate) open_link: Callback<String>,
    pub(crate) expanded: Signal<Option<WeekSection>>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WeekPlanTestHandles {
    plans: Rc<RefCell<HashMap<ChecklistKey, WeekPlanHandle>>>,
}

#[cfg(test)]
impl WeekPlanTestHandles {
    pub(crate) fn register(&self, key: ChecklistKey, handle: WeekPlanHandle) {
        self.plans.borrow_mut().insert(key, handle);
    }

    pub(crate) fn week(&self, key: ChecklistKey) -> WeekPlanHandle {
        *self.plans.borrow().get(&key).expect("week plan registered")
    }
}
