use dioxus::prelude::*;

/// Render state of a view backed by an async resource.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}

impl<T: Clone> ViewState<T> {
    #[must_use]
    pub fn from_resource(resource: &Resource<T>) -> Self {
        match resource.value().read().as_ref() {
            Some(data) => Self::Ready(data.clone()),
            None => Self::Loading,
        }
    }
}
