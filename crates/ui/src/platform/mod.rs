use std::sync::Arc;

mod desktop;

/// Opens external resource links outside the app window.
pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use desktop::SystemLinkOpener;
