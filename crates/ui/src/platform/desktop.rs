use std::process::Command;

use super::UiLinkOpener;

/// Hands links to the platform's default browser.
pub struct SystemLinkOpener;

#[cfg(target_os = "macos")]
fn browser_command(url: &str) -> Option<Command> {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    Some(cmd)
}

#[cfg(target_os = "windows")]
fn browser_command(url: &str) -> Option<Command> {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    Some(cmd)
}

#[cfg(target_os = "linux")]
fn browser_command(url: &str) -> Option<Command> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    Some(cmd)
}

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
fn browser_command(_url: &str) -> Option<Command> {
    None
}

impl UiLinkOpener for SystemLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            tracing::warn!(url, "refusing to open non-http link");
            return;
        }
        let Some(mut cmd) = browser_command(url) else {
            tracing::warn!(url, "no link opener for this platform");
            return;
        };
        if let Err(err) = cmd.spawn() {
            tracing::warn!(url, error = %err, "failed to open link");
        }
    }
}
