//! Platform capabilities: flag storage, clipboard and URL opening

use crate::config::{FlagStore, TUTORIAL_FLAG};
use anyhow::{Context, Result};
use arboard::Clipboard;
use std::process::{Command, Stdio};

/// Shortcut labels shown in hints
pub const NEXT_SHORTCUT: &str = "^N";
pub const PREV_SHORTCUT: &str = "^P";
pub const SUBMIT_SHORTCUT: &str = "^S";
pub const IDEA_SHORTCUT: &str = "^G";
pub const IMPORT_SHORTCUT: &str = "^O";
pub const EXPORT_SHORTCUT: &str = "^E";
pub const NEW_PLAN_SHORTCUT: &str = "^R";

/// Where exported documents are pasted
pub const DOCS_NEW_URL: &str = "https://docs.new";

/// Host capabilities the app needs, mocked in tests
#[cfg_attr(test, mockall::automock)]
pub trait Platform {
    fn tutorial_seen(&self) -> bool;

    fn mark_tutorial_seen(&mut self) -> Result<()>;

    /// Put rich HTML on the clipboard with a plain-text fallback
    fn copy_html(&mut self, html: &str, alt_text: &str) -> Result<()>;

    fn open_url(&self, url: &str) -> Result<()>;
}

/// Real desktop implementation
pub struct DesktopPlatform {
    flags: FlagStore,
    // Kept alive so X11/Wayland can keep serving the copied content
    clipboard: Option<Clipboard>,
}

impl DesktopPlatform {
    pub fn new(flags: FlagStore) -> Self {
        Self {
            flags,
            clipboard: None,
        }
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().context("clipboard unavailable")?);
        }
        self.clipboard
            .as_mut()
            .context("clipboard unavailable")
    }
}

#[cfg(target_os = "macos")]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

impl Platform for DesktopPlatform {
    fn tutorial_seen(&self) -> bool {
        self.flags.get(TUTORIAL_FLAG)
    }

    fn mark_tutorial_seen(&mut self) -> Result<()> {
        self.flags.set(TUTORIAL_FLAG, true)
    }

    fn copy_html(&mut self, html: &str, alt_text: &str) -> Result<()> {
        self.clipboard()?
            .set_html(html, Some(alt_text))
            .context("failed to write clipboard")
    }

    fn open_url(&self, url: &str) -> Result<()> {
        url_command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to open {url}"))?;
        Ok(())
    }
}
