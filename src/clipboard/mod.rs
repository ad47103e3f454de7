//! Copying profile links to the system clipboard.
//!
//! The terminal browser has no way to open a link, so profile links are copied instead.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Longest link accepted for copying
const MAX_LINK_LEN: usize = 2048;

/// Clipboard backend (mocked in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")
    }
}

/// Check that `link` looks like a web profile link and return it trimmed
fn validate_profile_link(link: Option<&str>) -> Result<&str> {
    let Some(link) = link.map(str::trim).filter(|l| !l.is_empty()) else {
        bail!("No profile link for this person");
    };

    let lower = link.to_ascii_lowercase();
    if !(lower.starts_with("https://") || lower.starts_with("http://")) {
        bail!("Profile link is not an http(s) URL: {}", link);
    }

    if link.len() > MAX_LINK_LEN {
        bail!("Profile link too long ({} bytes, max {})", link.len(), MAX_LINK_LEN);
    }

    if link.chars().any(|c| c.is_control() || c.is_whitespace()) {
        bail!("Profile link contains whitespace or control characters");
    }

    Ok(link)
}

fn copy_link_with(link: Option<&str>, provider: &mut dyn ClipboardProvider) -> Result<String> {
    let link = validate_profile_link(link)?;
    provider.set_text(link)?;
    Ok(link.to_string())
}

/// Copy a person's profile link to the system clipboard, returning the copied link.
///
/// # Errors
///
/// Returns an error if the link is missing, is not an http(s) URL, is too long or contains
/// whitespace, or if the system clipboard is unavailable (headless sessions, denied access).
/// Validation happens before the clipboard is touched.
pub fn copy_profile_link(link: Option<&str>) -> Result<String> {
    let link = validate_profile_link(link)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_link_with(Some(link), &mut clipboard)
}
