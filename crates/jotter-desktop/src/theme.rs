//! Theme configuration for the window chrome
//!
//! Note backgrounds always come from the note palette; this only styles the
//! surroundings.

use std::sync::OnceLock;

pub use jotter_core::models::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if is_system_dark_mode() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;

    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode() -> bool {
    tracing::debug!("System theme detection unsupported here, using light mode");
    false
}

/// Chrome colors
#[derive(Debug, Clone, Copy)]
pub struct ChromePalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    /// Text drawn on top of note colors, which are all light pastels
    pub note_text: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ChromePalette = ChromePalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    note_text: "#1a1a1a",
};

/// Dark theme colors
pub const DARK_PALETTE: ChromePalette = ChromePalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    text_primary: "#e8eaed",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#818cf8",
    accent_text: "#1a1a1a",
    note_text: "#1a1a1a",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ChromePalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}
