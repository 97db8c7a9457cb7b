//! Gallery color schemes and their ANSI sequences.
//!
//! A theme is a named palette of hex colors, either embedded (see below) or read
//! from a TOML file given by `theme_file`.
//!
//! # Built-in Themes
//!
//! - `fisheye-dark`: Warm accents on a dark terminal (default)
//! - `fisheye-light`: Brand red on a light terminal
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#DB8876"
//! selection_fg = "#1B1B1B"
//! selection_bg = "#DB8876"
//! text_normal = "#E6E6E6"
//! text_dim = "#8A8A8A"
//! border = "#4A2B2B"
//! search_bar_border = "#D3573C"
//! match_highlight_fg = "#1B1B1B"
//! match_highlight_bg = "#F2C14E"
//! empty_state_fg = "#D3573C"
//! like_fg = "#D3573C"
//! badge_fg = "#1B1B1B"
//! badge_bg = "#DB8876"
//! modal_border = "#D3573C"
//! error_fg = "#FF6B6B"
//! disabled_fg = "#5A5A5A"
//! ```
//!
//! # Example
//!
//! ```rust
//! use fisheye::ui::theme::Theme;
//!
//! let theme = Theme::from_name("fisheye-light").unwrap_or_default();
//! let title = format!("{}{}Mimi Keel{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
//! # assert!(title.ends_with("\u{1b}[0m"));
//! # assert_eq!(theme.name, "fisheye-light");
//! ```

use crate::domain::error::{FisheyeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "fisheye-dark";

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#RRGGBB`) of every screen element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Highlighted row of a table.
    pub selection_fg: String,
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Subtitle, footer and column headers.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Characters of a photographer name matched by the search query.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Heart and like count of liked media.
    pub like_fg: String,

    /// Total likes and price badge.
    pub badge_fg: String,
    pub badge_bg: String,

    /// Lightbox and contact modal frame.
    pub modal_border: String,
    /// Contact form validation messages.
    pub error_fg: String,
    /// Disabled modal controls.
    pub disabled_fg: String,
}

impl Theme {
    /// The embedded theme called `name` (`fisheye-dark` or `fisheye-light`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "fisheye-dark" => include_str!("../../themes/fisheye-dark.toml"),
            "fisheye-light" => include_str!("../../themes/fisheye-light.toml"),
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Reads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`FisheyeError::Theme`] when the file is unreadable or is not a complete
    /// theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| FisheyeError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&source).map_err(|e| FisheyeError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses `#RRGGBB` (the `#` is optional). Anything else renders white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        let packed = if digits.len() == 6 {
            u32::from_str_radix(digits, 16).unwrap_or(0x00FF_FFFF)
        } else {
            0x00FF_FFFF
        };
        let [_, r, g, b] = packed.to_be_bytes();
        (r, g, b)
    }

    /// 24-bit SGR sequence; `layer` is 38 for foreground, 48 for background.
    fn truecolor(layer: u8, hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[{layer};2;{r};{g};{b}m")
    }

    /// Foreground color sequence for `hex`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fisheye::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#DB8876"), "\u{1b}[38;2;219;136;118m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::truecolor(38, hex)
    }

    /// Background color sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::truecolor(48, hex)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears every attribute.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }

    /// Palette of `fisheye-dark`, used if the embedded TOML ever fails to parse.
    fn fallback() -> Self {
        let c = |s: &str| s.to_string();
        Self {
            name: c(DEFAULT_THEME),
            colors: ThemeColors {
                header_fg: c("#DB8876"),
                header_bg: None,
                selection_fg: c("#1B1B1B"),
                selection_bg: c("#DB8876"),
                text_normal: c("#E6E6E6"),
                text_dim: c("#8A8A8A"),
                border: c("#4A2B2B"),
                search_bar_border: c("#D3573C"),
                match_highlight_fg: c("#1B1B1B"),
                match_highlight_bg: c("#F2C14E"),
                empty_state_fg: c("#D3573C"),
                like_fg: c("#D3573C"),
                badge_fg: c("#1B1B1B"),
                badge_bg: c("#DB8876"),
                modal_border: c("#D3573C"),
                error_fg: c("#FF6B6B"),
                disabled_fg: c("#5A5A5A"),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (`fisheye-dark`).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("fisheye-dark"), Some(Theme::fallback()));
        assert!(Theme::from_name("fisheye-light").is_some());
        assert!(Theme::from_name("catppuccin-mocha").is_none());
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zzz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("123456"), "\u{1b}[48;2;18;52;86m");
    }

    #[test]
    fn theme_file_errors_are_theme_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = 3").expect("write theme");

        assert!(matches!(Theme::from_file(&path), Err(FisheyeError::Theme(_))));
        assert!(matches!(Theme::from_file(dir.path().join("missing.toml")), Err(FisheyeError::Theme(_))));
    }
}
