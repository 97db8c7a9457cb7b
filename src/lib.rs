//! Fisheye: a terminal front-end for a photographer and media catalog.
//!
//! Fisheye loads a static catalog once and provides:
//! - A fuzzy-searchable listing of photographers
//! - Photographer pages with sortable media, likes and a total-likes badge
//! - A lightbox viewer with bounded keyboard navigation and a focus trap
//! - A validated contact form
//! - Likes persisted in a local JSON key-value store

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs, runtime.rs)             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, gesture guard                    │
//! │  - Gallery, lightbox, contact form                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │
//! │ (ui/)         │   │ (storage/)    │
//! │ - Rendering   │   │ - Key-value   │
//! │ - Presenter   │   │ - Liked set   │
//! │ - Theming     │   │               │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Catalog, media, sort orders (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The binary takes `key=value` arguments, optionally layered over a TOML file
//! given with `config=<path>`:
//!
//! ```text
//! fisheye catalog=data/photographers.json theme=fisheye-light photographer=243
//! ```
//!
//! ```toml
//! # fisheye.toml
//! catalog = "~/fisheye/photographers.json"
//! theme = "fisheye-dark"
//! trace_level = "debug"
//! gesture_window_ms = 2000
//! ```
//!
//! # Example
//!
//! ```rust
//! use fisheye::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     catalog: "data/photographers.json".into(),
//!     ephemeral: true,
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//! let (_render, actions) = handle_event(&mut state, &Event::OpenPhotographer(243))?;
//! assert!(matches!(actions[..], [Action::TotalLikesChanged(_)]));
//! # Ok::<(), fisheye::FisheyeError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Key, Modal, Page, SearchFocus};
pub use domain::{Catalog, FisheyeError, Media, MediaId, Photographer, Result, SortOrder};
pub use ui::Theme;

use crate::app::gesture::DEFAULT_GESTURE_WINDOW_MS;
use crate::storage::{JsonFileStore, KeyValueStore, LikeStateStore, MemoryStore, UnavailableStore};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Catalog location used when none is configured.
pub const DEFAULT_CATALOG: &str = "data/photographers.json";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the catalog JSON document. Default: `data/photographers.json`
    pub catalog: PathBuf,

    /// Directory holding `storage.json` and the trace files.
    ///
    /// Default: see [`infrastructure::get_data_dir`].
    pub data_dir: PathBuf,

    /// Photographer page to open at startup instead of the listing.
    pub photographer: Option<u64>,

    /// Built-in theme name to use.
    ///
    /// Options: `fisheye-dark`, `fisheye-light`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level filter. Default: `"info"`
    pub trace_level: Option<String>,

    /// How long after a genuine interaction a lightbox activation is honoured.
    pub gesture_window_ms: i64,

    /// Keep likes in memory only.
    pub ephemeral: bool,

    /// Replay the input lines of this file as synthetic interactions.
    pub script: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            data_dir: infrastructure::get_data_dir(),
            photographer: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            gesture_window_ms: DEFAULT_GESTURE_WINDOW_MS,
            ephemeral: false,
            script: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unknown keys are ignored and unparsable values fall back to their
    /// defaults. Paths have a leading `~` expanded.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog`, `data_dir`, `script`: path
    /// - `photographer`: String → `u64`
    /// - `theme`, `theme_file`, `trace_level`: String
    /// - `gesture_window_ms`: String → `i64` (falls back to 2000)
    /// - `ephemeral`: `true`/`false`/`1`/`0`/`yes`/`no`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fisheye::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("photographer".to_string(), "243".to_string());
    /// map.insert("gesture_window_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.photographer, Some(243));
    /// assert_eq!(config.gesture_window_ms, 2000);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let path = |key: &str| config.get(key).map(|p| PathBuf::from(infrastructure::expand_tilde(p)));

        Self {
            catalog: path("catalog").unwrap_or(defaults.catalog),
            data_dir: path("data_dir").unwrap_or(defaults.data_dir),
            photographer: config.get("photographer").and_then(|s| s.trim().parse().ok()),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|p| infrastructure::expand_tilde(p)),
            trace_level: config.get("trace_level").cloned(),
            gesture_window_ms: config
                .get("gesture_window_ms")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.gesture_window_ms),
            ephemeral: config.get("ephemeral").is_some_and(|s| parse_flag(s)),
            script: path("script"),
        }
    }

    /// Parses `key=value` command-line arguments.
    ///
    /// A `config=<path>` argument loads a TOML file first; the other arguments
    /// override its values.
    ///
    /// # Errors
    ///
    /// Returns [`FisheyeError::Config`] if an argument is not `key=value`, or
    /// the TOML file cannot be read or parsed.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut overrides = BTreeMap::new();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| FisheyeError::Config(format!("expected key=value, got `{arg}`")))?;
            overrides.insert(key.trim().to_string(), value.trim().to_string());
        }

        let mut map = match overrides.remove("config") {
            Some(path) => read_config_file(&infrastructure::expand_tilde(&path))?,
            None => BTreeMap::new(),
        };
        map.extend(overrides);

        Ok(Self::from_map(&map))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

/// Flattens the top-level scalars of a TOML file into the string map
/// [`Config::from_map`] reads.
fn read_config_file(path: &str) -> Result<BTreeMap<String, String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| FisheyeError::Config(format!("failed to read config file {path}: {e}")))?;
    let table: toml::Table = toml::from_str(&contents)
        .map_err(|e| FisheyeError::Config(format!("failed to parse config file {path}: {e}")))?;

    Ok(table
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Float(f) => f.to_string(),
                other => {
                    tracing::warn!(key = %key, value = %other, "ignoring non-scalar config value");
                    return None;
                }
            };
            Some((key, value))
        })
        .collect())
}

/// Builds the application state from configuration.
///
/// - Theme: `theme_file`, else `theme_name`, else the default; load failures
///   fall back to the default theme
/// - Catalog: read from `config.catalog`; failures yield an empty catalog
/// - Likes: `<data_dir>/storage.json`, memory when `ephemeral`, or an
///   unavailable store if the file cannot be opened (nothing is liked)
///
/// # Example
///
/// ```rust
/// use fisheye::{initialize, Config};
///
/// let config = Config {
///     catalog: "does/not/exist.json".into(),
///     ephemeral: true,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert!(state.catalog.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(catalog = ?config.catalog, "initializing fisheye");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let catalog = Catalog::load(&config.catalog);
    let likes = LikeStateStore::new(open_store(config));

    AppState::new(catalog, likes, theme, config.gesture_window_ms)
}

fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    if config.ephemeral {
        return Box::new(MemoryStore::default());
    }

    let path = infrastructure::storage_file(&config.data_dir);
    match JsonFileStore::open(path.clone()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "like storage unavailable, likes will not be kept");
            Box::new(UnavailableStore::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_override_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("fisheye.toml");
        std::fs::write(
            &file,
            "catalog = \"/srv/catalog.json\"\ntheme = \"fisheye-light\"\ngesture_window_ms = 500\nephemeral = true\n",
        )
        .expect("write config");

        let config = Config::from_args([format!("config={}", file.display()), "theme=fisheye-dark".to_string()])
            .expect("config parses");

        assert_eq!(config.catalog, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.theme_name.as_deref(), Some("fisheye-dark"));
        assert_eq!(config.gesture_window_ms, 500);
        assert!(config.ephemeral);
    }

    #[test]
    fn malformed_argument_is_a_config_error() {
        assert!(matches!(Config::from_args(["catalog"]), Err(FisheyeError::Config(_))));
        assert!(matches!(
            Config::from_args(["config=/definitely/missing.toml"]),
            Err(FisheyeError::Config(_))
        ));
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn unopenable_store_degrades_to_nothing_liked() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").expect("write blocker");

        let config = Config {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            data_dir: blocker,
            ..Default::default()
        };
        let mut state = initialize(&config);

        assert!(!state.likes.mark_liked(MediaId(623_534_343)));
        assert!(state.likes.liked_ids().is_empty());
    }
}
