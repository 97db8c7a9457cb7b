//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They carry display-ready data only: formatted
//! labels, pre-computed like counts, highlight ranges and selection flags.
//!
//! # Example
//!
//! ```rust
//! use fisheye::ui::viewmodel::{Body, FooterInfo, HeaderInfo, PhotographerItem, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Fisheye ".to_string(), subtitle: None },
//!     body: Body::Photographers(vec![PhotographerItem {
//!         name: "Mimi Keel".to_string(),
//!         location: "London, UK".to_string(),
//!         tagline: "Voir le beau dans le quotidien".to_string(),
//!         price_label: "400€ / day".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 2)],
//!     }]),
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//!     badge: None,
//!     overlay: None,
//! };
//! assert!(vm.overlay.is_none());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title and optional subtitle line).
    pub header: HeaderInfo,

    /// Main list of the page.
    pub body: Body,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Replaces the body when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Search bar information (listing page in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Total likes and daily price (photographer page).
    pub badge: Option<BadgeInfo>,

    /// Modal drawn on top of the page.
    pub overlay: Option<Overlay>,
}

/// Main list of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Listing page rows.
    Photographers(Vec<PhotographerItem>),
    /// Photographer page rows, in the active sort order.
    Media {
        /// Label of the active sort order.
        order_label: String,
        items: Vec<MediaItem>,
    },
}

/// One row of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotographerItem {
    pub name: String,
    pub location: String,
    pub tagline: String,
    pub price_label: String,
    pub is_selected: bool,

    /// Character ranges to highlight (for fuzzy search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One row of the photographer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub title: String,
    /// "image" or "video".
    pub kind: &'static str,
    /// Date formatted as `YYYY-MM-DD`.
    pub date: String,
    /// Displayed like count, including the viewer's own like.
    pub likes: u32,
    /// Whether the viewer liked this media.
    pub liked: bool,
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
    /// Secondary line below the title.
    pub subtitle: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No photographers found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Like and price badge of the photographer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeInfo {
    pub total_likes: u64,
    pub price_label: String,
}

/// Modal overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Lightbox(LightboxView),
    Contact(ContactView),
}

/// Open lightbox contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub title: String,
    pub asset_path: String,
    pub kind: &'static str,
    /// One-based position, e.g. "2 / 9".
    pub position: String,
    /// Previous, next and close, in that order.
    pub controls: Vec<ControlView>,
}

/// A button of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlView {
    pub label: &'static str,
    pub enabled: bool,
    pub focused: bool,
}

/// Open contact modal contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    /// "Contact me" followed by the photographer name.
    pub title: String,
    pub fields: Vec<FieldView>,
    /// Submit and close, in that order.
    pub controls: Vec<ControlView>,
}

/// A text field of the contact modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
    pub focused: bool,
}
