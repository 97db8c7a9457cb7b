//! Page, modal and input mode state types.
//!
//! These enums form the navigation state machine of the gallery. The page decides
//! what the main area shows; at most one modal sits on top of a photographer
//! page; the input mode only matters on the listing page, where it controls
//! whether keys edit the search query or move the cursor.
//!
//! # Example
//!
//! ```rust
//! use fisheye::app::modes::{InputMode, Page, SearchFocus};
//!
//! let page = Page::Photographer(82);
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert_ne!(page, Page::Listing);
//! assert_ne!(input_mode, InputMode::Normal);
//! ```

/// Focus state within listing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the search query.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// Keys move through the filtered photographers.
    ///
    /// Accepts j/k for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Input handling mode of the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), enter (open), q (quit).
    Normal,

    /// Active search with focus state.
    Search(SearchFocus),
}

/// Page shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Every photographer of the catalog.
    Listing,

    /// The page of one photographer, by id.
    ///
    /// The id may be absent from the catalog; the page then shows a
    /// "Photographer not found" empty state.
    Photographer(u64),
}

/// Modal dialog on top of the photographer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    None,
    Lightbox,
    Contact,
}
