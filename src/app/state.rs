//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of everything the gallery
//! knows at runtime: the catalog, the like store, the current page and the
//! state of both modals. The runtime constructs it once and passes it by
//! `&mut` to the event handler; nothing lives in globals.
//!
//! # State Components
//!
//! - **Catalog**: Photographers and media loaded at startup
//! - **Likes**: The persisted liked set
//! - **Listing**: Search query, filtered photographers and cursor
//! - **Gallery**: Media of the open photographer page in display order, and cursor
//! - **Lightbox** and **Contact**: The two modals of the photographer page
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms state into a renderable UI
//! representation, handling windowing, fuzzy match highlighting and displayed
//! like counts.
//!
//! # Example
//!
//! ```rust
//! use fisheye::app::AppState;
//! use fisheye::domain::Catalog;
//! use fisheye::storage::{LikeStateStore, MemoryStore};
//! use fisheye::ui::Theme;
//!
//! let likes = LikeStateStore::new(Box::new(MemoryStore::default()));
//! let state = AppState::new(Catalog::default(), likes, Theme::default(), 2000);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::actions::Action;
use super::contact::{ContactControl, ContactField, ContactForm};
use super::gallery::{GalleryViewState, LikeOutcome};
use super::lightbox::{LightboxControl, LightboxController, NavigationState};
use super::modes::{InputMode, Modal, Page, SearchFocus};
use crate::domain::{Catalog, Media, MediaId, Photographer, SortOrder};
use crate::storage::LikeStateStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BadgeInfo, Body, ContactView, ControlView, EmptyState, FieldView, FooterInfo, HeaderInfo, LightboxView,
    MediaItem, Overlay, PhotographerItem, SearchBarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

pub const NO_PHOTOGRAPHERS: &str = "No photographers found";
pub const NO_MEDIA: &str = "No media found for this photographer";
pub const PHOTOGRAPHER_NOT_FOUND: &str = "Photographer not found";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Catalog loaded at startup. Empty if the catalog could not be read.
    pub catalog: Catalog,

    /// Persisted liked set.
    pub likes: LikeStateStore,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Page shown in the main area.
    pub page: Page,

    /// Listing input mode.
    pub input_mode: InputMode,

    /// Listing search query.
    ///
    /// Accumulated by `Char` keys in search mode, reduced by `Backspace`,
    /// cleared when search is left.
    pub search_query: String,

    /// Photographers matching the search query.
    ///
    /// Recomputed by `apply_search_filter()`. Used for rendering and selection
    /// bounds checking.
    pub filtered_photographers: Vec<Photographer>,

    /// Zero-based cursor within `filtered_photographers`.
    pub selected_index: usize,

    /// Media of the current photographer page.
    pub gallery: GalleryViewState,

    /// Zero-based cursor within the gallery view.
    pub selected_media: usize,

    pub lightbox: LightboxController,

    pub contact: ContactForm,

    /// Timestamp of the latest recorded interaction, in milliseconds.
    ///
    /// Used as the request time of keyboard-triggered lightbox activations.
    pub now_ms: i64,
}

impl AppState {
    /// Creates the state for a fresh run on the listing page.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Loaded catalog (possibly empty)
    /// * `likes` - Like store over the configured key-value store
    /// * `theme` - Color scheme for UI rendering
    /// * `gesture_window_ms` - Recency window backing lightbox activations
    #[must_use]
    pub fn new(catalog: Catalog, likes: LikeStateStore, theme: Theme, gesture_window_ms: i64) -> Self {
        let mut state = Self {
            catalog,
            likes,
            theme,
            page: Page::Listing,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            filtered_photographers: vec![],
            selected_index: 0,
            gallery: GalleryViewState::default(),
            selected_media: 0,
            lightbox: LightboxController::new(gesture_window_ms),
            contact: ContactForm::default(),
            now_ms: 0,
        };
        state.apply_search_filter();
        state
    }

    /// The modal currently on top of the page.
    #[must_use]
    pub const fn modal(&self) -> Modal {
        if self.lightbox.is_open() {
            Modal::Lightbox
        } else if self.contact.is_open() {
            Modal::Contact
        } else {
            Modal::None
        }
    }

    /// Moves the listing cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        if self.filtered_photographers.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_photographers.len();
    }

    /// Moves the listing cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        if self.filtered_photographers.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_photographers.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the photographer under the listing cursor, if any.
    #[must_use]
    pub fn selected_photographer(&self) -> Option<&Photographer> {
        self.filtered_photographers.get(self.selected_index)
    }

    /// Filters the catalog photographers by the search query.
    ///
    /// The query is split on whitespace; every token must fuzzy-match the
    /// photographer's name, city, country or tagline. `selected_index` is then
    /// clamped to the filtered bounds.
    pub fn apply_search_filter(&mut self) {
        use fuzzy_matcher::FuzzyMatcher;

        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_photographers = self.catalog.photographers().len(),
            query_len = self.search_query.len()
        )
        .entered();

        let tokens: Vec<String> = self
            .search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        self.filtered_photographers = self
            .catalog
            .photographers()
            .iter()
            .filter(|photographer| {
                matcher.as_ref().map_or(true, |m| {
                    let haystack = format!(
                        "{} {} {} {}",
                        photographer.name, photographer.city, photographer.country, photographer.tagline
                    )
                    .to_lowercase();
                    tokens.iter().all(|token| m.fuzzy_match(&haystack, token).is_some())
                })
            })
            .cloned()
            .collect();

        if self.filtered_photographers.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_photographers.len() - 1);
        }

        tracing::debug!(filtered_count = self.filtered_photographers.len(), "search filter applied");
    }

    /// The photographer of the current page, if the page is a known photographer.
    #[must_use]
    pub fn current_photographer(&self) -> Option<&Photographer> {
        match self.page {
            Page::Photographer(id) => self.catalog.photographer(id),
            Page::Listing => None,
        }
    }

    /// Opens the page of photographer `id`.
    ///
    /// Starts a new page lifecycle: the gallery is reloaded from the catalog in
    /// the default order and both modals are closed.
    pub fn enter_photographer(&mut self, id: u64) -> Vec<Action> {
        let _span = tracing::debug_span!("enter_photographer", photographer_id = id).entered();

        self.page = Page::Photographer(id);
        self.input_mode = InputMode::Normal;
        self.selected_media = 0;
        self.lightbox.close();
        self.contact.close();

        if self.catalog.photographer(id).is_none() {
            tracing::warn!(photographer_id = id, "unknown photographer");
            self.gallery = GalleryViewState::default();
            self.lightbox.set_media(vec![]);
            return vec![Action::Notice(PHOTOGRAPHER_NOT_FOUND.to_string())];
        }

        self.gallery = GalleryViewState::new(self.catalog.media_for(id));
        self.lightbox.set_media(self.gallery.view().to_vec());

        vec![Action::TotalLikesChanged(self.total_likes())]
    }

    /// Returns to the listing page, closing any modal.
    pub fn back_to_listing(&mut self) {
        self.lightbox.close();
        self.contact.close();
        self.page = Page::Listing;
    }

    /// Moves the gallery cursor down, wrapping to top.
    pub fn move_media_selection_down(&mut self) {
        let len = self.gallery.view().len();
        if len == 0 {
            return;
        }
        self.selected_media = (self.selected_media + 1) % len;
    }

    /// Moves the gallery cursor up, wrapping to bottom.
    pub fn move_media_selection_up(&mut self) {
        let len = self.gallery.view().len();
        if len == 0 {
            return;
        }
        self.selected_media = if self.selected_media == 0 { len - 1 } else { self.selected_media - 1 };
    }

    /// Returns the media under the gallery cursor, if any.
    #[must_use]
    pub fn selected_media(&self) -> Option<&Media> {
        self.gallery.view().get(self.selected_media)
    }

    /// Changes the gallery sort order, keeping the cursor on the same media.
    ///
    /// Refused while the lightbox is open. Returns whether the order was applied.
    pub fn set_sort(&mut self, order: SortOrder) -> bool {
        if self.lightbox.is_open() {
            tracing::debug!(order = %order, "sort refused while the lightbox is open");
            return false;
        }

        let selected = self.selected_media().map(|m| m.id);
        self.gallery.set_order(order);
        self.lightbox.set_media(self.gallery.view().to_vec());
        self.selected_media = selected
            .and_then(|id| self.gallery.view().iter().position(|m| m.id == id))
            .unwrap_or(0);
        true
    }

    /// Likes `id` on the current page.
    pub fn like(&mut self, id: MediaId) -> LikeOutcome {
        self.gallery.like(id, &mut self.likes)
    }

    /// Aggregate displayed likes of the current page.
    #[must_use]
    pub fn total_likes(&self) -> u64 {
        self.gallery.total_likes(&self.likes)
    }

    /// Clears the persisted liked set.
    ///
    /// Likes kept only for this page lifecycle are dropped too.
    pub fn reset_likes(&mut self) {
        self.likes.reset_all();
        let media = self.gallery.view().to_vec();
        let order = self.gallery.order();
        self.gallery = GalleryViewState::new(media);
        self.gallery.set_order(order);
    }

    /// Opens the lightbox on `id` if a recent genuine gesture backs the request.
    pub fn open_lightbox(&mut self, id: MediaId, requested_at_ms: i64) -> Option<NavigationState> {
        if self.contact.is_open() {
            tracing::debug!("lightbox activation ignored while contact modal is open");
            return None;
        }
        self.lightbox.activate(id, requested_at_ms)
    }

    /// Closes the lightbox and moves the gallery cursor to the media last shown.
    pub fn close_lightbox(&mut self) -> bool {
        if let Some(id) = self.lightbox.current().map(|m| m.id) {
            if let Some(pos) = self.gallery.view().iter().position(|m| m.id == id) {
                self.selected_media = pos;
            }
        }
        self.lightbox.close()
    }

    /// Opens the contact modal for the current photographer.
    pub fn open_contact(&mut self) -> bool {
        if self.lightbox.is_open() {
            return false;
        }
        let Some(name) = self.current_photographer().map(|p| p.name.clone()) else {
            return false;
        };
        self.contact.open(&name);
        true
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around the cursor
    /// 3. Adjust window near start/end to maximize visible items
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match self.page {
            Page::Listing => self.compute_listing(rows, cols),
            Page::Photographer(_) => self.compute_photographer_page(rows),
        }
    }

    fn compute_listing(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = HeaderInfo {
            title: format!(" Fisheye · Photographers ({}) ", self.filtered_photographers.len()),
            subtitle: None,
        };

        let empty_state = self.catalog.photographers().is_empty().then(|| EmptyState {
            message: NO_PHOTOGRAPHERS.to_string(),
            subtitle: "Check the catalog path in your configuration".to_string(),
        });

        let available_rows = self.calculate_available_rows(rows);
        let (visible_start, visible_end) =
            visible_window(self.selected_index, self.filtered_photographers.len(), available_rows);

        let matcher = if matches!(self.input_mode, InputMode::Search(_)) && !self.search_query.is_empty() {
            Some(SkimMatcherV2::default())
        } else {
            None
        };

        let items = self.filtered_photographers[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, photographer)| {
                let is_selected = visible_start + relative_idx == self.selected_index;
                self.compute_photographer_item(photographer, is_selected, cols, matcher.as_ref())
            })
            .collect();

        UIViewModel {
            header,
            body: Body::Photographers(items),
            footer: self.compute_footer(),
            empty_state,
            search_bar: self.compute_search_bar(),
            badge: None,
            overlay: None,
        }
    }

    fn compute_photographer_item(
        &self,
        photographer: &Photographer,
        is_selected: bool,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> PhotographerItem {
        const FIXED_COLUMNS_WIDTH: usize = 30 + 22 + 12;

        let name = truncate(&photographer.name, 28);
        let tagline = truncate(&photographer.tagline, cols.saturating_sub(FIXED_COLUMNS_WIDTH).max(8));
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&name, m));

        PhotographerItem {
            name,
            location: truncate(&photographer.location(), 20),
            tagline,
            price_label: photographer.price_label(),
            is_selected,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Consecutive match indices are coalesced into `(start, end)` ranges with an
    /// exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(&text.to_lowercase(), &self.search_query.to_lowercase())
        else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_photographer_page(&self, rows: usize) -> UIViewModel {
        let Some(photographer) = self.current_photographer() else {
            return UIViewModel {
                header: HeaderInfo {
                    title: " Fisheye ".to_string(),
                    subtitle: None,
                },
                body: Body::Photographers(vec![]),
                footer: FooterInfo {
                    keybindings: "b: back  q: quit".to_string(),
                },
                empty_state: Some(EmptyState {
                    message: PHOTOGRAPHER_NOT_FOUND.to_string(),
                    subtitle: "Press b to go back to the listing".to_string(),
                }),
                search_bar: None,
                badge: None,
                overlay: None,
            };
        };

        let header = HeaderInfo {
            title: format!(" {} ", photographer.name),
            subtitle: Some(format!("{} · {}", photographer.location(), photographer.tagline)),
        };

        let view = self.gallery.view();
        let empty_state = view.is_empty().then(|| EmptyState {
            message: NO_MEDIA.to_string(),
            subtitle: "Press b to go back to the listing".to_string(),
        });

        let available_rows = rows.saturating_sub(10);
        let (visible_start, visible_end) = visible_window(self.selected_media, view.len(), available_rows);

        let items = view[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, media)| MediaItem {
                title: truncate(&media.title, 40),
                kind: media.kind.label(),
                date: media.date.format("%Y-%m-%d").to_string(),
                likes: self.gallery.displayed_likes(media, &self.likes),
                liked: self.gallery.liked(media, &self.likes),
                is_selected: visible_start + relative_idx == self.selected_media,
            })
            .collect();

        let overlay = match self.modal() {
            Modal::Lightbox => self.compute_lightbox_view(photographer).map(Overlay::Lightbox),
            Modal::Contact => Some(Overlay::Contact(self.compute_contact_view())),
            Modal::None => None,
        };

        UIViewModel {
            header,
            body: Body::Media {
                order_label: self.gallery.order().label().to_string(),
                items,
            },
            footer: self.compute_footer(),
            empty_state,
            search_bar: None,
            badge: Some(BadgeInfo {
                total_likes: self.total_likes(),
                price_label: photographer.price_label(),
            }),
            overlay,
        }
    }

    fn compute_lightbox_view(&self, photographer: &Photographer) -> Option<LightboxView> {
        let media = self.lightbox.current()?;
        let nav = self.lightbox.navigation()?;
        let focused = self.lightbox.focused_control();

        let control = |label: &'static str, control: LightboxControl, enabled: bool| ControlView {
            label,
            enabled,
            focused: focused == Some(control),
        };

        Some(LightboxView {
            title: media.title.clone(),
            asset_path: media.asset_path(&photographer.asset_folder()),
            kind: media.kind.label(),
            position: format!("{} / {}", nav.index + 1, self.lightbox.len()),
            controls: vec![
                control("< Previous", LightboxControl::Previous, nav.previous_enabled),
                control("Next >", LightboxControl::Next, nav.next_enabled),
                control("Close", LightboxControl::Close, true),
            ],
        })
    }

    fn compute_contact_view(&self) -> ContactView {
        let focused = self.contact.focused();

        let fields = ContactField::ALL
            .into_iter()
            .map(|field| FieldView {
                label: field.label(),
                value: self.contact.value(field).to_string(),
                error: self.contact.error(field),
                focused: focused == Some(ContactControl::Field(field)),
            })
            .collect();

        ContactView {
            title: format!("Contact me {}", self.contact.photographer()),
            fields,
            controls: vec![
                ControlView {
                    label: "Send",
                    enabled: true,
                    focused: focused == Some(ContactControl::Submit),
                },
                ControlView {
                    label: "Close",
                    enabled: true,
                    focused: focused == Some(ContactControl::Close),
                },
            ],
        }
    }

    /// Computes footer keybindings text based on page, modal and input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.page, self.modal(), self.input_mode) {
            (Page::Listing, _, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: results  Up/Down: navigate  Type to filter"
            }
            (Page::Listing, _, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: open"
            }
            (Page::Listing, _, InputMode::Normal) => "j/k: navigate  /: search  Enter: open  q: quit",
            (Page::Photographer(_), Modal::Lightbox, _) => {
                "Left/Right: previous/next  Tab: focus  Enter: activate  ESC: close"
            }
            (Page::Photographer(_), Modal::Contact, _) => "Tab: next field  Enter: send  ESC: close",
            (Page::Photographer(_), Modal::None, _) => {
                "j/k: navigate  Enter: view  l: like  s: sort  c: contact  b: back  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Rows left for the photographer list after header, borders, search bar and footer.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}

/// Returns the `[start, end)` slice of a list of `len` items to show in `available`
/// rows, keeping `selected` visible and roughly centered.
fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let mut visible_start = selected.saturating_sub(available / 2);
    let visible_end = (visible_start + available).min(len);

    if visible_end - visible_start.min(visible_end) < available && len >= available {
        visible_start = visible_end.saturating_sub(available);
    }

    (visible_start.min(visible_end), visible_end)
}

/// Truncates `text` to `max` characters, ending with "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
