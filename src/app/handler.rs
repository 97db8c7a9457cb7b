//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! runtime commands, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. The runtime turns each input line into one or more [`Event`]s
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the presenter
//!
//! # Key Routing
//!
//! Keys go to the topmost layer: the lightbox if open, else the contact modal if
//! open, else the current page. A layer never sees keys meant for another.
//!
//! # Provenance
//!
//! User-originated input is preceded by an [`Event::Interaction`] carrying its
//! provenance. The lightbox only opens when the latest interaction is genuine
//! and recent enough.
//!
//! # Example
//!
//! ```rust
//! use fisheye::app::{handle_event, AppState, Event, Key};
//! use fisheye::domain::Catalog;
//! use fisheye::storage::{LikeStateStore, MemoryStore};
//! use fisheye::ui::Theme;
//!
//! let likes = LikeStateStore::new(Box::new(MemoryStore::default()));
//! let mut state = AppState::new(Catalog::default(), likes, Theme::default(), 2000);
//! let (render, actions) = handle_event(&mut state, &Event::Key(Key::Down))?;
//! assert!(actions.is_empty());
//! # let _ = render;
//! # Ok::<(), fisheye::FisheyeError>(())
//! ```

use super::actions::Action;
use super::contact::{ContactControl, ContactField};
use super::gallery::LikeOutcome;
use super::gesture::Interaction;
use super::lightbox::{LightboxControl, NavigationState};
use super::modes::{InputMode, Modal, Page, SearchFocus};
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::{MediaId, SortOrder};

/// Keyboard keys the gallery reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    ShiftTab,
    Backspace,
    Char(char),
}

/// Clickable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A photographer card of the listing page.
    Photographer(u64),
    /// A media card of the photographer page.
    MediaCard(MediaId),
    /// The like button of a media card.
    LikeButton(MediaId),
    /// The "Contact me" button.
    ContactButton,
    /// The dimmed area around an open modal.
    Backdrop,
    LightboxPrevious,
    LightboxNext,
    LightboxClose,
    ContactSubmit,
    ContactClose,
}

/// Events triggered by user input or runtime commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Records a user-originated interaction and its provenance.
    ///
    /// Sent by the runtime before the key or click it belongs to.
    Interaction(Interaction),

    /// A key press.
    Key(Key),

    /// A click on a target.
    Click(Target),

    /// Opens the page of a photographer by id.
    OpenPhotographer(u64),

    /// Returns to the listing page.
    Back,

    /// Applies a sort order on the photographer page.
    Sort(SortOrder),

    /// Cycles to the next sort order.
    CycleSort,

    /// Likes a media of the photographer page.
    Like(MediaId),

    /// Requests the lightbox on a media.
    OpenLightbox {
        media_id: MediaId,
        /// Time of the request, in milliseconds since the Unix epoch.
        requested_at_ms: i64,
    },

    /// Opens the contact modal.
    OpenContact,

    /// Clears the persisted liked set.
    ResetLikes,

    /// Stops the runtime.
    Quit,
}

type Outcome = (bool, Vec<Action>);

const fn redraw() -> Outcome {
    (true, Vec::new())
}

const fn unchanged() -> Outcome {
    (false, Vec::new())
}

fn navigated(nav: Option<NavigationState>) -> Outcome {
    nav.map_or_else(unchanged, |nav| (true, vec![Action::NavigationChanged(nav)]))
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A pair of a redraw flag and the actions to dispatch, in order. The flag is
/// `false` when the event left everything visible unchanged.
///
/// # Errors
///
/// The handler itself recovers from every domain failure; the `Result` is kept
/// for the runtime's `?` chain.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<Outcome> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let outcome = match event {
        Event::Interaction(interaction) => {
            state.now_ms = interaction.at_ms;
            state.lightbox.record_interaction(*interaction);
            unchanged()
        }
        Event::Key(key) => handle_key(state, *key),
        Event::Click(target) => handle_click(state, *target),
        Event::OpenPhotographer(id) => (true, state.enter_photographer(*id)),
        Event::Back => {
            if state.page == Page::Listing {
                unchanged()
            } else {
                state.back_to_listing();
                redraw()
            }
        }
        Event::Sort(order) => sort(state, *order),
        Event::CycleSort => {
            let next = state.gallery.order().next();
            sort(state, next)
        }
        Event::Like(id) => like(state, *id),
        Event::OpenLightbox {
            media_id,
            requested_at_ms,
        } => open_lightbox(state, *media_id, *requested_at_ms),
        Event::OpenContact => {
            if state.open_contact() {
                redraw()
            } else {
                unchanged()
            }
        }
        Event::ResetLikes => {
            state.reset_likes();
            let mut actions = vec![Action::Notice("All likes have been reset".to_string())];
            if matches!(state.page, Page::Photographer(_)) {
                actions.push(Action::TotalLikesChanged(state.total_likes()));
            }
            (true, actions)
        }
        Event::Quit => (false, vec![Action::Quit]),
    };

    Ok(outcome)
}

fn sort(state: &mut AppState, order: SortOrder) -> Outcome {
    if !matches!(state.page, Page::Photographer(_)) {
        return unchanged();
    }
    if state.set_sort(order) {
        redraw()
    } else {
        (
            false,
            vec![Action::Notice("Sorting is unavailable while the lightbox is open".to_string())],
        )
    }
}

fn like(state: &mut AppState, id: MediaId) -> Outcome {
    if !matches!(state.page, Page::Photographer(_)) {
        return unchanged();
    }
    match state.like(id) {
        LikeOutcome::Liked { total, .. } => (true, vec![Action::TotalLikesChanged(total)]),
        LikeOutcome::AlreadyLiked | LikeOutcome::NotFound => unchanged(),
    }
}

fn open_lightbox(state: &mut AppState, id: MediaId, requested_at_ms: i64) -> Outcome {
    if !matches!(state.page, Page::Photographer(_)) {
        return unchanged();
    }
    navigated(state.open_lightbox(id, requested_at_ms))
}

fn handle_key(state: &mut AppState, key: Key) -> Outcome {
    match (state.page, state.modal()) {
        (Page::Listing, _) => handle_listing_key(state, key),
        (Page::Photographer(_), Modal::Lightbox) => handle_lightbox_key(state, key),
        (Page::Photographer(_), Modal::Contact) => handle_contact_key(state, key),
        (Page::Photographer(_), Modal::None) => handle_gallery_key(state, key),
    }
}

fn handle_listing_key(state: &mut AppState, key: Key) -> Outcome {
    match (state.input_mode, key) {
        (_, Key::Down) | (InputMode::Normal | InputMode::Search(SearchFocus::Navigating), Key::Char('j')) => {
            state.move_selection_down();
            redraw()
        }
        (_, Key::Up) | (InputMode::Normal | InputMode::Search(SearchFocus::Navigating), Key::Char('k')) => {
            state.move_selection_up();
            redraw()
        }
        (InputMode::Normal | InputMode::Search(SearchFocus::Navigating), Key::Enter) => {
            let Some(id) = state.selected_photographer().map(|p| p.id) else {
                tracing::debug!("no photographer selected");
                return unchanged();
            };
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.apply_search_filter();
            (true, state.enter_photographer(id))
        }
        (InputMode::Normal, Key::Char('/')) | (InputMode::Search(SearchFocus::Navigating), Key::Char('/')) => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            redraw()
        }
        (InputMode::Normal, Key::Char('q')) => (false, vec![Action::Quit]),
        (InputMode::Search(SearchFocus::Typing), Key::Enter) => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            redraw()
        }
        (InputMode::Search(SearchFocus::Typing), Key::Char(c)) => {
            state.search_query.push(c);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_search_filter();
            redraw()
        }
        (InputMode::Search(SearchFocus::Typing), Key::Backspace) => {
            state.search_query.pop();
            state.apply_search_filter();
            redraw()
        }
        (InputMode::Search(_), Key::Escape) => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.apply_search_filter();
            redraw()
        }
        _ => unchanged(),
    }
}

fn handle_gallery_key(state: &mut AppState, key: Key) -> Outcome {
    match key {
        Key::Down | Key::Char('j') => {
            state.move_media_selection_down();
            redraw()
        }
        Key::Up | Key::Char('k') => {
            state.move_media_selection_up();
            redraw()
        }
        Key::Enter | Key::Char(' ') => {
            let Some(id) = state.selected_media().map(|m| m.id) else {
                return unchanged();
            };
            let at = state.now_ms;
            open_lightbox(state, id, at)
        }
        Key::Char('l') => {
            let Some(id) = state.selected_media().map(|m| m.id) else {
                return unchanged();
            };
            like(state, id)
        }
        Key::Char('s') => {
            let next = state.gallery.order().next();
            sort(state, next)
        }
        Key::Char('c') => {
            if state.open_contact() {
                redraw()
            } else {
                unchanged()
            }
        }
        Key::Char('b') | Key::Escape | Key::Backspace => {
            state.back_to_listing();
            redraw()
        }
        Key::Char('q') => (false, vec![Action::Quit]),
        _ => unchanged(),
    }
}

fn activate_lightbox_control(state: &mut AppState, control: LightboxControl) -> Outcome {
    match control {
        LightboxControl::Previous => navigated(state.lightbox.previous()),
        LightboxControl::Next => navigated(state.lightbox.next()),
        LightboxControl::Close => {
            state.close_lightbox();
            redraw()
        }
    }
}

fn handle_lightbox_key(state: &mut AppState, key: Key) -> Outcome {
    match key {
        Key::Escape => activate_lightbox_control(state, LightboxControl::Close),
        Key::Left => activate_lightbox_control(state, LightboxControl::Previous),
        Key::Right => activate_lightbox_control(state, LightboxControl::Next),
        Key::Tab => {
            state.lightbox.focus_next();
            redraw()
        }
        Key::ShiftTab => {
            state.lightbox.focus_previous();
            redraw()
        }
        Key::Enter | Key::Char(' ') => state
            .lightbox
            .focused_control()
            .map_or_else(unchanged, |control| activate_lightbox_control(state, control)),
        _ => unchanged(),
    }
}

fn submit_contact(state: &mut AppState) -> Outcome {
    match state.contact.submit() {
        Some(message) => (
            true,
            vec![
                Action::ContactSubmitted(message),
                Action::Notice("Your message has been sent".to_string()),
            ],
        ),
        None => redraw(),
    }
}

fn handle_contact_key(state: &mut AppState, key: Key) -> Outcome {
    match key {
        Key::Escape => {
            state.contact.close();
            redraw()
        }
        Key::Tab => {
            state.contact.focus_next();
            redraw()
        }
        Key::ShiftTab => {
            state.contact.focus_previous();
            redraw()
        }
        Key::Enter => match state.contact.focused() {
            Some(ContactControl::Close) => {
                state.contact.close();
                redraw()
            }
            Some(ContactControl::Field(ContactField::Message)) => unchanged(),
            Some(ContactControl::Field(_) | ContactControl::Submit) => submit_contact(state),
            None => unchanged(),
        },
        Key::Char(c) => {
            if state.contact.input_char(c) {
                redraw()
            } else {
                unchanged()
            }
        }
        Key::Backspace => {
            if state.contact.backspace() {
                redraw()
            } else {
                unchanged()
            }
        }
        _ => unchanged(),
    }
}

fn handle_click(state: &mut AppState, target: Target) -> Outcome {
    match (state.modal(), target) {
        (Modal::Lightbox, Target::Backdrop | Target::LightboxClose) => {
            activate_lightbox_control(state, LightboxControl::Close)
        }
        (Modal::Lightbox, Target::LightboxPrevious) => activate_lightbox_control(state, LightboxControl::Previous),
        (Modal::Lightbox, Target::LightboxNext) => activate_lightbox_control(state, LightboxControl::Next),
        (Modal::Contact, Target::Backdrop | Target::ContactClose) => {
            state.contact.close();
            redraw()
        }
        (Modal::Contact, Target::ContactSubmit) => submit_contact(state),
        (Modal::None, Target::Photographer(id)) if state.page == Page::Listing => (true, state.enter_photographer(id)),
        (Modal::None, Target::MediaCard(id)) => {
            let at = state.now_ms;
            open_lightbox(state, id, at)
        }
        (Modal::None, Target::LikeButton(id)) => like(state, id),
        (Modal::None, Target::ContactButton) => {
            if state.open_contact() {
                redraw()
            } else {
                unchanged()
            }
        }
        _ => {
            tracing::debug!(click = ?target, "click ignored");
            unchanged()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::lightbox::LightboxState;
    use crate::domain::Catalog;
    use crate::storage::{LikeStateStore, MemoryStore};
    use crate::ui::Theme;

    const CATALOG: &str = r#"{
        "photographers": [
            { "id": 1, "name": "Mimi Keel", "city": "London", "country": "UK",
              "tagline": "Voir le beau", "price": 400, "portrait": "MimiKeel.jpg" }
        ],
        "media": [
            { "id": 10, "photographerId": 1, "title": "b", "image": "b.jpg", "likes": 3, "date": "2019-01-01" },
            { "id": 11, "photographerId": 1, "title": "a", "image": "a.jpg", "likes": 5, "date": "2020-01-01" },
            { "id": 12, "photographerId": 1, "title": "a2", "image": "c.jpg", "likes": 3, "date": "2018-01-01" }
        ]
    }"#;

    fn on_page() -> AppState {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        let likes = LikeStateStore::new(Box::new(MemoryStore::default()));
        let mut state = AppState::new(catalog, likes, Theme::default(), 2000);
        handle_event(&mut state, &Event::OpenPhotographer(1)).expect("open page");
        state
    }

    fn press(state: &mut AppState, at_ms: i64, key: Key) -> Outcome {
        handle_event(state, &Event::Interaction(Interaction::genuine(at_ms))).expect("interaction");
        handle_event(state, &Event::Key(key)).expect("key")
    }

    #[test]
    fn enter_on_listing_opens_photographer() {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        let likes = LikeStateStore::new(Box::new(MemoryStore::default()));
        let mut state = AppState::new(catalog, likes, Theme::default(), 2000);

        let (render, actions) = press(&mut state, 0, Key::Enter);

        assert!(render);
        assert_eq!(state.page, Page::Photographer(1));
        assert_eq!(actions, vec![Action::TotalLikesChanged(11)]);
    }

    #[test]
    fn enter_opens_lightbox_and_arrows_navigate() {
        let mut state = on_page();

        let (_, actions) = press(&mut state, 1_000, Key::Enter);
        assert_eq!(
            actions,
            vec![Action::NavigationChanged(NavigationState {
                index: 0,
                previous_enabled: false,
                next_enabled: true
            })]
        );

        let (render, actions) = press(&mut state, 1_100, Key::Left);
        assert!(!render);
        assert!(actions.is_empty());

        press(&mut state, 1_200, Key::Right);
        press(&mut state, 1_300, Key::Right);
        let (_, actions) = press(&mut state, 1_400, Key::Right);
        assert!(actions.is_empty());
        assert_eq!(state.lightbox.state(), LightboxState::Open { index: 2 });

        press(&mut state, 1_500, Key::Escape);
        assert_eq!(state.lightbox.state(), LightboxState::Closed);
        assert_eq!(state.selected_media, 2);
    }

    #[test]
    fn synthetic_input_cannot_open_lightbox() {
        let mut state = on_page();

        handle_event(&mut state, &Event::Interaction(Interaction::synthetic(0))).expect("interaction");
        handle_event(&mut state, &Event::Key(Key::Enter)).expect("key");

        assert_eq!(state.lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn stale_open_request_is_dropped() {
        let mut state = on_page();
        handle_event(&mut state, &Event::Interaction(Interaction::genuine(0))).expect("interaction");

        let (render, actions) = handle_event(
            &mut state,
            &Event::OpenLightbox {
                media_id: MediaId(10),
                requested_at_ms: 2_001,
            },
        )
        .expect("open");

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn like_reports_new_total_once() {
        let mut state = on_page();

        let (_, actions) = press(&mut state, 0, Key::Char('l'));
        assert_eq!(actions, vec![Action::TotalLikesChanged(12)]);

        let (render, actions) = press(&mut state, 10, Key::Char('l'));
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn sort_while_lightbox_open_is_refused() {
        let mut state = on_page();
        press(&mut state, 0, Key::Enter);

        let (render, actions) = handle_event(&mut state, &Event::Sort(SortOrder::Date)).expect("sort");

        assert!(!render);
        assert!(matches!(actions.as_slice(), [Action::Notice(_)]));
        assert_eq!(state.gallery.order(), SortOrder::Popularity);
    }

    #[test]
    fn lightbox_tab_never_leaves_controls() {
        let mut state = on_page();
        press(&mut state, 0, Key::Enter);

        for i in 0..5 {
            press(&mut state, i, Key::Tab);
            assert!(state.lightbox.focused_control().is_some());
        }

        press(&mut state, 10, Key::ShiftTab);
        assert_eq!(state.lightbox.focused_control(), Some(LightboxControl::Next));
        let (_, actions) = press(&mut state, 11, Key::Enter);
        assert!(matches!(actions.as_slice(), [Action::NavigationChanged(nav)] if nav.index == 1));
    }

    #[test]
    fn reopened_lightbox_starts_on_first_control() {
        let mut state = on_page();
        press(&mut state, 0, Key::Down);
        press(&mut state, 0, Key::Enter);
        assert_eq!(state.lightbox.focused_control(), Some(LightboxControl::Previous));

        press(&mut state, 10, Key::Tab);
        press(&mut state, 20, Key::Tab);
        assert_eq!(state.lightbox.focused_control(), Some(LightboxControl::Close));
        press(&mut state, 30, Key::Enter);
        assert!(!state.lightbox.is_open());

        press(&mut state, 40, Key::Enter);
        assert!(state.lightbox.is_open());
        assert_eq!(state.lightbox.focused_control(), Some(LightboxControl::Previous));
    }

    #[test]
    fn like_on_listing_is_ignored() {
        let mut state = on_page();
        handle_event(&mut state, &Event::Back).expect("back");

        let (render, actions) = handle_event(&mut state, &Event::Like(MediaId(10))).expect("like");

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.likes.liked_ids().is_empty());
    }

    #[test]
    fn backdrop_click_closes_lightbox() {
        let mut state = on_page();
        press(&mut state, 0, Key::Enter);

        handle_event(&mut state, &Event::Click(Target::Backdrop)).expect("click");

        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn contact_flow_submits_message() {
        let mut state = on_page();
        press(&mut state, 0, Key::Char('c'));
        assert_eq!(state.modal(), Modal::Contact);

        for c in "Jane".chars() {
            press(&mut state, 0, Key::Char(c));
        }
        press(&mut state, 0, Key::Tab);
        for c in "Doe".chars() {
            press(&mut state, 0, Key::Char(c));
        }
        press(&mut state, 0, Key::Tab);
        for c in "jane@example.com".chars() {
            press(&mut state, 0, Key::Char(c));
        }
        press(&mut state, 0, Key::Tab);
        for c in "Hello".chars() {
            press(&mut state, 0, Key::Char(c));
        }

        let (render, actions) = press(&mut state, 0, Key::Enter);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.modal(), Modal::Contact);

        press(&mut state, 0, Key::Tab);
        let (_, actions) = press(&mut state, 0, Key::Enter);

        assert!(matches!(actions.first(), Some(Action::ContactSubmitted(m)) if m.email == "jane@example.com"));
        assert_eq!(state.modal(), Modal::None);
    }

    #[test]
    fn keys_in_contact_modal_do_not_reach_gallery() {
        let mut state = on_page();
        press(&mut state, 0, Key::Char('c'));

        let (_, actions) = press(&mut state, 0, Key::Char('l'));

        assert!(actions.is_empty());
        assert!(state.likes.liked_ids().is_empty());
        assert_eq!(state.contact.value(crate::app::contact::ContactField::FirstName), "l");
    }

    #[test]
    fn reset_likes_reports_baseline_total() {
        let mut state = on_page();
        press(&mut state, 0, Key::Char('l'));

        let (_, actions) = handle_event(&mut state, &Event::ResetLikes).expect("reset");

        assert_eq!(actions.last(), Some(&Action::TotalLikesChanged(11)));
    }

    #[test]
    fn listing_search_then_open() {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        let likes = LikeStateStore::new(Box::new(MemoryStore::default()));
        let mut state = AppState::new(catalog, likes, Theme::default(), 2000);

        press(&mut state, 0, Key::Char('/'));
        for c in "zzz".chars() {
            press(&mut state, 0, Key::Char(c));
        }
        assert!(state.filtered_photographers.is_empty());

        for _ in 0..3 {
            press(&mut state, 0, Key::Backspace);
        }
        press(&mut state, 0, Key::Char('m'));
        press(&mut state, 0, Key::Enter);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        press(&mut state, 0, Key::Enter);
        assert_eq!(state.page, Page::Photographer(1));
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
