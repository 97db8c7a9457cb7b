//! Lightbox viewer state machine.
//!
//! The lightbox shows one media of the current view at a time. It is either
//! [`LightboxState::Closed`] or [`LightboxState::Open`] at an index into a
//! snapshot of the sorted view.
//!
//! # Transitions
//!
//! ```text
//! Closed ──activate(id)──▶ Open(i)        (genuine, recent gesture only)
//! Open(i) ──previous──▶ Open(max(i-1, 0))
//! Open(i) ──next──────▶ Open(min(i+1, n-1))
//! Open(i) ──close─────▶ Closed
//! ```
//!
//! Every transition into `Open` yields a [`NavigationState`] for the presenter
//! and rebuilds the focus trap over the enabled controls. Opening from `Closed`
//! focuses the first control; moving while open keeps the focused control.

use crate::app::focus::FocusTrap;
use crate::app::gesture::{GestureGuard, Interaction};
use crate::domain::{FisheyeError, Media, MediaId, Result};

/// Open/closed state of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Focusable controls of the open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxControl {
    Previous,
    Next,
    Close,
}

/// Position of the lightbox and which navigation controls are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub index: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Lightbox controller over a snapshot of the sorted media view.
#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    media: Vec<Media>,
    state: LightboxState,
    guard: GestureGuard,
    focus: FocusTrap<LightboxControl>,
}

impl LightboxController {
    /// Creates a closed lightbox with the given gesture recency window.
    #[must_use]
    pub fn new(gesture_window_ms: i64) -> Self {
        Self {
            guard: GestureGuard::new(gesture_window_ms),
            ..Self::default()
        }
    }

    /// Replaces the media snapshot.
    ///
    /// An open index is kept as is, even if it now points at a different media.
    pub fn set_media(&mut self, media: Vec<Media>) {
        self.media = media;
    }

    /// Records a user interaction for the gesture guard.
    pub fn record_interaction(&mut self, interaction: Interaction) {
        self.guard.record(interaction);
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> LightboxState {
        self.state
    }

    /// Returns `true` while the lightbox is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// The media currently shown, if open.
    #[must_use]
    pub fn current(&self) -> Option<&Media> {
        match self.state {
            LightboxState::Open { index } => self.media.get(index),
            LightboxState::Closed => None,
        }
    }

    /// Number of media in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.media.len()
    }

    /// Returns `true` if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Navigation state of the open lightbox.
    #[must_use]
    pub fn navigation(&self) -> Option<NavigationState> {
        match self.state {
            LightboxState::Open { index } => Some(NavigationState {
                index,
                previous_enabled: index > 0,
                next_enabled: index + 1 < self.media.len(),
            }),
            LightboxState::Closed => None,
        }
    }

    fn position(&self, id: MediaId) -> Result<usize> {
        self.media
            .iter()
            .position(|m| m.id == id)
            .ok_or(FisheyeError::MediaNotFound(id))
    }

    fn open_at(&mut self, index: usize) -> Option<NavigationState> {
        self.state = LightboxState::Open { index };
        let nav = self.navigation()?;

        let mut controls = Vec::with_capacity(3);
        if nav.previous_enabled {
            controls.push(LightboxControl::Previous);
        }
        if nav.next_enabled {
            controls.push(LightboxControl::Next);
        }
        controls.push(LightboxControl::Close);
        self.focus.rebuild(controls);

        tracing::debug!(index, previous = nav.previous_enabled, next = nav.next_enabled, "lightbox open");
        Some(nav)
    }

    /// Opens the lightbox on `id`.
    ///
    /// Honoured only when the last recorded interaction is a genuine gesture
    /// within the recency window of `requested_at_ms`; otherwise the request is
    /// dropped silently. An id absent from the snapshot leaves the state unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use fisheye::app::gesture::Interaction;
    /// use fisheye::app::lightbox::{LightboxController, LightboxState};
    /// use fisheye::domain::{Media, MediaId};
    ///
    /// let d = NaiveDate::from_ymd_opt(2020, 5, 5).unwrap_or_default();
    /// let mut lightbox = LightboxController::new(2000);
    /// lightbox.set_media(vec![Media::image(MediaId(4), 1, "Fog", 2, d)]);
    ///
    /// lightbox.record_interaction(Interaction::genuine(1_000));
    /// assert!(lightbox.activate(MediaId(4), 1_200).is_some());
    /// assert_eq!(lightbox.state(), LightboxState::Open { index: 0 });
    /// ```
    pub fn activate(&mut self, id: MediaId, requested_at_ms: i64) -> Option<NavigationState> {
        let _span = tracing::debug_span!("lightbox_activate", media_id = %id).entered();

        if !self.guard.permits(requested_at_ms) {
            return None;
        }

        match self.position(id) {
            Ok(index) => {
                let opening = !self.is_open();
                let nav = self.open_at(index);
                if opening {
                    self.focus.reset();
                }
                nav
            }
            Err(e) => {
                tracing::debug!(error = %e, "activation ignored");
                None
            }
        }
    }

    /// Moves to the previous media. No-op at the first media or when closed.
    pub fn previous(&mut self) -> Option<NavigationState> {
        match self.state {
            LightboxState::Open { index } if index > 0 => self.open_at(index - 1),
            _ => None,
        }
    }

    /// Moves to the next media. No-op at the last media or when closed.
    pub fn next(&mut self) -> Option<NavigationState> {
        match self.state {
            LightboxState::Open { index } if index + 1 < self.media.len() => self.open_at(index + 1),
            _ => None,
        }
    }

    /// Closes the lightbox. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            tracing::debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
        self.focus.reset();
        was_open
    }

    /// The focused control, if open.
    #[must_use]
    pub fn focused_control(&self) -> Option<LightboxControl> {
        if self.is_open() {
            self.focus.focused()
        } else {
            None
        }
    }

    /// Cycles focus forward among the enabled controls (Tab).
    pub fn focus_next(&mut self) -> Option<LightboxControl> {
        if self.is_open() {
            self.focus.focus_next()
        } else {
            None
        }
    }

    /// Cycles focus backward among the enabled controls (Shift+Tab).
    pub fn focus_previous(&mut self) -> Option<LightboxControl> {
        if self.is_open() {
            self.focus.focus_previous()
        } else {
            None
        }
    }

    /// The focusable controls in tab order.
    #[must_use]
    pub fn controls(&self) -> &[LightboxControl] {
        self.focus.elements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn three() -> Vec<Media> {
        let d = NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date");
        vec![
            Media::image(MediaId(10), 1, "x", 1, d),
            Media::image(MediaId(20), 1, "y", 1, d),
            Media::image(MediaId(30), 1, "z", 1, d),
        ]
    }

    fn opened_at(id: u64) -> LightboxController {
        let mut lightbox = LightboxController::new(2000);
        lightbox.set_media(three());
        lightbox.record_interaction(Interaction::genuine(0));
        assert!(lightbox.activate(MediaId(id), 10).is_some());
        lightbox
    }

    #[test]
    fn previous_clamps_at_first() {
        let mut lightbox = opened_at(10);

        assert_eq!(lightbox.previous(), None);
        assert_eq!(lightbox.state(), LightboxState::Open { index: 0 });

        let nav = lightbox.next().expect("moves forward");
        assert_eq!(nav.index, 1);
        assert!(nav.previous_enabled && nav.next_enabled);
    }

    #[test]
    fn next_clamps_at_last() {
        let mut lightbox = opened_at(30);

        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.state(), LightboxState::Open { index: 2 });
        assert_eq!(
            lightbox.navigation(),
            Some(NavigationState { index: 2, previous_enabled: true, next_enabled: false })
        );
    }

    #[test]
    fn unknown_id_keeps_state() {
        let mut lightbox = LightboxController::new(2000);
        lightbox.set_media(three());
        lightbox.record_interaction(Interaction::genuine(0));

        assert_eq!(lightbox.activate(MediaId(99), 1), None);
        assert_eq!(lightbox.state(), LightboxState::Closed);

        let mut lightbox = opened_at(20);
        assert_eq!(lightbox.activate(MediaId(99), 11), None);
        assert_eq!(lightbox.state(), LightboxState::Open { index: 1 });
    }

    #[test]
    fn stale_gesture_keeps_closed() {
        let mut lightbox = LightboxController::new(2000);
        lightbox.set_media(three());
        lightbox.record_interaction(Interaction::genuine(1_000));

        assert_eq!(lightbox.activate(MediaId(10), 3_500), None);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn synthetic_gesture_keeps_closed() {
        let mut lightbox = LightboxController::new(2000);
        lightbox.set_media(three());
        lightbox.record_interaction(Interaction::synthetic(1_000));

        assert_eq!(lightbox.activate(MediaId(10), 1_001), None);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn close_returns_to_closed() {
        let mut lightbox = opened_at(20);

        assert!(lightbox.close());
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(lightbox.current().is_none());
        assert!(!lightbox.close());
    }

    #[test]
    fn navigation_when_closed_does_nothing() {
        let mut lightbox = LightboxController::new(2000);
        lightbox.set_media(three());

        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.previous(), None);
        assert_eq!(lightbox.focus_next(), None);
    }

    #[test]
    fn focus_skips_disabled_controls() {
        let mut lightbox = opened_at(10);
        assert_eq!(lightbox.controls(), &[LightboxControl::Next, LightboxControl::Close]);

        assert_eq!(lightbox.focused_control(), Some(LightboxControl::Next));
        assert_eq!(lightbox.focus_next(), Some(LightboxControl::Close));
        assert_eq!(lightbox.focus_next(), Some(LightboxControl::Next));
        assert_eq!(lightbox.focus_previous(), Some(LightboxControl::Close));

        lightbox.next();
        assert_eq!(
            lightbox.controls(),
            &[LightboxControl::Previous, LightboxControl::Next, LightboxControl::Close]
        );
        assert_eq!(lightbox.focused_control(), Some(LightboxControl::Close));
    }

    #[test]
    fn reopening_focuses_first_control() {
        let mut lightbox = opened_at(20);
        assert_eq!(lightbox.focused_control(), Some(LightboxControl::Previous));
        lightbox.focus_next();
        assert_eq!(lightbox.focus_next(), Some(LightboxControl::Close));

        assert!(lightbox.close());
        lightbox.record_interaction(Interaction::genuine(20));
        assert!(lightbox.activate(MediaId(20), 30).is_some());

        assert_eq!(lightbox.focused_control(), Some(LightboxControl::Previous));
    }

    #[test]
    fn set_media_does_not_remap_index() {
        let mut lightbox = opened_at(30);
        let mut reversed = three();
        reversed.reverse();

        lightbox.set_media(reversed);

        assert_eq!(lightbox.state(), LightboxState::Open { index: 2 });
        assert_eq!(lightbox.current().map(|m| m.id), Some(MediaId(10)));
    }
}
