//! Presenter capability and action dispatch.
//!
//! The runtime registers one [`Presenter`] and forwards every [`Action`] the
//! event handler returns to it, in order. [`TerminalPresenter`] is the
//! implementation used by the binary: it keeps the status line shown under
//! the rendered frame.

use crate::app::{Action, ContactMessage, NavigationState};

/// Receiver of the state changes the rendering layer reacts to.
pub trait Presenter {
    /// The aggregate like count of the photographer page changed.
    fn total_likes_changed(&mut self, total: u64);

    /// The lightbox opened or moved.
    fn navigation_changed(&mut self, navigation: NavigationState);

    /// A contact message passed validation.
    fn contact_submitted(&mut self, message: &ContactMessage);

    /// A short message for the user.
    fn notice(&mut self, message: &str);
}

/// Forwards `actions` to `presenter`.
///
/// # Returns
///
/// `true` if one of the actions asks the runtime to quit.
pub fn dispatch_actions(actions: &[Action], presenter: &mut dyn Presenter) -> bool {
    let mut quit = false;
    for action in actions {
        match action {
            Action::Quit => quit = true,
            Action::TotalLikesChanged(total) => presenter.total_likes_changed(*total),
            Action::NavigationChanged(navigation) => presenter.navigation_changed(*navigation),
            Action::ContactSubmitted(message) => presenter.contact_submitted(message),
            Action::Notice(message) => presenter.notice(message),
        }
    }
    quit
}

/// Presenter backing the terminal runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalPresenter {
    total_likes: Option<u64>,
    status: Option<String>,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last total reported for the current page.
    #[must_use]
    pub const fn total_likes(&self) -> Option<u64> {
        self.total_likes
    }

    /// Whether a status line is waiting to be shown.
    #[must_use]
    pub const fn has_status(&self) -> bool {
        self.status.is_some()
    }

    /// Takes the pending status line, leaving none.
    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }
}

impl Presenter for TerminalPresenter {
    fn total_likes_changed(&mut self, total: u64) {
        tracing::debug!(total, "total likes changed");
        self.total_likes = Some(total);
    }

    fn navigation_changed(&mut self, navigation: NavigationState) {
        tracing::debug!(
            index = navigation.index,
            previous = navigation.previous_enabled,
            next = navigation.next_enabled,
            "lightbox navigation changed"
        );
    }

    fn contact_submitted(&mut self, message: &ContactMessage) {
        self.status = Some(format!("Message sent to {}", message.photographer));
    }

    fn notice(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }
}
