//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! are the only way state changes reach the outside world: the runtime forwards
//! them to the registered [`Presenter`](crate::ui::Presenter) in order.
//!
//! # Example
//!
//! ```rust
//! use fisheye::app::Action;
//!
//! let actions = vec![Action::TotalLikesChanged(297), Action::Quit];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::app::contact::ContactMessage;
use crate::app::lightbox::NavigationState;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Stops the event loop.
    Quit,

    /// The aggregate like count of the photographer page changed.
    ///
    /// Emitted when a page is entered, when a media is liked and after a reset.
    TotalLikesChanged(u64),

    /// The lightbox moved to a new position or was opened.
    NavigationChanged(NavigationState),

    /// The contact form was submitted successfully.
    ContactSubmitted(ContactMessage),

    /// A short message for the user (refused command, unknown photographer, ...).
    Notice(String),
}
