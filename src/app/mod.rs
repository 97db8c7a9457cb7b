//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime (main.rs) and the domain/storage
//! layers. It implements the event-driven core of the gallery: the like
//! bookkeeping of a photographer page, the lightbox state machine and the
//! contact modal.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Input line → Events → Event Handler → State Mutations → Actions → Presenter
//!                                             ↓
//!                                    compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`contact`]: Contact modal form, validation and focus trap
//! - [`focus`]: Cyclic focus ring shared by both modals
//! - [`gallery`]: Media of a photographer page, sort order and displayed likes
//! - [`gesture`]: Interaction provenance and the recency guard
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`input`]: Terminal input lines to events
//! - [`lightbox`]: Lightbox viewer state machine
//! - [`modes`]: Page, modal and input mode types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use fisheye::app::{handle_event, AppState, Event};
//! use fisheye::domain::Catalog;
//! use fisheye::storage::{LikeStateStore, MemoryStore};
//! use fisheye::ui::Theme;
//!
//! let likes = LikeStateStore::new(Box::new(MemoryStore::default()));
//! let mut state = AppState::new(Catalog::default(), likes, Theme::default(), 2000);
//! let (_render, actions) = handle_event(&mut state, &Event::Quit)?;
//! assert_eq!(actions, vec![fisheye::app::Action::Quit]);
//! # Ok::<(), fisheye::FisheyeError>(())
//! ```

pub mod actions;
pub mod contact;
pub mod focus;
pub mod gallery;
pub mod gesture;
pub mod handler;
pub mod input;
pub mod lightbox;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use contact::{ContactField, ContactForm, ContactMessage};
pub use gallery::{GalleryViewState, LikeOutcome};
pub use gesture::{GestureGuard, Interaction, Provenance};
pub use handler::{handle_event, Event, Key, Target};
pub use lightbox::{LightboxController, LightboxState, NavigationState};
pub use modes::{InputMode, Modal, Page, SearchFocus};
pub use state::AppState;
