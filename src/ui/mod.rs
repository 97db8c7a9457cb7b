//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled frames through composable
//! rendering components, and defines the [`Presenter`] capability the runtime
//! forwards actions to.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`presenter`]: Presenter trait and action dispatch
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod presenter;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use presenter::{dispatch_actions, Presenter, TerminalPresenter};
pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BadgeInfo, Body, ContactView, ControlView, EmptyState, FieldView, FooterInfo, HeaderInfo, LightboxView, MediaItem,
    Overlay, PhotographerItem, SearchBarInfo, UIViewModel,
};
