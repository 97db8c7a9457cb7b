//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to component renderers, which append
//!    to a single frame
//!
//! # Example
//!
//! ```rust
//! use fisheye::app::AppState;
//! use fisheye::domain::Catalog;
//! use fisheye::storage::{LikeStateStore, MemoryStore};
//! use fisheye::ui::{render, Theme};
//!
//! let likes = LikeStateStore::new(Box::new(MemoryStore::default()));
//! let state = AppState::new(Catalog::default(), likes, Theme::default(), 2000);
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("No photographers found"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current screen of `state` as one ANSI frame.
///
/// The frame starts with a clear-screen sequence and positions every line
/// absolutely, so writing it to the terminal replaces the previous frame.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    clear_screen(&mut out);
    components::render_page(&mut out, vm, theme, rows, cols);
    out
}
