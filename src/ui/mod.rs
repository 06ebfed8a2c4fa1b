//! User interface rendering layer.
//!
//! Follows a declarative model: application state is transformed into an
//! immutable view model, which component renderers turn into ANSI output.
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable state snapshots
//! - [`renderer`]: top-level dispatch per screen
//! - [`components`]: per-section renderers
//! - [`helpers`]: cursor positioning, highlighting, word wrap
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, BrowseView, DetailView, EmptyState, FooterInfo, FormView, HeaderInfo, ItemRow,
    SearchBarInfo, UiViewModel,
};
