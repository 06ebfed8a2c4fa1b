//! Zitemizer: a Zellij plugin for browsing an in-memory item catalog.
//!
//! Zitemizer renders a small catalog of items in a floating pane and lets
//! the user:
//! - search the collection (case-insensitive, over names and descriptions)
//!   and filter it by category
//! - inspect an item in a detail view and page through its images
//! - compose an enquiry mail about the selected item
//! - add new items through a validated form with inline field errors
//!
//! The catalog lives entirely in memory for the duration of the session:
//! there is no persistence, no network, and no background work. Every
//! operation runs synchronously to completion inside the plugin's event
//! loop; the single deferred mechanism is the one-shot timer that returns
//! the user to the browse screen two seconds after a successful submission.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← key mapping, timer,
//! └─────────────────────────────────────────────────────┘    action execution
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← events, state,
//! │  - Event handling and routing                       │    view models
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                 │                 │
//! ┌───────────────┐ ┌───────────────┐ ┌───────────────┐
//! │ Catalog       │ │ Form          │ │ Media         │
//! │ (catalog/)    │ │ (form/)       │ │ (media/)      │
//! │ - Item store  │ │ - Composition │ │ - Image       │
//! │ - Query engine│ │ - Validation  │ │   handles     │
//! │ - Seed data   │ │ - Error map   │ │               │
//! └───────────────┘ └───────────────┘ └───────────────┘
//!         │                 │                 │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, UI, Infrastructure, Observability          │
//! │  - Item model and errors (domain/)                  │
//! │  - Rendering and themes (ui/)                       │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - File logging (observability/)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zitemizer.wasm" {
//!         theme "catppuccin-mocha"
//!         enquiry_address "store@itemstore.com"
//!         seed "true"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use zitemizer::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! // Drive the state machine the way the plugin shim would.
//! let (should_render, actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zitemizer::ZitemizerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod form;
pub mod infrastructure;
pub mod media;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FormField, InputMode, Screen, SearchFocus};
pub use catalog::{Catalog, Command, ItemQuery, TypeFilter};
pub use domain::{Item, ItemId, ItemType, Result, ZitemizerError};
pub use form::{Field, FormSession};
pub use media::{MediaStore, MediaUri};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default recipient for enquiry mails.
const DEFAULT_ENQUIRY_ADDRESS: &str = "store@itemstore.com";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over
    /// `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level for file logging (`trace` through `error`).
    /// Default: `"info"`.
    pub trace_level: Option<String>,

    /// Recipient address for enquiry mails composed from the detail view.
    pub enquiry_address: String,

    /// Whether to start with the built-in seed catalog. Default: `true`;
    /// set to `"false"` to start with an empty collection.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            enquiry_address: DEFAULT_ENQUIRY_ADDRESS.to_string(),
            seed: true,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; malformed values fall back to defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zitemizer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("seed".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert!(!config.seed);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let seed = config
            .get("seed")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(true);

        let enquiry_address = config
            .get("enquiry_address")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENQUIRY_ADDRESS.to_string());

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            enquiry_address,
            seed,
        }
    }
}

/// Initializes application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// loads the seed catalog unless seeding is disabled. Failures fall back
/// (a bad theme becomes the default theme, a bad seed becomes an empty
/// catalog) so the plugin always comes up.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zitemizer plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let items = if config.seed {
        catalog::seed::seed_items().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "failed to load seed catalog, starting empty");
            vec![]
        })
    } else {
        vec![]
    };

    AppState::new(items, theme, config.enquiry_address.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_to_missing_and_malformed_values() {
        let mut map = BTreeMap::new();
        map.insert("seed".to_string(), "not-a-bool".to_string());
        map.insert("enquiry_address".to_string(), "  ".to_string());

        let config = Config::from_zellij(&map);
        assert!(config.seed);
        assert_eq!(config.enquiry_address, DEFAULT_ENQUIRY_ADDRESS);
    }

    #[test]
    fn initialize_seeds_the_catalog_by_default() {
        let state = initialize(&Config::default());
        assert_eq!(state.catalog.len(), 4);
        assert_eq!(state.visible.len(), 4);
    }

    #[test]
    fn initialize_can_start_empty() {
        let config = Config {
            seed: false,
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(state.catalog.is_empty());
    }
}
