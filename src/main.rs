//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Zitemizer library and the Zellij
//! plugin system: it maps Zellij events onto library events, delegates to
//! [`handle_event`], and executes the resulting actions against the Zellij
//! API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: register for `Key`, `Timer`, `RunCommandResult`,
//!    `PermissionRequestResult` events
//! 3. **Update**: translate events, delegate to the library layer
//! 4. **Render**: call the library render function
//!
//! # Event Mapping
//!
//! Key events are mapped contextually: the active screen (browse with or
//! without a detail selection, or the add-item form) decides what each key
//! means. The single `Timer` subscription carries the post-submission
//! redirect.
//!
//! # Keybindings
//!
//! Browse:
//! - `j`/`k`/`Down`/`Up`, `Ctrl+n`/`Ctrl+p`: move the cursor
//! - `Enter`: open the detail view
//! - `/`: search; `Esc`: exit search / clear
//! - `Tab`/`Shift+Tab`: cycle the type filter
//! - `a`: add an item, `q`: quit
//!
//! Detail view:
//! - `h`/`l` or arrow keys: page images
//! - `e`: compose an enquiry mail
//! - `Esc`/`q`: close
//!
//! Add-item form:
//! - `Tab`/`Shift+Tab` or `Down`/`Up`: move between fields
//! - `Enter`: confirm the focused field (advance, cycle type, stage path)
//! - `Left`/`Right`: cycle the type selector
//! - `Ctrl+s`: submit, `Esc`: cancel

#![allow(clippy::multiple_crate_versions)]

// The Zellij host functions only exist under the wasm runtime; a native
// build gets a stub entry point so the workspace still builds and tests on
// the host.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("zitemizer is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`");
}

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use zitemizer::{handle_event, Action, Config, Event, InputMode, Screen};

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
#[cfg(target_family = "wasm")]
struct State {
    app: zitemizer::app::AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: zitemizer::initialize(&Config::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Initializes the plugin on load: configuration, tracing, state,
    /// permissions, and event subscriptions.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zitemizer::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(seed = config.seed, "plugin loading started");
        self.app = zitemizer::initialize(&config);
        tracing::debug!(item_count = self.app.catalog.len(), "app state initialized");

        // RunCommands backs the enquiry composer (xdg-open on a mailto URI).
        request_permission(&[PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` when the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::RedirectElapsed,
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    let error = String::from_utf8(stderr).unwrap_or_default();
                    tracing::debug!(exit_code = ?exit_code, error = %error, "enquiry command failed");
                }
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Self::handle_permission_result(status);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI via the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zitemizer::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn handle_permission_result(status: PermissionStatus) {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - enquiry composition unavailable");
            }
        }
    }

    /// Maps keyboard events to library events based on the active screen.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.screen {
            Screen::AddItem => Self::map_form_key(key),
            Screen::Browse => {
                if self.app.catalog.selected().is_some() {
                    Self::map_detail_key(key)
                } else {
                    self.map_browse_key(key)
                }
            }
        }
    }

    /// Key mapping for the browse list (no detail selection).
    fn map_browse_key(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorUp);
        }

        let searching = matches!(self.app.input_mode, InputMode::Search(_));

        Some(match key.bare_key {
            BareKey::Down => Event::CursorDown,
            BareKey::Up => Event::CursorUp,
            BareKey::Char('j') if !searching => Event::CursorDown,
            BareKey::Char('k') if !searching => Event::CursorUp,
            BareKey::Esc => {
                if searching {
                    Event::ExitSearch
                } else {
                    Event::Escape
                }
            }
            BareKey::Char('q') if !searching => Event::CloseFocus,
            BareKey::Char('a') if !searching => Event::OpenAddForm,
            BareKey::Enter => Event::OpenDetail,
            BareKey::Char('/') => {
                if searching {
                    Event::FocusSearchBar
                } else {
                    Event::SearchMode
                }
            }
            BareKey::Tab if searching => Event::FocusResults,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::CycleFilterBackward,
            BareKey::Tab => Event::CycleFilterForward,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Key mapping while the detail view is open.
    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc | BareKey::Char('q') => Event::CloseDetail,
            BareKey::Left | BareKey::Char('h') => Event::PrevImage,
            BareKey::Right | BareKey::Char('l') => Event::NextImage,
            BareKey::Char('e') => Event::Enquire,
            _ => return None,
        })
    }

    /// Key mapping for the add-item form.
    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('s') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::FormSubmit);
        }

        Some(match key.bare_key {
            BareKey::Esc => Event::CloseAddForm,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FormPrevField,
            BareKey::Tab => Event::FormNextField,
            BareKey::Down => Event::FormNextField,
            BareKey::Up => Event::FormPrevField,
            BareKey::Left => Event::FormCycleTypeBackward,
            BareKey::Right => Event::FormCycleTypeForward,
            BareKey::Enter => Event::FormConfirm,
            BareKey::Backspace => Event::FormBackspace,
            BareKey::Char(c) => Event::FormChar(c),
            _ => return None,
        })
    }

    /// Executes an action returned from event handling, translating it to
    /// Zellij API calls.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::StartRedirectTimer { seconds } => {
                tracing::debug!(seconds = *seconds, "arming redirect timer");
                set_timeout(*seconds);
            }
            Action::OpenEnquiry { mailto } => {
                tracing::debug!("launching enquiry composer");
                run_command(&["xdg-open", mailto.as_str()], BTreeMap::new());
            }
        }
    }
}
