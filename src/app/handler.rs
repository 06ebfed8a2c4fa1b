//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! timer events, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin shim (key presses, the redirect timer)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its components
//! 4. Actions are collected and returned for execution
//!
//! Every transition completes synchronously before the next event is
//! processed; there is no queueing or suspension.

use super::modes::{FormField, InputMode, Screen, SearchFocus};
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::infrastructure::paths;
use std::path::PathBuf;

/// Delay before a successful submission redirects back to the browse
/// screen, in seconds.
const REDIRECT_DELAY_SECONDS: f64 = 2.0;

/// Events triggered by user input or the redirect timer.
///
/// Each event represents one discrete occurrence. The handler processes them
/// sequentially, so state transitions are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down one row (wraps to top).
    CursorDown,
    /// Moves the list cursor up one row (wraps to bottom).
    CursorUp,
    /// Opens the detail view for the item under the cursor.
    OpenDetail,
    /// Closes the detail view (clears the selection).
    CloseDetail,
    /// Pages the detail view to the next image (wraps to the first).
    NextImage,
    /// Pages the detail view to the previous image (wraps to the last).
    PrevImage,
    /// Composes an enquiry mail about the selected item.
    Enquire,

    /// Enters search mode with typing focus, clearing the query.
    SearchMode,
    /// Refocuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Moves focus from the search input to the result list.
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character of the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Advances the type filter (All, then each category, wrapping).
    CycleFilterForward,
    /// Steps the type filter backwards.
    CycleFilterBackward,

    /// Opens the add-item screen.
    OpenAddForm,
    /// Abandons the add-item composition and returns to browsing.
    CloseAddForm,
    /// Moves form focus to the next field.
    FormNextField,
    /// Moves form focus to the previous field.
    FormPrevField,
    /// Types a character into the focused form field.
    FormChar(char),
    /// Backspaces in the focused form field. On an image field with an
    /// empty path buffer this removes the most recently staged image.
    FormBackspace,
    /// Advances the type selector (type field focused).
    FormCycleTypeForward,
    /// Steps the type selector backwards (type field focused).
    FormCycleTypeBackward,
    /// Confirms the focused field: advances from text fields, cycles the
    /// type selector, or stages the typed image path.
    FormConfirm,
    /// Validates and submits the composition.
    FormSubmit,

    /// The post-submission redirect timer fired.
    RedirectElapsed,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: whether the UI needs a redraw, and
/// the side effects the plugin shim must execute in order.
///
/// # Errors
///
/// The handler itself has no failure paths today; the `Result` signature
/// keeps state-mutation errors propagatable without changing every caller.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::OpenDetail => {
            let Some(id) = state.cursor_item().map(|item| item.id.clone()) else {
                tracing::debug!("no item under cursor");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.input_mode = InputMode::Normal;
                    state.query.search.clear();
                    state.apply_query();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            tracing::debug!(item_id = %id, "opening detail view");
            state.catalog.set_selected(Some(id));
            state.image_page = 0;
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            state.catalog.set_selected(None);
            Ok((true, vec![]))
        }
        Event::NextImage => {
            let Some(count) = state.catalog.selected().map(|item| item.images().len()) else {
                return Ok((false, vec![]));
            };
            if count == 0 {
                return Ok((false, vec![]));
            }
            state.image_page = (state.image_page.min(count - 1) + 1) % count;
            Ok((true, vec![]))
        }
        Event::PrevImage => {
            let Some(count) = state.catalog.selected().map(|item| item.images().len()) else {
                return Ok((false, vec![]));
            };
            if count == 0 {
                return Ok((false, vec![]));
            }
            let page = state.image_page.min(count - 1);
            state.image_page = if page == 0 { count - 1 } else { page - 1 };
            Ok((true, vec![]))
        }
        Event::Enquire => {
            let Some(item) = state.catalog.selected() else {
                return Ok((false, vec![]));
            };

            let subject = format!("Enquiry about {}", item.name);
            let body = format!(
                "Hi,\n\nI'm interested in the following item:\n\nItem: {}\nType: {}\nDescription: {}\n\nPlease provide more information.\n\nThank you!",
                item.name,
                item.item_type.label(),
                item.description,
            );
            let mailto = format!(
                "mailto:{}?subject={}&body={}",
                state.enquiry_address,
                percent_encode(&subject),
                percent_encode(&body),
            );

            tracing::debug!(item_name = %item.name, "composing enquiry");
            Ok((false, vec![Action::OpenEnquiry { mailto }]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.query.search.clear();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.query.search.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_query();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query.search, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.query.search.clear();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.query.search.push(*c);
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.query.search.pop();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Escape => {
            state.input_mode = InputMode::Normal;
            state.query.search.clear();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::CycleFilterForward => {
            state.query.type_filter = state.query.type_filter.next();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::CycleFilterBackward => {
            state.query.type_filter = state.query.type_filter.previous();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::OpenAddForm => {
            tracing::debug!("opening add-item form");
            state.screen = Screen::AddItem;
            state.form_focus = FormField::Name;
            Ok((true, vec![]))
        }
        Event::CloseAddForm => {
            for uri in state.form.reset() {
                state.media.release(&uri);
            }
            state.path_input.clear();
            state.submit_notice = false;
            state.screen = Screen::Browse;
            state.form_focus = FormField::Name;
            Ok((true, vec![]))
        }
        Event::FormNextField => {
            state.form_focus = state.form_focus.next();
            Ok((true, vec![]))
        }
        Event::FormPrevField => {
            state.form_focus = state.form_focus.previous();
            Ok((true, vec![]))
        }
        Event::FormChar(c) => {
            match state.form_focus {
                FormField::Name => state.form.push_name_char(*c),
                FormField::Description => state.form.push_description_char(*c),
                FormField::CoverImage | FormField::AdditionalImages => state.path_input.push(*c),
                FormField::Type => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::FormBackspace => {
            match state.form_focus {
                FormField::Name => state.form.backspace_name(),
                FormField::Description => state.form.backspace_description(),
                FormField::Type => return Ok((false, vec![])),
                FormField::CoverImage => {
                    if state.path_input.is_empty() {
                        if let Some(old) = state.form.clear_cover() {
                            state.media.release(&old);
                        }
                    } else {
                        state.path_input.pop();
                    }
                }
                FormField::AdditionalImages => {
                    if state.path_input.is_empty() {
                        if let Some(old) = state.form.pop_additional() {
                            state.media.release(&old);
                        }
                    } else {
                        state.path_input.pop();
                    }
                }
            }
            Ok((true, vec![]))
        }
        Event::FormCycleTypeForward => {
            if state.form_focus != FormField::Type {
                return Ok((false, vec![]));
            }
            state.form.cycle_type_forward();
            Ok((true, vec![]))
        }
        Event::FormCycleTypeBackward => {
            if state.form_focus != FormField::Type {
                return Ok((false, vec![]));
            }
            state.form.cycle_type_backward();
            Ok((true, vec![]))
        }
        Event::FormConfirm => match state.form_focus {
            FormField::Name | FormField::Description => {
                state.form_focus = state.form_focus.next();
                Ok((true, vec![]))
            }
            FormField::Type => {
                state.form.cycle_type_forward();
                Ok((true, vec![]))
            }
            FormField::CoverImage | FormField::AdditionalImages => {
                let path = state.path_input.trim().to_string();
                if path.is_empty() {
                    return Ok((false, vec![]));
                }

                let uri = state.media.acquire(PathBuf::from(paths::expand_tilde(&path)));
                if state.form_focus == FormField::CoverImage {
                    if let Some(old) = state.form.stage_cover(uri) {
                        state.media.release(&old);
                    }
                } else {
                    state.form.push_additional(uri);
                }
                state.path_input.clear();
                Ok((true, vec![]))
            }
        },
        Event::FormSubmit => {
            if state.submit_notice {
                tracing::debug!("submission ignored while success notice is showing");
                return Ok((false, vec![]));
            }

            if !state.form.validate() {
                tracing::debug!(errors = state.form.errors().len(), "submission blocked");
                return Ok((true, vec![]));
            }

            let id = state.id_mint.mint();
            let Some(item) = state.form.build_item(id) else {
                return Ok((true, vec![]));
            };

            tracing::debug!(item_id = %item.id, item_name = %item.name, "item submitted");
            state.catalog.add_item(item);
            state.apply_query();
            state.path_input.clear();
            state.submit_notice = true;

            Ok((
                true,
                vec![Action::StartRedirectTimer {
                    seconds: REDIRECT_DELAY_SECONDS,
                }],
            ))
        }
        Event::RedirectElapsed => {
            if !state.submit_notice {
                return Ok((false, vec![]));
            }
            tracing::debug!("redirecting to browse screen");
            state.submit_notice = false;
            state.screen = Screen::Browse;
            state.form_focus = FormField::Name;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Percent-encodes a string for use in a `mailto:` query component.
///
/// Unreserved characters (RFC 3986) pass through; everything else is
/// encoded per UTF-8 byte.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::ui::theme::Theme;

    fn seeded_state() -> AppState {
        AppState::new(
            seed::seed_items().unwrap(),
            Theme::default(),
            "store@itemstore.com".to_string(),
        )
    }

    fn fill_valid_form(state: &mut AppState) {
        handle_event(state, &Event::OpenAddForm).unwrap();
        for c in "Wool Scarf".chars() {
            handle_event(state, &Event::FormChar(c)).unwrap();
        }
        state.form_focus = FormField::Description;
        for c in "Hand-knit merino scarf.".chars() {
            handle_event(state, &Event::FormChar(c)).unwrap();
        }
        state.form_focus = FormField::CoverImage;
        for c in "~/photos/scarf.jpg".chars() {
            handle_event(state, &Event::FormChar(c)).unwrap();
        }
        handle_event(state, &Event::FormConfirm).unwrap();
    }

    #[test]
    fn enter_opens_detail_and_escape_closes_it() {
        let mut state = seeded_state();

        let (render, _) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        assert!(render);
        assert!(state.catalog.selected().is_some());

        handle_event(&mut state, &Event::CloseDetail).unwrap();
        assert!(state.catalog.selected().is_none());
    }

    #[test]
    fn image_pager_wraps_in_both_directions() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::OpenDetail).unwrap();
        // Seed items carry a cover plus two additional images.
        assert_eq!(state.catalog.selected().unwrap().images().len(), 3);

        handle_event(&mut state, &Event::PrevImage).unwrap();
        assert_eq!(state.image_page, 2);

        handle_event(&mut state, &Event::NextImage).unwrap();
        assert_eq!(state.image_page, 0);

        for _ in 0..3 {
            handle_event(&mut state, &Event::NextImage).unwrap();
        }
        assert_eq!(state.image_page, 0);
    }

    #[test]
    fn typing_in_search_mode_narrows_the_list() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "jeans".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }

        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.cursor_item().unwrap().name, "Slim Fit Jeans");

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.visible.len(), 4);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn characters_outside_search_mode_are_ignored() {
        let mut state = seeded_state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.query.search.is_empty());
    }

    #[test]
    fn submit_prepends_the_item_and_arms_the_redirect_timer() {
        let mut state = seeded_state();
        fill_valid_form(&mut state);

        let (render, actions) = handle_event(&mut state, &Event::FormSubmit).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::StartRedirectTimer { seconds: 2.0 }]);

        assert_eq!(state.catalog.len(), 5);
        assert_eq!(state.catalog.items()[0].name, "Wool Scarf");
        assert!(state.submit_notice);

        // A second submit while the notice shows is ignored.
        let (render, actions) = handle_event(&mut state, &Event::FormSubmit).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::RedirectElapsed).unwrap();
        assert!(!state.submit_notice);
        assert_eq!(state.screen, Screen::Browse);
    }

    #[test]
    fn invalid_submit_surfaces_errors_and_stays_put() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::OpenAddForm).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::FormSubmit).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.form.errors().len(), 3);
        assert_eq!(state.screen, Screen::AddItem);
        assert_eq!(state.catalog.len(), 4);
    }

    #[test]
    fn cancelling_the_form_releases_staged_handles() {
        let mut state = seeded_state();
        fill_valid_form(&mut state);
        assert_eq!(state.media.len(), 1);

        handle_event(&mut state, &Event::CloseAddForm).unwrap();
        assert!(state.media.is_empty());
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.form.name().is_empty());
    }

    #[test]
    fn backspace_on_empty_path_buffer_removes_the_staged_cover() {
        let mut state = seeded_state();
        fill_valid_form(&mut state);
        assert!(state.form.cover_image().is_some());
        assert!(state.path_input.is_empty());

        handle_event(&mut state, &Event::FormBackspace).unwrap();
        assert!(state.form.cover_image().is_none());
        assert!(state.media.is_empty());
    }

    #[test]
    fn enquiry_builds_an_encoded_mailto() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::OpenDetail).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Enquire).unwrap();
        let Some(Action::OpenEnquiry { mailto }) = actions.first() else {
            panic!("expected an enquiry action");
        };
        assert!(mailto.starts_with("mailto:store@itemstore.com?subject=Enquiry%20about%20"));
        assert!(!mailto.contains(' '));
    }

    #[test]
    fn type_filter_cycles_from_the_keyboard() {
        let mut state = seeded_state();
        handle_event(&mut state, &Event::CycleFilterForward).unwrap();
        assert_eq!(state.visible.len(), 1); // Shirt

        handle_event(&mut state, &Event::CycleFilterBackward).unwrap();
        assert_eq!(state.visible.len(), 4); // back to All
    }
}
