//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and dispatches to the
//! screen layout matching its body variant. Output is ANSI-styled text on
//! stdout; the Zellij runtime owns screen clearing and frame pacing.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UiViewModel};

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        BodyView::Browse(browse) => components::render_browse_screen(vm, browse, theme, cols, rows),
        BodyView::Detail(detail) => components::render_detail_screen(vm, detail, theme, cols, rows),
        BodyView::Form(form) => components::render_form_screen(vm, form, theme, cols, rows),
    }
}
