//! Top-level rendering coordinator.
//!
//! Computes the view model from [`AppState`] and hands it to the layout that
//! matches what it contains: a status message, an open picker, or the cards.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; every layout paints the full pane itself.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(status) = &vm.status {
        components::render_status_mode(vm, status, theme, cols, rows);
    } else if let Some(picker) = &vm.picker {
        components::render_picker_mode(vm, picker, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }
}
