mod dashboard;
mod focused;
mod intake;
mod popups;
mod selection;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, View};

/// Handle a key event for the current view
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.notice = None;

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    // Popups intercept all input
    if app.confirm_clear {
        popups::handle_confirm_clear(app, key);
        return;
    }
    if app.status_menu.is_some() {
        popups::handle_status_menu(app, key);
        return;
    }
    if app.roadmap_menu.is_some() {
        popups::handle_roadmap_menu(app, key);
        return;
    }

    match app.view {
        View::Dashboard => dashboard::handle_dashboard(app, key),
        View::Focused => focused::handle_focused(app, key),
        View::Intake => intake::handle_intake(app, key),
        View::Selection => selection::handle_selection(app, key),
    }
}
