use crossterm::event::{KeyCode, KeyEvent};

use crate::model::status::TaskStatus;
use crate::ops::store::BonusScope;
use crate::tui::app::{App, StatusTarget, View};

/// The explicit status picker opened with `s`
pub(super) fn handle_status_menu(app: &mut App, key: KeyEvent) {
    let statuses = TaskStatus::all();
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') => app.status_menu = None,
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(menu) = &mut app.status_menu {
                menu.cursor = (menu.cursor + 1).min(statuses.len() - 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(menu) = &mut app.status_menu {
                menu.cursor = menu.cursor.saturating_sub(1);
            }
        }
        KeyCode::Enter => {
            let Some(menu) = app.status_menu.take() else {
                return;
            };
            let status = statuses[menu.cursor];
            let result = match &menu.target {
                StatusTarget::Step {
                    program_id,
                    step_id,
                } => app.store.set_step_status(program_id, step_id, status),
                StatusTarget::Bonus {
                    program_id,
                    task_id,
                } => {
                    let scope = match program_id.as_deref() {
                        Some(id) => BonusScope::Program(id),
                        None => BonusScope::Global,
                    };
                    app.store.set_bonus_status(scope, task_id, status)
                }
            };
            if let Err(err) = result {
                app.notice = Some(format!("save failed: {err}"));
            }
        }
        _ => {}
    }
}

/// The roadmap picker opened with `r`. Enter toggles the highlighted
/// roadmap; picking the one already active turns the filter off.
pub(super) fn handle_roadmap_menu(app: &mut App, key: KeyEvent) {
    let len = app.store.roadmaps().len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('r') => app.roadmap_menu = None,
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(cursor) = &mut app.roadmap_menu
                && len > 0
            {
                *cursor = (*cursor + 1).min(len - 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(cursor) = &mut app.roadmap_menu {
                *cursor = cursor.saturating_sub(1);
            }
        }
        KeyCode::Enter => {
            let Some(cursor) = app.roadmap_menu.take() else {
                return;
            };
            let Some(id) = app.store.roadmaps().get(cursor).map(|r| r.id.clone()) else {
                return;
            };
            app.store.select_roadmap(&id);
            // Filtering may leave the focused view; make the view agree
            if app.store.focused_id().is_none() && app.view == View::Focused {
                app.view = View::Dashboard;
            }
            app.program_cursor = 0;
            app.timeline_cursor = 0;
            app.clamp_cursors();
        }
        _ => {}
    }
}

/// Clear-everything confirmation
pub(super) fn handle_confirm_clear(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.confirm_clear = false;
            match app.store.clear() {
                Ok(()) => {
                    app.notice = Some("cleared all data".to_string());
                    app.view = View::Intake;
                    app.program_cursor = 0;
                    app.timeline_cursor = 0;
                    app.focused_cursor = 0;
                }
                Err(err) => app.notice = Some(format!("clear failed: {err}")),
            }
            app.clamp_cursors();
        }
        KeyCode::Char('n') | KeyCode::Esc => app.confirm_clear = false,
        _ => {}
    }
}
