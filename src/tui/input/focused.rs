use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::store::BonusScope;
use crate::ops::timeline::EntryKind;
use crate::tui::app::{App, StatusMenu, StatusTarget, View};

pub(super) fn handle_focused(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc | KeyCode::Char('b') => {
            app.store.unfocus();
            app.view = View::Dashboard;
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char(' ') | KeyCode::Enter => cycle_row(app),
        KeyCode::Char('s') => open_status_menu(app),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i64) {
    let len = app.focused_rows().len();
    if len == 0 {
        return;
    }
    let next = (app.focused_cursor as i64 + delta).clamp(0, len as i64 - 1);
    app.focused_cursor = next as usize;
}

fn cycle_row(app: &mut App) {
    let rows = app.focused_rows();
    let Some(row) = rows.get(app.focused_cursor) else {
        return;
    };
    let program_id = row.program_id.clone();
    let task_id = row.task_id.clone();
    let result = match row.kind {
        EntryKind::Step => app.store.cycle_step_status(&program_id, &task_id),
        EntryKind::Bonus => app
            .store
            .cycle_bonus_status(BonusScope::Program(&program_id), &task_id),
    };
    if let Err(err) = result {
        app.notice = Some(format!("save failed: {err}"));
    }
}

fn open_status_menu(app: &mut App) {
    let rows = app.focused_rows();
    let Some(row) = rows.get(app.focused_cursor) else {
        return;
    };
    let target = match row.kind {
        EntryKind::Step => StatusTarget::Step {
            program_id: row.program_id.clone(),
            step_id: row.task_id.clone(),
        },
        EntryKind::Bonus => StatusTarget::Bonus {
            program_id: Some(row.program_id.clone()),
            task_id: row.task_id.clone(),
        },
    };
    app.status_menu = Some(StatusMenu { target, cursor: 0 });
}
