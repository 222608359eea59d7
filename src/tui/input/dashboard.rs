use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::store::BonusScope;
use crate::ops::timeline::EntryKind;
use crate::tui::app::{App, Pane, StatusMenu, StatusTarget, View};

pub(super) fn handle_dashboard(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('i') => app.view = View::Intake,
        KeyCode::Char('r') => app.roadmap_menu = Some(0),
        KeyCode::Char('c') => app.confirm_clear = true,
        KeyCode::Tab => {
            app.pane = match app.pane {
                Pane::Programs => Pane::Bonus,
                Pane::Bonus => Pane::Timeline,
                Pane::Timeline => Pane::Programs,
            };
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        // The timeline strip runs left to right
        KeyCode::Char('l') | KeyCode::Right if app.pane == Pane::Timeline => move_cursor(app, 1),
        KeyCode::Char('h') | KeyCode::Left if app.pane == Pane::Timeline => move_cursor(app, -1),
        KeyCode::Enter => activate(app),
        KeyCode::Char(' ') => cycle_under_cursor(app),
        KeyCode::Char('s') => open_status_menu(app),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i64) {
    let (cursor, len) = match app.pane {
        Pane::Programs => (&mut app.program_cursor, app.store.displayed_programs().len()),
        Pane::Bonus => (&mut app.bonus_cursor, app.store.global_bonus().len()),
        Pane::Timeline => {
            let len = app.timeline_entries().len();
            (&mut app.timeline_cursor, len)
        }
    };
    if len == 0 {
        return;
    }
    let next = (*cursor as i64 + delta).clamp(0, len as i64 - 1);
    *cursor = next as usize;
}

/// Enter: focus the program under the cursor. On the timeline the entry's
/// owning program is the target; on the bonus pane Enter cycles like Space.
fn activate(app: &mut App) {
    match app.pane {
        Pane::Programs => {
            let Some(id) = app
                .store
                .displayed_programs()
                .get(app.program_cursor)
                .map(|p| p.id.clone())
            else {
                return;
            };
            app.store.focus(&id);
            app.focused_cursor = 0;
            app.view = View::Focused;
        }
        Pane::Timeline => {
            let entries = app.timeline_entries();
            let Some(entry) = entries.get(app.timeline_cursor) else {
                return;
            };
            let id = entry.program_id.clone();
            app.store.focus(&id);
            app.focused_cursor = 0;
            app.view = View::Focused;
        }
        Pane::Bonus => cycle_under_cursor(app),
    }
}

fn cycle_under_cursor(app: &mut App) {
    let result = match app.pane {
        Pane::Bonus => {
            let Some(id) = app
                .store
                .global_bonus()
                .get(app.bonus_cursor)
                .map(|t| t.id.clone())
            else {
                return;
            };
            app.store.cycle_bonus_status(BonusScope::Global, &id)
        }
        Pane::Timeline => {
            let entries = app.timeline_entries();
            let Some(entry) = entries.get(app.timeline_cursor) else {
                return;
            };
            let program_id = entry.program_id.clone();
            let task_id = entry.task_id.clone();
            match entry.kind {
                EntryKind::Step => app.store.cycle_step_status(&program_id, &task_id),
                EntryKind::Bonus => app
                    .store
                    .cycle_bonus_status(BonusScope::Program(&program_id), &task_id),
            }
        }
        Pane::Programs => return,
    };
    if let Err(err) = result {
        app.notice = Some(format!("save failed: {err}"));
    }
    app.clamp_cursors();
}

fn open_status_menu(app: &mut App) {
    let target = match app.pane {
        Pane::Bonus => app
            .store
            .global_bonus()
            .get(app.bonus_cursor)
            .map(|t| StatusTarget::Bonus {
                program_id: None,
                task_id: t.id.clone(),
            }),
        Pane::Timeline => app.timeline_entries().get(app.timeline_cursor).map(|e| {
            match e.kind {
                EntryKind::Step => StatusTarget::Step {
                    program_id: e.program_id.clone(),
                    step_id: e.task_id.clone(),
                },
                EntryKind::Bonus => StatusTarget::Bonus {
                    program_id: Some(e.program_id.clone()),
                    task_id: e.task_id.clone(),
                },
            }
        }),
        Pane::Programs => None,
    };
    if let Some(target) = target {
        app.status_menu = Some(StatusMenu { target, cursor: 0 });
    }
}
