use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FIELD_COOP, View};

pub(super) fn handle_intake(app: &mut App, key: KeyEvent) {
    // While a recommendation call is in flight only Esc (cancel the wait)
    // is honored; the worker's late result is simply dropped.
    if app.pending.is_some() {
        if key.code == KeyCode::Esc {
            app.pending = None;
            app.notice = Some("request cancelled".to_string());
        }
        return;
    }

    if app.intake.editing {
        handle_editing(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.view = View::Dashboard,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            let len = app.intake.fields.len();
            app.intake.cursor = (app.intake.cursor + 1).min(len - 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.intake.cursor = app.intake.cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') if app.intake.cursor == FIELD_COOP => app.intake.toggle_coop(),
        KeyCode::Enter => {
            if app.intake.cursor == FIELD_COOP {
                app.intake.toggle_coop();
            } else {
                app.intake.editing = true;
            }
        }
        KeyCode::Char('S') => app.submit_intake(),
        _ => {}
    }
}

fn handle_editing(app: &mut App, key: KeyEvent) {
    let cursor = app.intake.cursor;
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.intake.editing = false,
        KeyCode::Backspace => {
            app.intake.fields[cursor].value.pop();
        }
        KeyCode::Char(c) => app.intake.fields[cursor].value.push(c),
        _ => {}
    }
}
