use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, View};

pub(super) fn handle_selection(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => {
            // Back to the form; the rankings are kept until resubmission
            app.view = View::Intake;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(sel) = &mut app.selection {
                let len = sel.rankings.len();
                if len > 0 {
                    sel.cursor = (sel.cursor + 1).min(len - 1);
                }
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(sel) = &mut app.selection {
                sel.cursor = sel.cursor.saturating_sub(1);
            }
        }
        KeyCode::Char(' ') => {
            if let Some(sel) = &mut app.selection
                && let Some(picked) = sel.selected.get_mut(sel.cursor)
            {
                *picked = !*picked;
            }
        }
        KeyCode::Char('a') => {
            if let Some(sel) = &mut app.selection {
                let all = sel.selected.iter().all(|s| *s);
                for picked in &mut sel.selected {
                    *picked = !all;
                }
            }
        }
        KeyCode::Enter => app.adopt_selection(),
        _ => {}
    }
}
