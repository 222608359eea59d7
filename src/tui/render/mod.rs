pub mod dashboard_view;
pub mod focused_view;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod intake_view;
pub mod popups;
pub mod selection_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    match app.view {
        View::Dashboard => dashboard_view::render_dashboard(frame, app, chunks[1]),
        View::Focused => focused_view::render_focused(frame, app, chunks[1]),
        View::Intake => intake_view::render_intake(frame, app, chunks[1]),
        View::Selection => selection_view::render_selection(frame, app, chunks[1]),
    }

    // Popups (rendered on top of content)
    if app.status_menu.is_some() {
        popups::render_status_menu(frame, app, frame.area());
    }
    if app.roadmap_menu.is_some() {
        popups::render_roadmap_menu(frame, app, frame.area());
    }
    if app.confirm_clear {
        popups::render_confirm_clear(frame, app, frame.area());
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
