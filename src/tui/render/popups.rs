use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::status::TaskStatus;
use crate::tui::app::App;

/// Small fixed-size popup centered in `area`
fn popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

fn popup_block(app: &App, title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(app.theme.selection_border)
                .bg(app.theme.background),
        )
        .style(Style::default().bg(app.theme.background))
}

/// The explicit status picker
pub fn render_status_menu(frame: &mut Frame, app: &App, area: Rect) {
    let Some(menu) = &app.status_menu else { return };
    let statuses = TaskStatus::all();
    let popup = popup_rect(26, statuses.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let is_cursor = i == menu.cursor;
            let bg = if is_cursor {
                app.theme.selection_bg
            } else {
                app.theme.background
            };
            Line::from(Span::styled(
                format!(" {} ", status.label()),
                Style::default().fg(app.theme.status_color(*status)).bg(bg),
            ))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(popup_block(app, " Set status ")),
        popup,
    );
}

/// The roadmap picker. The active roadmap is marked; picking it again
/// clears the filter.
pub fn render_roadmap_menu(frame: &mut Frame, app: &App, area: Rect) {
    let Some(cursor) = app.roadmap_menu else { return };
    let roadmaps = app.store.roadmaps();
    let popup = popup_rect(44, roadmaps.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);

    let active_id = app.store.active_roadmap_id();
    let lines: Vec<Line> = roadmaps
        .iter()
        .enumerate()
        .map(|(i, roadmap)| {
            let is_cursor = i == cursor;
            let is_active = active_id == Some(roadmap.id.as_str());
            let bg = if is_cursor {
                app.theme.selection_bg
            } else {
                app.theme.background
            };
            let mark = if is_active { "\u{25CF}" } else { " " };
            Line::from(vec![
                Span::styled(
                    format!(" {mark} "),
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
                Span::styled(
                    format!("{} {}", roadmap.icon, roadmap.name),
                    Style::default()
                        .fg(if is_active {
                            app.theme.cyan
                        } else {
                            app.theme.text
                        })
                        .bg(bg),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(popup_block(app, " Roadmaps ")),
        popup,
    );
}

/// Clear-everything confirmation
pub fn render_confirm_clear(frame: &mut Frame, app: &App, area: Rect) {
    let popup = popup_rect(46, 4, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            " Delete all programs, progress, and history?",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " y confirm \u{00B7} n cancel",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(popup_block(app, " Clear ")),
        popup,
    );
}
