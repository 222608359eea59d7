use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::timeline::{EntryKind, day_label};
use crate::tui::app::App;

use super::helpers::{progress_bar, status_symbol, truncate};

/// Render the focused program: header card, then its own tasks pinned in
/// authored order (steps first, then bonus)
pub fn render_focused(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    let Some(program) = app.store.focused_program() else {
        lines.push(Line::from(Span::styled(
            " no program focused \u{00B7} Esc returns to the dashboard",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    };

    lines.push(Line::from(Span::styled(
        format!(
            " {} \u{2014} {}",
            program.university_name, program.program_name
        ),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {}", progress_bar(program.overall_progress, 16)),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled(
            format!(
                "   deadline {} \u{00B7} {}",
                program.deadline.format("%Y-%m-%d"),
                day_label(program.deadline, app.today)
            ),
            Style::default().fg(app.theme.text).bg(bg),
        ),
    ]));
    lines.push(Line::from(""));

    let rows = app.focused_rows();
    let mut bonus_started = false;
    for (i, row) in rows.iter().enumerate() {
        if row.kind == EntryKind::Bonus && !bonus_started {
            bonus_started = true;
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Bonus",
                Style::default()
                    .fg(app.theme.dim)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        let is_cursor = i == app.focused_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_cursor { "\u{25B8}" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {marker} {} ", status_symbol(row.status)),
                Style::default().fg(app.theme.status_color(row.status)).bg(row_bg),
            ),
            Span::styled(
                truncate(&row.title, area.width.saturating_sub(24) as usize),
                Style::default().fg(app.theme.class_color(row.class)).bg(row_bg),
            ),
            Span::styled(
                format!("  {}", row.day_label),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
        ]));
    }

    // Description of the row under the cursor
    if let Some(row) = rows.get(app.focused_cursor) {
        let description = match row.kind {
            EntryKind::Step => program
                .steps
                .iter()
                .find(|s| s.id == row.task_id)
                .map(|s| s.description.clone()),
            EntryKind::Bonus => program
                .bonus_tasks
                .iter()
                .find(|t| t.id == row.task_id)
                .map(|t| t.description.clone()),
        };
        if let Some(description) = description
            && !description.is_empty()
        {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" {description}"),
                Style::default().fg(app.theme.dim).bg(bg),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
