use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, FIELD_COOP};

/// Render the student profile form
pub fn render_intake(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Student profile",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, field) in app.intake.fields.iter().enumerate() {
        let is_cursor = i == app.intake.cursor;
        let editing = is_cursor && app.intake.editing;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_cursor { "\u{25B8}" } else { " " };

        let mut spans = vec![
            Span::styled(
                format!(" {marker} {:<18}", field.label),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
            Span::styled(
                field.value.clone(),
                Style::default()
                    .fg(if editing {
                        app.theme.text_bright
                    } else if i == FIELD_COOP && field.value == "yes" {
                        app.theme.green
                    } else {
                        app.theme.cyan
                    })
                    .bg(row_bg),
            ),
        ];
        if editing {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ));
        }
        if field.value.is_empty() && !editing {
            spans.push(Span::styled(
                field.hint,
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));

    if app.pending.is_some() {
        lines.push(Line::from(Span::styled(
            " contacting recommendation service\u{2026}  Esc cancels",
            Style::default().fg(app.theme.yellow).bg(bg),
        )));
    } else if let Some(error) = &app.intake.error {
        lines.push(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(app.theme.red).bg(bg),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " Enter edits \u{00B7} S submits \u{00B7} Esc back",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
