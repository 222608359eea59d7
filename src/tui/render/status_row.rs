use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane, View};

/// Render the status row (bottom of screen): a transient notice when one
/// is pending, context hints otherwise
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(notice) = &app.notice {
        Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(app.theme.yellow).bg(bg),
        ))
    } else {
        let hint = match app.view {
            View::Dashboard => match app.pane {
                Pane::Programs => "Tab pane  jk move  Enter focus  r roadmaps  i profile  ? help",
                Pane::Bonus => "Tab pane  jk move  Space cycle  s set status  ? help",
                Pane::Timeline => "Tab pane  hl move  Enter focus  Space cycle  s set status",
            },
            View::Focused => "jk move  Space cycle  s set status  Esc back",
            View::Intake => "jk move  Enter edit  S submit  Esc back",
            View::Selection => "jk move  Space toggle  Enter create  Esc back",
        };
        let mut spans = vec![Span::styled(
            " ".repeat(width.saturating_sub(hint.chars().count() + 1)),
            Style::default().bg(bg),
        )];
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
