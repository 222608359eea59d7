use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the header: app name, view name, active filter, overall progress
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title row
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);

    let view_name = match app.view {
        View::Dashboard => "Dashboard",
        View::Focused => "Focused",
        View::Intake => "Profile",
        View::Selection => "Candidates",
    };

    let mut spans = vec![
        Span::styled(" \u{25C6} ", Style::default().fg(app.theme.purple).bg(bg)),
        Span::styled(
            "unitrack",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  \u{2502} ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            view_name,
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
    ];

    if let Some(roadmap) = app.store.active_roadmap() {
        spans.push(Span::styled(
            "  \u{2502} ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            format!("{} {}", roadmap.icon, roadmap.name),
            Style::default().fg(app.theme.cyan).bg(bg),
        ));
    }

    let stats = app.store.stats();
    if stats.total_programs > 0 {
        spans.push(Span::styled(
            "  \u{2502} ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            format!(
                "{} programs \u{00B7} {}% complete",
                stats.total_programs, stats.overall_progress
            ),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), chunks[0]);

    // Separator line
    let sep = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            sep,
            Style::default().fg(app.theme.dim).bg(bg),
        ))),
        chunks[1],
    );
}
