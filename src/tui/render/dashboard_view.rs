use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::program::UniversityProgram;
use crate::model::status::TaskStatus;
use crate::ops::timeline::day_label;
use crate::tui::app::{App, Pane};

use super::helpers::{progress_bar, status_symbol, truncate};

/// Render the dashboard: timeline strip on top, program cards on the left,
/// global bonus sidebar on the right
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // timeline strip
            Constraint::Min(1),    // cards + sidebar
        ])
        .split(area);

    render_timeline_strip(frame, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[1]);

    render_program_cards(frame, app, columns[0]);
    render_bonus_sidebar(frame, app, columns[1]);
}

/// Upcoming tasks across every displayed program, soonest first
fn render_timeline_strip(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let entries = app.timeline_entries();
    let active = app.pane == Pane::Timeline;

    let header_style = Style::default()
        .fg(if active { app.theme.highlight } else { app.theme.dim })
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(" Timeline", header_style))];

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            " nothing scheduled",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
        // Keep the cursor in view by dropping leading entries
        let mut width_left = area.width as usize;
        let start = strip_start(app.timeline_cursor, width_left);
        for (i, entry) in entries.iter().enumerate().skip(start) {
            let label = match entry.due_date {
                Some(due) => day_label(due, app.today),
                None => "no deadline".to_string(),
            };
            let text = format!("{} ({label})", truncate(&entry.title, 24));
            let cell_width = text.chars().count() + 3;
            if cell_width > width_left {
                break;
            }
            width_left -= cell_width;
            let is_cursor = active && i == app.timeline_cursor;
            let style = Style::default()
                .fg(app.theme.class_color(entry.class))
                .bg(if is_cursor { app.theme.selection_bg } else { bg });
            spans.push(Span::styled(format!(" {text} "), style));
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

/// First entry index to show so the cursor's cell fits on screen
fn strip_start(cursor: usize, width: usize) -> usize {
    let cell = 30usize; // generous per-cell estimate
    let visible = (width / cell).max(1);
    if cursor < visible {
        0
    } else {
        cursor + 1 - visible
    }
}

fn render_program_cards(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let programs = app.store.displayed_programs();
    let active = app.pane == Pane::Programs;

    let header_style = Style::default()
        .fg(if active { app.theme.highlight } else { app.theme.dim })
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(" Programs", header_style))];

    if programs.is_empty() {
        let hint = if app.store.active_roadmap().is_some() {
            " no programs in this roadmap"
        } else {
            " no programs yet \u{00B7} press i to build a profile"
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    for (i, program) in programs.iter().enumerate() {
        let is_cursor = active && i == app.program_cursor;
        lines.extend(program_card_lines(app, program, is_cursor, area.width));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn program_card_lines(
    app: &App,
    program: &UniversityProgram,
    is_cursor: bool,
    width: u16,
) -> Vec<Line<'static>> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let marker = if is_cursor { "\u{25B8} " } else { "  " };

    let title = format!(
        "{marker}{} \u{2014} {}",
        program.university_name, program.program_name
    );
    let title_line = Line::from(Span::styled(
        truncate(&title, width as usize),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    let days = program.days_until_deadline(app.today);
    let deadline_color = if days < 0 {
        app.theme.red
    } else if days <= 14 {
        app.theme.yellow
    } else {
        app.theme.text
    };
    let detail_line = Line::from(vec![
        Span::styled(
            format!("    {}", progress_bar(program.overall_progress, 12)),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled(
            format!(
                "   {} \u{00B7} {}",
                program.deadline.format("%b %-d"),
                day_label(program.deadline, app.today)
            ),
            Style::default().fg(deadline_color).bg(bg),
        ),
        Span::styled(
            format!(
                "   {} done / {} active / {} todo",
                program.count_with_status(TaskStatus::Complete),
                program.count_with_status(TaskStatus::InProgress),
                program.count_with_status(TaskStatus::Todo),
            ),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);

    vec![title_line, detail_line, Line::from("")]
}

fn render_bonus_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.store.global_bonus();
    let active = app.pane == Pane::Bonus;

    let header_style = Style::default()
        .fg(if active { app.theme.highlight } else { app.theme.dim })
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled(" Bonus", header_style))];

    for (i, task) in tasks.iter().enumerate() {
        let is_cursor = active && i == app.bonus_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", status_symbol(task.status)),
                Style::default().fg(app.theme.status_color(task.status)).bg(row_bg),
            ),
            Span::styled(
                truncate(&task.title, area.width.saturating_sub(8) as usize),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", task.category.label()),
            Style::default().fg(app.theme.category_color(task.category)).bg(row_bg),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
