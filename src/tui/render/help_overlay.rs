use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::{App, View};

use super::helpers::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    match app.view {
        View::Dashboard => {
            lines.push(Line::from(Span::styled(" Dashboard", header_style)));
            add_binding(&mut lines, " Tab", "Switch pane", key_style, desc_style);
            add_binding(
                &mut lines,
                " \u{2191}\u{2193}/jk",
                "Move cursor",
                key_style,
                desc_style,
            );
            add_binding(
                &mut lines,
                " Enter",
                "Focus program under cursor",
                key_style,
                desc_style,
            );
            add_binding(
                &mut lines,
                " Space",
                "Cycle task status (bonus/timeline)",
                key_style,
                desc_style,
            );
            add_binding(
                &mut lines,
                " s",
                "Pick a status explicitly",
                key_style,
                desc_style,
            );
            add_binding(&mut lines, " r", "Roadmap filter", key_style, desc_style);
            add_binding(&mut lines, " i", "Student profile", key_style, desc_style);
            add_binding(&mut lines, " c", "Clear all data", key_style, desc_style);
        }
        View::Focused => {
            lines.push(Line::from(Span::styled(" Focused program", header_style)));
            add_binding(
                &mut lines,
                " \u{2191}\u{2193}/jk",
                "Move cursor",
                key_style,
                desc_style,
            );
            add_binding(
                &mut lines,
                " Space/Enter",
                "Cycle task status",
                key_style,
                desc_style,
            );
            add_binding(
                &mut lines,
                " s",
                "Pick a status explicitly",
                key_style,
                desc_style,
            );
            add_binding(&mut lines, " Esc/b", "Back to dashboard", key_style, desc_style);
        }
        View::Intake => {
            lines.push(Line::from(Span::styled(" Student profile", header_style)));
            add_binding(&mut lines, " jk/Tab", "Move between fields", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Edit field", key_style, desc_style);
            add_binding(&mut lines, " Space", "Toggle co-op", key_style, desc_style);
            add_binding(&mut lines, " S", "Submit profile", key_style, desc_style);
            add_binding(&mut lines, " Esc", "Back to dashboard", key_style, desc_style);
        }
        View::Selection => {
            lines.push(Line::from(Span::styled(" Candidates", header_style)));
            add_binding(&mut lines, " jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Space", "Toggle candidate", key_style, desc_style);
            add_binding(&mut lines, " a", "Toggle all", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Create roadmap", key_style, desc_style);
            add_binding(&mut lines, " Esc", "Back to the form", key_style, desc_style);
        }
    }

    lines.push(Line::from(""));
    add_binding(&mut lines, " ?", "Close help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        overlay_area,
    );
}

fn add_binding(
    lines: &mut Vec<Line<'static>>,
    key: &'static str,
    desc: &'static str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{key:<14}"), key_style),
        Span::styled(desc, desc_style),
    ]));
}
