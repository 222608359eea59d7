use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::truncate;

/// Render the ranked candidates returned by the recommendation service
pub fn render_selection(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    let Some(selection) = &app.selection else {
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    };

    lines.push(Line::from(Span::styled(
        format!(
            " Recommended programs \u{00B7} {} selected",
            selection.selected_count()
        ),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, ranking) in selection.rankings.iter().enumerate() {
        let is_cursor = i == selection.cursor;
        let picked = selection.selected.get(i).copied().unwrap_or(false);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_cursor { "\u{25B8}" } else { " " };
        let check = if picked { "[x]" } else { "[ ]" };

        let title = format!("{} \u{2014} {}", ranking.university, ranking.program);
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {marker} {check} "),
                Style::default()
                    .fg(if picked { app.theme.green } else { app.theme.text })
                    .bg(row_bg),
            ),
            Span::styled(
                truncate(&title, area.width.saturating_sub(20) as usize),
                Style::default().fg(app.theme.text_bright).bg(row_bg),
            ),
            Span::styled(
                format!("  {:.1}", ranking.score),
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ),
        ]));
        let b = &ranking.breakdown;
        lines.push(Line::from(Span::styled(
            format!(
                "       academic {:.1} \u{00B7} interest {:.1} \u{00B7} ec {:.1} \u{00B7} co-op {:.1}",
                b.academic, b.interest, b.ec, b.coop_fit
            ),
            Style::default().fg(app.theme.dim).bg(row_bg),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        " Space toggles \u{00B7} a all \u{00B7} Enter creates the roadmap \u{00B7} Esc back",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
