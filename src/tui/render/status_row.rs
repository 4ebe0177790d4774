use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Bottom status row: counts and totals on the left, a rollback diagnostic
/// or the key hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let (hours, costs) = app.totals();
    let mut spans = vec![
        Span::styled(
            format!(" {} tasks", app.rows.len()),
            Style::default().fg(app.theme.dim),
        ),
        Span::styled(
            format!("  {}h  ${:.2}", hours, costs),
            Style::default().fg(app.theme.accent),
        ),
    ];

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("  {}", status),
            Style::default()
                .fg(app.theme.warning)
                .add_modifier(Modifier::BOLD),
        ));
    } else if app.settings.ui.show_key_hints {
        spans.push(Span::styled(
            "  drag rows to move · drag right to nest · q quit",
            Style::default().fg(app.theme.dim),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background)),
        area,
    );
}
