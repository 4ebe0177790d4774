use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{App, Row};

/// Render the sheet title bar.
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        format!(" {}", app.sheet_title),
        Style::default()
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// Render the task rows with indentation, drag highlighting, and rollups.
pub fn render_sheet(frame: &mut Frame, app: &App, area: Rect) {
    if app.rows.is_empty() {
        let empty = Paragraph::new(" No tasks")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let dragged = app.controller.dragged_id();
    let drop_zone = app.controller.highlight();

    let mut lines: Vec<Line> = Vec::new();
    for (id, row) in app.rows.rows.iter().take(area.height as usize) {
        lines.push(row_line(app, *id, row, dragged, drop_zone, area.width));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn row_line(
    app: &App,
    id: u64,
    row: &Row,
    dragged: Option<u64>,
    drop_zone: Option<u64>,
    width: u16,
) -> Line<'static> {
    let indent = " ".repeat(row.depth * app.settings.drag.cells_per_level as usize);
    let totals = format!("  {}h  ${:.2}", row.hours, row.costs);

    let available = (width as usize)
        .saturating_sub(indent.width() + 2 + totals.width());
    let label = truncate_to_width(&row.label, available);

    let label_style = if Some(id) == dragged {
        Style::default()
            .fg(app.theme.drag_source)
            .add_modifier(Modifier::BOLD)
    } else if Some(id) == drop_zone {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.drop_zone_bg)
    } else if row.has_children {
        Style::default().fg(app.theme.text_bright)
    } else {
        Style::default().fg(app.theme.text)
    };

    Line::from(vec![
        Span::styled(format!("{}⦾ {}", indent, label), label_style),
        Span::styled(totals, Style::default().fg(app.theme.dim)),
    ])
}

/// Truncate to a display width with an ellipsis, unicode-aware.
fn truncate_to_width(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
