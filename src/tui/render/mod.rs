pub mod sheet_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — title bar, sheet rows, status row.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // sheet rows
            Constraint::Length(1), // status row
        ])
        .split(area);

    sheet_view::render_title(frame, app, chunks[0]);

    // Remember where the rows landed for mouse hit-testing
    app.sheet_area = chunks[1];
    sheet_view::render_sheet(frame, app, chunks[1]);

    status_row::render_status_row(frame, app, chunks[2]);
}
