use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use indexmap::IndexMap;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::drag::{DragController, Renderer};
use crate::io::sheet_io;
use crate::model::config::Settings;
use crate::model::sheet::Sheet;
use crate::model::task::Task;
use crate::ops::rollup::{rollup_costs, rollup_hours};

use super::input;
use super::render;
use super::theme::Theme;

/// One visible row of the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub depth: usize,
    pub label: String,
    pub hours: f64,
    pub costs: f64,
    pub has_children: bool,
}

/// Flattened row list, keyed by task id in display order.
///
/// This is the renderer seam: the drag controller calls `render` after each
/// committed or rolled-back transaction and the cache rebuilds. Cancelled
/// drops leave it untouched.
#[derive(Debug, Default)]
pub struct RowCache {
    pub rows: IndexMap<u64, Row>,
}

impl RowCache {
    pub fn rebuild(&mut self, tasks: &[Task]) {
        self.rows.clear();
        push_rows(tasks, 0, &mut self.rows);
    }

    /// Task id of the row at a visible index, if any.
    pub fn id_at(&self, index: usize) -> Option<u64> {
        self.rows.get_index(index).map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Renderer for RowCache {
    fn render(&mut self, tasks: &[Task]) {
        self.rebuild(tasks);
    }
}

fn push_rows(tasks: &[Task], depth: usize, rows: &mut IndexMap<u64, Row>) {
    for task in tasks {
        rows.insert(
            task.id,
            Row {
                depth,
                label: task.combined_title(),
                hours: rollup_hours(task),
                costs: rollup_costs(task),
                has_children: !task.children.is_empty(),
            },
        );
        push_rows(&task.children, depth + 1, rows);
    }
}

/// Main application state
pub struct App {
    pub controller: DragController,
    pub rows: RowCache,
    pub sheet_title: String,
    pub settings: Settings,
    pub theme: Theme,
    pub should_quit: bool,
    /// Rollback diagnostic for the status row, cleared on the next gesture
    pub status: Option<String>,
    /// Sheet area from the last draw, for mouse hit-testing
    pub sheet_area: Rect,
    /// Where rollback diagnostics are appended
    pub log_path: PathBuf,
}

impl App {
    pub fn new(sheet: Sheet, settings: Settings, log_path: PathBuf) -> Self {
        let theme = Theme::from_config(&settings.ui);
        // The sheet renders from the terminal's left edge; that edge is the
        // zero point for every depth calculation.
        let controller =
            DragController::new(sheet.tasks, 0.0, settings.drag.cells_per_level);
        let mut rows = RowCache::default();
        rows.rebuild(controller.tasks());

        App {
            controller,
            rows,
            sheet_title: sheet.title,
            settings,
            theme,
            should_quit: false,
            status: None,
            sheet_area: Rect::default(),
            log_path,
        }
    }

    /// Task id of the row under a terminal position, if it falls inside the
    /// sheet area.
    pub fn row_at(&self, column: u16, row: u16) -> Option<u64> {
        let area = self.sheet_area;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        self.rows.id_at((row - area.y) as usize)
    }

    /// Grand totals over the root tasks, for the status row.
    pub fn totals(&self) -> (f64, f64) {
        let hours = self.controller.tasks().iter().map(rollup_hours).sum();
        let costs = self.controller.tasks().iter().map(rollup_costs).sum();
        (hours, costs)
    }
}

/// Run the TUI application
pub fn run(sheet_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = sheet_io::load_sheet(sheet_path)?;
    let settings = sheet_io::load_settings(sheet_path)?;
    let log_path = sheet_path.with_file_name("breakdown.log");
    let mut app = App::new(sheet, settings, log_path);

    // Setup terminal; mouse capture feeds the drag controller
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key)
                }
                Event::Mouse(me) => input::handle_mouse(app, me),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_app() -> App {
        App::new(
            Sheet::sample(),
            Settings::default(),
            PathBuf::from("/tmp/breakdown-test.log"),
        )
    }

    #[test]
    fn rows_flatten_in_display_order_with_depths() {
        let app = sample_app();
        let entries: Vec<(u64, usize)> = app
            .rows
            .rows
            .iter()
            .map(|(id, row)| (*id, row.depth))
            .collect();
        assert_eq!(
            entries,
            vec![(1, 0), (2, 0), (3, 0), (4, 0), (5, 1), (6, 2)]
        );
    }

    #[test]
    fn parent_rows_carry_combined_labels_and_rollups() {
        let app = sample_app();
        let row4 = &app.rows.rows[&4];
        assert_eq!(row4.label, "Task 4 + Task 5");
        assert_eq!(row4.hours, 10.0);
        assert_eq!(row4.costs, 25.0);
        assert!(row4.has_children);
    }

    #[test]
    fn row_at_maps_positions_inside_the_sheet_area() {
        let mut app = sample_app();
        app.sheet_area = Rect::new(0, 1, 60, 10);
        assert_eq!(app.row_at(5, 1), Some(1));
        assert_eq!(app.row_at(5, 5), Some(5));
        // Above and below the sheet area
        assert_eq!(app.row_at(5, 0), None);
        assert_eq!(app.row_at(5, 11), None);
        // Past the last row
        assert_eq!(app.row_at(5, 8), None);
    }

    #[test]
    fn totals_sum_the_whole_forest() {
        let app = sample_app();
        let (hours, costs) = app.totals();
        assert_eq!(hours, 19.0);
        assert_eq!(costs, 62.5);
    }

    #[test]
    fn row_cache_implements_the_renderer_seam() {
        let mut cache = RowCache::default();
        cache.render(&[Task::new(7, "only", 1.0, 2.0)]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.id_at(0), Some(7));
    }
}
