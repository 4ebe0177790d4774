use serde::Serialize;

use crate::model::sheet::Sheet;
use crate::model::task::Task;
use crate::ops::rollup::{rollup_costs, rollup_hours};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// JSON shape for `bd show --json`: every task with its derived rollups.
#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    pub hours: f64,
    pub costs: f64,
    pub rollup_hours: f64,
    pub rollup_costs: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct SheetJson {
    pub title: String,
    pub tasks: Vec<TaskJson>,
}

pub fn sheet_json(sheet: &Sheet) -> SheetJson {
    SheetJson {
        title: sheet.title.clone(),
        tasks: sheet.tasks.iter().map(task_json).collect(),
    }
}

fn task_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        hours: task.hours,
        costs: task.costs,
        rollup_hours: rollup_hours(task),
        rollup_costs: rollup_costs(task),
        children: task.children.iter().map(task_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Plain-text outline
// ---------------------------------------------------------------------------

/// Outline lines for `bd show`: one indented line per task, with combined
/// parent labels and rollup totals.
pub fn outline_lines(tasks: &[Task]) -> Vec<String> {
    let mut lines = Vec::new();
    push_outline(tasks, 0, &mut lines);
    lines
}

fn push_outline(tasks: &[Task], depth: usize, lines: &mut Vec<String>) {
    for task in tasks {
        lines.push(format!(
            "{}⦾ {}  {}h  ${:.2}",
            "  ".repeat(depth),
            task.combined_title(),
            rollup_hours(task),
            rollup_costs(task),
        ));
        push_outline(&task.children, depth + 1, lines);
    }
}
