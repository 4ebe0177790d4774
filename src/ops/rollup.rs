use crate::model::task::Task;

/// Sum a field over a task and all of its descendants, depth-first,
/// left-to-right. No memoization — the tree may have just changed, so the
/// fold runs fresh on every render.
pub fn subtree_sum(task: &Task, value: fn(&Task) -> f64) -> f64 {
    task.children
        .iter()
        .fold(value(task), |sum, child| sum + subtree_sum(child, value))
}

/// Aggregate hours for a task including all subtasks.
pub fn rollup_hours(task: &Task) -> f64 {
    subtree_sum(task, |t| t.hours)
}

/// Aggregate costs for a task including all subtasks.
pub fn rollup_costs(task: &Task) -> f64 {
    subtree_sum(task, |t| t.costs)
}
