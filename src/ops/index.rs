use crate::model::task::Task;

/// Find a task by id anywhere in the forest.
///
/// Siblings at each level are scanned before descending, so the match is the
/// shallowest position reached first. Returns the node together with a fresh
/// index path: the sibling position at each level from the root down to the
/// node. Paths go stale on any mutation — recompute, never cache one.
pub fn find_task(tasks: &[Task], id: u64) -> Option<(&Task, Vec<usize>)> {
    if let Some(i) = tasks.iter().position(|t| t.id == id) {
        return Some((&tasks[i], vec![i]));
    }
    for (i, task) in tasks.iter().enumerate() {
        if let Some((found, mut path)) = find_task(&task.children, id) {
            path.insert(0, i);
            return Some((found, path));
        }
    }
    None
}

/// Mutable lookup by id, any depth.
pub fn find_task_mut(tasks: &mut [Task], id: u64) -> Option<&mut Task> {
    for task in tasks.iter_mut() {
        if task.id == id {
            return Some(task);
        }
        if let Some(found) = find_task_mut(&mut task.children, id) {
            return Some(found);
        }
    }
    None
}

/// Find the sibling immediately before the task with `id`.
///
/// When the task is first in its sibling sequence the result clamps to
/// index 0 — the task itself — so a drop next to a first child still
/// resolves to a valid anchor. Returns the sibling and its fresh index path,
/// or `None` when `id` is absent from the forest.
pub fn find_preceding_sibling(tasks: &[Task], id: u64) -> Option<(&Task, Vec<usize>)> {
    if let Some(i) = tasks.iter().position(|t| t.id == id) {
        let j = i.saturating_sub(1);
        return Some((&tasks[j], vec![j]));
    }
    for (i, task) in tasks.iter().enumerate() {
        if let Some((found, mut path)) = find_preceding_sibling(&task.children, id) {
            path.insert(0, i);
            return Some((found, path));
        }
    }
    None
}

/// Detach the task with `id` from whichever sequence contains it.
///
/// The removed task keeps its children. Returns `None` when the id is absent
/// from the whole forest.
pub fn remove_task(tasks: &mut Vec<Task>, id: u64) -> Option<Task> {
    if let Some(i) = tasks.iter().position(|t| t.id == id) {
        return Some(tasks.remove(i));
    }
    for task in tasks.iter_mut() {
        if let Some(removed) = remove_task(&mut task.children, id) {
            return Some(removed);
        }
    }
    None
}

/// Collect the tasks at `depth`, or at the deepest level actually reachable.
///
/// Expansion walks level by level from the roots; when an intermediate level
/// has no children anywhere the walk stops and that level is returned rather
/// than an empty sequence.
pub fn tasks_at_nearest_depth(tasks: &[Task], depth: usize) -> Vec<&Task> {
    let mut current: Vec<&Task> = tasks.iter().collect();
    let mut level = 0;
    while level < depth {
        let next: Vec<&Task> = current.iter().flat_map(|t| t.children.iter()).collect();
        if next.is_empty() {
            break;
        }
        current = next;
        level += 1;
    }
    current
}

/// True when the task with `id` sits anywhere inside `task`'s subtree.
pub fn is_ancestor_of(task: &Task, id: u64) -> bool {
    task.children
        .iter()
        .any(|child| child.id == id || is_ancestor_of(child, id))
}
