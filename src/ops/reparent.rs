use crate::model::task::Task;

use super::index::{find_task_mut, is_ancestor_of, tasks_at_nearest_depth};

/// Error type for reparent operations
#[derive(Debug, thiserror::Error)]
pub enum ReparentError {
    #[error("drop target {target_id} has no parent candidate at depth {depth}")]
    NoAnchor { target_id: u64, depth: usize },
    #[error("drop target index path is empty")]
    EmptyTargetPath,
}

/// Splice `dragged` back into the forest next to the drop target.
///
/// At depth 0 the node goes into the root sequence immediately after the
/// position named by the last element of `target_path`. At deeper levels the
/// confirmed parent is resolved among the tasks one level above the drop
/// depth: the target itself when it sits there, otherwise the candidate
/// whose subtree contains the target — drop targets are frequently rendered
/// descendants of the intended parent. Insertion offsets clamp to the
/// sibling count. When no candidate qualifies the drop fails rather than
/// being redirected to the root.
///
/// `target_path` must be computed fresh for the forest as it stands now;
/// paths from before a removal are stale.
pub fn reparent(
    tasks: &mut Vec<Task>,
    dragged: Task,
    target_id: u64,
    target_path: &[usize],
    depth: usize,
) -> Result<(), ReparentError> {
    let target_index = *target_path.last().ok_or(ReparentError::EmptyTargetPath)?;

    if depth == 0 {
        let at = (target_index + 1).min(tasks.len());
        tasks.insert(at, dragged);
        return Ok(());
    }

    // Parents live one level above the drop depth.
    let parent_id = {
        let candidates = tasks_at_nearest_depth(tasks, depth - 1);
        candidates
            .iter()
            .find(|t| t.id == target_id)
            .or_else(|| candidates.iter().find(|t| is_ancestor_of(t, target_id)))
            .map(|t| t.id)
            .ok_or(ReparentError::NoAnchor { target_id, depth })?
    };

    let parent =
        find_task_mut(tasks, parent_id).ok_or(ReparentError::NoAnchor { target_id, depth })?;
    let at = (target_index + 1).min(parent.children.len());
    parent.children.insert(at, dragged);
    Ok(())
}
