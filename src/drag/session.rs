use crate::model::task::Task;
use crate::ops::depth::{DEFAULT_STEP, resolve_depth};
use crate::ops::index::{find_preceding_sibling, find_task, remove_task};
use crate::ops::reparent::{ReparentError, reparent};

use super::events::{DragStart, DropEvent, Renderer};

/// Where a drag gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    /// A row has been grabbed: the dragged id rides along as the transfer
    /// payload, together with the pointer-to-origin offset at grab time.
    Armed { dragged_id: u64, grab_offset: f64 },
}

/// Error raised inside a drop transaction. Any of these rolls the forest
/// back to its pre-drop snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DropError {
    #[error("drop target {0} not found in the sheet")]
    TargetNotFound(u64),
    #[error("no anchor sibling found for task {0}")]
    AnchorNotFound(u64),
    #[error("dragged task {0} vanished mid-transaction")]
    DraggedVanished(u64),
    #[error(transparent)]
    Reparent(#[from] ReparentError),
}

/// How a drop transaction ended.
#[derive(Debug)]
pub enum DropOutcome {
    /// The forest changed and a re-render was requested
    Committed,
    /// Nothing to do: a self-drop at the current depth, or a stale dragged
    /// id — no mutation, no render
    Ignored,
    /// The transaction failed; the snapshot was restored and re-rendered
    RolledBack(DropError),
}

/// Owns the forest and runs one drag-and-drop transaction at a time.
///
/// All structural mutation of the sheet goes through here: a drop either
/// fully commits (remove + reinsert) or is discarded by restoring the deep
/// copy taken before the transaction began. No node is ever left detached
/// on a failure path.
pub struct DragController {
    tasks: Vec<Task>,
    /// Horizontal zero point for depth resolution, captured once at startup
    origin_x: f64,
    /// Drag distance per nesting level
    step: f64,
    phase: DragPhase,
    /// Row currently highlighted as the drop zone
    highlight: Option<u64>,
}

impl DragController {
    pub fn new(tasks: Vec<Task>, origin_x: f64, step: f64) -> Self {
        // A non-positive step would make every depth calculation blow up
        let step = if step > 0.0 { step } else { DEFAULT_STEP };
        DragController {
            tasks,
            origin_x,
            step,
            phase: DragPhase::Idle,
            highlight: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Row to draw with the drop-zone highlight, if any.
    pub fn highlight(&self) -> Option<u64> {
        self.highlight
    }

    /// The transfer payload: the id grabbed at drag start, if a gesture is
    /// in flight.
    pub fn dragged_id(&self) -> Option<u64> {
        match self.phase {
            DragPhase::Armed { dragged_id, .. } => Some(dragged_id),
            DragPhase::Idle => None,
        }
    }

    /// Arm a gesture: record the dragged id and the grab offset from the
    /// container's left edge, so depth later reflects indentation relative
    /// to where the row was grabbed.
    pub fn handle_drag_start(&mut self, start: DragStart) {
        self.phase = DragPhase::Armed {
            dragged_id: start.task_id,
            grab_offset: start.pointer_x - self.origin_x,
        };
    }

    /// Move the drop-zone highlight onto a row. Never mutates data.
    pub fn handle_drag_enter(&mut self, task_id: u64) {
        self.highlight = Some(task_id);
    }

    /// Clear the drop-zone highlight. Never mutates data.
    pub fn handle_drag_leave(&mut self) {
        self.highlight = None;
    }

    /// Abandon an armed gesture without a drop (pointer released off-sheet).
    pub fn handle_drag_cancel(&mut self) {
        self.phase = DragPhase::Idle;
        self.highlight = None;
    }

    /// Run one full drop transaction.
    ///
    /// Snapshots the forest, applies the remove + reparent sequence, then
    /// either commits and asks `renderer` to redraw, or restores the
    /// snapshot, redraws the unchanged forest, and reports the failure to
    /// the caller for logging. Runs synchronously; there is no intermediate
    /// observable state.
    pub fn handle_drop(&mut self, drop: DropEvent, renderer: &mut dyn Renderer) -> DropOutcome {
        let grab_offset = match self.phase {
            DragPhase::Armed { grab_offset, .. } => grab_offset,
            DragPhase::Idle => 0.0,
        };
        self.phase = DragPhase::Idle;
        self.highlight = None;

        let snapshot = self.tasks.clone();
        match self.apply_drop(&drop, grab_offset) {
            Ok(DropOutcome::Committed) => {
                renderer.render(&self.tasks);
                DropOutcome::Committed
            }
            Ok(outcome) => outcome,
            Err(err) => {
                self.tasks = snapshot;
                renderer.render(&self.tasks);
                DropOutcome::RolledBack(err)
            }
        }
    }

    /// The body of the transaction. An `Err` may leave the forest in an
    /// intermediate state; `handle_drop` restores the snapshot.
    fn apply_drop(&mut self, drop: &DropEvent, grab_offset: f64) -> Result<DropOutcome, DropError> {
        let depth = resolve_depth(drop.pointer_x - grab_offset, self.origin_x, self.step);

        // A stale id from a dead gesture: ignore rather than fail.
        let Some((_, dragged_path)) = find_task(&self.tasks, drop.dragged_id) else {
            return Ok(DropOutcome::Ignored);
        };

        if drop.dragged_id == drop.target_id && depth == dragged_path.len() - 1 {
            // Dropped onto itself at its current depth: a cancelled gesture.
            return Ok(DropOutcome::Ignored);
        }

        if drop.dragged_id == drop.target_id {
            // Depth-only move: re-indent against the preceding sibling,
            // located before the dragged node comes out.
            let (anchor_id, mut anchor_path) = {
                let (anchor, path) = find_preceding_sibling(&self.tasks, drop.target_id)
                    .ok_or(DropError::AnchorNotFound(drop.target_id))?;
                (anchor.id, path)
            };
            let dragged = remove_task(&mut self.tasks, drop.dragged_id)
                .ok_or(DropError::DraggedVanished(drop.dragged_id))?;
            if depth < anchor_path.len() - 1 {
                anchor_path.truncate(depth + 1);
            }
            reparent(&mut self.tasks, dragged, anchor_id, &anchor_path, depth)?;
        } else {
            let dragged = remove_task(&mut self.tasks, drop.dragged_id)
                .ok_or(DropError::DraggedVanished(drop.dragged_id))?;
            // The target's path must reflect the forest after the removal.
            let (target_id, mut target_path) = {
                let (target, path) = find_task(&self.tasks, drop.target_id)
                    .ok_or(DropError::TargetNotFound(drop.target_id))?;
                (target.id, path)
            };
            if depth < target_path.len() - 1 {
                target_path.truncate(depth + 1);
            }
            reparent(&mut self.tasks, dragged, target_id, &target_path, depth)?;
        }

        Ok(DropOutcome::Committed)
    }
}
