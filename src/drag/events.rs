use crate::model::task::Task;

/// Start of a drag gesture: the grabbed row's id and the pointer's
/// horizontal position at the moment of the grab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStart {
    pub task_id: u64,
    pub pointer_x: f64,
}

/// A pointer release over a drop target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropEvent {
    /// Id carried since drag start (the transfer payload)
    pub dragged_id: u64,
    /// Id attached to the row the pointer released over
    pub target_id: u64,
    /// Raw pointer x at release, not yet offset-adjusted
    pub pointer_x: f64,
}

/// Redraw seam between the drag controller and the presentation layer.
///
/// Called once per committed or rolled-back transaction, after the forest
/// has reached its final state for that transaction. Cancelled and ignored
/// drops do not trigger a render.
pub trait Renderer {
    fn render(&mut self, tasks: &[Task]);
}
