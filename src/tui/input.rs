use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::drag::{DragStart, DropEvent, DropOutcome};
use crate::io::session_log;

use super::app::App;

/// Keyboard input. The sheet itself is mouse-driven.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

/// Mouse input: the pointer-drag event source for the drag controller.
///
/// Press arms a gesture on the grabbed row, drag moves the drop-zone
/// highlight, release runs the drop transaction. A release outside the
/// sheet abandons the gesture.
pub fn handle_mouse(app: &mut App, me: MouseEvent) {
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = app.row_at(me.column, me.row) {
                app.controller.handle_drag_start(DragStart {
                    task_id: id,
                    pointer_x: f64::from(me.column),
                });
                app.status = None;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.controller.dragged_id().is_some() {
                match app.row_at(me.column, me.row) {
                    Some(id) => app.controller.handle_drag_enter(id),
                    None => app.controller.handle_drag_leave(),
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(dragged_id) = app.controller.dragged_id() else {
                return;
            };
            let Some(target_id) = app.row_at(me.column, me.row) else {
                app.controller.handle_drag_cancel();
                return;
            };
            let outcome = app.controller.handle_drop(
                DropEvent {
                    dragged_id,
                    target_id,
                    pointer_x: f64::from(me.column),
                },
                &mut app.rows,
            );
            if let DropOutcome::RolledBack(err) = outcome {
                let _ = session_log::record_rollback(
                    &app.log_path,
                    dragged_id,
                    target_id,
                    &err.to_string(),
                );
                app.status = Some(format!("drop reverted: {}", err));
            }
        }
        _ => {}
    }
}
