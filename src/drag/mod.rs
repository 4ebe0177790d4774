pub mod events;
pub mod session;

pub use events::{DragStart, DropEvent, Renderer};
pub use session::{DragController, DragPhase, DropError, DropOutcome};
