use serde::{Deserialize, Serialize};

use super::task::Task;

/// A loaded work breakdown document: a titled forest of root tasks.
///
/// The sheet is seeded once at startup; afterwards the forest is mutated
/// exclusively through the drag controller's transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn default_title() -> String {
    "Work breakdown".to_string()
}

impl Sheet {
    /// The six-task demo sheet written by `bd init`.
    pub fn sample() -> Self {
        Sheet {
            title: "Sample project".into(),
            tasks: vec![
                Task::new(1, "Task 1", 3.0, 12.5),
                Task::new(2, "Task 2", 2.0, 7.5),
                Task::new(3, "Task 3", 4.0, 17.5),
                Task::new(4, "Task 4", 5.0, 18.5).with_children(vec![
                    Task::new(5, "Task 5", 1.0, 1.5)
                        .with_children(vec![Task::new(6, "Task 6", 4.0, 5.0)]),
                ]),
            ],
        }
    }
}
