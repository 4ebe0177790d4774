use serde::{Deserialize, Serialize};

/// A single work item: its own effort plus an ordered list of subtasks.
///
/// `hours` and `costs` cover this task alone — aggregates over a subtree are
/// derived on demand (see `ops::rollup`) and never stored back on the node.
/// The order of `children` is the display and drop order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique identifier, never reassigned after creation
    pub id: u64,
    /// Display label
    pub title: String,
    /// Estimated hours for this task alone
    #[serde(default)]
    pub hours: f64,
    /// Cost for this task alone
    #[serde(default)]
    pub costs: f64,
    /// Subtasks, in display order
    #[serde(default)]
    pub children: Vec<Task>,
}

impl Task {
    pub fn new(id: u64, title: impl Into<String>, hours: f64, costs: f64) -> Self {
        Task {
            id,
            title: title.into(),
            hours,
            costs,
            children: Vec::new(),
        }
    }

    /// Builder-style child attachment, used by seed data and tests.
    pub fn with_children(mut self, children: Vec<Task>) -> Self {
        self.children = children;
        self
    }

    /// Display label for a row: a parent lists its direct children's titles
    /// after its own, joined with " + ".
    pub fn combined_title(&self) -> String {
        let mut label = self.title.clone();
        for child in &self.children {
            label.push_str(" + ");
            label.push_str(&child.title);
        }
        label
    }
}
