use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::task::Task;

/// Structured result from `bd check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A validation error (something that must be fixed before drags behave).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// The same id appears more than once in the forest
    #[serde(rename = "duplicate_id")]
    DuplicateId { id: u64, count: usize },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::DuplicateId { id, count } => {
                write!(f, "task id {} appears {} times", id, count)
            }
        }
    }
}

/// A validation warning (non-critical issue).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// hours/costs is NaN or infinite — rollups would poison every ancestor
    #[serde(rename = "non_finite_value")]
    NonFiniteValue { id: u64, field: &'static str },
    #[serde(rename = "negative_value")]
    NegativeValue { id: u64, field: &'static str },
}

impl fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckWarning::NonFiniteValue { id, field } => {
                write!(f, "task {} has a non-finite {}", id, field)
            }
            CheckWarning::NegativeValue { id, field } => {
                write!(f, "task {} has a negative {}", id, field)
            }
        }
    }
}

/// Validate sheet invariants. Read-only.
///
/// Checks performed:
/// 1. Every task id is unique across the whole forest
/// 2. Warnings for non-finite or negative hours/costs
pub fn check_sheet(tasks: &[Task]) -> CheckResult {
    let mut result = CheckResult::default();

    let mut counts: IndexMap<u64, usize> = IndexMap::new();
    collect(tasks, &mut counts, &mut result.warnings);

    for (id, count) in counts {
        if count > 1 {
            result.errors.push(CheckError::DuplicateId { id, count });
        }
    }

    result.valid = result.errors.is_empty();
    result
}

fn collect(tasks: &[Task], counts: &mut IndexMap<u64, usize>, warnings: &mut Vec<CheckWarning>) {
    for task in tasks {
        *counts.entry(task.id).or_insert(0) += 1;
        for (field, value) in [("hours", task.hours), ("costs", task.costs)] {
            if !value.is_finite() {
                warnings.push(CheckWarning::NonFiniteValue { id: task.id, field });
            } else if value < 0.0 {
                warnings.push(CheckWarning::NegativeValue { id: task.id, field });
            }
        }
        collect(&task.children, counts, warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sheet::Sheet;

    #[test]
    fn sample_sheet_is_valid() {
        let sheet = Sheet::sample();
        let result = check_sheet(&sheet.tasks);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn duplicate_ids_are_errors() {
        let forest = vec![
            Task::new(1, "a", 0.0, 0.0),
            Task::new(2, "b", 0.0, 0.0).with_children(vec![Task::new(1, "dup", 0.0, 0.0)]),
        ];
        let result = check_sheet(&forest);
        assert!(!result.valid);
        assert!(matches!(
            result.errors[0],
            CheckError::DuplicateId { id: 1, count: 2 }
        ));
    }

    #[test]
    fn negative_and_non_finite_values_warn() {
        let forest = vec![
            Task::new(1, "a", -2.0, 0.0),
            Task::new(2, "b", f64::NAN, 0.0),
        ];
        let result = check_sheet(&forest);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
    }
}
