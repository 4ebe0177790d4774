use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;

/// Self-documenting header written at the top of a new session log.
const FILE_HEADER: &str = "\
# breakdown session log — rolled-back drop transactions
# Each entry records a drop that failed and was reverted.
# Safe to delete at any time.

";

/// Append one rollback entry.
///
/// Failures here must never interrupt the UI; callers ignore the result.
pub fn record_rollback(path: &Path, dragged_id: u64, target_id: u64, error: &str) -> io::Result<()> {
    let is_new = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if is_new {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    writeln!(
        file,
        "{} dragged={} target={} error={}",
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        dragged_id,
        target_id,
        error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_entry_writes_the_header_once() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("breakdown.log");

        record_rollback(&path, 1, 3, "no anchor sibling found for task 1").unwrap();
        record_rollback(&path, 2, 5, "drop target 5 not found in the sheet").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("session log").count(), 1);
        assert!(text.contains("dragged=1 target=3"));
        assert!(text.contains("dragged=2 target=5"));
    }
}
