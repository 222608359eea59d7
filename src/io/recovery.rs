use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append a line to `recovery.log` in the data directory.
///
/// Used for degraded states that must never block rendering: a corrupt
/// storage key, an unreadable history file. Failures to log are ignored;
/// the log is an aid, not a dependency.
pub fn log_recovery(data_dir: &Path, context: &str, detail: &str) {
    let line = format!(
        "[{}] {}: {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
        context,
        detail
    );
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("recovery.log"))
    {
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        log_recovery(dir.path(), "currentPrograms", "parse failure");
        log_recovery(dir.path(), "currentRoadmap", "parse failure");
        let text = std::fs::read_to_string(dir.path().join("recovery.log")).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("currentPrograms: parse failure"));
    }

    #[test]
    fn missing_directory_is_silent() {
        log_recovery(Path::new("/nonexistent/unitrack"), "x", "y");
    }
}
