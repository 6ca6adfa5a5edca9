//! Removes the accounting script's state files so it starts counting
//! from zero on its next run. The state files themselves are opaque to
//! the web UI; they are only ever deleted, never parsed.

use std::path::Path;

/// Delete every `traffic-*.state` file in `state_dir`, returning how
/// many were removed. Other files in the directory are left alone.
pub fn clear_state_files(state_dir: &Path) -> std::io::Result<usize> {
    let mut removed = 0;
    for entry in std::fs::read_dir(state_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("traffic-") && name.ends_with(".state") {
            std::fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn removes_only_state_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("traffic-eth0.state"), "1234").unwrap();
        fs::write(tmp.path().join("traffic-wlan0.state"), "5678").unwrap();
        fs::write(tmp.path().join("traffic-2025-01-01.log"), "keep").unwrap();
        fs::write(tmp.path().join("readme.txt"), "keep").unwrap();

        let removed = clear_state_files(tmp.path()).unwrap();
        assert_eq!(removed, 2);
        assert!(!tmp.path().join("traffic-eth0.state").exists());
        assert!(tmp.path().join("traffic-2025-01-01.log").exists());
        assert!(tmp.path().join("readme.txt").exists());
    }

    #[test]
    fn empty_directory_removes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(clear_state_files(tmp.path()).unwrap(), 0);
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(clear_state_files(Path::new("/nonexistent/tmon-state")).is_err());
    }
}
