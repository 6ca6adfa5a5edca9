//! Read-only retrieval of recent lines from the accounting script's
//! daily log files. The script is the only writer; this module never
//! creates or modifies anything in the log directory.

use chrono::Local;
use log::warn;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Returned as the sole entry when no daily log can be read at all.
pub const NO_ENTRIES_PLACEHOLDER: &str = "No log entries found.";

/// Daily logs can grow large, so they are read backwards in chunks of
/// this size instead of being loaded whole.
const REVERSE_CHUNK_SIZE: u64 = 8192;

/// Return at most the last `max_lines` lines of the most relevant daily
/// log file, oldest first.
///
/// Today's `traffic-YYYY-MM-DD.log` is preferred; failing that, the
/// most recent daily log in the directory. If nothing matches or the
/// file can't be read, the result is a single placeholder entry rather
/// than an error.
pub fn tail_logs(log_dir: &Path, max_lines: usize) -> Vec<String> {
    match find_latest_log(log_dir) {
        Some(path) => match tail_file(&path, max_lines) {
            Ok(lines) => lines,
            Err(e) => {
                warn!("Unable to read {}: {e}", path.display());
                vec![NO_ENTRIES_PLACEHOLDER.to_string()]
            }
        },
        None => vec![NO_ENTRIES_PLACEHOLDER.to_string()],
    }
}

fn todays_log(log_dir: &Path) -> PathBuf {
    let today = Local::now().format("%Y-%m-%d");
    log_dir.join(format!("traffic-{today}.log"))
}

fn find_latest_log(log_dir: &Path) -> Option<PathBuf> {
    let today = todays_log(log_dir);
    if today.exists() {
        return Some(today);
    }
    let mut names: Vec<String> = std::fs::read_dir(log_dir)
        .ok()?
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with("traffic-") && name.ends_with(".log"))
        .collect();
    if names.is_empty() {
        return None;
    }
    // Descending lexical order equals descending date order for the
    // fixed-width date embedded in the filename.
    names.sort_unstable_by(|a, b| b.cmp(a));
    Some(log_dir.join(&names[0]))
}

/// Last `max_lines` lines of `path`, oldest first, reading backwards
/// from the end until enough newlines have been seen.
fn tail_file(path: &Path, max_lines: usize) -> std::io::Result<Vec<String>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut buf: Vec<u8> = Vec::new();
    let mut pos = len;
    while pos > 0 {
        let newlines = buf.iter().filter(|&&b| b == b'\n').count();
        if newlines > max_lines {
            break;
        }
        let step = REVERSE_CHUNK_SIZE.min(pos);
        pos -= step;
        file.seek(SeekFrom::Start(pos))?;
        let mut chunk = vec![0u8; step as usize];
        file.read_exact(&mut chunk)?;
        chunk.append(&mut buf);
        buf = chunk;
    }
    let text = String::from_utf8_lossy(&buf);
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.len() > max_lines {
        lines.drain(..lines.len() - max_lines);
    }
    Ok(lines)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn write_log(dir: &Path, name: &str, lines: &[&str]) {
        let mut file = File::create(dir.join(name)).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
    }

    #[test]
    fn last_three_of_ten_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let lines: Vec<String> = (1..=10).map(|i| format!("entry {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        write_log(tmp.path(), "traffic-2025-01-01.log", &refs);
        let tail = tail_logs(tmp.path(), 3);
        assert_eq!(tail, vec!["entry 8", "entry 9", "entry 10"]);
    }

    #[test]
    fn placeholder_when_directory_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(tail_logs(tmp.path(), 5), vec![NO_ENTRIES_PLACEHOLDER]);
    }

    #[test]
    fn placeholder_when_directory_is_missing() {
        let tail = tail_logs(Path::new("/nonexistent/tmon-logs"), 5);
        assert_eq!(tail, vec![NO_ENTRIES_PLACEHOLDER]);
    }

    #[test]
    fn non_matching_files_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write_log(tmp.path(), "notes.txt", &["not a log"]);
        write_log(tmp.path(), "traffic-stale.state", &["not a log either"]);
        assert_eq!(tail_logs(tmp.path(), 5), vec![NO_ENTRIES_PLACEHOLDER]);
    }

    #[test]
    fn prefers_todays_file() {
        let tmp = tempfile::tempdir().unwrap();
        let today = Local::now().format("%Y-%m-%d");
        write_log(tmp.path(), &format!("traffic-{today}.log"), &["today"]);
        write_log(tmp.path(), "traffic-2025-01-01.log", &["yesterday"]);
        assert_eq!(tail_logs(tmp.path(), 5), vec!["today"]);
    }

    #[test]
    fn falls_back_to_most_recent_date() {
        let tmp = tempfile::tempdir().unwrap();
        write_log(tmp.path(), "traffic-2025-01-01.log", &["january"]);
        write_log(tmp.path(), "traffic-2025-06-01.log", &["june"]);
        assert_eq!(tail_logs(tmp.path(), 5), vec!["june"]);
    }

    #[test]
    fn window_larger_than_file_returns_everything() {
        let tmp = tempfile::tempdir().unwrap();
        write_log(tmp.path(), "traffic-2025-01-01.log", &["one", "two"]);
        assert_eq!(tail_logs(tmp.path(), 50), vec!["one", "two"]);
    }

    #[test]
    fn reverse_read_crosses_chunk_boundaries() {
        let tmp = tempfile::tempdir().unwrap();
        // Roughly 60 KB, several times the reverse-read chunk size.
        let lines: Vec<String> = (0..1000)
            .map(|i| format!("{i:05} {}", "x".repeat(50)))
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        write_log(tmp.path(), "traffic-2025-01-01.log", &refs);
        let tail = tail_logs(tmp.path(), 4);
        assert_eq!(tail.len(), 4);
        assert_eq!(tail[0], lines[996]);
        assert_eq!(tail[3], lines[999]);
    }

    #[test]
    fn empty_file_yields_no_lines() {
        // The placeholder is for "no log found", not "log is empty".
        let tmp = tempfile::tempdir().unwrap();
        write_log(tmp.path(), "traffic-2025-01-01.log", &[]);
        assert!(tail_logs(tmp.path(), 5).is_empty());
    }
}
