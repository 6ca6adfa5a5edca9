//! Shells out to the accounting script and captures the report it
//! prints. Invocation failure is not an error here: it becomes a
//! textual message that the report parser digests like any other
//! report, degrading to a mostly-empty record downstream.

use log::error;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// The script samples counters and returns quickly; anything longer
/// than this means it is wedged.
const SCRIPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Run the accounting script and return whatever it printed to stdout,
/// optionally scoped to one interface with `--interface <name>`.
pub async fn get_traffic_stats(script_path: &str, interface: Option<&str>) -> String {
    if !Path::new(script_path).exists() {
        error!("Unable to locate accounting script at {script_path}");
        return format!("Error getting traffic stats: {script_path} not found");
    }

    let mut command = Command::new(script_path);
    if let Some(interface) = interface {
        command.args(["--interface", interface]);
    }

    match tokio::time::timeout(SCRIPT_TIMEOUT, command.output()).await {
        Ok(Ok(output)) => String::from_utf8_lossy(&output.stdout).to_string(),
        Ok(Err(e)) => {
            error!("Unable to invoke {script_path}: {e}");
            format!("Error getting traffic stats: {e}")
        }
        Err(_) => {
            error!("{script_path} gave no report within {SCRIPT_TIMEOUT:?}");
            "Error getting traffic stats: script timed out".to_string()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn captures_stdout() {
        let output = get_traffic_stats("/bin/echo", None).await;
        assert_eq!(output, "\n");
    }

    #[tokio::test]
    async fn passes_the_interface_flag() {
        let output = get_traffic_stats("/bin/echo", Some("eth0")).await;
        assert_eq!(output, "--interface eth0\n");
    }

    #[tokio::test]
    async fn missing_script_becomes_an_error_message() {
        let output = get_traffic_stats("/nonexistent/tmon.sh", None).await;
        assert!(output.starts_with("Error getting traffic stats:"));
    }
}
