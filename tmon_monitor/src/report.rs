/*
Primary Interface: eth0
Monitoring since: 2026-08-28 10:15:00
Time elapsed: 2 days, 4:00:00
Downloaded: 1048576 bytes (1.0 MB)
...
=== ALL INTERFACES ===
  eth0 RX: 1048576 TX: 524288
*/

use serde::{Deserialize, Serialize};

/// Marks the start of the per-interface summary section. Everything
/// after this line that looks like an interface counter line belongs to
/// [`TrafficReport::all_interfaces`], never to the scalar fields.
const ALL_INTERFACES_MARKER: &str = "ALL INTERFACES";

/// One parsed accounting report.
///
/// All fields are passed through verbatim as the script formatted them;
/// a field the report didn't contain is an empty string, never an
/// error. The record is a pure projection of one input string: parsing
/// the same text always yields the same record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficReport {
    /// The interface currently being measured.
    pub primary_interface: String,
    /// When measurement started, as the script formatted it.
    pub monitoring_since: String,
    /// Elapsed measurement time, as the script formatted it.
    pub time_elapsed: String,
    /// Cumulative bytes downloaded, without the parenthesized unit.
    pub download_used: String,
    /// Cumulative bytes uploaded, without the parenthesized unit.
    pub upload_used: String,
    /// Cumulative total bytes, without the parenthesized unit.
    pub total_used: String,
    /// Received counter for the current sampling window.
    pub current_rx: String,
    /// Transmitted counter for the current sampling window.
    pub current_tx: String,
    /// Combined counter for the current sampling window.
    pub current_total: String,
    /// Formatted average download rate.
    pub avg_download_rate: String,
    /// Formatted average upload rate.
    pub avg_upload_rate: String,
    /// Raw per-interface summary lines, in report order.
    pub all_interfaces: Vec<String>,
    /// Path of the daily log file the script reported.
    pub log_file: String,
    /// Path of the state file the script reported.
    pub state_file: String,
}

impl TrafficReport {
    /// Parse one report emitted by the accounting script.
    ///
    /// The report format is unversioned `Label: value` text, so this is
    /// a keyword-anchored extractor rather than a grammar: each line is
    /// run through an ordered rule list, first match wins, unmatched
    /// lines are ignored. It cannot fail; feeding it an error message
    /// (or nothing at all) yields a mostly-empty record.
    pub fn parse(raw: &str) -> Self {
        let mut report = Self::default();
        let mut in_all_interfaces = false;
        for line in raw.lines() {
            if line.contains(ALL_INTERFACES_MARKER) {
                in_all_interfaces = true;
                continue;
            }
            // Section membership is checked before any scalar rule:
            // per-interface lines carry RX:/TX: labels that would
            // otherwise clobber the top-level counters.
            if in_all_interfaces
                && line.contains(':')
                && (line.contains("RX:") || line.contains("TX:"))
            {
                report.all_interfaces.push(line.trim().to_string());
                continue;
            }
            report.apply_scalar_rules(line);
        }
        report
    }

    /// The ordered scalar rule list. Order matters: `RX:` must exclude
    /// combined lines that also carry `TX:`, and the aggregate `∑ :`
    /// marker is its own key rather than a `TX:` lookalike.
    fn apply_scalar_rules(&mut self, line: &str) {
        if line.contains("Primary Interface:") {
            self.primary_interface = after_first_colon(line);
        } else if line.contains("Monitoring since:") {
            self.monitoring_since = after_first_colon(line);
        } else if line.contains("Time elapsed:") {
            self.time_elapsed = after_first_colon(line);
        } else if line.contains("Downloaded") && line.contains("bytes") {
            self.download_used = colon_field_before_paren(line);
        } else if line.contains("Uploaded") && line.contains("bytes") {
            self.upload_used = colon_field_before_paren(line);
        } else if line.contains("Total traffic") && line.contains("bytes") {
            self.total_used = colon_field_before_paren(line);
        } else if line.contains("RX:") && !line.contains("TX:") {
            self.current_rx = after_first_colon(line);
        } else if line.contains("TX:") {
            self.current_tx = after_first_colon(line);
        } else if line.contains("∑ :") {
            self.current_total = after_first_colon(line);
        } else if line.contains("Avg. download rate:") {
            self.avg_download_rate = after_first_colon(line);
        } else if line.contains("Avg. upload rate") {
            self.avg_upload_rate = after_first_colon(line);
        } else if line.contains("Log file:") {
            self.log_file = after_first_colon(line);
        } else if line.contains("State file:") {
            self.state_file = after_first_colon(line);
        }
    }
}

/// Everything after the first colon, trimmed. Values may themselves
/// contain colons (timestamps, durations), so only the first one is a
/// split point.
fn after_first_colon(line: &str) -> String {
    line.splitn(2, ':').nth(1).unwrap_or("").trim().to_string()
}

/// The second colon-delimited field, truncated at the first `(` to drop
/// the parenthesized secondary unit, trimmed.
fn colon_field_before_paren(line: &str) -> String {
    line.split(':')
        .nth(1)
        .unwrap_or("")
        .split('(')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}
