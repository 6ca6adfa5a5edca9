//! Core of the traffic monitor web UI: turns the accounting script's
//! report text into typed data and retrieves bounded recent history
//! from its daily log files.

#![warn(missing_docs)]

/// Invokes the external accounting script and captures its report.
pub mod collector;

/// Best-effort discovery of network interface names.
pub mod interfaces;

/// Bounded retrieval from the daily log files.
pub mod logs;

/// The report parser and its [`TrafficReport`] record.
pub mod report;

/// State-file housekeeping for the reset operation.
pub mod state;

pub use report::TrafficReport;
