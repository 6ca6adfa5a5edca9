//! Configuration for the traffic monitor web UI. It maps to
//! `/etc/tmon.conf`, falling back to built-in defaults when the file
//! does not exist.

mod etc;

pub use etc::{ConfigError, TmonConfig};
