//! Best-effort discovery of candidate network interface names. All
//! failure is absorbed into a fixed fallback; callers always get a
//! non-empty list.

use default_net::get_interfaces;

/// Served when discovery fails or filters everything out.
pub const FALLBACK_INTERFACES: [&str; 2] = ["eth0", "wlan0"];

/// List the configured network link names, in the order the OS reports
/// them, minus loopback and container/bridge interfaces. Never empty
/// and never fails: any problem yields [`FALLBACK_INTERFACES`].
pub fn list_interfaces() -> Vec<String> {
    let discovered = get_interfaces().iter().map(|eth| eth.name.clone()).collect();
    let kept = filter_interface_names(discovered);
    if kept.is_empty() {
        FALLBACK_INTERFACES.iter().map(|s| s.to_string()).collect()
    } else {
        kept
    }
}

fn filter_interface_names(names: Vec<String>) -> Vec<String> {
    names.into_iter().filter(|name| !is_uninteresting(name)).collect()
}

fn is_uninteresting(name: &str) -> bool {
    name == "lo" || name.starts_with("docker") || name.starts_with("br-")
}
