//! Version descriptor parsing
//!
//! The descriptor is a small makefile-style text file in the upstream source
//! tree (`Config/version.mk` by default). The version is the value of the
//! first `VERSION=` line.

use crate::config::DESCRIPTOR_KEY;

/// Extract the version string from descriptor text.
///
/// Scans for the first line that starts with `VERSION=` (after trimming
/// surrounding whitespace) and returns the trimmed value. Returns `None`
/// when no such line exists or the value trims to empty.
pub fn parse_version(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (key, value) = line.trim().split_once('=')?;
        if key != DESCRIPTOR_KEY {
            return None;
        }
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}
