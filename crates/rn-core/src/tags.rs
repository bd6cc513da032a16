//! OSM tag storage and the few tag values interpreted across crates.

use std::collections::BTreeMap;

/// Pass-through tag map.  Ordered so serialised output is stable.
pub type TagMap = BTreeMap<String, String>;

/// `true` if an OSM `oneway` value marks the way as one-way.
///
/// Only `yes`, `1` and `true` (any case) count.  `-1` (reverse one-way) and
/// `reversible` are treated as two-way.
pub fn is_oneway_value(value: &str) -> bool {
    ["yes", "1", "true"]
        .iter()
        .any(|accepted| value.eq_ignore_ascii_case(accepted))
}
