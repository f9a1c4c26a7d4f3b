//! Detection of table entries that can never be selected.
//!
//! Only two conservative rules are applied, so every reported entry is truly
//! unreachable; some unreachable entries may go unreported.

use serde::Serialize;
use tracing::warn;

use super::table::MappingTable;

/// Why a later entry is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowReason {
    /// An earlier entry has the identical pattern.
    Duplicate,
    /// An earlier `<literal>*` entry covers every identifier this one can match.
    CoveredByPrefix,
}

impl ShadowReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowReason::Duplicate => "duplicate",
            ShadowReason::CoveredByPrefix => "covered-by-prefix",
        }
    }
}

/// A table entry hidden behind an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedEntry {
    pub entry: usize,
    pub pattern: String,
    pub shadowed_by: usize,
    pub shadowing_pattern: String,
    pub reason: ShadowReason,
}

/// Returns the literal part of a pattern made only of literal characters
/// followed by one trailing `*`.
fn literal_prefix(pattern: &str) -> Option<&str> {
    let prefix = pattern.strip_suffix('*')?;
    if prefix.contains(['*', '?', '[', ']']) {
        return None;
    }
    Some(prefix)
}

fn shadow_reason(earlier: &str, later: &str) -> Option<ShadowReason> {
    if earlier == later {
        return Some(ShadowReason::Duplicate);
    }
    // Any identifier matched by `later` starts with its literal lead-in, and
    // that lead-in starts with `prefix`.
    match literal_prefix(earlier) {
        Some(prefix) if later.starts_with(prefix) => Some(ShadowReason::CoveredByPrefix),
        _ => None,
    }
}

/// Reports entries of `table` that an earlier entry always wins over.
///
/// Each shadowed entry is reported once, against the first entry that hides
/// it. The table is left untouched.
pub fn find_shadowed(table: &MappingTable) -> Vec<ShadowedEntry> {
    let patterns: Vec<&str> = table.entries().map(|e| e.pattern.as_str()).collect();
    let mut shadowed = Vec::new();

    for (later, later_pattern) in patterns.iter().enumerate() {
        let hit = patterns[..later]
            .iter()
            .enumerate()
            .find_map(|(earlier, earlier_pattern)| {
                shadow_reason(earlier_pattern, later_pattern).map(|reason| (earlier, reason))
            });

        if let Some((earlier, reason)) = hit {
            shadowed.push(ShadowedEntry {
                entry: later,
                pattern: later_pattern.to_string(),
                shadowed_by: earlier,
                shadowing_pattern: patterns[earlier].to_string(),
                reason,
            });
        }
    }

    if !shadowed.is_empty() {
        warn!(count = shadowed.len(), "mapping table has unreachable entries");
    }

    shadowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_prefix_requires_single_trailing_star() {
        assert_eq!(literal_prefix("a.b.*"), Some("a.b."));
        assert_eq!(literal_prefix("a.*.c"), None);
        assert_eq!(literal_prefix("a.?.*"), None);
        assert_eq!(literal_prefix("a.b"), None);
    }

    #[test]
    fn question_mark_prefix_is_not_treated_as_cover() {
        assert_eq!(shadow_reason("a.?", "a.*"), None);
    }

    #[test]
    fn specific_before_general_is_fine() {
        assert_eq!(shadow_reason("a.b.show_*", "a.b.*"), None);
    }

    #[test]
    fn general_before_specific_is_reported() {
        assert_eq!(
            shadow_reason("a.*", "a.b.*"),
            Some(ShadowReason::CoveredByPrefix)
        );
    }
}
