use glob::{MatchOptions, Pattern};

use crate::errors::{DocRefError, Result};
use crate::types::MappingEntry;

/// `*` runs across `.` and `/`; letters are compared exactly.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Rewrites a shell-style pattern into the `glob` crate's syntax.
///
/// Runs of `*` collapse to a single `*`, since `**` only means "any run of
/// characters" here. A `[` with no closing `]` stands for itself and becomes
/// the class `[[]`. Class bounds follow shell rules: a leading `!` negates,
/// and a `]` right after the opening bracket (or after `!`) is a member.
fn to_glob_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the class opened at `open`, if any.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut j = open + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars
        .get(j..)?
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// An entry together with its compiled glob.
#[derive(Debug, Clone)]
struct CompiledEntry {
    entry: MappingEntry,
    glob: Pattern,
}

/// Ordered sequence of mapping entries.
///
/// Order is fixed at construction and is the only tie-break between
/// overlapping patterns: the table never sorts or deduplicates its entries.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<CompiledEntry>,
}

impl MappingTable {
    /// Compiles the given entries, keeping their order.
    ///
    /// Patterns keep their original text; only the compiled form is
    /// rewritten. Fails on the first pattern the matcher still rejects.
    pub fn new(entries: impl IntoIterator<Item = MappingEntry>) -> Result<Self> {
        let entries = entries
            .into_iter()
            .map(|entry| {
                let glob = Pattern::new(&to_glob_syntax(&entry.pattern)).map_err(|e| {
                    DocRefError::Pattern {
                        pattern: entry.pattern.clone(),
                        message: e.to_string(),
                    }
                })?;
                Ok(CompiledEntry { entry, glob })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Builds a table from `(pattern, target)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|(pattern, target)| MappingEntry::new(*pattern, *target)),
        )
    }

    /// Returns the first entry, in insertion order, whose pattern matches the
    /// whole identifier. Later entries are not consulted.
    pub fn first_match(&self, identifier: &str) -> Option<(usize, &MappingEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, compiled)| compiled.glob.matches_with(identifier, MATCH_OPTIONS))
            .map(|(index, compiled)| (index, &compiled.entry))
    }

    /// Iterates over the entries in evaluation order.
    pub fn entries(&self) -> impl Iterator<Item = &MappingEntry> + '_ {
        self.entries.iter().map(|compiled| &compiled.entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends the entries of `other` after this table's entries.
    pub fn extend(&mut self, other: MappingTable) {
        self.entries.extend(other.entries);
    }
}
