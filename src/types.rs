use serde::{Deserialize, Serialize};

/// A single row of a mapping table: a shell-style glob and the manual page
/// fragment it points at.
///
/// An empty `target` marks the matched identifiers as intentionally
/// undocumented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub pattern: String,
    #[serde(default)]
    pub target: String,
}

impl MappingEntry {
    pub fn new(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: target.into(),
        }
    }

    /// Returns `true` if this entry declines to provide a reference.
    pub fn is_undocumented(&self) -> bool {
        self.target.is_empty()
    }
}

/// The entry selected for an identifier, together with the URL built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedReference {
    /// Position of the matched entry in evaluation order.
    pub entry: usize,
    /// Pattern text of the matched entry.
    pub pattern: String,
    /// Base URL the target is appended to.
    pub prefix: String,
    /// Target fragment of the matched entry, possibly empty.
    pub target: String,
    /// `prefix + target`, or `None` when the target is empty.
    pub url: Option<String>,
}

/// What happened to an identifier, keeping apart the two cases that
/// [`ReferenceResolver::resolve`](crate::resolution::ReferenceResolver::resolve)
/// collapses into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Documented { url: String },
    Undocumented,
    Unmapped,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Documented { .. } => "documented",
            Outcome::Undocumented => "undocumented",
            Outcome::Unmapped => "unmapped",
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Outcome::Documented { url } => Some(url),
            _ => None,
        }
    }
}

impl From<Option<&ResolvedReference>> for Outcome {
    /// Classifies an already-resolved reference; `None` means no entry matched.
    fn from(reference: Option<&ResolvedReference>) -> Self {
        match reference {
            Some(ResolvedReference { url: Some(url), .. }) => {
                Outcome::Documented { url: url.clone() }
            }
            Some(_) => Outcome::Undocumented,
            None => Outcome::Unmapped,
        }
    }
}

/// Summary of resolving a batch of identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// `(identifier, url)` for every identifier that produced a URL.
    pub resolved: Vec<(String, String)>,
    /// Identifiers with no usable reference.
    pub unresolved: Vec<String>,
    pub total: usize,
    pub resolved_count: usize,
}
