use tracing::{debug, trace};

use super::table::MappingTable;
use crate::types::*;

/// Resolves identifiers to manual URLs against an immutable mapping table.
///
/// The resolver holds no interior mutability, so a shared reference can be
/// used from any number of threads at once.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    prefix: String,
    table: MappingTable,
}

impl ReferenceResolver {
    /// Creates a resolver that appends matched targets to `prefix`.
    pub fn new(prefix: impl Into<String>, table: MappingTable) -> Self {
        Self {
            prefix: prefix.into(),
            table,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Returns the manual URL for `identifier`.
    ///
    /// Returns `None` both when no entry matches and when the first matching
    /// entry has an empty target. An empty target stops the search; later
    /// entries are never tried in its place.
    pub fn resolve(&self, identifier: &str) -> Option<String> {
        self.resolve_reference(identifier)?.url
    }

    /// Returns the entry selected for `identifier`, or `None` if no entry
    /// matches.
    pub fn resolve_reference(&self, identifier: &str) -> Option<ResolvedReference> {
        let Some((entry, mapping)) = self.table.first_match(identifier) else {
            trace!(identifier, "no mapping entry matched");
            return None;
        };

        debug!(
            identifier,
            entry,
            pattern = %mapping.pattern,
            target = %mapping.target,
            "mapping entry matched"
        );

        let url = if mapping.is_undocumented() {
            None
        } else {
            Some(format!("{}{}", self.prefix, mapping.target))
        };

        Some(ResolvedReference {
            entry,
            pattern: mapping.pattern.clone(),
            prefix: self.prefix.clone(),
            target: mapping.target.clone(),
            url,
        })
    }

    /// Classifies `identifier` as documented, explicitly undocumented, or
    /// unmapped.
    pub fn outcome(&self, identifier: &str) -> Outcome {
        Outcome::from(self.resolve_reference(identifier).as_ref())
    }

    /// Resolves a batch of identifiers, returning a summary of the results.
    pub fn resolve_all(&self, identifiers: &[String]) -> ResolutionResult {
        let total = identifiers.len();
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();

        for identifier in identifiers {
            match self.resolve(identifier) {
                Some(url) => resolved.push((identifier.clone(), url)),
                None => unresolved.push(identifier.clone()),
            }
        }

        let resolved_count = resolved.len();

        ResolutionResult {
            resolved,
            unresolved,
            total,
            resolved_count,
        }
    }
}
