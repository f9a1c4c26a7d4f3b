/// Reference resolution module.
///
/// Resolves fully-qualified identifiers to manual URLs by walking an ordered
/// glob table and taking the first entry that matches.
mod audit;
mod resolver;
mod table;

pub use audit::{find_shadowed, ShadowReason, ShadowedEntry};
pub use resolver::ReferenceResolver;
pub use table::MappingTable;
