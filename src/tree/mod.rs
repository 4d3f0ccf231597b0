//! In-memory tree model for hierarchical configuration documents.
//!
//! A document is a forest of named root sections, each containing nested
//! subsections and leaf settings. The tree owns its nodes exclusively (no
//! shared or cyclic references); it is created by parsing, mutated through
//! the session layer and the merge operations, and destroyed when replaced
//! by a new load.

mod index;
mod model;
mod path;


// Re-export public API
pub use index::{key_of, leaves, resolve, resolve_mut};
pub use model::{Document, Section, Setting};
pub use path::PathKey;
