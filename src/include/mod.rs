//! # Include Module
//!
//! Resolves `!include "<path>"` directives into a tree of [`FileNode`]s and folds that
//! tree into one merged [`Document`](crate::document::Document).
//!
//! ## Directives
//!
//! A directive is a whole line which, once trimmed, reads `!include "<path>"` (the quotes
//! are optional). The line is removed from the including file and `<path>` is resolved
//! against the **root** configuration's directory, not the including file's.
//!
//! ```yaml
//! package: routes
//! out: gen
//! !include "routes/pets.yaml"
//! !include routes/users.yaml
//! ```
//!
//! ## Cycles
//!
//! Every recursive call carries an [`IncludeChain`] holding the files currently being
//! resolved. Opening a path that is already on the chain fails with
//! [`Error::IncludeCycle`](crate::Error::IncludeCycle). The check is per branch: one file
//! included from two independent branches is fine.
//!
//! ## Merge order
//!
//! [`FileNode::merged_document`] folds post-order. Each child's merged document is merged
//! into an empty accumulator in include order, then the node's own content is merged on
//! top, so a file's own scalars override those of the files it includes while sequences
//! and mappings accumulate.

mod node;
mod resolve;

pub use node::FileNode;
pub use resolve::{clean_path, resolve_includes, resolve_root, IncludeChain};
