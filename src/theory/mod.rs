//! Theory documents: the MTTS v5 record shape, how documents are fetched,
//! and the session-lifetime cache.

pub mod cache;
pub mod document;
pub mod source;

pub use cache::DocumentCache;
pub use document::TheoryDocument;
pub use source::{DocumentSource, HttpSource};

use thiserror::Error;

/// Everything that can go wrong resolving a theory name to a document.
/// These never propagate past the router boundary; they become `Error`
/// states with the message shown in the detail panel.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("Theory not found: {0}")]
    NotFound(String),
    #[error("Failed to load theory data: {0}")]
    Network(String),
    #[error("Malformed theory document: {0}")]
    Parse(String),
}
