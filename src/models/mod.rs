//! Data model for the snippet board: the snippet record itself, the ordered
//! in-memory store, and the transient add-form draft.

pub mod draft;
pub mod snippet;
pub mod store;

pub use draft::{SnippetDraft, ValidationError};
pub use snippet::{Snippet, SnippetLanguage};
pub use store::SnippetStore;
