use chrono::NaiveDate;
use uuid::Uuid;

use super::draft::{SnippetDraft, ValidationError};
use super::snippet::Snippet;

/// Sample snippets shown on launch, bundled into the binary.
const SEED_JSON: &str = include_str!("seed.json");

/// The ordered snippet collection, newest first.
///
/// Grows by prepend on [`add`](SnippetStore::add), shrinks by id match on
/// [`remove`](SnippetStore::remove), and is never mutated in place otherwise.
/// There is no persistence behind it; the collection lives and dies with the
/// process.
#[derive(Debug, Default)]
pub struct SnippetStore {
    snippets: Vec<Snippet>,
}

impl SnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the bundled sample snippets.
    ///
    /// A malformed seed document degrades to an empty board rather than a
    /// startup failure.
    pub fn with_seed() -> Self {
        let snippets = serde_json::from_str(SEED_JSON).unwrap_or_default();
        Self { snippets }
    }

    /// Validates the draft and commits it as a new snippet at the front of
    /// the collection.
    ///
    /// The form gates submission on the same checks, but the store re-runs
    /// them so an invalid snippet can never enter the collection. Returns the
    /// created snippet with its freshly assigned identity.
    pub fn add(
        &mut self,
        draft: &SnippetDraft,
        author: &str,
        created_at: NaiveDate,
    ) -> Result<Snippet, ValidationError> {
        draft.validate()?;
        let language = draft.language.ok_or(ValidationError::NoLanguage)?;

        let snippet = Snippet {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            code: draft.code.clone(),
            language,
            tags: draft.tags.clone(),
            author: author.to_string(),
            created_at,
        };

        self.snippets.insert(0, snippet.clone());
        Ok(snippet)
    }

    /// Removes the snippet with the given id. Returns whether a removal
    /// occurred; a missing id is a no-op, not an error.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.id != id);
        self.snippets.len() < before
    }

    /// The current collection, newest first.
    pub fn list(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, id: Uuid) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
