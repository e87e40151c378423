use thiserror::Error;

use super::snippet::SnippetLanguage;

/// Reason a draft was rejected on submit.
///
/// The only error kind the core produces: recoverable, surfaced to the user,
/// and the draft it refers to is left untouched so the user can correct and
/// resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Code is required")]
    EmptyCode,
    #[error("Select a language")]
    NoLanguage,
}

/// Transient state of the add-snippet form.
///
/// Mirrors the fields of [`super::Snippet`] minus the identity fields the
/// store assigns on commit, plus the pending-tag scratch text the tag entry
/// works from. Created fresh each time the form opens and dropped on submit
/// or cancel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetDraft {
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: Option<SnippetLanguage>,
    pub tags: Vec<String>,
    pub pending_tag: String,
}

impl SnippetDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits the pending tag text to the draft's tag list.
    ///
    /// The text is trimmed and lowercased first. An empty result or a tag the
    /// draft already carries is a no-op; otherwise the tag is appended and
    /// the pending text cleared.
    pub fn add_pending_tag(&mut self) {
        let tag = self.pending_tag.trim().to_lowercase();
        if tag.is_empty() || self.tags.contains(&tag) {
            return;
        }
        self.tags.push(tag);
        self.pending_tag.clear();
    }

    /// Removes an exact-match tag from the draft.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Submit gate: title, code, and language must all be present.
    ///
    /// The form prevents submission of an invalid draft, but the store calls
    /// this again before committing; the rule is an invariant, not a UI
    /// nicety. A failed check changes nothing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.code.trim().is_empty() {
            return Err(ValidationError::EmptyCode);
        }
        if self.language.is_none() {
            return Err(ValidationError::NoLanguage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SnippetDraft {
        SnippetDraft {
            title: String::from("Quick sort"),
            description: String::from("classic partition scheme"),
            code: String::from("fn sort() {}"),
            language: Some(SnippetLanguage::Rust),
            tags: vec![String::from("sorting")],
            pending_tag: String::new(),
        }
    }

    #[test]
    fn pending_tag_is_trimmed_and_lowercased() {
        let mut draft = SnippetDraft::new();
        draft.pending_tag = String::from("  Rust ");
        draft.add_pending_tag();

        assert_eq!(draft.tags, vec![String::from("rust")]);
        assert!(draft.pending_tag.is_empty());
    }

    #[test]
    fn duplicate_pending_tag_is_a_noop() {
        let mut draft = SnippetDraft::new();
        draft.tags.push(String::from("rust"));
        draft.pending_tag = String::from("RUST");
        draft.add_pending_tag();

        assert_eq!(draft.tags, vec![String::from("rust")]);
        assert_eq!(draft.pending_tag, "RUST");
    }

    #[test]
    fn blank_pending_tag_is_a_noop() {
        let mut draft = SnippetDraft::new();
        draft.pending_tag = String::from("   ");
        draft.add_pending_tag();

        assert!(draft.tags.is_empty());
    }

    #[test]
    fn remove_tag_only_touches_the_exact_match() {
        let mut draft = valid_draft();
        draft.tags = vec![String::from("rust"), String::from("rustup")];
        draft.remove_tag("rust");

        assert_eq!(draft.tags, vec![String::from("rustup")]);
    }

    #[test]
    fn validate_reports_each_missing_required_field() {
        let mut draft = valid_draft();
        draft.title = String::from("   ");
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTitle));

        let mut draft = valid_draft();
        draft.code = String::new();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyCode));

        let mut draft = valid_draft();
        draft.language = None;
        assert_eq!(draft.validate(), Err(ValidationError::NoLanguage));

        assert_eq!(valid_draft().validate(), Ok(()));
    }

    #[test]
    fn failed_validation_leaves_the_draft_untouched() {
        let mut draft = valid_draft();
        draft.title.clear();
        let before = draft.clone();

        assert!(draft.validate().is_err());
        assert_eq!(draft, before);
    }
}
