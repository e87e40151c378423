//! Search and tag filtering over the snippet collection.
//!
//! Everything here is a pure function of its inputs: the visible subset is
//! recomputed from scratch whenever the store, the search term, or the
//! selected tags change. At board scale there is nothing worth memoizing.

use std::collections::HashSet;

use crate::models::Snippet;

/// The user's current filter: a free-text search term plus the set of tags
/// toggled on. Both stages must pass for a snippet to be visible.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search_term: String,
    pub selected_tags: HashSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any filtering is in effect.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_tags.is_empty()
    }

    /// Toggles a tag's membership in the selection. Self-inverse pairwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Empties the tag selection in one step.
    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
    }

    /// Combined predicate: the search stage AND the tag stage.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        self.matches_search(snippet) && self.matches_tags(snippet)
    }

    /// Case-insensitive substring match against title, description, or any
    /// tag. An empty term matches everything.
    fn matches_search(&self, snippet: &Snippet) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        snippet.title.to_lowercase().contains(&term)
            || snippet.description.to_lowercase().contains(&term)
            || snippet.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    }

    /// Subset check: every selected tag must be on the snippet. An empty
    /// selection matches everything.
    fn matches_tags(&self, snippet: &Snippet) -> bool {
        self.selected_tags.iter().all(|tag| snippet.has_tag(tag))
    }
}

/// Applies the filter to the collection, preserving its relative order.
pub fn apply<'a>(snippets: &'a [Snippet], filter: &FilterState) -> Vec<&'a Snippet> {
    snippets.iter().filter(|s| filter.matches(s)).collect()
}

/// Distinct tags across the whole collection, in first-seen order.
///
/// First-seen over the newest-first collection, so a freshly added snippet's
/// tags surface at the front of the filter row. Deterministic for a given
/// collection.
pub fn tag_index(snippets: &[Snippet]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for snippet in snippets {
        for tag in &snippet.tags {
            if seen.insert(tag.clone()) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SnippetLanguage;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn snippet(title: &str, description: &str, tags: &[&str]) -> Snippet {
        Snippet {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            code: String::from("fn main() {}"),
            language: SnippetLanguage::Rust,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: String::from("tester"),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    fn sample_board() -> Vec<Snippet> {
        vec![
            snippet("React useState Hook", "component state", &["react", "hooks", "state"]),
            snippet("CSS Flexbox Center", "perfect centering", &["css", "flexbox", "layout"]),
            snippet("Python List Comprehension", "efficient lists", &["python", "loops"]),
        ]
    }

    #[test]
    fn empty_filter_returns_the_full_collection_in_order() {
        let board = sample_board();
        let visible = apply(&board, &FilterState::new());

        let titles: Vec<_> = visible.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["React useState Hook", "CSS Flexbox Center", "Python List Comprehension"]
        );
    }

    #[test]
    fn search_matches_title_description_and_tags_case_insensitively() {
        let board = sample_board();
        let mut filter = FilterState::new();

        filter.search_term = String::from("PYTHON");
        assert_eq!(apply(&board, &filter).len(), 1);

        filter.search_term = String::from("Centering");
        let visible = apply(&board, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "CSS Flexbox Center");

        filter.search_term = String::from("hook");
        // Matches the title "...Hook" and the tag "hooks" on the same snippet.
        assert_eq!(apply(&board, &filter).len(), 1);

        filter.search_term = String::from("no such thing");
        assert!(apply(&board, &filter).is_empty());
    }

    #[test]
    fn selected_tags_require_every_tag_not_just_one() {
        let mut board = sample_board();
        board.push(snippet("CSS Grid Areas", "grid layout", &["css", "grid"]));

        let mut filter = FilterState::new();
        filter.toggle_tag("css");
        assert_eq!(apply(&board, &filter).len(), 2);

        filter.toggle_tag("flexbox");
        let visible = apply(&board, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "CSS Flexbox Center");
    }

    #[test]
    fn search_and_tag_stages_are_combined_with_and() {
        let board = sample_board();
        let mut filter = FilterState::new();
        filter.search_term = String::from("css");
        filter.toggle_tag("react");

        assert!(apply(&board, &filter).is_empty());
    }

    #[test]
    fn toggle_is_self_inverse() {
        let mut filter = FilterState::new();
        filter.toggle_tag("css");
        let selected = filter.selected_tags.clone();

        filter.toggle_tag("flexbox");
        filter.toggle_tag("flexbox");

        assert_eq!(filter.selected_tags, selected);
    }

    #[test]
    fn clear_tags_empties_the_selection() {
        let mut filter = FilterState::new();
        filter.toggle_tag("css");
        filter.toggle_tag("react");
        filter.clear_tags();

        assert!(filter.selected_tags.is_empty());
        assert!(!filter.is_active());
    }

    #[test]
    fn tag_index_contains_a_tag_iff_some_snippet_has_it() {
        let board = sample_board();
        let index = tag_index(&board);

        for snippet in &board {
            for tag in &snippet.tags {
                assert!(index.contains(tag));
            }
        }
        for tag in &index {
            assert!(board.iter().any(|s| s.has_tag(tag)));
        }
    }

    #[test]
    fn tag_index_is_deduplicated_in_first_seen_order() {
        let board = vec![
            snippet("a", "", &["css", "layout"]),
            snippet("b", "", &["layout", "grid"]),
        ];

        assert_eq!(tag_index(&board), vec!["css", "layout", "grid"]);
    }
}
