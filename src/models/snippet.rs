use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved code sample with its descriptive metadata.
///
/// `id` and `created_at` are assigned once, when the snippet is committed to
/// the store, and never change afterwards. `tags` are stored lowercase with
/// insertion order preserved for display; the draft layer guarantees there
/// are no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    pub language: SnippetLanguage,
    pub tags: Vec<String>,
    pub author: String,
    pub created_at: NaiveDate,
}

/// The fixed set of languages a snippet can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnippetLanguage {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
    Css,
    Html,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    Sql,
}

impl SnippetLanguage {
    /// Every language, in the order the form's selector cycles through them.
    pub const ALL: [SnippetLanguage; 14] = [
        SnippetLanguage::JavaScript,
        SnippetLanguage::TypeScript,
        SnippetLanguage::Python,
        SnippetLanguage::Java,
        SnippetLanguage::Cpp,
        SnippetLanguage::Css,
        SnippetLanguage::Html,
        SnippetLanguage::Php,
        SnippetLanguage::Ruby,
        SnippetLanguage::Go,
        SnippetLanguage::Rust,
        SnippetLanguage::Swift,
        SnippetLanguage::Kotlin,
        SnippetLanguage::Sql,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript => "JavaScript",
            SnippetLanguage::TypeScript => "TypeScript",
            SnippetLanguage::Python => "Python",
            SnippetLanguage::Java => "Java",
            SnippetLanguage::Cpp => "C++",
            SnippetLanguage::Css => "CSS",
            SnippetLanguage::Html => "HTML",
            SnippetLanguage::Php => "PHP",
            SnippetLanguage::Ruby => "Ruby",
            SnippetLanguage::Go => "Go",
            SnippetLanguage::Rust => "Rust",
            SnippetLanguage::Swift => "Swift",
            SnippetLanguage::Kotlin => "Kotlin",
            SnippetLanguage::Sql => "SQL",
        }
    }
}

impl Snippet {
    /// First `max_lines` lines of the code body, for the collapsed card view.
    pub fn preview(&self, max_lines: usize) -> impl Iterator<Item = &str> {
        self.code.lines().take(max_lines)
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// Exact-match tag lookup; tags are stored lowercase.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_list_is_complete_and_distinct() {
        assert_eq!(SnippetLanguage::ALL.len(), 14);
        let names: std::collections::HashSet<_> = SnippetLanguage::ALL
            .iter()
            .map(|l| l.display_name())
            .collect();
        assert_eq!(names.len(), SnippetLanguage::ALL.len());
    }

    #[test]
    fn preview_stops_at_the_requested_line_count() {
        let snippet = Snippet {
            id: Uuid::new_v4(),
            title: String::from("loop"),
            description: String::new(),
            code: String::from("a\nb\nc\nd"),
            language: SnippetLanguage::Python,
            tags: vec![],
            author: String::from("tester"),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        assert_eq!(snippet.line_count(), 4);
        assert_eq!(snippet.preview(2).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
