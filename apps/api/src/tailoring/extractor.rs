//! Section Extractor — sorts every job-description line into a category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tailoring::classifier::{classify, Category};

/// Cleaned JD lines grouped by category.
///
/// Every category key is always present. Lines are unique within a category
/// and keep the order in which they first appeared in the JD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedLines {
    entries: BTreeMap<Category, Vec<String>>,
}

impl Default for CategorizedLines {
    fn default() -> Self {
        Self {
            entries: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }
}

impl CategorizedLines {
    pub fn get(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Adds a line unless the category already holds it.
    pub fn push(&mut self, category: Category, line: impl Into<String>) {
        let line = line.into();
        let bucket = self.entries.entry(category).or_default();
        if !bucket.contains(&line) {
            bucket.push(line);
        }
    }

    pub fn skills(&self) -> &[String] {
        self.get(Category::Skills)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries
            .iter()
            .map(|(category, lines)| (*category, lines.as_slice()))
    }
}

/// Characters stripped from both ends of a JD line before classification.
fn is_line_decoration(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '•'
}

/// Splits the JD into lines, cleans and classifies each, and deduplicates per category.
pub fn extract_sections(jd_text: &str) -> CategorizedLines {
    let mut categorized = CategorizedLines::default();
    let mut unclassified = 0usize;

    for raw in jd_text.lines() {
        let clean = raw.trim_matches(is_line_decoration);
        if clean.is_empty() {
            continue;
        }
        match classify(clean) {
            Some(category) => categorized.push(category, clean),
            None => unclassified += 1,
        }
    }

    debug!(
        skills = categorized.get(Category::Skills).len(),
        responsibilities = categorized.get(Category::Responsibilities).len(),
        qualifications = categorized.get(Category::Qualifications).len(),
        projects = categorized.get(Category::Projects).len(),
        languages = categorized.get(Category::Languages).len(),
        unclassified,
        "Extracted JD sections"
    );

    categorized
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "
        Senior QA Engineer
        - Strong Python and SQL
        • Selenium
        Responsible for testing releases
        - Strong Python and SQL
        Bachelor's degree in Computer Science
        Prior project delivery experience
        Fluent in English
        Competitive salary
    ";

    #[test]
    fn test_all_categories_always_present() {
        let sections = extract_sections("");
        for category in Category::ALL {
            assert!(sections.get(category).is_empty());
        }
        assert_eq!(sections.iter().count(), 5);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_lines_are_cleaned_and_classified() {
        let sections = extract_sections(JD);
        assert_eq!(
            sections.skills(),
            &["Strong Python and SQL".to_string(), "Selenium".to_string()]
        );
        assert_eq!(
            sections.get(Category::Responsibilities),
            &["Responsible for testing releases".to_string()]
        );
        assert_eq!(
            sections.get(Category::Qualifications),
            &["Bachelor's degree in Computer Science".to_string()]
        );
        assert_eq!(
            sections.get(Category::Projects),
            &["Prior project delivery experience".to_string()]
        );
        assert_eq!(
            sections.get(Category::Languages),
            &["Fluent in English".to_string()]
        );
    }

    #[test]
    fn test_duplicates_removed_keeping_first_seen_order() {
        let sections = extract_sections("AWS\nAzure\n- AWS\nGCP\n");
        assert_eq!(
            sections.skills(),
            &["AWS".to_string(), "Azure".to_string(), "GCP".to_string()]
        );
    }

    #[test]
    fn test_no_leading_markers_survive() {
        let sections = extract_sections("\t- • Java\n  -- React  \n");
        for (_, lines) in sections.iter() {
            for line in lines {
                assert!(!line.starts_with(&['-', '•', ' ', '\t'][..]), "dirty line {line:?}");
            }
        }
        assert_eq!(sections.skills(), &["Java".to_string(), "React".to_string()]);
    }

    #[test]
    fn test_unclassified_and_blank_lines_skipped() {
        let sections = extract_sections("\n   \n-\nCompetitive salary\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_serializes_with_category_keys() {
        let sections = extract_sections("Python\n");
        let json = serde_json::to_value(&sections).unwrap();
        assert_eq!(json["skills"][0], "Python");
        assert!(json["languages"].as_array().unwrap().is_empty());
    }
}
