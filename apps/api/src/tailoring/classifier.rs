//! Line Classifier — maps one job-description line to at most one category.
//!
//! Classification is keyword membership over the lowercased line, tested in a
//! fixed priority order. The first category with a matching keyword wins.

use serde::{Deserialize, Serialize};

use crate::tailoring::document::CanonicalSection;

/// Closed set of categories a JD line can be sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Responsibilities,
    Qualifications,
    Projects,
    Languages,
}

impl Category {
    /// Priority order used by `classify`. A line matching several keyword sets
    /// is assigned to the earliest entry.
    pub const ALL: [Category; 5] = [
        Category::Skills,
        Category::Responsibilities,
        Category::Qualifications,
        Category::Projects,
        Category::Languages,
    ];

    /// Resume section that receives lines of this category.
    pub fn target_section(self) -> CanonicalSection {
        match self {
            Category::Skills => CanonicalSection::TechnicalSkills,
            Category::Responsibilities => CanonicalSection::Experience,
            Category::Qualifications => CanonicalSection::Education,
            Category::Projects => CanonicalSection::Projects,
            Category::Languages => CanonicalSection::Languages,
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Skills => SKILL_KEYWORDS,
            Category::Responsibilities => RESPONSIBILITY_KEYWORDS,
            Category::Qualifications => QUALIFICATION_KEYWORDS,
            Category::Projects => PROJECT_KEYWORDS,
            Category::Languages => LANGUAGE_KEYWORDS,
        }
    }
}

const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "selenium",
    "jira",
    "framework",
    "api",
    "tools",
    "javascript",
    "node.js",
    "react",
    "cloud",
    "aws",
    "azure",
    "gcp",
];

const RESPONSIBILITY_KEYWORDS: &[&str] = &[
    "responsible",
    "develop",
    "implement",
    "design",
    "maintain",
    "test",
    "execute",
    "collaborate",
    "debug",
];

const QUALIFICATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "degree",
    "qualification",
    "certification",
    "graduate",
];

const PROJECT_KEYWORDS: &[&str] = &["project", "case study"];

/// Natural languages, not programming languages.
const LANGUAGE_KEYWORDS: &[&str] = &[
    "english", "hindi", "french", "german", "spanish", "tamil", "telugu",
];

/// Classifies a single trimmed JD line. Returns `None` when no keyword set matches.
pub fn classify(line: &str) -> Option<Category> {
    let text = line.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| category.keywords().iter().any(|kw| text.contains(kw)))
}
