//! Resume Document — one-pass parse of plain-text resumes into headed sections.
//!
//! A resume is personal info followed by sections. A section starts at a heading
//! line (the whole line is a recognized section name, case-insensitive, optional
//! trailing colon) and its body runs until the first blank line. Paragraphs that
//! follow a body without a heading of their own stay attached to that section.
//!
//! All tailoring stages operate on this model and the text is rendered once at
//! the end, so sections are never re-located by scanning evolving text.

use serde::Serialize;

/// Recognized resume sections, in the order they appear in tailored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CanonicalSection {
    Summary,
    TechnicalSkills,
    Experience,
    Projects,
    Education,
    Languages,
}

impl CanonicalSection {
    pub const ORDER: [CanonicalSection; 6] = [
        CanonicalSection::Summary,
        CanonicalSection::TechnicalSkills,
        CanonicalSection::Experience,
        CanonicalSection::Projects,
        CanonicalSection::Education,
        CanonicalSection::Languages,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CanonicalSection::Summary => "Summary",
            CanonicalSection::TechnicalSkills => "Technical Skills",
            CanonicalSection::Experience => "Experience",
            CanonicalSection::Projects => "Projects",
            CanonicalSection::Education => "Education",
            CanonicalSection::Languages => "Languages",
        }
    }

    /// Lowercase heading texts accepted for this section.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            CanonicalSection::Summary => &["summary", "career objective"],
            CanonicalSection::TechnicalSkills => &["technical skills"],
            CanonicalSection::Experience => &["experience"],
            CanonicalSection::Projects => &["projects"],
            CanonicalSection::Education => &["education"],
            CanonicalSection::Languages => &["languages"],
        }
    }

    /// Position in the canonical output order.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Resolves a heading line to its canonical section, if any.
    pub fn from_heading(line: &str) -> Option<Self> {
        let normalized = normalize_heading(line);
        Self::ORDER
            .into_iter()
            .find(|section| section.aliases().contains(&normalized.as_str()))
    }
}

/// Lowercased heading text with surrounding whitespace and a trailing colon removed.
pub fn normalize_heading(line: &str) -> String {
    let trimmed = line.trim();
    trimmed
        .strip_suffix(':')
        .unwrap_or(trimmed)
        .trim_end()
        .to_lowercase()
}

/// Title-cases text the way resume headings are written: the first letter of
/// every run of letters is uppercased, the rest lowercased ("c++ tools" → "C++ Tools").
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    /// Lines between the heading and the first blank line.
    pub body: Vec<String>,
    /// Blank-line separated paragraphs that follow the body before the next heading.
    pub trailing: Vec<Vec<String>>,
}

impl Section {
    pub fn new(heading: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            body,
            trailing: Vec::new(),
        }
    }

    pub fn kind(&self) -> Option<CanonicalSection> {
        CanonicalSection::from_heading(&self.heading)
    }

    pub fn is_named(&self, name: &str) -> bool {
        normalize_heading(&self.heading) == normalize_heading(name)
    }

    /// Body and trailing lines together, in document order.
    pub fn all_lines(&self) -> impl Iterator<Item = &String> {
        self.body.iter().chain(self.trailing.iter().flatten())
    }

    fn render(&self) -> String {
        let mut out = self.heading.clone();
        for line in &self.body {
            out.push('\n');
            out.push_str(line);
        }
        for paragraph in &self.trailing {
            out.push_str("\n\n");
            out.push_str(&paragraph.join("\n"));
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeDocument {
    /// Everything before the first recognized heading, trimmed.
    pub personal_info: String,
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Parses a resume recognizing the canonical section headings.
    pub fn parse(text: &str) -> Self {
        Self::parse_recognizing(text, &[])
    }

    /// Parses a resume recognizing the canonical headings plus `extra_headings`.
    pub fn parse_recognizing(text: &str, extra_headings: &[&str]) -> Self {
        let is_heading = |line: &str| {
            CanonicalSection::from_heading(line).is_some()
                || extra_headings
                    .iter()
                    .any(|name| normalize_heading(name) == normalize_heading(line))
        };

        let mut personal: Vec<&str> = Vec::new();
        let mut sections: Vec<Section> = Vec::new();
        let mut body_closed = false;
        let mut paragraph_break = false;

        for line in text.lines() {
            if is_heading(line) {
                sections.push(Section::new(line.trim(), Vec::new()));
                body_closed = false;
                paragraph_break = false;
                continue;
            }

            let Some(section) = sections.last_mut() else {
                personal.push(line);
                continue;
            };

            if line.trim().is_empty() {
                // Blank lines right after a heading do not end the body.
                if !section.body.is_empty() || body_closed {
                    body_closed = true;
                    paragraph_break = true;
                }
                continue;
            }

            let line = line.trim_end().to_string();
            if !body_closed {
                section.body.push(line);
            } else {
                if paragraph_break || section.trailing.is_empty() {
                    section.trailing.push(Vec::new());
                    paragraph_break = false;
                }
                if let Some(paragraph) = section.trailing.last_mut() {
                    paragraph.push(line);
                }
            }
        }

        Self {
            personal_info: personal.join("\n").trim().to_string(),
            sections,
        }
    }

    /// First section whose heading equals `name` (case-insensitive).
    pub fn find(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.is_named(name))
    }

    /// First section of the given canonical kind, honoring heading aliases.
    pub fn find_kind(&self, kind: CanonicalSection) -> Option<usize> {
        self.sections.iter().position(|s| s.kind() == Some(kind))
    }

    pub fn has(&self, kind: CanonicalSection) -> bool {
        self.find_kind(kind).is_some()
    }

    /// Stable-sorts sections into canonical order. Sections without a canonical
    /// heading keep their relative order after the canonical ones.
    pub fn reorder(&mut self) {
        self.sections
            .sort_by_key(|s| s.kind().map_or(usize::MAX, CanonicalSection::rank));
    }

    /// Personal info then every section, separated by blank lines, trailing whitespace trimmed.
    pub fn render(&self) -> String {
        let mut blocks: Vec<String> = Vec::with_capacity(self.sections.len() + 1);
        if !self.personal_info.is_empty() {
            blocks.push(self.personal_info.clone());
        }
        blocks.extend(self.sections.iter().map(Section::render));
        blocks.join("\n\n").trim_end().to_string()
    }
}
