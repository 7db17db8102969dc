//! Summary Booster — writes a Summary section naming the JD's short skill phrases.

use tracing::debug;

use crate::tailoring::document::{CanonicalSection, ResumeDocument, Section};
use crate::tailoring::extractor::CategorizedLines;

/// Skill phrases longer than this read badly inside the summary sentence.
const MAX_SUMMARY_SKILL_WORDS: usize = 4;
const MAX_SUMMARY_SKILLS: usize = 5;
const FALLBACK_SKILLS: &str = "software development and problem solving";

/// The comma-joined skill phrase used in the summary sentence.
pub fn summary_skill_text(categorized: &CategorizedLines) -> String {
    let short: Vec<&str> = categorized
        .skills()
        .iter()
        .map(String::as_str)
        .filter(|skill| skill.split_whitespace().count() <= MAX_SUMMARY_SKILL_WORDS)
        .take(MAX_SUMMARY_SKILLS)
        .collect();

    if short.is_empty() {
        FALLBACK_SKILLS.to_string()
    } else {
        short.join(", ")
    }
}

pub fn summary_section(categorized: &CategorizedLines) -> Section {
    Section::new(
        CanonicalSection::Summary.title(),
        vec![format!(
            "Results-oriented candidate aligned to this role. Experienced in {}.",
            summary_skill_text(categorized)
        )],
    )
}

/// Replaces the first Summary (or Career Objective) section with a fresh one,
/// or puts one in front of every other section. Further summary-like sections
/// are folded into the replaced one.
pub fn apply_summary(doc: &mut ResumeDocument, categorized: &CategorizedLines) {
    let summary = summary_section(categorized);
    match doc.find_kind(CanonicalSection::Summary) {
        Some(index) => {
            debug!("Replacing existing summary section");
            doc.sections[index] = summary;
            let mut seen_summary = false;
            doc.sections.retain(|section| {
                if section.kind() != Some(CanonicalSection::Summary) {
                    return true;
                }
                let keep = !seen_summary;
                seen_summary = true;
                keep
            });
        }
        None => {
            debug!("Inserting summary section");
            doc.sections.insert(0, summary);
        }
    }
}

/// Text-level summary boost.
pub fn boost_summary(resume: &str, categorized: &CategorizedLines) -> String {
    let mut doc = ResumeDocument::parse(resume);
    apply_summary(&mut doc, categorized);
    doc.render()
}
