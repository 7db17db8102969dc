//! Structure Enforcer — merges every JD category into its resume section and
//! emits the resume in canonical section order.

use tracing::debug;

use crate::tailoring::classifier::Category;
use crate::tailoring::document::{CanonicalSection, ResumeDocument};
use crate::tailoring::extractor::{extract_sections, CategorizedLines};
use crate::tailoring::merger::merge_section;
use crate::tailoring::projects::apply_project_bullet;
use crate::tailoring::summary::apply_summary;

/// Order in which categories are merged; each merge sees the previous result.
const MERGE_ORDER: [Category; 5] = [
    Category::Skills,
    Category::Responsibilities,
    Category::Projects,
    Category::Qualifications,
    Category::Languages,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryMode {
    /// Always write a fresh summary, replacing any existing one.
    Replace,
    /// Only add a summary when the resume has none.
    InsertIfMissing,
}

fn restructure(doc: &mut ResumeDocument, categorized: &CategorizedLines, summary: SummaryMode) {
    for category in MERGE_ORDER {
        let section = category.target_section();
        merge_section(doc, section.title(), categorized.get(category));
    }

    apply_project_bullet(doc, categorized);

    match summary {
        SummaryMode::Replace => apply_summary(doc, categorized),
        SummaryMode::InsertIfMissing if !doc.has(CanonicalSection::Summary) => {
            apply_summary(doc, categorized)
        }
        SummaryMode::InsertIfMissing => {}
    }

    doc.reorder();
    debug!(
        sections = doc.sections.len(),
        has_personal_info = !doc.personal_info.is_empty(),
        "Resume restructured"
    );
}

/// Merges JD content into the resume, adds a summary only if none exists, and
/// reorders sections canonically with personal info first.
pub fn enforce_structure(resume: &str, categorized: &CategorizedLines) -> String {
    let mut doc = ResumeDocument::parse(resume);
    restructure(&mut doc, categorized, SummaryMode::InsertIfMissing);
    doc.render()
}

/// Tailors `resume` to already-extracted JD sections. The summary is always
/// rewritten from the JD skills.
pub fn update_resume_with(resume: &str, categorized: &CategorizedLines) -> String {
    let mut doc = ResumeDocument::parse(resume);
    restructure(&mut doc, categorized, SummaryMode::Replace);
    doc.render()
}

/// Tailors `resume_text` to `jd_text`.
pub fn update_resume(resume_text: &str, jd_text: &str) -> String {
    let categorized = extract_sections(jd_text);
    update_resume_with(resume_text, &categorized)
}
