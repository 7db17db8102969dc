//! Project Enhancer — gives an undescribed Projects section one technology bullet.

use tracing::debug;

use crate::tailoring::document::{CanonicalSection, ResumeDocument};
use crate::tailoring::extractor::CategorizedLines;

const MAX_PROJECT_SKILLS: usize = 3;
const FALLBACK_TECHNOLOGIES: &str = "relevant technologies";

/// A body with no bullet glyph and no dash anywhere is treated as lacking descriptions.
fn has_descriptions(body: &[String]) -> bool {
    body.iter().any(|line| line.contains('•') || line.contains('-'))
}

pub fn project_bullet(categorized: &CategorizedLines) -> String {
    let skills = categorized.skills();
    let technologies = if skills.is_empty() {
        FALLBACK_TECHNOLOGIES.to_string()
    } else {
        skills
            .iter()
            .take(MAX_PROJECT_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("- Designed and implemented using {technologies}.")
}

/// Appends the synthesized bullet to the Projects section when it has no
/// descriptions. Returns whether the document changed.
pub fn apply_project_bullet(doc: &mut ResumeDocument, categorized: &CategorizedLines) -> bool {
    let Some(index) = doc.find_kind(CanonicalSection::Projects) else {
        return false;
    };
    let section = &mut doc.sections[index];
    if has_descriptions(&section.body) {
        return false;
    }
    debug!("Adding technology bullet to projects section");
    section.body.push(project_bullet(categorized));
    true
}

/// Text-level project enhancement: returns `resume` untouched when nothing changes.
pub fn enhance_projects(resume: &str, categorized: &CategorizedLines) -> String {
    let mut doc = ResumeDocument::parse(resume);
    if apply_project_bullet(&mut doc, categorized) {
        doc.render()
    } else {
        resume.to_string()
    }
}
