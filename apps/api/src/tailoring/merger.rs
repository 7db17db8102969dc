//! Section Merger — appends JD items a resume section does not already mention.
//!
//! Merging only ever appends. Existing section content is never rewritten or
//! removed; the heading is the one thing normalized (title-cased).

use tracing::debug;

use crate::tailoring::document::{title_case, ResumeDocument, Section};

/// Items longer than this are full sentences, not resume bullets, and are skipped.
pub const MAX_ITEM_WORDS: usize = 15;

/// Strips one leading list marker (`-`, `•` or `N.`) and the whitespace after it.
fn strip_bullet(item: &str) -> &str {
    let item = item.trim();
    let rest = match item.strip_prefix('-').or_else(|| item.strip_prefix('•')) {
        Some(rest) => rest,
        None => {
            let digits = item.len() - item.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            match item[digits..].strip_prefix('.') {
                Some(rest) if digits > 0 => rest,
                _ => item,
            }
        }
    };
    rest.trim_start()
}

fn strip_line_decoration(line: &str) -> &str {
    line.trim_matches(|c: char| c == ' ' || c == '-' || c == '•' || c == '\t')
}

/// Bullet-stripped items short enough to be resume bullets.
pub fn clean_items<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| strip_bullet(item.as_ref()))
        .filter(|item| !item.is_empty())
        .filter(|item| item.split_whitespace().count() <= MAX_ITEM_WORDS)
        .map(str::to_string)
        .collect()
}

/// Merges `items` into the section headed `section_name`, creating it at the end
/// of the document when absent. Returns whether the document changed.
pub fn merge_section<S: AsRef<str>>(
    doc: &mut ResumeDocument,
    section_name: &str,
    items: &[S],
) -> bool {
    let items = clean_items(items);
    if items.is_empty() {
        return false;
    }

    let Some(index) = doc.find(section_name) else {
        debug!(section = section_name, added = items.len(), "Appending new section");
        let body = items.iter().map(|item| format!("- {item}")).collect();
        doc.sections
            .push(Section::new(title_case(section_name.trim()), body));
        return true;
    };

    let section = &mut doc.sections[index];
    let existing: Vec<String> = section
        .all_lines()
        .map(|line| strip_line_decoration(line).to_lowercase())
        .collect();

    let missing: Vec<String> = items
        .into_iter()
        .filter(|item| {
            let needle = item.to_lowercase();
            !existing.iter().any(|line| line.contains(&needle))
        })
        .collect();

    if missing.is_empty() {
        return false;
    }

    debug!(section = section_name, added = missing.len(), "Merging into section");
    section.heading = title_case(&section.heading);
    section
        .body
        .extend(missing.iter().map(|item| format!("- {item}")));
    true
}

/// Text-level merge: returns `resume` untouched when nothing needs adding.
pub fn merge_into_section<S: AsRef<str>>(resume: &str, section_name: &str, new_items: &[S]) -> String {
    if new_items.is_empty() {
        return resume.to_string();
    }
    let mut doc = ResumeDocument::parse_recognizing(resume, &[section_name]);
    if merge_section(&mut doc, section_name, new_items) {
        doc.render()
    } else {
        resume.to_string()
    }
}
