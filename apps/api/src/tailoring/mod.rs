// Resume tailoring engine
// Implements: JD line classification, section extraction, section merge,
// summary and project synthesis, canonical restructuring.
// The engine is synchronous and pure; adapters live in handlers.rs.

pub mod classifier;
pub mod document;
pub mod extractor;
pub mod handlers;
pub mod merger;
pub mod projects;
pub mod structure;
pub mod summary;

pub use classifier::{classify, Category};
pub use extractor::{extract_sections, CategorizedLines};
pub use merger::merge_into_section;
pub use projects::enhance_projects;
pub use structure::{enforce_structure, update_resume, update_resume_with};
pub use summary::boost_summary;
