//! Semantic role classification.
//!
//! The entry point is [`classify`], which derives the document's layout
//! characteristics and runs the fifteen ordered stages over it. Stage
//! order matters: later stages read roles written by earlier ones and
//! session state recorded along the way.

pub mod pipeline;

pub(crate) mod abstract_body;
pub(crate) mod appendix;
pub(crate) mod body_text;
pub(crate) mod contents_body;
pub(crate) mod figures;
pub(crate) mod formulas;
pub(crate) mod front_matter;
pub(crate) mod itemize_items;
pub(crate) mod keywords;
pub(crate) mod page_margins;
pub(crate) mod references;
pub(crate) mod section_headings;
pub(crate) mod tables;
pub(crate) mod title;

pub use pipeline::{classify, classify_with, ParagraphAt, PipelineSession};
