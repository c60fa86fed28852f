//! The ordered role classification pipeline.
//!
//! Fifteen stages run in a fixed sequence over the document. Each stage
//! scans pages and paragraphs in document order and, with one explicit
//! exception, only ever writes to paragraphs that are still unclassified.
//! The order is load-bearing: later stages read the roles earlier stages
//! wrote, and several stages carry session state between them.

use log::debug;

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Paragraph};
use crate::semantics::{
    abstract_body, appendix, body_text, contents_body, figures, formulas, front_matter,
    itemize_items, keywords, page_margins, references, section_headings, tables, title,
};

/// Position of a paragraph within a document: page index and paragraph
/// index, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphAt {
    /// Index of the page in `document.pages`.
    pub page: usize,
    /// Index of the paragraph in `page.paragraphs`.
    pub paragraph: usize,
}

/// Mutable state threaded through the pipeline stages.
#[derive(Debug, Clone, Default)]
pub struct PipelineSession {
    /// Whether an abstract heading was recognized.
    pub abstract_heading_found: bool,
    /// Whether at least one abstract paragraph was recognized.
    pub abstract_found: bool,
    /// The retained references heading; only the last match in the
    /// document survives.
    pub references_heading: Option<ParagraphAt>,
    /// The table-of-contents heading, if one was recognized.
    pub contents_heading: Option<ParagraphAt>,
}

/// A single pipeline stage.
pub(crate) type Stage = fn(&mut Document, &LayoutCharacteristics, &mut PipelineSession);

/// The stages, in execution order.
pub(crate) const STAGES: &[(&str, Stage)] = &[
    ("title", title::run),
    ("keywords", keywords::run),
    ("section-headings", section_headings::run),
    ("page-headers", page_margins::run_headers),
    ("page-footers", page_margins::run_footers),
    ("contents-body", contents_body::run),
    ("tables", tables::run),
    ("figures", figures::run),
    ("itemize-items", itemize_items::run),
    ("formulas", formulas::run),
    ("abstract-body", abstract_body::run),
    ("front-matter", front_matter::run),
    ("references", references::run),
    ("appendix", appendix::run),
    ("body-text", body_text::run),
];

/// Classify every paragraph of `document`.
///
/// Derives the document's [`LayoutCharacteristics`], freezes them, and
/// runs the stages in order. Returns the final session state for
/// inspection. Re-running on the same document yields identical
/// assignments.
///
/// # Examples
///
/// ```no_run
/// use pdf_roles::model::Document;
/// use pdf_roles::semantics::classify;
///
/// # fn example(mut document: Document) {
/// let session = classify(&mut document);
/// if session.abstract_found {
///     println!("document has an abstract");
/// }
/// # }
/// ```
pub fn classify(document: &mut Document) -> PipelineSession {
    let characteristics = LayoutCharacteristics::analyze(document);
    classify_with(document, &characteristics)
}

/// Classify with precomputed characteristics.
///
/// The characteristics must have been derived from this same document and
/// are not mutated by any stage.
pub fn classify_with(
    document: &mut Document,
    characteristics: &LayoutCharacteristics,
) -> PipelineSession {
    let mut session = PipelineSession::default();
    for (name, stage) in STAGES {
        debug!("running stage '{}'", name);
        stage(document, characteristics, &mut session);
    }
    session
}

/// Every paragraph position, in document order.
pub(crate) fn paragraph_order(document: &Document) -> Vec<ParagraphAt> {
    let mut order = Vec::with_capacity(document.paragraph_count());
    for (page, p) in document.pages.iter().enumerate() {
        for paragraph in 0..p.paragraphs.len() {
            order.push(ParagraphAt { page, paragraph });
        }
    }
    order
}

pub(crate) fn paragraph(document: &Document, at: ParagraphAt) -> &Paragraph {
    &document.pages[at.page].paragraphs[at.paragraph]
}

pub(crate) fn paragraph_mut(document: &mut Document, at: ParagraphAt) -> &mut Paragraph {
    &mut document.pages[at.page].paragraphs[at.paragraph]
}
