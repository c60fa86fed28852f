//! Itemize item detection.
//!
//! An item either continues a preceding item at the same indent level, or
//! starts fresh with a numbering lead-in after extra vertical space.
//! Floating elements (tables, figures, margins, formulas) are skipped
//! without becoming the reference paragraph; the scan ends at the
//! references heading.

use crate::layout::{patterns, LayoutCharacteristics};
use crate::model::{Document, Role};
use crate::semantics::pipeline::{
    paragraph, paragraph_mut, paragraph_order, ParagraphAt, PipelineSession,
};

/// Extra line pitch required before a fresh item, in points.
const ITEMIZE_PITCH_SLACK: f32 = 1.0;

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    let document_pitch = document.most_common_line_pitch();
    let order = paragraph_order(document);
    let mut previous = None;

    for &at in &order {
        match paragraph(document, at).role.role() {
            Some(
                Role::Formula
                | Role::PageHeader
                | Role::PageFooter
                | Role::Figure
                | Role::FigureCaption
                | Role::Table
                | Role::TableCaption,
            ) => continue,
            Some(Role::ReferencesHeading) => return,
            _ => {}
        }

        if paragraph(document, at).is_unknown() && is_item(document, at, previous, document_pitch) {
            paragraph_mut(document, at).assign_role(Role::ItemizeItem);
        }
        previous = Some(at);
    }
}

fn is_item(
    document: &Document,
    at: ParagraphAt,
    previous: Option<ParagraphAt>,
    document_pitch: Option<f32>,
) -> bool {
    let current = paragraph(document, at);
    let previous = previous.map(|p| paragraph(document, p));

    // Continuation: the previous paragraph is an item and the indent
    // levels line up.
    if let Some(prev) = previous {
        if prev.has_role(Role::ItemizeItem) {
            if let (Some(last), Some(first)) = (prev.last_line(), current.first_line()) {
                if last.indent_level == first.indent_level {
                    return true;
                }
            }
        }
    }

    // Fresh item: numbering lead-in on a line of at least two words,
    // preceded by extra vertical space.
    let Some(first_line) = current.first_line() else {
        return false;
    };
    if first_line.words.len() < 2
        || !first_line
            .first_word()
            .is_some_and(|word| patterns::itemize_lead_capture(&word.text))
    {
        return false;
    }
    let Some(document_pitch) = document_pitch else {
        return false;
    };
    let pitch = previous
        .and_then(|prev| prev.last_line())
        .map_or(f32::INFINITY, |last| last.pitch_to(first_line));
    pitch > document_pitch + ITEMIZE_PITCH_SLACK
}
