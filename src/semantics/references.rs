//! Reference entry detection.
//!
//! Everything after the retained references heading is a reference entry,
//! until a section or appendix heading ends the section.

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Role};
use crate::semantics::pipeline::{paragraph, paragraph_mut, paragraph_order, PipelineSession};

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    session: &mut PipelineSession,
) {
    let Some(heading) = session.references_heading else {
        return;
    };
    let order = paragraph_order(document);
    let Some(start) = order.iter().position(|at| *at == heading) else {
        return;
    };
    for &at in &order[start + 1..] {
        match paragraph(document, at).role.role() {
            Some(Role::SectionHeading | Role::AppendixHeading) => return,
            Some(_) => continue,
            None => {
                paragraph_mut(document, at).assign_role(Role::Reference);
            }
        }
    }
}
