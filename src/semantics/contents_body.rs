//! Table-of-contents body detection.
//!
//! Everything after the recorded contents heading is an entry, until the
//! first section, appendix or abstract heading ends the table.

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Role};
use crate::semantics::pipeline::{paragraph, paragraph_mut, paragraph_order, PipelineSession};

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    session: &mut PipelineSession,
) {
    let Some(heading) = session.contents_heading else {
        return;
    };
    let order = paragraph_order(document);
    let Some(start) = order.iter().position(|at| *at == heading) else {
        return;
    };
    for &at in &order[start + 1..] {
        match paragraph(document, at).role.role() {
            Some(Role::SectionHeading | Role::AppendixHeading | Role::AbstractHeading) => return,
            Some(_) => continue,
            None => {
                paragraph_mut(document, at).assign_role(Role::TableOfContents);
            }
        }
    }
}
