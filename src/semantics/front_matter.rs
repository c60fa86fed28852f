//! Front-matter detection.
//!
//! Once an abstract (or its heading) is known to exist, everything still
//! unclassified before it — author lists, affiliations, contact lines —
//! is front matter.

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Role};
use crate::semantics::pipeline::{paragraph, paragraph_mut, paragraph_order, PipelineSession};

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    session: &mut PipelineSession,
) {
    if !session.abstract_heading_found && !session.abstract_found {
        return;
    }
    for at in paragraph_order(document) {
        match paragraph(document, at).role.role() {
            Some(Role::AbstractHeading | Role::Abstract) => return,
            Some(_) => continue,
            None => {
                paragraph_mut(document, at).assign_role(Role::HeaderOther);
            }
        }
    }
}
