//! Appendix body detection.
//!
//! Unclassified paragraphs after an appendix heading belong to the
//! appendix, until the next section heading.

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Role};
use crate::semantics::pipeline::{paragraph, paragraph_mut, paragraph_order, PipelineSession};

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    let mut inside_appendix = false;
    for at in paragraph_order(document) {
        match paragraph(document, at).role.role() {
            Some(Role::AppendixHeading) => inside_appendix = true,
            Some(Role::SectionHeading) => inside_appendix = false,
            Some(_) => {}
            None => {
                if inside_appendix {
                    paragraph_mut(document, at).assign_role(Role::Appendix);
                }
            }
        }
    }
}
