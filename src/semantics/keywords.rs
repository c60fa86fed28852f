//! Keywords line detection on the first page.

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Role};
use crate::semantics::pipeline::PipelineSession;

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    let Some(page) = document.pages.first_mut() else {
        return;
    };
    for paragraph in &mut page.paragraphs {
        if !paragraph.is_unknown() {
            continue;
        }
        let lowered = paragraph.text.trim_start().to_lowercase();
        if lowered.starts_with("keyword") {
            paragraph.assign_role(Role::Keywords);
        }
    }
}
