//! Body text detection.
//!
//! The terminal stage: whatever is still unclassified and set entirely in
//! the document's dominant typography is ordinary body text. Paragraphs
//! matching nothing at all stay unclassified — a valid terminal state.

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Role};
use crate::semantics::pipeline::PipelineSession;

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    let document_font = document.char_stats.most_common_font.clone();
    let document_color = document.char_stats.most_common_color;
    let document_rounded = document.char_stats.most_common_rounded_size;
    let (Some(font), Some(color), Some(rounded)) =
        (document_font, document_color, document_rounded)
    else {
        return;
    };

    for page in &mut document.pages {
        for paragraph in &mut page.paragraphs {
            if !paragraph.is_unknown() {
                continue;
            }
            let same_font = paragraph.font() == Some(&font);
            let same_color = paragraph.char_stats.most_common_color == Some(color);
            let same_size = paragraph.char_stats.most_common_rounded_size == Some(rounded);
            if same_font && same_color && same_size {
                paragraph.assign_role(Role::BodyText);
            }
        }
    }
}
