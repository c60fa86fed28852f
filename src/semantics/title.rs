//! Title detection.
//!
//! Among the unclassified paragraphs of a page whose dominant font size
//! exceeds the document's most common size, the one whose words occur
//! most frequently across the whole document wins; the search stops at
//! the first page yielding any candidate.

use log::debug;

use crate::layout::{patterns, LayoutCharacteristics};
use crate::model::{Document, Paragraph, Role};
use crate::semantics::pipeline::PipelineSession;

pub(crate) fn run(
    document: &mut Document,
    characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    let Some(document_size) = document.char_stats.most_common_font_size else {
        return;
    };

    for page in &mut document.pages {
        let mut best: Option<(usize, f32)> = None;
        for (index, paragraph) in page.paragraphs.iter().enumerate() {
            if !paragraph.is_unknown() {
                continue;
            }
            let Some(size) = paragraph.char_stats.most_common_font_size else {
                continue;
            };
            if size <= document_size {
                continue;
            }
            let score = word_frequency_score(paragraph, characteristics);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        if let Some((index, score)) = best {
            debug!(
                "title on page {}: '{}' (score {:.2})",
                page.number, page.paragraphs[index].text, score
            );
            page.paragraphs[index].assign_role(Role::Title);
            return;
        }
    }
}

/// Mean document-wide occurrence frequency of the paragraph's words.
fn word_frequency_score(paragraph: &Paragraph, characteristics: &LayoutCharacteristics) -> f32 {
    let mut sum = 0usize;
    let mut counted = 0usize;
    for word in paragraph.words() {
        let normalized = patterns::normalize_word(&word.text);
        if normalized.is_empty() {
            continue;
        }
        sum += characteristics.word_frequency(&normalized);
        counted += 1;
    }
    if counted == 0 {
        0.0
    } else {
        sum as f32 / counted as f32
    }
}
