//! Separated formula detection.
//!
//! Words are classified as mathematical by a symbol table, sub/superscript
//! glyphs, or being a single character — except on left-aligned lines,
//! where every word counts as plain text. The math ratio is measured in
//! characters; the strict threshold stands alone, the relaxed one needs
//! all-centered lines or a trailing equation label.

use crate::layout::{patterns, LayoutCharacteristics};
use crate::model::{Document, LineAlignment, Paragraph, Role};
use crate::semantics::pipeline::PipelineSession;

/// Math ratio that classifies on its own. Strictly exceeded.
const MATH_RATIO_STRICT: f32 = 0.75;

/// Math ratio sufficient for centered or labeled paragraphs.
const MATH_RATIO_RELAXED: f32 = 0.5;

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    for page in &mut document.pages {
        for paragraph in &mut page.paragraphs {
            if !paragraph.is_unknown() {
                continue;
            }
            if is_formula(paragraph) {
                paragraph.assign_role(Role::Formula);
            }
        }
    }
}

fn is_formula(paragraph: &Paragraph) -> bool {
    let Some(ratio) = math_ratio(paragraph) else {
        return false;
    };
    if ratio > MATH_RATIO_STRICT {
        return true;
    }
    let all_centered = !paragraph.lines.is_empty()
        && paragraph
            .lines
            .iter()
            .all(|line| line.alignment == LineAlignment::Centered);
    (all_centered || patterns::has_formula_label(paragraph.text.trim_end()))
        && ratio >= MATH_RATIO_RELAXED
}

/// Fraction of the paragraph's characters that belong to math-classified
/// words, or `None` for an empty paragraph.
fn math_ratio(paragraph: &Paragraph) -> Option<f32> {
    let mut math_chars = 0usize;
    let mut plain_chars = 0usize;
    for line in &paragraph.lines {
        let left_aligned = line.alignment == LineAlignment::Left;
        for word in &line.words {
            let chars = word.char_count();
            let is_math = !left_aligned
                && (patterns::is_math_word(&word.text)
                    || patterns::has_script_glyph(&word.text)
                    || chars == 1);
            if is_math {
                math_chars += chars;
            } else {
                plain_chars += chars;
            }
        }
    }
    let total = math_chars + plain_chars;
    if total == 0 {
        None
    } else {
        Some(math_chars as f32 / total as f32)
    }
}
