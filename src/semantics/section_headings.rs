//! Section heading detection.
//!
//! Headings are preceded by extra vertical space: the pitch from the
//! previous paragraph's last line to the candidate's first line must
//! exceed the document's most common line pitch by more than the slack.
//! Candidates passing the gate run through an ordered cascade of text,
//! markup and numbering tests.
//!
//! A references heading seen later in the document supersedes an earlier
//! one (references headings also appear inside tables of contents); the
//! earlier paragraph is reverted to unclassified — the single exception
//! to the pipeline's monotonic role writes.

use log::debug;

use crate::layout::{patterns, LayoutCharacteristics};
use crate::model::{Document, Font, Paragraph, Role};
use crate::semantics::pipeline::{paragraph_mut, ParagraphAt, PipelineSession};

/// Extra line pitch required before a heading, in points.
const HEADING_PITCH_SLACK: f32 = 2.0;

pub(crate) fn run(
    document: &mut Document,
    characteristics: &LayoutCharacteristics,
    session: &mut PipelineSession,
) {
    let document_font = document.char_stats.most_common_font.clone();
    let document_pitch = document.most_common_line_pitch();

    for page_index in 0..document.pages.len() {
        for paragraph_index in 0..document.pages[page_index].paragraphs.len() {
            let verdict = {
                let page = &document.pages[page_index];
                let paragraph = &page.paragraphs[paragraph_index];
                let previous = paragraph_index
                    .checked_sub(1)
                    .map(|i| &page.paragraphs[i]);
                evaluate(
                    paragraph,
                    previous,
                    characteristics,
                    document_font.as_ref(),
                    document_pitch,
                )
            };

            let Some(role) = verdict else {
                continue;
            };
            let at = ParagraphAt {
                page: page_index,
                paragraph: paragraph_index,
            };
            match role {
                Role::AbstractHeading => session.abstract_heading_found = true,
                Role::ReferencesHeading => {
                    // Only the last references heading in the document is
                    // retained.
                    if let Some(previous_heading) = session.references_heading.take() {
                        paragraph_mut(document, previous_heading).reset_role();
                    }
                    session.references_heading = Some(at);
                }
                Role::TableOfContentsHeading => session.contents_heading = Some(at),
                _ => {}
            }
            let paragraph = paragraph_mut(document, at);
            debug!("heading {:?}: '{}'", role, paragraph.text);
            paragraph.assign_role(role);
        }
    }
}

fn evaluate(
    paragraph: &Paragraph,
    previous: Option<&Paragraph>,
    characteristics: &LayoutCharacteristics,
    document_font: Option<&Font>,
    document_pitch: Option<f32>,
) -> Option<Role> {
    if !paragraph.is_unknown() || paragraph.text.trim().is_empty() {
        return None;
    }

    // Pitch gate. With no previous paragraph on the page the gap above is
    // unbounded and the gate passes.
    let pitch = match (previous, paragraph.first_line()) {
        (Some(prev), Some(first)) => prev
            .last_line()
            .map_or(f32::INFINITY, |last| last.pitch_to(first)),
        _ => f32::INFINITY,
    };
    let document_pitch = document_pitch?;
    if pitch <= document_pitch + HEADING_PITCH_SLACK {
        return None;
    }

    let normalized = patterns::normalize_heading(&paragraph.text);
    if patterns::matches_abstract_heading(&normalized) {
        return Some(Role::AbstractHeading);
    }
    if patterns::matches_references_heading(&normalized) {
        return Some(Role::ReferencesHeading);
    }
    if patterns::matches_appendix_heading(&normalized) {
        return Some(Role::AppendixHeading);
    }
    if patterns::matches_acknowledgment_heading(&normalized) {
        return Some(Role::SectionHeading);
    }
    if patterns::matches_contents_heading(&normalized) {
        return Some(Role::TableOfContentsHeading);
    }

    // A trailing digit marks a table-of-contents entry, not a heading.
    if paragraph
        .text
        .trim_end()
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_digit())
    {
        return None;
    }

    if let (Some(face), Some(markup)) = (
        paragraph.font_face(),
        characteristics.section_heading_markup.as_ref(),
    ) {
        if face == *markup {
            return Some(Role::SectionHeading);
        }
    }

    if let (Some(font), Some(heading_font)) =
        (paragraph.font(), characteristics.section_heading_font.as_ref())
    {
        if font == heading_font && document_font != Some(heading_font) {
            return Some(Role::SectionHeading);
        }
    }

    // Numbered heading: a numbering lead-in on a line of at least two
    // words, set in a font other than the document's.
    if let Some(first_line) = paragraph.first_line() {
        if first_line.words.len() >= 2
            && first_line
                .first_word()
                .is_some_and(|word| patterns::itemize_lead_capture(&word.text))
            && paragraph.font() != document_font
        {
            return Some(Role::SectionHeading);
        }
    }

    None
}
