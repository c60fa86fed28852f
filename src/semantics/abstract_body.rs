//! Abstract detection.
//!
//! Scans for substantial paragraphs following the abstract heading, or
//! set apart typographically from the body font, near the start of the
//! document. Several verdicts abort the scan over the *whole document*,
//! not just the current page — abstracts appear once, so the first
//! section heading (or the first body-font paragraph with no abstract
//! context) ends the search for good.

use log::debug;

use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Role};
use crate::semantics::pipeline::PipelineSession;

/// Minimum number of words for an abstract paragraph.
const MIN_ABSTRACT_WORDS: usize = 50;

enum Verdict {
    /// Assign the abstract role and make this the reference paragraph.
    Accept,
    /// Leave the paragraph alone; the reference paragraph is unchanged.
    Skip,
    /// Make this paragraph the reference without assigning (headings).
    Track,
    /// Abort the scan over the entire document.
    StopAll,
}

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    session: &mut PipelineSession,
) {
    let document_font = document.char_stats.most_common_font.clone();
    let document_rounded = document.char_stats.most_common_rounded_size;

    for page_index in 0..document.pages.len() {
        // A page with nothing to examine ends the whole scan.
        if document.pages[page_index].paragraphs.is_empty() {
            return;
        }
        let mut previous: Option<usize> = None;
        for paragraph_index in 0..document.pages[page_index].paragraphs.len() {
            let verdict = {
                let page = &document.pages[page_index];
                let paragraph = &page.paragraphs[paragraph_index];
                let previous = previous.map(|i| &page.paragraphs[i]);

                match paragraph.role.role() {
                    Some(Role::SectionHeading) => Verdict::StopAll,
                    Some(Role::AbstractHeading) => Verdict::Track,
                    Some(_) => Verdict::Skip,
                    None if paragraph.word_count() < MIN_ABSTRACT_WORDS => Verdict::Skip,
                    None => match previous {
                        Some(prev) if prev.has_role(Role::AbstractHeading) => Verdict::Accept,
                        Some(prev) if prev.has_role(Role::Abstract) => {
                            if paragraph.font_face() == prev.font_face() {
                                Verdict::Accept
                            } else {
                                Verdict::StopAll
                            }
                        }
                        _ => {
                            let foreign_font = paragraph.font() != document_font.as_ref();
                            let smaller = match (
                                paragraph.char_stats.most_common_rounded_size,
                                document_rounded,
                            ) {
                                (Some(own), Some(doc)) => own < doc,
                                _ => false,
                            };
                            if foreign_font || smaller {
                                Verdict::Accept
                            } else {
                                Verdict::StopAll
                            }
                        }
                    },
                }
            };

            match verdict {
                Verdict::Accept => {
                    let paragraph =
                        &mut document.pages[page_index].paragraphs[paragraph_index];
                    debug!("abstract paragraph: '{:.60}'", paragraph.text);
                    paragraph.assign_role(Role::Abstract);
                    session.abstract_found = true;
                    previous = Some(paragraph_index);
                }
                Verdict::Track => previous = Some(paragraph_index),
                Verdict::Skip => {}
                Verdict::StopAll => return,
            }
        }
    }
}
