//! Table detection anchored on caption paragraphs.
//!
//! A caption-looking paragraph is accepted only when non-text elements
//! accumulate in the band directly above or below it. The side with the
//! larger accumulated area holds the table body: overlapping unclassified
//! paragraphs are marked, nearest first, until the walk hits an
//! already-classified paragraph.

use log::debug;

use crate::geometry::Rect;
use crate::layout::{patterns, LayoutCharacteristics};
use crate::model::{Document, Page, Role};
use crate::semantics::pipeline::PipelineSession;

/// Vertical extent of the band searched around a caption, in points.
const CAPTION_SEARCH_BAND: f32 = 75.0;

pub(crate) fn run(
    document: &mut Document,
    _characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    for page in &mut document.pages {
        classify_page(page);
    }
}

fn classify_page(page: &mut Page) {
    for caption_index in 0..page.paragraphs.len() {
        let Some(walk) = table_at(page, caption_index) else {
            continue;
        };
        debug!(
            "table caption on page {}: '{}'",
            page.number, page.paragraphs[caption_index].text
        );
        page.paragraphs[caption_index].assign_role(Role::TableCaption);
        for body_index in walk {
            if !page.paragraphs[body_index].is_unknown() {
                break;
            }
            page.paragraphs[body_index].assign_role(Role::Table);
        }
    }
}

/// If the paragraph at `caption_index` anchors a table, the body walk
/// order (nearest to caption first).
fn table_at(page: &Page, caption_index: usize) -> Option<Vec<usize>> {
    let caption = &page.paragraphs[caption_index];
    if !caption.is_unknown() || !patterns::is_table_caption(caption.text.trim()) {
        return None;
    }
    let rect = caption.rect_on(page.number).unwrap_or(caption.bbox);

    let band_above = Rect::new(
        rect.min_x,
        rect.max_y,
        rect.max_x,
        rect.max_y + CAPTION_SEARCH_BAND,
    );
    let band_below = Rect::new(
        rect.min_x,
        rect.min_y - CAPTION_SEARCH_BAND,
        rect.max_x,
        rect.min_y,
    );

    let area_above = graphics_area(page, &band_above);
    let area_below = graphics_area(page, &band_below);
    if area_above == 0.0 && area_below == 0.0 {
        return None;
    }

    let band = if area_above >= area_below {
        band_above
    } else {
        band_below
    };
    let mut walk: Vec<(usize, f32)> = page
        .paragraphs
        .iter()
        .enumerate()
        .filter(|(index, other)| {
            *index != caption_index
                && other
                    .rect_on(page.number)
                    .unwrap_or(other.bbox)
                    .overlaps(&band)
        })
        .map(|(index, other)| {
            let other_rect = other.rect_on(page.number).unwrap_or(other.bbox);
            let distance = if area_above >= area_below {
                (other_rect.min_y - rect.max_y).abs()
            } else {
                (rect.min_y - other_rect.max_y).abs()
            };
            (index, distance)
        })
        .collect();
    walk.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    Some(walk.into_iter().map(|(index, _)| index).collect())
}

/// Total area of non-text elements overlapping `band`.
fn graphics_area(page: &Page, band: &Rect) -> f32 {
    page.graphics
        .iter()
        .filter(|g| g.bbox.overlaps(band))
        .map(|g| g.bbox.area())
        .sum()
}
