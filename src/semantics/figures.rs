//! Figure detection anchored on caption paragraphs.
//!
//! Like table detection, but thresholded on the *presence* of non-text
//! elements of meaningful extent (both sides longer than a point, which
//! filters thin rule lines). On the denser side the search band extends
//! to the page edge and the walk accepts same-column unclassified
//! paragraphs, stopping as soon as one juts out horizontally beyond the
//! caption.

use log::debug;

use crate::geometry::Rect;
use crate::layout::{patterns, LayoutCharacteristics};
use crate::model::{Document, Page, Role};
use crate::semantics::pipeline::PipelineSession;

/// Vertical extent of the band searched around a caption, in points.
const CAPTION_SEARCH_BAND: f32 = 75.0;

/// Minimum width and height of a non-text element that counts as figure
/// content.
const MIN_GRAPHIC_SIDE: f32 = 1.0;

/// Horizontal slack a figure paragraph may extend beyond the caption, in
/// points.
const EXTENT_TOLERANCE: f32 = 1.0;

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
        let Some((caption_rect, walk)) = figure_at(page, caption_index) else {
            continue;
        };
        debug!(
            "figure caption on page {}: '{}'",
            page.number, page.paragraphs[caption_index].text
        );
        page.paragraphs[caption_index].assign_role(Role::FigureCaption);
        for body_index in walk {
            let other_rect = page.paragraphs[body_index]
                .rect_on(page.number)
                .unwrap_or(page.paragraphs[body_index].bbox);
            if other_rect.min_x < caption_rect.min_x - EXTENT_TOLERANCE
                || other_rect.max_x > caption_rect.max_x + EXTENT_TOLERANCE
            {
                break;
            }
            if page.paragraphs[body_index].is_unknown() {
                page.paragraphs[body_index].assign_role(Role::Figure);
            }
        }
    }
}

/// If the paragraph at `caption_index` anchors a figure, its rectangle
/// and the body walk order (outward from the caption by distance).
fn figure_at(page: &Page, caption_index: usize) -> Option<(Rect, Vec<usize>)> {
    let caption = &page.paragraphs[caption_index];
    if !caption.is_unknown() || !patterns::is_figure_caption(caption.text.trim()) {
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

    let count_above = figure_content_count(page, &band_above);
    let count_below = figure_content_count(page, &band_below);
    if count_above == 0 && count_below == 0 {
        return None;
    }

    // Extend the denser side's band all the way to the page edge.
    let above = count_above >= count_below;
    let band = if above {
        Rect::new(rect.min_x, rect.max_y, rect.max_x, page.bbox.max_y)
    } else {
        Rect::new(rect.min_x, page.bbox.min_y, rect.max_x, rect.min_y)
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
            let distance = if above {
                (other_rect.min_y - rect.max_y).abs()
            } else {
                (rect.min_y - other_rect.max_y).abs()
            };
            (index, distance)
        })
        .collect();
    walk.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    Some((rect, walk.into_iter().map(|(index, _)| index).collect()))
}

/// Number of non-text elements in `band` large enough to be figure
/// content.
fn figure_content_count(page: &Page, band: &Rect) -> usize {
    page.graphics
        .iter()
        .filter(|g| {
            g.bbox.width() > MIN_GRAPHIC_SIDE
                && g.bbox.height() > MIN_GRAPHIC_SIDE
                && g.bbox.overlaps(band)
        })
        .count()
}
