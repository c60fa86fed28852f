//! Running page header and footer detection.
//!
//! The first and the last paragraph of every page are tested
//! independently: a high overlap with the document's clustered margin
//! area assigns directly; otherwise a horizontally page-centered pure
//! integer is accepted as a page number.

use crate::geometry::Rect;
use crate::layout::LayoutCharacteristics;
use crate::model::{Document, Page, Role};
use crate::semantics::pipeline::PipelineSession;

/// Minimum overlap with the margin area, as a fraction of the paragraph.
const MARGIN_OVERLAP_RATIO: f32 = 0.9;

/// Tolerance for the left/right margin balance of a page number, in
/// points.
const CENTERING_TOLERANCE: f32 = 5.0;

pub(crate) fn run_headers(
    document: &mut Document,
    characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    let area = characteristics.page_header_area;
    for page in &mut document.pages {
        classify_margin_paragraph(page, MarginEdge::Top, area);
    }
}

pub(crate) fn run_footers(
    document: &mut Document,
    characteristics: &LayoutCharacteristics,
    _session: &mut PipelineSession,
) {
    let area = characteristics.page_footer_area;
    for page in &mut document.pages {
        classify_margin_paragraph(page, MarginEdge::Bottom, area);
    }
}

#[derive(Clone, Copy)]
enum MarginEdge {
    Top,
    Bottom,
}

fn classify_margin_paragraph(page: &mut Page, edge: MarginEdge, area: Option<Rect>) {
    let (index, role) = match edge {
        MarginEdge::Top => (0, Role::PageHeader),
        MarginEdge::Bottom => match page.paragraphs.len().checked_sub(1) {
            Some(last) => (last, Role::PageFooter),
            None => return,
        },
    };
    let page_number = page.number;
    let page_bbox = page.bbox;
    let Some(paragraph) = page.paragraphs.get_mut(index) else {
        return;
    };
    if !paragraph.is_unknown() {
        return;
    }
    let rect = paragraph.rect_on(page_number).unwrap_or(paragraph.bbox);

    if let Some(area) = area {
        if rect.overlap_ratio(&area) > MARGIN_OVERLAP_RATIO {
            paragraph.assign_role(role);
            return;
        }
    }

    // Page-number fallback: a page-centered pure integer.
    if is_page_centered(&rect, &page_bbox) && is_pure_integer(&paragraph.text) {
        paragraph.assign_role(role);
    }
}

fn is_page_centered(rect: &Rect, page_bbox: &Rect) -> bool {
    let left_margin = rect.min_x - page_bbox.min_x;
    let right_margin = page_bbox.max_x - rect.max_x;
    (left_margin - right_margin).abs() <= CENTERING_TOLERANCE
}

fn is_pure_integer(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}
