//! Document-wide layout characteristics.
//!
//! A single pass over the whole document derives the signals the role
//! classification pipeline consumes: the common section-heading
//! typography, the page header/footer candidate areas, a per-word
//! occurrence counter and a hyphenation-prefix counter. The fixture is
//! computed once and read-only afterwards.

use log::debug;

use crate::geometry::Rect;
use crate::layout::patterns;
use crate::model::{Document, Font, FontFace};
use crate::stats::ObjectCounter;

/// Height tolerance when clustering header/footer candidates, as a
/// fraction of the accumulated rectangle's height.
const MARGIN_HEIGHT_TOLERANCE: f32 = 0.10;

/// Fraction of considered pages a margin cluster must cover to count.
const MARGIN_PAGE_COVERAGE: f32 = 0.75;

/// Maximum number of lines of a header/footer candidate paragraph.
const MARGIN_CANDIDATE_MAX_LINES: usize = 3;

/// Per-document signals consumed by the classification pipeline.
#[derive(Debug, Clone, Default)]
pub struct LayoutCharacteristics {
    /// Typographic signature of section headings, from the first
    /// well-known heading found in document order.
    pub section_heading_markup: Option<FontFace>,
    /// Font of that same heading.
    pub section_heading_font: Option<Font>,
    /// Area covered by running page headers, if one clusters out.
    pub page_header_area: Option<Rect>,
    /// Area covered by running page footers, if one clusters out.
    pub page_footer_area: Option<Rect>,
    word_counter: ObjectCounter<String, usize>,
    hyphen_prefix_counter: ObjectCounter<String, usize>,
}

impl LayoutCharacteristics {
    /// Derive the characteristics of `document` in a single pass.
    pub fn analyze(document: &Document) -> Self {
        let mut characteristics = LayoutCharacteristics::default();
        characteristics.collect_margin_areas(document);
        characteristics.collect_section_heading_signature(document);
        characteristics.collect_word_counters(document);
        characteristics
    }

    /// Occurrences of a normalized word across the document.
    pub fn word_frequency(&self, word: &str) -> usize {
        self.word_counter.frequency(&word.to_string())
    }

    /// Occurrences of a hyphenated-word prefix across the document.
    pub fn hyphen_prefix_frequency(&self, prefix: &str) -> usize {
        self.hyphen_prefix_counter.frequency(&prefix.to_string())
    }

    /// Total number of counted (non-stop-word) word occurrences.
    pub fn counted_words(&self) -> usize {
        self.word_counter.len()
    }

    fn collect_margin_areas(&mut self, document: &Document) {
        let mut header_candidates: Vec<Rect> = Vec::new();
        let mut footer_candidates: Vec<Rect> = Vec::new();
        let mut pages_considered = 0usize;

        for page in &document.pages {
            if page.paragraphs.is_empty() {
                continue;
            }
            pages_considered += 1;

            let topmost = page.paragraphs.iter().max_by(|a, b| {
                rect_of(a, page.number)
                    .max_y
                    .partial_cmp(&rect_of(b, page.number).max_y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let lowermost = page.paragraphs.iter().min_by(|a, b| {
                rect_of(a, page.number)
                    .min_y
                    .partial_cmp(&rect_of(b, page.number).min_y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            if let Some(paragraph) = topmost {
                if paragraph.lines.len() < MARGIN_CANDIDATE_MAX_LINES {
                    header_candidates.push(rect_of(paragraph, page.number));
                }
            }
            if let Some(paragraph) = lowermost {
                if paragraph.lines.len() < MARGIN_CANDIDATE_MAX_LINES {
                    footer_candidates.push(rect_of(paragraph, page.number));
                }
            }
        }

        header_candidates.sort_by(|a, b| {
            b.max_y.partial_cmp(&a.max_y).unwrap_or(std::cmp::Ordering::Equal)
        });
        footer_candidates.sort_by(|a, b| {
            a.min_y.partial_cmp(&b.min_y).unwrap_or(std::cmp::Ordering::Equal)
        });

        self.page_header_area = cluster_margin_area(&header_candidates, pages_considered);
        self.page_footer_area = cluster_margin_area(&footer_candidates, pages_considered);
        debug!(
            "margin areas over {} pages: header {:?}, footer {:?}",
            pages_considered, self.page_header_area, self.page_footer_area
        );
    }

    fn collect_section_heading_signature(&mut self, document: &Document) {
        for paragraph in document.paragraphs() {
            let normalized = patterns::normalize_heading(&paragraph.text);
            if !patterns::is_well_known_section_heading(&normalized) {
                continue;
            }
            let (Some(face), Some(font)) = (paragraph.font_face(), paragraph.font()) else {
                continue;
            };
            debug!("section heading signature {:?} from '{}'", face, paragraph.text);
            self.section_heading_markup = Some(face);
            self.section_heading_font = Some(font.clone());
            return;
        }
    }

    fn collect_word_counters(&mut self, document: &Document) {
        let mut id = 0usize;
        for paragraph in document.paragraphs() {
            for word in paragraph.words() {
                let normalized = patterns::normalize_word(&word.text);
                if normalized.is_empty() || patterns::is_stop_word(&normalized) {
                    continue;
                }
                self.word_counter.add(normalized, id);
                id += 1;

                let folded = word.text.to_lowercase();
                if let Some(prefix) = hyphen_prefix(&folded) {
                    self.hyphen_prefix_counter.add(prefix.to_string(), id);
                    id += 1;
                }
            }
        }
    }
}

fn rect_of(paragraph: &crate::model::Paragraph, page_number: u32) -> Rect {
    paragraph.rect_on(page_number).unwrap_or(paragraph.bbox)
}

/// Accumulate sorted margin candidates into one area.
///
/// Starting from the first candidate, each subsequent one is unioned in
/// while it overlaps the accumulated rectangle and its height stays within
/// tolerance; the first failure stops the walk. The area only counts when
/// the cluster covers enough of the considered pages.
fn cluster_margin_area(candidates: &[Rect], pages_considered: usize) -> Option<Rect> {
    let first = candidates.first()?;
    let mut area = *first;
    let mut members = 1usize;
    for candidate in &candidates[1..] {
        let height_ok =
            (candidate.height() - area.height()).abs() <= MARGIN_HEIGHT_TOLERANCE * area.height();
        if candidate.overlaps(&area) && height_ok {
            area = area.union(candidate);
            members += 1;
        } else {
            break;
        }
    }
    if members as f32 > MARGIN_PAGE_COVERAGE * pages_considered as f32 {
        Some(area)
    } else {
        None
    }
}

/// The prefix-through-hyphen of a word whose hyphen sits strictly between
/// its first and last character.
fn hyphen_prefix(word: &str) -> Option<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    if chars.len() < 3 {
        return None;
    }
    for &(offset, c) in &chars[1..chars.len() - 1] {
        if c == '-' {
            return Some(&word[..offset + 1]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_prefix_interior_only() {
        assert_eq!(hyphen_prefix("data-based"), Some("data-"));
        assert_eq!(hyphen_prefix("-based"), None);
        assert_eq!(hyphen_prefix("data-"), None);
        assert_eq!(hyphen_prefix("ab"), None);
    }

    #[test]
    fn test_cluster_margin_area_threshold() {
        // Eight near-identical candidates over ten pages: above threshold.
        let candidates: Vec<Rect> = (0..8)
            .map(|i| Rect::new(50.0, 760.0 - i as f32 * 0.5, 550.0, 780.0 - i as f32 * 0.5))
            .collect();
        assert!(cluster_margin_area(&candidates, 10).is_some());

        // Seven over ten: 7 > 7.5 fails.
        assert!(cluster_margin_area(&candidates[..7], 10).is_none());
    }

    #[test]
    fn test_cluster_margin_area_stops_at_outlier() {
        let mut candidates: Vec<Rect> = (0..4)
            .map(|i| Rect::new(50.0, 760.0 - i as f32 * 0.5, 550.0, 780.0 - i as f32 * 0.5))
            .collect();
        // A tall outlier breaks the walk even though later members match,
        // leaving four members out of six considered pages.
        candidates.push(Rect::new(50.0, 600.0, 550.0, 780.0));
        candidates.push(Rect::new(50.0, 758.0, 550.0, 778.0));

        assert!(cluster_margin_area(&candidates, 6).is_none());
    }

    #[test]
    fn test_cluster_margin_area_empty() {
        assert_eq!(cluster_margin_area(&[], 10), None);
    }
}
