//! Integration tests for the role classification pipeline.
//!
//! Each scenario builds a mock document with realistic geometry (10pt
//! body text on 12pt line pitch, headings set apart by extra vertical
//! space) and runs the full pipeline over it.

use pdf_roles::geometry::Rect;
use pdf_roles::model::{
    Character, Color, Document, Font, GraphicElement, GraphicKind, LineAlignment, Page, Paragraph,
    Role, TextLine, Word,
};
use pdf_roles::semantics::classify;

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

fn page_bbox() -> Rect {
    Rect::new(0.0, 0.0, 612.0, 792.0)
}

fn body_font() -> Font {
    Font::new("Times-Roman")
}

fn heading_font() -> Font {
    Font::styled("Times-Bold", true, false)
}

fn mock_char(c: char, x: f32, y: f32, size: f32, font: &Font) -> Character {
    let width = size * 0.5;
    Character::new(
        c,
        Rect::new(x, y, x + width, y + size),
        font.clone(),
        size,
        Color::black(),
    )
}

fn mock_word(text: &str, x: f32, y: f32, size: f32, font: &Font) -> Word {
    let chars: Vec<Character> = text
        .chars()
        .enumerate()
        .map(|(i, c)| mock_char(c, x + i as f32 * size * 0.5, y, size, font))
        .collect();
    Word::from_characters(chars)
}

fn line_with(
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    font: &Font,
    alignment: LineAlignment,
    indent_level: u32,
) -> TextLine {
    let mut cursor = x;
    let words: Vec<Word> = text
        .split_whitespace()
        .map(|token| {
            let word = mock_word(token, cursor, y, size, font);
            cursor = word.bbox.max_x + 4.0;
            word
        })
        .collect();
    TextLine::from_words(words, alignment, indent_level)
}

fn mock_line(text: &str, x: f32, y: f32, size: f32, font: &Font) -> TextLine {
    line_with(text, x, y, size, font, LineAlignment::Left, 0)
}

/// A paragraph of consecutive lines with 12pt pitch, top baseline at `top`.
fn block(page: u32, texts: &[&str], x: f32, top: f32, size: f32, font: &Font) -> Paragraph {
    let lines: Vec<TextLine> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| mock_line(text, x, top - i as f32 * 12.0, size, font))
        .collect();
    Paragraph::from_lines(page, lines)
}

/// A paragraph flowing `words` into lines of `per_line` words each.
fn flow_block(
    page: u32,
    words: &[&str],
    per_line: usize,
    x: f32,
    top: f32,
    size: f32,
    font: &Font,
) -> Paragraph {
    let lines: Vec<TextLine> = words
        .chunks(per_line)
        .enumerate()
        .map(|(i, chunk)| mock_line(&chunk.join(" "), x, top - i as f32 * 12.0, size, font))
        .collect();
    Paragraph::from_lines(page, lines)
}

/// Fifty words of abstract-like prose.
fn abstract_words() -> Vec<&'static str> {
    let vocabulary = [
        "layout", "statistics", "drive", "role", "classification", "over",
        "segmented", "document", "structure", "signals",
    ];
    let mut words = Vec::new();
    for _ in 0..5 {
        words.extend_from_slice(&vocabulary);
    }
    words
}

fn paragraph<'a>(document: &'a Document, page: usize, index: usize) -> &'a Paragraph {
    &document.pages[page].paragraphs[index]
}

fn roles_of(document: &Document) -> Vec<Option<Role>> {
    document.paragraphs().map(|p| p.role.role()).collect()
}

// ============================================================================
// A two-page scholarly document exercising most stages at once
// ============================================================================

/// Page 1: title, authors, keywords, abstract heading, abstract,
/// introduction heading, two body paragraphs.
/// Page 2: references heading, two reference entries, a page number.
fn scholarly_document() -> Document {
    let body = body_font();
    let bold = heading_font();

    let title = block(1, &["Statistical Layout Analysis"], 100.0, 700.0, 18.0, &bold);
    let authors = block(1, &["Jane Doe and John Smith"], 100.0, 670.0, 10.0, &body);
    let keywords = block(1, &["Keywords: layout analysis statistics"], 100.0, 640.0, 10.0, &body);
    let abstract_heading = block(1, &["Abstract"], 100.0, 610.0, 12.0, &bold);
    let abstract_body = flow_block(1, &abstract_words(), 10, 100.0, 585.0, 10.0, &body);
    let introduction = block(1, &["Introduction"], 100.0, 500.0, 12.0, &bold);
    let body_one = block(
        1,
        &[
            "statistical layout analysis of",
            "documents with statistics and",
            "layout analysis for structure",
        ],
        100.0,
        470.0,
        10.0,
        &body,
    );
    let body_two = block(
        1,
        &[
            "the statistical model counts",
            "layout analysis tokens and",
            "statistics for every page",
        ],
        100.0,
        410.0,
        10.0,
        &body,
    );
    let page_one = Page::new(
        1,
        page_bbox(),
        vec![
            title,
            authors,
            keywords,
            abstract_heading,
            abstract_body,
            introduction,
            body_one,
            body_two,
        ],
        vec![],
    );

    let references_heading = block(2, &["References"], 100.0, 700.0, 12.0, &bold);
    let reference_one = block(
        2,
        &["Doe 2019 structured layout", "extraction from documents"],
        100.0,
        670.0,
        10.0,
        &body,
    );
    let reference_two = block(
        2,
        &["Smith 2021 statistics for", "document role labeling"],
        100.0,
        630.0,
        10.0,
        &body,
    );
    let folio = block(2, &["7"], 303.5, 40.0, 10.0, &body);
    let page_two = Page::new(
        2,
        page_bbox(),
        vec![references_heading, reference_one, reference_two, folio],
        vec![],
    );

    Document::new(vec![page_one, page_two])
}

#[test]
fn test_scholarly_document_roles() {
    let mut document = scholarly_document();
    let session = classify(&mut document);

    assert!(paragraph(&document, 0, 0).has_role(Role::Title));
    assert!(paragraph(&document, 0, 1).has_role(Role::HeaderOther));
    assert!(paragraph(&document, 0, 2).has_role(Role::Keywords));
    assert!(paragraph(&document, 0, 3).has_role(Role::AbstractHeading));
    assert!(paragraph(&document, 0, 4).has_role(Role::Abstract));
    assert!(paragraph(&document, 0, 5).has_role(Role::SectionHeading));
    assert!(paragraph(&document, 0, 6).has_role(Role::BodyText));
    assert!(paragraph(&document, 0, 7).has_role(Role::BodyText));

    assert!(paragraph(&document, 1, 0).has_role(Role::ReferencesHeading));
    assert!(paragraph(&document, 1, 1).has_role(Role::Reference));
    assert!(paragraph(&document, 1, 2).has_role(Role::Reference));
    assert!(paragraph(&document, 1, 3).has_role(Role::PageFooter));

    assert!(session.abstract_heading_found);
    assert!(session.abstract_found);
    assert!(session.references_heading.is_some());
    assert!(session.contents_heading.is_none());
}

#[test]
fn test_classification_is_idempotent() {
    let mut document = scholarly_document();
    classify(&mut document);
    let first = roles_of(&document);

    classify(&mut document);
    let second = roles_of(&document);

    assert_eq!(first, second);
}

// ============================================================================
// References dedup: only the last match survives
// ============================================================================

#[test]
fn test_later_references_heading_supersedes_earlier() {
    let body = body_font();
    let bold = heading_font();

    let early_heading = block(1, &["References"], 100.0, 700.0, 10.0, &bold);
    let body_one = block(
        1,
        &["ordinary body text here", "spanning three lines now", "to anchor line pitch"],
        100.0,
        650.0,
        10.0,
        &body,
    );
    let page_one = Page::new(1, page_bbox(), vec![early_heading, body_one], vec![]);

    let late_heading = block(2, &["References"], 100.0, 600.0, 10.0, &bold);
    let entry_one = block(
        2,
        &["Doe 2019 structured layout", "extraction from documents"],
        100.0,
        570.0,
        10.0,
        &body,
    );
    let entry_two = block(
        2,
        &["Smith 2021 statistics for", "document role labeling"],
        100.0,
        530.0,
        10.0,
        &body,
    );
    let tail = block(
        2,
        &["closing body paragraph", "keeps the page bottom", "free of candidates"],
        100.0,
        480.0,
        10.0,
        &body,
    );
    let page_two = Page::new(2, page_bbox(), vec![late_heading, entry_one, entry_two, tail], vec![]);

    let mut document = Document::new(vec![page_one, page_two]);
    let session = classify(&mut document);

    // The earlier heading was reverted; only the later one is retained.
    assert!(paragraph(&document, 0, 0).is_unknown());
    assert!(paragraph(&document, 1, 0).has_role(Role::ReferencesHeading));
    assert_eq!(
        session.references_heading.map(|at| (at.page, at.paragraph)),
        Some((1, 0))
    );
    assert!(paragraph(&document, 1, 1).has_role(Role::Reference));
    assert!(paragraph(&document, 1, 2).has_role(Role::Reference));
}

// ============================================================================
// Math ratio boundary
// ============================================================================

fn formula_candidate_document(math_words: usize) -> Document {
    let body = body_font();

    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        700.0,
        10.0,
        &body,
    );
    // Single-letter words count as math off the left alignment; "ab" does
    // not. Justified alignment keeps both relaxed triggers out of play.
    let letters = ["x", "y", "z", "u", "v", "w", "p"];
    let mut text: Vec<&str> = letters[..math_words].to_vec();
    text.push("ab");
    let candidate = Paragraph::from_lines(
        1,
        vec![line_with(
            &text.join(" "),
            100.0,
            600.0,
            10.0,
            &body,
            LineAlignment::Justified,
            0,
        )],
    );
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        550.0,
        10.0,
        &body,
    );
    Document::new(vec![Page::new(1, page_bbox(), vec![top, candidate, tail], vec![])])
}

#[test]
fn test_math_ratio_exactly_at_threshold_is_not_formula() {
    // 6 math chars of 8 total: exactly 0.75, strict comparison fails.
    let mut document = formula_candidate_document(6);
    classify(&mut document);
    assert!(!paragraph(&document, 0, 1).has_role(Role::Formula));
}

#[test]
fn test_math_ratio_above_threshold_is_formula() {
    // 7 math chars of 9 total: ~0.78.
    let mut document = formula_candidate_document(7);
    classify(&mut document);
    assert!(paragraph(&document, 0, 1).has_role(Role::Formula));
}

#[test]
fn test_centered_lines_lower_the_math_threshold() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        700.0,
        10.0,
        &body,
    );
    // 6 of 8 chars are math: 0.75 fails the strict test but the centered
    // line satisfies the relaxed one.
    let candidate = Paragraph::from_lines(
        1,
        vec![line_with(
            "x y z u v w ab",
            100.0,
            600.0,
            10.0,
            &body,
            LineAlignment::Centered,
            0,
        )],
    );
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        550.0,
        10.0,
        &body,
    );
    let mut document =
        Document::new(vec![Page::new(1, page_bbox(), vec![top, candidate, tail], vec![])]);
    classify(&mut document);
    assert!(paragraph(&document, 0, 1).has_role(Role::Formula));
}

#[test]
fn test_left_aligned_lines_never_count_as_math() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        700.0,
        10.0,
        &body,
    );
    // The same symbol soup on a left-aligned line is all plain text.
    let candidate = block(1, &["x y z u v w p q"], 100.0, 600.0, 10.0, &body);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        550.0,
        10.0,
        &body,
    );
    let mut document =
        Document::new(vec![Page::new(1, page_bbox(), vec![top, candidate, tail], vec![])]);
    classify(&mut document);
    assert!(!paragraph(&document, 0, 1).has_role(Role::Formula));
}

// ============================================================================
// Itemize items
// ============================================================================

#[test]
fn test_itemize_start_and_indent_continuation() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        700.0,
        10.0,
        &body,
    );
    let item = Paragraph::from_lines(
        1,
        vec![line_with(
            "1. first item describes layout",
            112.0,
            640.0,
            10.0,
            &body,
            LineAlignment::Left,
            2,
        )],
    );
    // No numbering pattern, but same indent level right below an item.
    let continuation = Paragraph::from_lines(
        1,
        vec![line_with(
            "continued description of the item",
            112.0,
            628.0,
            10.0,
            &body,
            LineAlignment::Left,
            2,
        )],
    );
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        580.0,
        10.0,
        &body,
    );
    let mut document = Document::new(vec![Page::new(
        1,
        page_bbox(),
        vec![top, item, continuation, tail],
        vec![],
    )]);
    classify(&mut document);

    assert!(paragraph(&document, 0, 1).has_role(Role::ItemizeItem));
    assert!(paragraph(&document, 0, 2).has_role(Role::ItemizeItem));
}

#[test]
fn test_itemize_start_requires_extra_pitch() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        700.0,
        10.0,
        &body,
    );
    // The numbering matches, but the paragraph sits at ordinary line
    // pitch below its predecessor.
    let too_close = Paragraph::from_lines(
        1,
        vec![line_with(
            "1. not actually an item",
            112.0,
            676.0 - 12.0,
            10.0,
            &body,
            LineAlignment::Left,
            2,
        )],
    );
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        600.0,
        10.0,
        &body,
    );
    let mut document =
        Document::new(vec![Page::new(1, page_bbox(), vec![top, too_close, tail], vec![])]);
    classify(&mut document);

    assert!(!paragraph(&document, 0, 1).has_role(Role::ItemizeItem));
}

// ============================================================================
// Tables and figures
// ============================================================================

#[test]
fn test_table_caption_and_body() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        750.0,
        10.0,
        &body,
    );
    let cell_row_two = block(1, &["jumps 42 over"], 100.0, 570.0, 10.0, &body);
    let cell_row_one = block(1, &["quick 37 brown"], 100.0, 540.0, 10.0, &body);
    let caption = block(1, &["Table 3: Sample measurements"], 100.0, 500.0, 10.0, &body);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        420.0,
        10.0,
        &body,
    );
    let ruling = GraphicElement::new(Rect::new(100.0, 520.0, 300.0, 585.0), GraphicKind::Shape);

    let mut document = Document::new(vec![Page::new(
        1,
        page_bbox(),
        vec![top, cell_row_two, cell_row_one, caption, tail],
        vec![ruling],
    )]);
    classify(&mut document);

    assert!(paragraph(&document, 0, 3).has_role(Role::TableCaption));
    assert!(paragraph(&document, 0, 1).has_role(Role::Table));
    assert!(paragraph(&document, 0, 2).has_role(Role::Table));
    assert!(paragraph(&document, 0, 0).has_role(Role::BodyText));
}

#[test]
fn test_caption_without_nearby_graphics_is_not_a_table() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        750.0,
        10.0,
        &body,
    );
    let caption = block(1, &["Table 3: Sample measurements"], 100.0, 500.0, 10.0, &body);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        420.0,
        10.0,
        &body,
    );
    let mut document =
        Document::new(vec![Page::new(1, page_bbox(), vec![top, caption, tail], vec![])]);
    classify(&mut document);

    assert!(!paragraph(&document, 0, 1).has_role(Role::TableCaption));
}

#[test]
fn test_figure_walk_stops_at_wider_paragraph() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        750.0,
        10.0,
        &body,
    );
    let far_label = block(1, &["model overview"], 150.0, 600.0, 10.0, &body);
    // Wider than the caption by more than the tolerance.
    let wide_label = block(1, &["a much wider label spilling out"], 80.0, 560.0, 10.0, &body);
    let near_label = block(1, &["axis labels"], 140.0, 530.0, 10.0, &body);
    let caption = block(1, &["Figure 2: Model architecture overview"], 100.0, 500.0, 10.0, &body);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        420.0,
        10.0,
        &body,
    );
    let image = GraphicElement::new(Rect::new(120.0, 520.0, 280.0, 660.0), GraphicKind::Figure);

    let mut document = Document::new(vec![Page::new(
        1,
        page_bbox(),
        vec![top, far_label, wide_label, near_label, caption, tail],
        vec![image],
    )]);
    classify(&mut document);

    assert!(paragraph(&document, 0, 4).has_role(Role::FigureCaption));
    assert!(paragraph(&document, 0, 3).has_role(Role::Figure));
    // The wide label ends the walk; nothing beyond it is figure content.
    assert!(!paragraph(&document, 0, 2).has_role(Role::Figure));
    assert!(!paragraph(&document, 0, 1).has_role(Role::Figure));
}

#[test]
fn test_thin_rules_do_not_anchor_figures() {
    let body = body_font();
    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        750.0,
        10.0,
        &body,
    );
    let caption = block(1, &["Figure 2: Model architecture overview"], 100.0, 500.0, 10.0, &body);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        420.0,
        10.0,
        &body,
    );
    // A separator rule: wide but under a point tall.
    let rule = GraphicElement::new(Rect::new(100.0, 530.0, 300.0, 530.5), GraphicKind::Shape);

    let mut document = Document::new(vec![Page::new(
        1,
        page_bbox(),
        vec![top, caption, tail],
        vec![rule],
    )]);
    classify(&mut document);

    assert!(!paragraph(&document, 0, 1).has_role(Role::FigureCaption));
}

// ============================================================================
// Table of contents
// ============================================================================

#[test]
fn test_contents_body_runs_until_next_heading() {
    let body = body_font();
    let bold = heading_font();

    let contents = block(1, &["Contents"], 100.0, 700.0, 10.0, &bold);
    let entry_one = block(1, &["Overview 3"], 100.0, 670.0, 10.0, &body);
    let entry_two = block(1, &["Architecture 5"], 100.0, 658.0, 10.0, &body);
    let entry_three = block(1, &["Design 9"], 100.0, 646.0, 10.0, &body);
    let introduction = block(1, &["Introduction"], 100.0, 600.0, 10.0, &bold);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        560.0,
        10.0,
        &body,
    );

    let mut document = Document::new(vec![Page::new(
        1,
        page_bbox(),
        vec![contents, entry_one, entry_two, entry_three, introduction, tail],
        vec![],
    )]);
    let session = classify(&mut document);

    assert!(paragraph(&document, 0, 0).has_role(Role::TableOfContentsHeading));
    assert!(paragraph(&document, 0, 1).has_role(Role::TableOfContents));
    assert!(paragraph(&document, 0, 2).has_role(Role::TableOfContents));
    assert!(paragraph(&document, 0, 3).has_role(Role::TableOfContents));
    assert!(paragraph(&document, 0, 4).has_role(Role::SectionHeading));
    assert!(paragraph(&document, 0, 5).has_role(Role::BodyText));
    assert!(session.contents_heading.is_some());
}

// ============================================================================
// Page headers and order sensitivity
// ============================================================================

/// Four pages with a one-line running head at the same rectangle. Page
/// one's is a real section heading: the heading stages run first and the
/// margin stage must not overwrite their verdict.
fn running_heads_document() -> Document {
    let body = body_font();
    let bold = heading_font();

    let pages: Vec<Page> = (0..4)
        .map(|i| {
            let page_number = i as u32 + 1;
            let head = if i == 0 {
                block(page_number, &["Introduction"], 250.0, 770.0, 10.0, &bold)
            } else {
                block(page_number, &["Journal of Tests"], 250.0, 770.0, 10.0, &body)
            };
            let middle = block(
                page_number,
                &["ordinary body text here", "spanning three lines now", "to anchor line pitch"],
                100.0,
                600.0,
                10.0,
                &body,
            );
            let tail = block(
                page_number,
                &["closing paragraph lines", "again three lines tall", "to avoid candidates"],
                100.0,
                500.0,
                10.0,
                &body,
            );
            Page::new(page_number, page_bbox(), vec![head, middle, tail], vec![])
        })
        .collect();
    Document::new(pages)
}

#[test]
fn test_margin_stage_does_not_overwrite_headings() {
    let mut document = running_heads_document();
    classify(&mut document);

    // The heading keeps its role even though it sits in the header area.
    assert!(paragraph(&document, 0, 0).has_role(Role::SectionHeading));
    assert!(paragraph(&document, 1, 0).has_role(Role::PageHeader));
    assert!(paragraph(&document, 2, 0).has_role(Role::PageHeader));
    assert!(paragraph(&document, 3, 0).has_role(Role::PageHeader));
}

// ============================================================================
// Abstract scan stops document-wide
// ============================================================================

#[test]
fn test_section_heading_stops_abstract_scan_for_good() {
    let body = body_font();
    let bold = heading_font();
    let small = Font::new("Times-Roman");

    let title = block(1, &["Layout Statistics"], 100.0, 740.0, 18.0, &bold);
    let abstract_heading = block(1, &["Abstract"], 100.0, 700.0, 12.0, &bold);
    let abstract_body = flow_block(1, &abstract_words(), 10, 100.0, 675.0, 10.0, &body);
    let introduction = block(1, &["Introduction"], 100.0, 560.0, 12.0, &bold);
    let body_one = block(
        1,
        &["ordinary body text here", "spanning three lines now", "to anchor line pitch"],
        100.0,
        520.0,
        10.0,
        &body,
    );
    let page_one = Page::new(
        1,
        page_bbox(),
        vec![title, abstract_heading, abstract_body, introduction, body_one],
        vec![],
    );

    // Fifty small-print words with no heading above them: the smaller
    // font would qualify, but the scan already stopped on page one.
    let stranded = flow_block(2, &abstract_words(), 10, 100.0, 700.0, 9.0, &small);
    let page_two = Page::new(2, page_bbox(), vec![stranded], vec![]);

    let mut document = Document::new(vec![page_one, page_two]);
    let session = classify(&mut document);

    assert!(paragraph(&document, 0, 2).has_role(Role::Abstract));
    assert!(session.abstract_found);
    assert!(!paragraph(&document, 1, 0).has_role(Role::Abstract));
}

// ============================================================================
// Appendix
// ============================================================================

#[test]
fn test_appendix_body_runs_until_next_section_heading() {
    let body = body_font();
    let bold = heading_font();

    let appendix_heading = block(1, &["Appendix"], 100.0, 700.0, 10.0, &bold);
    let appendix_body = block(
        1,
        &["supplementary derivation details", "collected for completeness", "in three short lines"],
        100.0,
        650.0,
        10.0,
        &body,
    );
    let conclusion = block(1, &["Conclusion"], 100.0, 580.0, 10.0, &bold);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        540.0,
        10.0,
        &body,
    );
    let mut document = Document::new(vec![Page::new(
        1,
        page_bbox(),
        vec![appendix_heading, appendix_body, conclusion, tail],
        vec![],
    )]);
    classify(&mut document);

    assert!(paragraph(&document, 0, 0).has_role(Role::AppendixHeading));
    assert!(paragraph(&document, 0, 1).has_role(Role::Appendix));
    assert!(paragraph(&document, 0, 2).has_role(Role::SectionHeading));
    assert!(paragraph(&document, 0, 3).has_role(Role::BodyText));
}

// ============================================================================
// Terminal states
// ============================================================================

#[test]
fn test_unmatched_paragraphs_stay_unknown() {
    let body = body_font();
    let odd = Font::new("Courier");

    let top = block(
        1,
        &["plain body paragraph one", "plain body paragraph two", "plain body paragraph three"],
        100.0,
        700.0,
        10.0,
        &body,
    );
    // Off-font at body size: no stage claims it, and that is fine.
    let stranger = block(1, &["completely unrelated typography"], 100.0, 600.0, 10.0, &odd);
    let tail = block(
        1,
        &["closing paragraph lines", "again three lines tall", "to avoid margin areas"],
        100.0,
        550.0,
        10.0,
        &body,
    );
    let mut document =
        Document::new(vec![Page::new(1, page_bbox(), vec![top, stranger, tail], vec![])]);
    classify(&mut document);

    assert!(paragraph(&document, 0, 0).has_role(Role::BodyText));
    assert!(paragraph(&document, 0, 2).has_role(Role::BodyText));
    assert!(paragraph(&document, 0, 1).is_unknown());
}
