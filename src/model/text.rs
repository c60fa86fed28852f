//! The typed text element hierarchy: characters → words → lines →
//! paragraphs → pages → document.
//!
//! Elements arrive from an upstream segmenter already positioned and
//! ordered; the constructors here only derive the aggregates each level
//! carries (bounding boxes, text, dominant typography, statistics).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::model::{Color, Font, FontFace, Role, RoleState};
use crate::stats::{
    CharacterStatistics, CharacterStatisticsBuilder, IntCounter, ObjectCounter, TextLineStatistics,
    TextLineStatisticsBuilder,
};

/// A single positioned character.
#[derive(Debug, Clone)]
pub struct Character {
    /// The character itself.
    pub char: char,
    /// Bounding box of the glyph.
    pub bbox: Rect,
    /// Font the character is set in.
    pub font: Font,
    /// Font size in points.
    pub font_size: f32,
    /// Fill color.
    pub color: Color,
}

impl Character {
    /// Create a character.
    pub fn new(char: char, bbox: Rect, font: Font, font_size: f32, color: Color) -> Self {
        Self {
            char,
            bbox,
            font,
            font_size,
            color,
        }
    }
}

/// An ordered run of characters forming one word.
#[derive(Debug, Clone)]
pub struct Word {
    /// The characters of the word.
    pub characters: Vec<Character>,
    /// Text content.
    pub text: String,
    /// Bounding box of the whole word.
    pub bbox: Rect,
}

impl Word {
    /// Create a word from its characters, deriving text and bounding box.
    ///
    /// # Panics
    ///
    /// Panics if `characters` is empty.
    pub fn from_characters(characters: Vec<Character>) -> Self {
        assert!(
            !characters.is_empty(),
            "Cannot create Word from empty characters"
        );
        let text: String = characters.iter().map(|c| c.char).collect();
        let bbox = characters
            .iter()
            .map(|c| c.bbox)
            .fold(characters[0].bbox, |acc, r| acc.union(&r));
        Self {
            characters,
            text,
            bbox,
        }
    }

    /// Number of characters in the word.
    pub fn char_count(&self) -> usize {
        self.characters.len()
    }
}

/// Horizontal alignment of a text line within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlignment {
    /// Flush with the left column edge.
    #[default]
    Left,
    /// Flush with the right column edge.
    Right,
    /// Centered within the column.
    Centered,
    /// Stretched to both column edges.
    Justified,
}

impl LineAlignment {
    /// Stable lowercase name of the alignment.
    pub fn name(&self) -> &'static str {
        match self {
            LineAlignment::Left => "left",
            LineAlignment::Right => "right",
            LineAlignment::Centered => "centered",
            LineAlignment::Justified => "justified",
        }
    }

    /// Resolve an alignment by its stable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlignment`] identifying the offending name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "left" => Ok(LineAlignment::Left),
            "right" => Ok(LineAlignment::Right),
            "centered" => Ok(LineAlignment::Centered),
            "justified" => Ok(LineAlignment::Justified),
            other => Err(Error::UnknownAlignment(other.to_string())),
        }
    }
}

/// An ordered run of words forming one text line.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// The words of the line.
    pub words: Vec<Word>,
    /// Text content, words joined by single spaces.
    pub text: String,
    /// Bounding box of the whole line.
    pub bbox: Rect,
    /// Horizontal alignment within the column.
    pub alignment: LineAlignment,
    /// Indentation level relative to the column edge.
    pub indent_level: u32,
    /// Dominant typographic signature of the line.
    pub font_face: FontFace,
}

impl TextLine {
    /// Create a line from its words, deriving text, bounding box and the
    /// dominant font face.
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty.
    pub fn from_words(words: Vec<Word>, alignment: LineAlignment, indent_level: u32) -> Self {
        assert!(!words.is_empty(), "Cannot create TextLine from empty words");
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let bbox = words
            .iter()
            .map(|w| w.bbox)
            .fold(words[0].bbox, |acc, r| acc.union(&r));

        let mut fonts: ObjectCounter<String, usize> = ObjectCounter::new();
        let mut sizes: IntCounter<usize> = IntCounter::new();
        let mut id = 0usize;
        for word in &words {
            for character in &word.characters {
                fonts.add(character.font.name.clone(), id);
                sizes.add(character.font_size.round() as i32, id);
                id += 1;
            }
        }
        let font_face = FontFace::new(
            fonts.most_common().unwrap_or_default(),
            sizes.most_common().unwrap_or_default(),
        );

        Self {
            words,
            text,
            bbox,
            alignment,
            indent_level,
            font_face,
        }
    }

    /// Baseline-to-baseline distance from this line down to `lower`.
    ///
    /// The baseline is approximated by the floor of the glyph box.
    pub fn pitch_to(&self, lower: &TextLine) -> f32 {
        self.bbox.min_y - lower.bbox.min_y
    }

    /// The first word of the line, if any.
    pub fn first_word(&self) -> Option<&Word> {
        self.words.first()
    }
}

/// The bounding rectangle a paragraph occupies on one page.
#[derive(Debug, Clone, Copy)]
pub struct PageRect {
    /// 1-based page number.
    pub page_number: u32,
    /// Bounding rectangle on that page.
    pub rect: Rect,
}

/// An ordered run of text lines forming one paragraph.
///
/// The `role` field is the output surface of the classification pipeline:
/// it starts Unknown and is written at most once, except for the
/// references-heading correction (see [`RoleState`]).
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// The lines of the paragraph.
    pub lines: Vec<TextLine>,
    /// Text content, lines joined by single spaces.
    pub text: String,
    /// Bounding box across every page the paragraph touches.
    pub bbox: Rect,
    /// One bounding rectangle per page the paragraph touches.
    pub page_rects: Vec<PageRect>,
    /// Semantic role assignment state.
    pub role: RoleState,
    /// Optional refinement of the primary role, owned by downstream
    /// enrichment.
    pub secondary_role: Option<Role>,
    /// Character statistics of this paragraph.
    pub char_stats: CharacterStatistics,
    /// Line statistics of this paragraph.
    pub line_stats: TextLineStatistics,
}

impl Paragraph {
    /// Create a paragraph from its lines on one page.
    ///
    /// # Panics
    ///
    /// Panics if `lines` is empty.
    pub fn from_lines(page_number: u32, lines: Vec<TextLine>) -> Self {
        assert!(
            !lines.is_empty(),
            "Cannot create Paragraph from empty lines"
        );
        let text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let bbox = lines
            .iter()
            .map(|l| l.bbox)
            .fold(lines[0].bbox, |acc, r| acc.union(&r));
        let char_stats =
            CharacterStatistics::of_characters(lines.iter().flat_map(|l| {
                l.words.iter().flat_map(|w| w.characters.iter())
            }));
        let line_stats = TextLineStatistics::of_lines(&lines);

        Self {
            lines,
            text,
            bbox,
            page_rects: vec![PageRect { page_number, rect: bbox }],
            role: RoleState::Unknown,
            secondary_role: None,
            char_stats,
            line_stats,
        }
    }

    /// Record that the paragraph also occupies `rect` on `page_number`.
    pub fn add_page_rect(&mut self, page_number: u32, rect: Rect) {
        self.page_rects.push(PageRect { page_number, rect });
        self.bbox = self.bbox.union(&rect);
    }

    /// The paragraph's rectangle on the given page, if it touches it.
    pub fn rect_on(&self, page_number: u32) -> Option<Rect> {
        self.page_rects
            .iter()
            .find(|area| area.page_number == page_number)
            .map(|area| area.rect)
    }

    /// The first line, if any.
    pub fn first_line(&self) -> Option<&TextLine> {
        self.lines.first()
    }

    /// The last line, if any.
    pub fn last_line(&self) -> Option<&TextLine> {
        self.lines.last()
    }

    /// Iterate over every word of the paragraph.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|l| l.words.iter())
    }

    /// Number of words in the paragraph.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.words.len()).sum()
    }

    /// Dominant font of the paragraph, if any.
    pub fn font(&self) -> Option<&Font> {
        self.char_stats.most_common_font.as_ref()
    }

    /// Dominant typographic signature of the paragraph, if any.
    pub fn font_face(&self) -> Option<FontFace> {
        self.char_stats.font_face()
    }

    /// Whether no role has been assigned yet.
    pub fn is_unknown(&self) -> bool {
        self.role.is_unknown()
    }

    /// Whether the paragraph carries the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role.role() == Some(role)
    }

    /// Assign `role` if the paragraph is still unclassified.
    pub fn assign_role(&mut self, role: Role) -> bool {
        self.role.assign(role)
    }

    /// Force the paragraph back to unclassified.
    pub fn reset_role(&mut self) {
        self.role.reset();
    }
}

/// Kind of a non-text page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphicKind {
    /// A raster or vector figure.
    Figure,
    /// A drawn shape (rules, boxes, paths).
    Shape,
}

/// A non-text element on a page.
#[derive(Debug, Clone)]
pub struct GraphicElement {
    /// Bounding box of the element.
    pub bbox: Rect,
    /// Kind of the element.
    pub kind: GraphicKind,
}

impl GraphicElement {
    /// Create a non-text element.
    pub fn new(bbox: Rect, kind: GraphicKind) -> Self {
        Self { bbox, kind }
    }
}

/// One page of the document.
#[derive(Debug, Clone)]
pub struct Page {
    /// 1-based page number.
    pub number: u32,
    /// Page media box.
    pub bbox: Rect,
    /// Paragraphs in reading order.
    pub paragraphs: Vec<Paragraph>,
    /// Non-text elements on the page.
    pub graphics: Vec<GraphicElement>,
}

impl Page {
    /// Create a page.
    pub fn new(
        number: u32,
        bbox: Rect,
        paragraphs: Vec<Paragraph>,
        graphics: Vec<GraphicElement>,
    ) -> Self {
        Self {
            number,
            bbox,
            paragraphs,
            graphics,
        }
    }
}

/// A whole document with document-wide statistics.
#[derive(Debug, Clone)]
pub struct Document {
    /// Pages in order.
    pub pages: Vec<Page>,
    /// Character statistics over the whole document.
    pub char_stats: CharacterStatistics,
    /// Line statistics over the whole document.
    pub line_stats: TextLineStatistics,
}

impl Document {
    /// Create a document from its pages, computing document-wide
    /// statistics.
    pub fn new(pages: Vec<Page>) -> Self {
        let mut char_builder = CharacterStatisticsBuilder::new();
        let mut line_builder = TextLineStatisticsBuilder::new();
        for page in &pages {
            for paragraph in &page.paragraphs {
                for line in &paragraph.lines {
                    for word in &line.words {
                        for character in &word.characters {
                            char_builder.observe(character);
                        }
                    }
                }
                line_builder.observe_lines(&paragraph.lines);
            }
        }
        Self {
            pages,
            char_stats: char_builder.finish(),
            line_stats: line_builder.finish(),
        }
    }

    /// Iterate over every paragraph in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.pages.iter().flat_map(|p| p.paragraphs.iter())
    }

    /// Total number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(|p| p.paragraphs.len()).sum()
    }

    /// The document's dominant typographic signature, if any.
    pub fn font_face(&self) -> Option<FontFace> {
        self.char_stats.font_face()
    }

    /// Most common line pitch under the document's dominant font face.
    pub fn most_common_line_pitch(&self) -> Option<f32> {
        let face = self.font_face()?;
        self.line_stats.most_common_line_pitch(&face)
    }
}
