//! Per-scope typographic statistics.
//!
//! A statistics value is an immutable-after-computation snapshot of the
//! characters (or text lines) of one aggregation scope — a paragraph, a
//! page or the whole document. Builders stream observations into the
//! counter family and freeze the ranks on [`finish`].
//!
//! [`finish`]: CharacterStatisticsBuilder::finish

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Character, Color, Font, FontFace, TextLine};
use crate::stats::{FloatCounter, IntCounter, ObjectCounter};

/// Aggregated character-level signals of one scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterStatistics {
    /// Most common character height.
    pub most_common_height: Option<f32>,
    /// Average character height.
    pub average_height: Option<f32>,
    /// Most common character width.
    pub most_common_width: Option<f32>,
    /// Average character width.
    pub average_width: Option<f32>,
    /// Most common font.
    pub most_common_font: Option<Font>,
    /// Most common font size, raw.
    pub most_common_font_size: Option<f32>,
    /// Average font size.
    pub average_font_size: Option<f32>,
    /// Most common font size rounded to whole points.
    pub most_common_rounded_size: Option<i32>,
    /// Most common character color.
    pub most_common_color: Option<Color>,
}

impl CharacterStatistics {
    /// Compute the statistics of a character sequence.
    pub fn of_characters<'a, I>(characters: I) -> Self
    where
        I: IntoIterator<Item = &'a Character>,
    {
        let mut builder = CharacterStatisticsBuilder::new();
        for character in characters {
            builder.observe(character);
        }
        builder.finish()
    }

    /// The dominant typographic signature of the scope, if any.
    pub fn font_face(&self) -> Option<FontFace> {
        let font = self.most_common_font.as_ref()?;
        let size = self.most_common_rounded_size?;
        Some(FontFace::new(font.name.clone(), size))
    }
}

/// Streaming builder for [`CharacterStatistics`].
#[derive(Debug, Default)]
pub struct CharacterStatisticsBuilder {
    heights: FloatCounter<usize>,
    widths: FloatCounter<usize>,
    font_sizes: FloatCounter<usize>,
    rounded_sizes: IntCounter<usize>,
    fonts: ObjectCounter<Font, usize>,
    colors: ObjectCounter<Color, usize>,
    seen: usize,
}

impl CharacterStatisticsBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one character into the aggregates.
    pub fn observe(&mut self, character: &Character) {
        let id = self.seen;
        self.seen += 1;
        self.heights.add(character.bbox.height(), id);
        self.widths.add(character.bbox.width(), id);
        self.font_sizes.add(character.font_size, id);
        self.rounded_sizes.add(character.font_size.round() as i32, id);
        self.fonts.add(character.font.clone(), id);
        self.colors.add(character.color, id);
    }

    /// Freeze the aggregates into a snapshot.
    pub fn finish(mut self) -> CharacterStatistics {
        CharacterStatistics {
            most_common_height: self.heights.most_common(),
            average_height: self.heights.average(),
            most_common_width: self.widths.most_common(),
            average_width: self.widths.average(),
            most_common_font: self.fonts.most_common(),
            most_common_font_size: self.font_sizes.most_common(),
            average_font_size: self.font_sizes.average(),
            most_common_rounded_size: self.rounded_sizes.most_common(),
            most_common_color: self.colors.most_common(),
        }
    }
}

/// Aggregated line-level signals of one scope.
///
/// Line pitch — the vertical distance between the baselines of two
/// consecutive lines — is tracked per font face, because mixing faces of
/// different sizes would blur the signal the classification relies on.
#[derive(Debug, Clone, Default)]
pub struct TextLineStatistics {
    pitch_per_face: HashMap<FontFace, f32>,
    /// Most common horizontal gap between consecutive words of a line.
    pub most_common_whitespace_width: Option<f32>,
}

impl TextLineStatistics {
    /// Compute the statistics of the lines of a single paragraph.
    pub fn of_lines(lines: &[TextLine]) -> Self {
        let mut builder = TextLineStatisticsBuilder::new();
        builder.observe_lines(lines);
        builder.finish()
    }

    /// Most common line pitch observed under `face`, if any.
    pub fn most_common_line_pitch(&self, face: &FontFace) -> Option<f32> {
        self.pitch_per_face.get(face).copied()
    }
}

/// Streaming builder for [`TextLineStatistics`].
#[derive(Debug, Default)]
pub struct TextLineStatisticsBuilder {
    pitches: HashMap<FontFace, FloatCounter<usize>>,
    whitespace: FloatCounter<usize>,
    seen: usize,
}

impl TextLineStatisticsBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the consecutive lines of one paragraph into the aggregates.
    ///
    /// Pitches are only measured between lines of the same paragraph;
    /// attribution goes to the upper line's font face.
    pub fn observe_lines(&mut self, lines: &[TextLine]) {
        for pair in lines.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            let pitch = upper.pitch_to(lower);
            if !pitch.is_finite() || pitch <= 0.0 {
                continue;
            }
            let id = self.seen;
            self.seen += 1;
            self.pitches
                .entry(upper.font_face.clone())
                .or_default()
                .add(pitch, id);
        }
        for line in lines {
            for pair in line.words.windows(2) {
                let gap = pair[1].bbox.min_x - pair[0].bbox.max_x;
                if gap <= 0.0 {
                    continue;
                }
                let id = self.seen;
                self.seen += 1;
                self.whitespace.add(gap, id);
            }
        }
    }

    /// Freeze the aggregates into a snapshot.
    pub fn finish(mut self) -> TextLineStatistics {
        let mut pitch_per_face = HashMap::new();
        for (face, counter) in self.pitches.iter_mut() {
            if let Some(pitch) = counter.most_common() {
                pitch_per_face.insert(face.clone(), pitch);
            }
        }
        TextLineStatistics {
            pitch_per_face,
            most_common_whitespace_width: self.whitespace.most_common(),
        }
    }
}
