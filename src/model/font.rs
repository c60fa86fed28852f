//! Font and color attribution types.

use serde::{Deserialize, Serialize};

/// A font identity as attributed to extracted characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    /// Font name/family, e.g. `"Times-Roman"`.
    pub name: String,
    /// Whether the font face is bold.
    pub is_bold: bool,
    /// Whether the font face is italic.
    pub is_italic: bool,
}

impl Font {
    /// Create a regular (non-bold, non-italic) font.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::model::Font;
    ///
    /// let font = Font::new("Times-Roman");
    /// assert_eq!(font.name, "Times-Roman");
    /// assert!(!font.is_bold);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bold: false,
            is_italic: false,
        }
    }

    /// Create a font with explicit style flags.
    pub fn styled(name: impl Into<String>, is_bold: bool, is_italic: bool) -> Self {
        Self {
            name: name.into(),
            is_bold,
            is_italic,
        }
    }
}

/// A (font name, rounded size) pair — the atomic typographic signature
/// compared for "is this the same style" decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontFace {
    /// Font name/family.
    pub font_name: String,
    /// Font size rounded to the nearest whole point.
    pub font_size: i32,
}

impl FontFace {
    /// Create a face from a name and an already-rounded size.
    pub fn new(font_name: impl Into<String>, font_size: i32) -> Self {
        Self {
            font_name: font_name.into(),
            font_size,
        }
    }

    /// Create a face from a font and a raw size, rounding the size.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::model::{Font, FontFace};
    ///
    /// let face = FontFace::of(&Font::new("Times-Roman"), 11.9);
    /// assert_eq!(face.font_size, 12);
    /// ```
    pub fn of(font: &Font, font_size: f32) -> Self {
        Self {
            font_name: font.name.clone(),
            font_size: font_size.round() as i32,
        }
    }

    /// The face as a single markup string, e.g. `"Times-Roman-12"`.
    pub fn markup(&self) -> String {
        format!("{}-{}", self.font_name, self.font_size)
    }
}

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a new color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// White.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
}
