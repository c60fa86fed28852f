//! Geometric primitives for layout analysis.
//!
//! This module provides the basic geometric types and operations used
//! throughout the statistics and classification code.
//!
//! Coordinates follow the PDF convention: the origin sits at the
//! bottom-left of the page and y grows upward, so the *topmost* element on
//! a page is the one with the largest `max_y`.

use serde::{Deserialize, Serialize};

/// A 2D point in document space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in document space, stored as its two corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge
    pub min_x: f32,
    /// Y coordinate of the lower edge
    pub min_y: f32,
    /// X coordinate of the right edge
    pub max_x: f32,
    /// Y coordinate of the upper edge
    pub max_y: f32,
}

impl Rect {
    /// Create a new rectangle from its corner coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Area of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.area(), 5000.0);
    /// ```
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Center point of the rectangle.
    pub fn midpoint(&self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Check whether this rectangle overlaps another.
    ///
    /// Rectangles that merely touch along an edge do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let r2 = Rect::new(50.0, 50.0, 150.0, 150.0);
    /// let r3 = Rect::new(200.0, 200.0, 300.0, 300.0);
    ///
    /// assert!(r1.overlaps(&r2));
    /// assert!(!r1.overlaps(&r3));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Check whether this rectangle contains a point (edges inclusive).
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let r2 = Rect::new(25.0, 25.0, 75.0, 75.0);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.min_x, 0.0);
    /// assert_eq!(union.max_x, 75.0);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Intersection of this rectangle with another, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        })
    }

    /// Fraction of this rectangle's area covered by `other`, in `[0, 1]`.
    ///
    /// Returns 0.0 for a degenerate (zero-area) rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_roles::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let r2 = Rect::new(0.0, 0.0, 10.0, 5.0);
    /// assert_eq!(r2.overlap_ratio(&r1), 1.0);
    /// assert_eq!(r1.overlap_ratio(&r2), 0.5);
    /// ```
    pub fn overlap_ratio(&self, other: &Rect) -> f32 {
        let own = self.area();
        if own <= 0.0 {
            return 0.0;
        }
        match self.intersection(other) {
            Some(shared) => shared.area() / own,
            None => 0.0,
        }
    }
}
