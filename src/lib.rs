//! # pdf_roles
//!
//! Document statistics and semantic role classification for parsed PDF
//! text.
//!
//! The crate consumes a document model that an upstream extractor has
//! already segmented — characters grouped into words, lines, paragraphs
//! and pages, each carrying a bounding rectangle and a font/size/color
//! attribution — and annotates every paragraph with a semantic role:
//! title, section heading, abstract, reference, table, figure, formula,
//! body text and so on.
//!
//! Two subsystems do the work:
//!
//! - [`stats`] — frequency-aware aggregators ([`stats::FloatCounter`],
//!   [`stats::IntCounter`], [`stats::ObjectCounter`]) over an indexed
//!   priority queue with lazy deletion, answering "what is the most/least
//!   common X" in sub-linear time under streaming insert/remove.
//! - [`semantics`] — a fixed sequence of fifteen classification stages
//!   consuming the per-document signals of
//!   [`layout::LayoutCharacteristics`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_roles::model::Document;
//! use pdf_roles::semantics::classify;
//!
//! # fn example(mut document: Document) {
//! let session = classify(&mut document);
//! for paragraph in document.paragraphs() {
//!     if let Some(role) = paragraph.role.role() {
//!         println!("{}: {:.40}", role.name(), paragraph.text);
//!     }
//! }
//! # }
//! ```
//!
//! The pipeline is single-threaded and deterministic: re-running it on
//! the same document produces the same annotations. Paragraphs matching
//! no stage remain unclassified, which is a valid terminal state.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometric primitives
pub mod geometry;

// The typed document model
pub mod model;

// Statistical aggregators
pub mod stats;

// Document-wide layout signals
pub mod layout;

// The role classification pipeline
pub mod semantics;

pub use error::{Error, Result};
