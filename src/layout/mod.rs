//! Document-wide layout signals.
//!
//! This module derives the per-document characteristics the role
//! classification pipeline consumes, and hosts the lexical pattern tables
//! shared by the analysis stages.

pub mod characteristics;
pub(crate) mod patterns;

pub use characteristics::LayoutCharacteristics;
