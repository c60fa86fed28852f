//! Statistical aggregators for document analysis.
//!
//! This module provides the frequency-counter family and the indexed
//! priority queue underneath it, plus the per-scope typographic
//! statistics snapshots computed from them.

pub mod counter;
pub mod heap;
pub mod text_stats;

pub use counter::{FloatCounter, IntCounter, ObjectCounter};
pub use heap::{IndexedPriorityQueue, Orientation};
pub use text_stats::{
    CharacterStatistics, CharacterStatisticsBuilder, TextLineStatistics, TextLineStatisticsBuilder,
};
