//! Core data types for packing-list reconciliation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Detection`]: A labeled, confidence-scored object recognized from a photo
//! - [`DetectionMatch`]: A detection annotated with reconciliation metadata
//! - [`PackingItem`], [`PackingList`]: The user's list, in the shape the app exports
//! - [`MatchKind`], [`MatchStrength`]: Result classification types
//!
//! ## Item Names
//!
//! List item names are free text. Matching treats them as opaque,
//! case-insensitive token sequences; there is no identity beyond the text
//! itself, and the caller maps matched names back to its own records.

pub mod detection;
pub mod item;
pub mod types;

pub use detection::{Detection, DetectionMatch};
pub use item::{PackingItem, PackingList};
pub use types::{MatchKind, MatchStrength};
