//! Shared helpers used by the autocomplete pipeline.

pub mod fuzzy;
pub mod keys;
pub mod text;
