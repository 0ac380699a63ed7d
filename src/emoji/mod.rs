//! Emoji autocomplete pipeline: find the trigger token, search, navigate, insert.

pub mod insert;
pub mod navigator;
pub mod search;
pub mod trigger;
