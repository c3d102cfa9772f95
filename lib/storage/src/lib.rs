//! Corpus loading and snapshot management for TriageX.
//!
//! The dataset is loaded once from JSON and treated as read-only input to the
//! query core; updates happen by whole-corpus replacement, never by mutating
//! records in place.

pub mod store;

pub use store::{CorpusStore, DATA_PATH_ENV};
