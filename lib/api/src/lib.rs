//! REST surface for TriageX.
//!
//! Translates HTTP queries into query-core calls over the current corpus
//! snapshot and serializes the returned value objects as JSON. All routing
//! and serialization concerns live here; the core stays wire-agnostic.

pub mod rest;

pub use rest::RestApi;
