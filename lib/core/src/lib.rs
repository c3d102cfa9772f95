//! # TriageX Core
//!
//! Core library for the TriageX escalation triage engine.
//!
//! This crate provides the query core that the storage and API layers are
//! built around:
//!
//! - [`Escalation`] - the incident record model
//! - [`build_document`] - derived text blob per record (corpus builder)
//! - [`TfIdfIndex`] - per-document term weight vectors over the whole corpus
//! - [`rank_similar`] - cosine-similarity ranking against a target record
//! - [`compute_stats`] - single-pass dashboard rollup
//! - [`filter_escalations`] - conjunctive search/browse filtering
//!
//! Every operation is a synchronous, read-only function of an immutable
//! corpus snapshot; the core holds no state and performs no I/O.
//!
//! ## Example
//!
//! ```rust
//! use triagex_core::{rank_similar, Escalation, SimilarityConfig};
//!
//! let corpus = vec![
//!     Escalation::new("ESC-1001", "VM high CPU", "Sustained CPU pressure on D-series hosts"),
//!     Escalation::new("ESC-1002", "VM disk latency", "High disk IO latency on the same VM family"),
//! ];
//!
//! let similar = rank_similar(&corpus, "ESC-1001", &SimilarityConfig::default()).unwrap();
//! assert!(similar.iter().all(|s| s.escalation.id != "ESC-1001"));
//! ```

pub mod document;
pub mod error;
pub mod filter;
pub mod record;
pub mod similarity;
pub mod stats;
pub mod tfidf;

pub use document::build_document;
pub use error::{Error, Result};
pub use filter::{filter_escalations, EscalationFilter, Filter};
pub use record::{Escalation, EscalationContext, RoutingReasoning};
pub use similarity::{
    cosine_similarity, rank_similar, ScoredEscalation, SimilarityConfig, DEFAULT_MAX_RESULTS,
    DEFAULT_THRESHOLD,
};
pub use stats::{compute_stats, EscalationStats, SLA_AT_RISK};
pub use tfidf::{TermVector, TfIdfIndex};
