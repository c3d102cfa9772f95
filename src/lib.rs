//! # TriageX
//!
//! An in-memory escalation triage engine: TF-IDF similarity search,
//! dashboard statistics and conjunctive filtering over incident records.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install triagex
//! triagex --data-path data/incidents_enriched.json --http-port 4000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use triagex::prelude::*;
//!
//! let corpus = vec![
//!     Escalation::new("ESC-1001", "VM high CPU performance issue", ""),
//!     Escalation::new("ESC-1002", "VM disk IO performance problem", ""),
//! ];
//!
//! // Records most similar to a target, ranked by TF-IDF cosine score
//! let similar = rank_similar(&corpus, "ESC-1001", &SimilarityConfig::default()).unwrap();
//!
//! // Dashboard rollup and search filtering over the same snapshot
//! let stats = compute_stats(&corpus);
//! let open = filter_escalations(&corpus, &EscalationFilter::default());
//! assert_eq!(stats.total, open.len());
//! # let _ = similar;
//! ```
//!
//! ## Crate Structure
//!
//! TriageX is composed of several crates:
//!
//! - [`triagex-core`](https://docs.rs/triagex-core) - record model, TF-IDF index,
//!   similarity ranking, stats and filters
//! - [`triagex-storage`](https://docs.rs/triagex-storage) - JSON dataset loading
//!   and whole-corpus snapshots
//! - [`triagex-api`](https://docs.rs/triagex-api) - REST endpoints
//!
//! ## Design
//!
//! The query core is stateless and takes the corpus as an explicit read-only
//! argument on every call. The TF-IDF index is rebuilt from the full corpus
//! per similarity query - the simplest correct policy for a corpus that only
//! changes by wholesale replacement.

// Re-export core types
pub use triagex_core::{
    build_document, compute_stats, cosine_similarity, filter_escalations, rank_similar, Error,
    Escalation, EscalationContext, EscalationFilter, EscalationStats, Filter, Result,
    RoutingReasoning, ScoredEscalation, SimilarityConfig, TermVector, TfIdfIndex,
    DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD, SLA_AT_RISK,
};

// Re-export storage
pub use triagex_storage::{CorpusStore, DATA_PATH_ENV};

// Re-export API
pub use triagex_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_document, compute_stats, cosine_similarity, filter_escalations, rank_similar,
        CorpusStore, Error, Escalation, EscalationFilter, EscalationStats, Filter, Result,
        RestApi, ScoredEscalation, SimilarityConfig, TfIdfIndex,
    };
}
