// Integration tests for TriageX
use triagex_core::{
    compute_stats, filter_escalations, rank_similar, Error, Escalation, EscalationFilter,
    RoutingReasoning, SimilarityConfig,
};
use triagex_storage::CorpusStore;

fn record(id: &str, title: &str, category: &str, status: &str) -> Escalation {
    let mut escalation = Escalation::new(id, title, "");
    escalation.category = category.to_string();
    escalation.status = status.to_string();
    escalation.routing_reasoning = Some(RoutingReasoning {
        confidence: 0.9,
        ..RoutingReasoning::default()
    });
    escalation
}

fn sample_corpus() -> Vec<Escalation> {
    vec![
        record("ESC-1001", "VM high CPU performance issue", "Compute", "critical"),
        record("ESC-1002", "VM disk IO performance problem", "Compute", "high"),
        record("ESC-1003", "Azure AD login MFA failure", "Identity & Access", "medium"),
    ]
}

#[test]
fn test_similarity_ranks_shared_vocabulary_first() {
    let corpus = sample_corpus();
    let results = rank_similar(&corpus, "ESC-1001", &SimilarityConfig::default()).unwrap();

    // ESC-1002 shares "vm", "performance" and the category with the target;
    // ESC-1003 shares nothing and stays below the threshold.
    assert!(!results.is_empty());
    assert_eq!(results[0].escalation.id, "ESC-1002");
    assert!(results.iter().all(|r| r.escalation.id != "ESC-1003"));
}

#[test]
fn test_similarity_never_returns_the_target() {
    let corpus = sample_corpus();
    for escalation in &corpus {
        let results =
            rank_similar(&corpus, &escalation.id, &SimilarityConfig::default()).unwrap();
        assert!(results.iter().all(|r| r.escalation.id != escalation.id));
    }
}

#[test]
fn test_similarity_respects_threshold_and_cap() {
    let corpus = sample_corpus();
    let config = SimilarityConfig::default();
    let results = rank_similar(&corpus, "ESC-1001", &config).unwrap();

    assert!(results.len() <= config.max_results);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for result in &results {
        assert!(result.score >= config.threshold);
        assert!(result.score <= 1.0);
    }
}

#[test]
fn test_similarity_unknown_id_is_not_found() {
    let corpus = sample_corpus();
    let err = rank_similar(&corpus, "nonexistent-id", &SimilarityConfig::default()).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_stats_rollup() {
    let corpus = sample_corpus();
    let stats = compute_stats(&corpus);

    assert_eq!(stats.total, corpus.len());
    assert_eq!(stats.by_severity.values().sum::<usize>(), stats.total);
    assert_eq!(stats.by_category["Compute"], 2);
    assert!((stats.avg_confidence - 0.9).abs() < 1e-9);
    assert!(stats.avg_confidence >= 0.0 && stats.avg_confidence <= 1.0);
}

#[test]
fn test_stats_empty_corpus() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_confidence, 0.0);
}

#[test]
fn test_filter_without_predicates_is_identity() {
    let corpus = sample_corpus();
    let results = filter_escalations(&corpus, &EscalationFilter::default());
    let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["ESC-1001", "ESC-1002", "ESC-1003"]);
}

#[test]
fn test_filter_search_matches_title() {
    let mut corpus = sample_corpus();
    corpus.push(record(
        "ESC-1004",
        "SQL Database Connection Timeouts",
        "Data & Storage",
        "high",
    ));

    let filter = EscalationFilter {
        search: Some("sql".to_string()),
        ..EscalationFilter::default()
    };
    let results = filter_escalations(&corpus, &filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "ESC-1004");
}

#[test]
fn test_store_round_trip() {
    let corpus = sample_corpus();
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), serde_json::to_string(&corpus).unwrap()).unwrap();

    let store = CorpusStore::open(Some(file.path())).unwrap();
    assert_eq!(store.len(), corpus.len());

    // The whole query core runs against one snapshot.
    let snapshot = store.snapshot();
    let stats = compute_stats(&snapshot);
    assert_eq!(stats.total, 3);

    let similar = rank_similar(&snapshot, "ESC-1001", &SimilarityConfig::default()).unwrap();
    assert_eq!(similar[0].escalation.id, "ESC-1002");

    // Replacement swaps the corpus wholesale; the held snapshot is unchanged.
    store.replace(Vec::new());
    assert_eq!(store.len(), 0);
    assert_eq!(snapshot.len(), 3);
}

#[test]
fn test_loaded_records_keep_unknown_fields() {
    let raw = r#"[
        {
            "id": "ESC-2001",
            "title": "Blob storage 503s",
            "status": "high",
            "assignedTo": "Storage",
            "routingReasoning": { "confidence": 0.87, "model": "tfidf-v2" },
            "context": { "slaStatus": "At risk", "timeToSLA": "2h" },
            "resolution": "mitigated"
        }
    ]"#;
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), raw).unwrap();

    let store = CorpusStore::open(Some(file.path())).unwrap();
    let snapshot = store.snapshot();
    let escalation = &snapshot[0];
    assert_eq!(escalation.sla_status(), "At risk");
    assert_eq!(escalation.extra["resolution"], "mitigated");

    let back = serde_json::to_value(escalation).unwrap();
    assert_eq!(back["resolution"], "mitigated");
    assert_eq!(back["routingReasoning"]["model"], "tfidf-v2");
    assert_eq!(back["context"]["timeToSLA"], "2h");

    let stats = compute_stats(&snapshot);
    assert_eq!(stats.at_risk, 1);
    assert_eq!(stats.by_team["Storage"], 1);
}
