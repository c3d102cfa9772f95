use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Escalation;

/// SLA status value counted by [`EscalationStats::at_risk`].
pub const SLA_AT_RISK: &str = "At risk";

/// Dashboard rollup of the whole corpus.
///
/// The breakdown maps are keyed by whatever string values occur in the data;
/// no buckets are pre-seeded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EscalationStats {
    pub total: usize,
    pub by_severity: HashMap<String, usize>,
    pub by_priority: HashMap<String, usize>,
    pub by_category: HashMap<String, usize>,
    pub by_team: HashMap<String, usize>,
    pub at_risk: usize,
    pub avg_confidence: f64,
}

/// Roll the corpus up in a single pass.
///
/// `avg_confidence` treats a missing routing block as confidence 0 and is 0
/// for an empty corpus.
#[must_use]
pub fn compute_stats(corpus: &[Escalation]) -> EscalationStats {
    let mut stats = EscalationStats {
        total: corpus.len(),
        ..EscalationStats::default()
    };

    let mut confidence_sum = 0.0;
    for escalation in corpus {
        *stats
            .by_severity
            .entry(escalation.status.clone())
            .or_insert(0) += 1;
        *stats
            .by_priority
            .entry(escalation.priority.clone())
            .or_insert(0) += 1;
        *stats
            .by_category
            .entry(escalation.category.clone())
            .or_insert(0) += 1;
        *stats
            .by_team
            .entry(escalation.assigned_to.clone())
            .or_insert(0) += 1;

        confidence_sum += escalation.confidence();
        if escalation.sla_status() == SLA_AT_RISK {
            stats.at_risk += 1;
        }
    }

    if stats.total > 0 {
        stats.avg_confidence = confidence_sum / stats.total as f64;
    }

    stats
}
