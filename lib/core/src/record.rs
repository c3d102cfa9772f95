use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An escalated incident record as loaded from the dataset.
///
/// Field vocabularies (category, priority, team) are open string sets
/// discovered at aggregation time, not fixed enums - new values appear in the
/// dataset without a schema change. Unknown fields are kept in `extra` so
/// enriched rows round-trip through the API untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Escalation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub tags: Vec<String>,
    /// Severity: critical/high/medium/low/resolved in practice, but open.
    pub status: String,
    /// Priority key, e.g. "P0".."P4".
    pub priority: String,
    pub customer: String,
    /// Owning team name.
    pub assigned_to: String,
    /// ISO-8601 timestamp string; opaque to the query core.
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_reasoning: Option<RoutingReasoning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<EscalationContext>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// How the router arrived at the current assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingReasoning {
    /// Routing confidence in [0, 1].
    pub confidence: f64,
    pub factors: Vec<String>,
    pub suggested_actions: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Operational context attached by the enrichment pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EscalationContext {
    /// e.g. "At risk" / "On track".
    pub sla_status: String,
    pub impact_level: String,
    pub customer_tier: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Escalation {
    /// Create a record with the given id, title and description; every other
    /// field starts empty.
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Routing confidence, 0.0 when the record carries no reasoning block.
    #[inline]
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.routing_reasoning
            .as_ref()
            .map(|r| r.confidence)
            .unwrap_or(0.0)
    }

    /// SLA status, empty when the record carries no context block.
    #[inline]
    #[must_use]
    pub fn sla_status(&self) -> &str {
        self.context
            .as_ref()
            .map(|c| c.sla_status.as_str())
            .unwrap_or("")
    }
}
