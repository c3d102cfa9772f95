// Conjunctive predicate evaluation over the corpus
use serde::Deserialize;

use crate::Escalation;

pub trait Filter {
    fn matches(&self, escalation: &Escalation) -> bool;
}

/// The search/browse filter set. Every predicate is optional; absent (or
/// "all" for the dropdown-backed ones) means pass. Deserializes straight
/// from a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EscalationFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

// "all" is the UI's wildcard sentinel for the dropdown filters.
fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| *v != "all")
}

impl Filter for EscalationFilter {
    fn matches(&self, escalation: &Escalation) -> bool {
        if let Some(status) = selected(&self.status) {
            if escalation.status != status {
                return false;
            }
        }

        if let Some(priority) = selected(&self.priority) {
            if escalation.priority != priority {
                return false;
            }
        }

        if let Some(category) = selected(&self.category) {
            // Bidirectional substring match, case-insensitive: "Networking"
            // matches a "network" filter and vice versa. Loose on purpose.
            let record = escalation.category.to_lowercase();
            let wanted = category.to_lowercase();
            if !record.contains(&wanted) && !wanted.contains(&record) {
                return false;
            }
        }

        if let Some(search) = self.search.as_deref() {
            let needle = search.to_lowercase();
            let hit = [
                &escalation.title,
                &escalation.description,
                &escalation.id,
                &escalation.customer,
            ]
            .into_iter()
            .chain(&escalation.tags)
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Apply the filter to the corpus, preserving corpus order.
///
/// Stateless and pure: the same (corpus, filter) pair always yields the same
/// subsequence.
#[must_use]
pub fn filter_escalations<'a>(
    corpus: &'a [Escalation],
    filter: &EscalationFilter,
) -> Vec<&'a Escalation> {
    corpus.iter().filter(|e| filter.matches(e)).collect()
}
