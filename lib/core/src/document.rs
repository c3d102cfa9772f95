use crate::Escalation;

/// Derive the text blob that represents a record in the TF-IDF corpus.
///
/// title + description + category + subcategory + tags, space-joined, with
/// missing fields contributing empty strings. The blob is recomputed per
/// query and never persisted; tokenization happens downstream in the index.
#[must_use]
pub fn build_document(escalation: &Escalation) -> String {
    format!(
        "{} {} {} {} {}",
        escalation.title,
        escalation.description,
        escalation.category,
        escalation.subcategory,
        escalation.tags.join(" "),
    )
}
