use anyhow::{bail, Context, Result};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use triagex_core::Escalation;

/// Environment variable that overrides the dataset location.
pub const DATA_PATH_ENV: &str = "ESCALATIONS_DATA_PATH";

// Fallback locations, tried in order after the explicit path and the env var.
const DEFAULT_DATA_PATHS: &[&str] = &[
    "data/incidents_enriched.json",
    "data/escalations.json",
];

/// Owns the current corpus and hands out immutable snapshots.
///
/// The corpus is held as an `Arc` behind a lock; readers clone the `Arc` so
/// every core call observes one consistent snapshot, and updates replace the
/// whole corpus at once. No in-place record mutation.
pub struct CorpusStore {
    corpus: RwLock<Arc<Vec<Escalation>>>,
    source: Option<PathBuf>,
}

impl CorpusStore {
    /// Load the dataset from the first readable candidate path: the explicit
    /// path if given, then `ESCALATIONS_DATA_PATH`, then the fixed fallbacks.
    ///
    /// Unreadable candidates are logged and skipped; running out of
    /// candidates is an error.
    pub fn open(explicit: Option<&Path>) -> Result<Self> {
        for path in Self::candidate_paths(explicit) {
            if !path.exists() {
                continue;
            }
            match Self::read_corpus(&path) {
                Ok(records) => {
                    info!("Loaded {} escalations from {}", records.len(), path.display());
                    return Ok(Self {
                        corpus: RwLock::new(Arc::new(records)),
                        source: Some(path),
                    });
                }
                Err(e) => {
                    warn!("Failed to load {}: {:#}", path.display(), e);
                }
            }
        }
        bail!(
            "no escalation dataset found; pass --data-path or set {}",
            DATA_PATH_ENV
        );
    }

    /// Wrap an already-loaded corpus. No backing file, so [`reload`] is
    /// unavailable.
    ///
    /// [`reload`]: CorpusStore::reload
    #[must_use]
    pub fn from_records(records: Vec<Escalation>) -> Self {
        Self {
            corpus: RwLock::new(Arc::new(records)),
            source: None,
        }
    }

    fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = explicit {
            paths.push(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            if !path.is_empty() {
                paths.push(PathBuf::from(path));
            }
        }
        paths.extend(DEFAULT_DATA_PATHS.iter().map(PathBuf::from));
        paths
    }

    fn read_corpus(path: &Path) -> Result<Vec<Escalation>> {
        let file = File::open(path)
            .with_context(|| format!("opening dataset {}", path.display()))?;
        let records: Vec<Escalation> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("decoding dataset {}", path.display()))?;

        // Ids must be unique within a corpus; a duplicate is a dataset bug,
        // not a startup failure.
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                warn!("Duplicate escalation id {} in {}", record.id, path.display());
            }
        }

        Ok(records)
    }

    /// The current corpus snapshot. The returned `Arc` stays consistent for
    /// as long as the caller holds it, regardless of concurrent replacements.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Escalation>> {
        self.corpus.read().clone()
    }

    /// Swap in a new corpus wholesale.
    pub fn replace(&self, records: Vec<Escalation>) {
        *self.corpus.write() = Arc::new(records);
    }

    /// Re-read the backing file and replace the corpus. Returns the new
    /// corpus size.
    pub fn reload(&self) -> Result<usize> {
        let Some(source) = &self.source else {
            bail!("corpus store has no backing file to reload from");
        };
        let records = Self::read_corpus(source)?;
        let count = records.len();
        info!("Reloaded {} escalations from {}", count, source.display());
        self.replace(records);
        Ok(count)
    }

    /// Path the corpus was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.read().is_empty()
    }
}
