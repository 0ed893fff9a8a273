//! CSV sample store.
//!
//! Loads labeled samples from a flat CSV file, normalizes them, and caches
//! the result so that a given file is read at most once per store.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::LoadError;
use crate::model::{Label, Sample};

/// Columns every sample file must carry (matched case-insensitively).
pub const REQUIRED_COLUMNS: [&str; 6] = ["sender", "subject", "body", "link", "label", "clue"];

/// Column positions resolved from a normalized header row.
struct Columns {
    sender: usize,
    subject: usize,
    body: usize,
    link: usize,
    label: usize,
    clue: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (idx, name) in headers.iter().enumerate() {
            // First occurrence wins when two headers normalize to the same name.
            positions.entry(name.trim().to_lowercase()).or_insert(idx);
        }

        let mut missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !positions.contains_key(**c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(LoadError::MissingColumns { missing });
        }

        let at = |name: &str| positions[name];
        Ok(Self {
            sender: at("sender"),
            subject: at("subject"),
            body: at("body"),
            link: at("link"),
            label: at("label"),
            clue: at("clue"),
        })
    }
}

fn cell(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().to_string()
}

/// An ordered, non-empty, immutable collection of samples.
#[derive(Debug, Clone)]
pub struct SampleSet {
    samples: Vec<Sample>,
    dropped_rows: usize,
}

impl SampleSet {
    /// Build a set from already-normalized samples.
    ///
    /// Fails with [`LoadError::Empty`] when `samples` is empty.
    pub fn new(samples: Vec<Sample>) -> Result<Self, LoadError> {
        if samples.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self {
            samples,
            dropped_rows: 0,
        })
    }

    /// Load a CSV sample file from disk.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            samples = set.len(),
            dropped = set.dropped_rows,
            "loaded sample file"
        );
        Ok(set)
    }

    /// Parse CSV sample data from any reader.
    ///
    /// Header names are trimmed and lowercased before the required-column
    /// check. Rows whose label does not normalize to `phish` or `safe` are
    /// dropped; source order is kept for the rest.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::resolve(reader.headers()?)?;

        let mut samples = Vec::new();
        let mut dropped_rows = 0;
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let raw_label = record.get(columns.label).unwrap_or_default();
            let Some(label) = Label::normalize(raw_label) else {
                tracing::debug!(row, label = raw_label, "dropping row with unknown label");
                dropped_rows += 1;
                continue;
            };

            samples.push(Sample {
                sender: cell(&record, columns.sender),
                subject: cell(&record, columns.subject),
                body: cell(&record, columns.body),
                link: cell(&record, columns.link),
                label,
                clue: cell(&record, columns.clue),
            });
        }

        let mut set = Self::new(samples)?;
        set.dropped_rows = dropped_rows;
        Ok(set)
    }

    /// Number of samples. Never zero.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; an empty set cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Rows discarded during load because their label did not normalize.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// How many samples carry the given label.
    pub fn count(&self, label: Label) -> usize {
        self.samples.iter().filter(|s| s.label == label).count()
    }
}

impl Index<usize> for SampleSet {
    type Output = Sample;

    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Load-once cache of sample files, keyed by path.
///
/// Whoever constructs the store owns the cached sets; sessions receive
/// shared, read-only handles.
#[derive(Debug, Default)]
pub struct SampleStore {
    cache: Mutex<HashMap<PathBuf, Arc<SampleSet>>>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the samples for `path`, reading the file only on first use.
    ///
    /// Failed loads are not cached, so a fixed file can be retried.
    pub fn load(&self, path: &Path) -> Result<Arc<SampleSet>, LoadError> {
        let mut cache = self.lock_cache();

        if let Some(set) = cache.get(path) {
            tracing::debug!(path = %path.display(), "sample cache hit");
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(SampleSet::from_path(path)?);
        cache.insert(path.to_path_buf(), Arc::clone(&set));
        Ok(set)
    }

    /// Whether `path` has already been loaded into this store.
    pub fn is_cached(&self, path: &Path) -> bool {
        self.lock_cache().contains_key(path)
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<SampleSet>>> {
        self.cache.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("sample cache lock was poisoned; continuing");
            poisoned.into_inner()
        })
    }
}

/// A warning from sample set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based sample index (if applicable).
    pub index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a loaded set for content problems that don't block play.
pub fn validate_sample_set(set: &SampleSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for repeated messages
    let mut seen = HashSet::new();
    for (idx, sample) in set.iter().enumerate() {
        let key = (&sample.sender, &sample.subject, &sample.body);
        if !seen.insert(key) {
            warnings.push(ValidationWarning {
                index: Some(idx),
                message: format!("duplicate message: {}", sample.subject),
            });
        }
    }

    for (idx, sample) in set.iter().enumerate() {
        if sample.body.trim().is_empty() {
            warnings.push(ValidationWarning {
                index: Some(idx),
                message: "body is empty".into(),
            });
        }
        if sample.clue.trim().is_empty() {
            warnings.push(ValidationWarning {
                index: Some(idx),
                message: "clue is empty; feedback will have no explanation".into(),
            });
        }
    }

    for label in Label::ALL {
        if set.count(label) == 0 {
            warnings.push(ValidationWarning {
                index: None,
                message: format!("no samples labeled '{}'", label.as_str()),
            });
        }
    }

    warnings
}
