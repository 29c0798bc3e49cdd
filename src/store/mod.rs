//! File-backed label store.
//!
//! Persists one image file and one JSON sidecar per confirmed
//! classification, plus a single aggregate index document:
//!
//! - `{root}/user_images/{id}.jpg` — raw image bytes as submitted
//! - `{root}/labels/{id}.json` — one [`LabelRecord`]
//! - `{root}/labels/_index.json` — the [`CategoryIndex`]
//!
//! Records are never mutated in place. The index is read, updated, and
//! rewritten in full on every save; a store-global mutex serializes that
//! read-modify-write so in-process writers cannot lose updates. Writers in
//! other processes remain unsynchronized.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

use crate::categories::PrimaryCategory;
use crate::errors::{StoreError, StoreResult};
use crate::models::{
    compute_quality_score, AnalysisResult, CategoryIndex, CategoryStatistics, Classification,
    FeedbackNote, IndexEntry, LabelRecord, SavedLabel,
};
use crate::settings::StorageSettings;

const IMAGES_DIR: &str = "user_images";
const LABELS_DIR: &str = "labels";
const INDEX_FILE: &str = "_index.json";
const INDEX_TEMP_FILE: &str = "_index.json.tmp";

pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub struct LabelStore {
    root: PathBuf,
    images_dir: PathBuf,
    labels_dir: PathBuf,
    max_image_bytes: usize,
    // Serializes the index read-modify-rewrite across in-process writers.
    index_lock: Mutex<()>,
}

impl LabelStore {
    /// Bind a store to `root`, creating the image and label directories.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with_limit(root, DEFAULT_MAX_IMAGE_BYTES)
    }

    pub fn from_settings(settings: &StorageSettings) -> StoreResult<Self> {
        Self::open_with_limit(settings.data_dir.clone(), settings.max_image_bytes)
    }

    fn open_with_limit(root: impl Into<PathBuf>, max_image_bytes: usize) -> StoreResult<Self> {
        let root = root.into();
        let images_dir = root.join(IMAGES_DIR);
        let labels_dir = root.join(LABELS_DIR);
        for dir in [&images_dir, &labels_dir] {
            fs::create_dir_all(dir).map_err(|err| StoreError::write(dir.clone(), err))?;
        }

        info!("Label store initialized at {}", root.display());

        Ok(Self {
            root,
            images_dir,
            labels_dir,
            max_image_bytes,
            index_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist one confirmed classification.
    ///
    /// Validates the input, assigns a fresh id, writes the image and the
    /// record sidecar, then folds a reference entry into the index. A
    /// failed image or sidecar write fails the save before the index is
    /// touched. A failed index rewrite after the sidecar landed leaves the
    /// record stored but unreachable through category lookups; that window
    /// is reported to the caller and not retried.
    pub fn save_label(
        &self,
        image_bytes: &[u8],
        analysis: &AnalysisResult,
        feedback_note: Option<&str>,
    ) -> StoreResult<SavedLabel> {
        self.validate_image(image_bytes)?;
        let classification = validate_classification(analysis)?;
        if let Some(confidence) = analysis.confidence {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(StoreError::validation(format!(
                    "confidence {confidence} outside [0.0, 1.0]"
                )));
            }
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let dimensions = analysis.dimensions.map(|d| d.recomputed());
        let feedback = feedback_note
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .map(|note| FeedbackNote {
                note: note.to_string(),
                submitted_at: now,
            });

        let quality_score = compute_quality_score(
            analysis.confidence,
            dimensions.is_some(),
            feedback.is_some(),
        );

        let record = LabelRecord {
            id: id.clone(),
            image_reference: format!("{IMAGES_DIR}/{id}.jpg"),
            created_at: now,
            classification,
            dimensions,
            confidence: analysis.confidence,
            reasoning: analysis.reasoning.clone(),
            feedback,
            quality_score,
        };

        let image_path = self.image_path(&id);
        fs::write(&image_path, image_bytes)
            .map_err(|err| StoreError::write(image_path.clone(), err))?;

        let record_path = self.label_path(&id);
        let encoded = serde_json::to_string_pretty(&record)
            .map_err(|err| StoreError::write(record_path.clone(), err))?;
        fs::write(&record_path, encoded)
            .map_err(|err| StoreError::write(record_path.clone(), err))?;

        if let Err(err) = self.append_index_entry(&record) {
            warn!("label {id} saved but not indexed; category lookups will miss it");
            return Err(err);
        }

        info!(
            "Saved label {id} ({} / {})",
            record.classification.primary_category,
            record.classification.object_name
        );

        Ok(SavedLabel { id, record })
    }

    /// Total count, last update time, and per-category breakdown.
    pub fn get_category_statistics(&self) -> StoreResult<CategoryStatistics> {
        let index = self.load_index()?;
        Ok(CategoryStatistics {
            total_count: index.total_count,
            updated_at: index.updated_at,
            by_category: index.by_category,
        })
    }

    /// All records under a primary category, oldest first.
    ///
    /// Unknown codes yield an empty vector.
    pub fn get_labels_by_primary_category(&self, primary: &str) -> StoreResult<Vec<LabelRecord>> {
        self.collect_records(primary, None)
    }

    /// All records under a secondary category, oldest first.
    pub fn get_labels_by_secondary_category(
        &self,
        primary: &str,
        secondary: &str,
    ) -> StoreResult<Vec<LabelRecord>> {
        self.collect_records(primary, Some(secondary))
    }

    /// Direct sidecar lookup; an unknown id is `Ok(None)`.
    pub fn get_label_details(&self, id: &str) -> StoreResult<Option<LabelRecord>> {
        // Ids are always UUIDs; anything else cannot name a stored record
        // and must not be allowed to shape a path.
        if Uuid::parse_str(id).is_err() {
            return Ok(None);
        }

        let path = self.label_path(id);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(|err| StoreError::Corrupt { path, source: err }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Read { path, source: err }),
        }
    }

    fn collect_records(
        &self,
        primary: &str,
        secondary: Option<&str>,
    ) -> StoreResult<Vec<LabelRecord>> {
        let Some(category) = PrimaryCategory::from_code(primary) else {
            return Ok(Vec::new());
        };

        let index = self.load_index()?;
        let mut records = Vec::new();
        for entry in &index.entries {
            if entry.primary_category != category {
                continue;
            }
            if let Some(wanted) = secondary {
                if entry.secondary_category.as_deref() != Some(wanted) {
                    continue;
                }
            }
            match self.get_label_details(&entry.id) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => warn!("index entry {} has no sidecar; skipping", entry.id),
                Err(err) => warn!("skipping unreadable label {}: {err}", entry.id),
            }
        }

        Ok(records)
    }

    fn append_index_entry(&self, record: &LabelRecord) -> StoreResult<()> {
        let _guard = match self.index_lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let now = Utc::now();
        let mut index = self.load_index()?;
        index.push_entry(
            IndexEntry {
                id: record.id.clone(),
                primary_category: record.classification.primary_category,
                secondary_category: record.classification.secondary_category.clone(),
                created_at: record.created_at,
            },
            now,
        );
        self.write_index(&index)
    }

    fn load_index(&self) -> StoreResult<CategoryIndex> {
        let path = self.index_path();
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| StoreError::Corrupt { path, source: err }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(CategoryIndex::empty(Utc::now())),
            Err(err) => Err(StoreError::Read { path, source: err }),
        }
    }

    // Rewrite through a temp file so a torn write never leaves behind a
    // half document.
    fn write_index(&self, index: &CategoryIndex) -> StoreResult<()> {
        let path = self.index_path();
        let temp_path = self.labels_dir.join(INDEX_TEMP_FILE);
        let encoded = serde_json::to_string_pretty(index)
            .map_err(|err| StoreError::write(path.clone(), err))?;
        fs::write(&temp_path, encoded)
            .map_err(|err| StoreError::write(temp_path.clone(), err))?;
        fs::rename(&temp_path, &path).map_err(|err| StoreError::write(path, err))
    }

    fn validate_image(&self, image_bytes: &[u8]) -> StoreResult<()> {
        if image_bytes.is_empty() {
            return Err(StoreError::validation("image payload is empty"));
        }
        if image_bytes.len() > self.max_image_bytes {
            return Err(StoreError::validation(format!(
                "image payload of {} bytes exceeds the {} byte limit",
                image_bytes.len(),
                self.max_image_bytes
            )));
        }
        image::guess_format(image_bytes)
            .map_err(|_| StoreError::validation("image payload is not a recognized raster format"))?;
        Ok(())
    }

    fn image_path(&self, id: &str) -> PathBuf {
        self.images_dir.join(format!("{id}.jpg"))
    }

    fn label_path(&self, id: &str) -> PathBuf {
        self.labels_dir.join(format!("{id}.json"))
    }

    fn index_path(&self) -> PathBuf {
        self.labels_dir.join(INDEX_FILE)
    }
}

/// Check the classification against the fixed taxonomy and fill in any
/// display names the collaborator left out.
fn validate_classification(analysis: &AnalysisResult) -> StoreResult<Classification> {
    let object_name = analysis.object_name.trim();
    if object_name.is_empty() {
        return Err(StoreError::validation("object_name is required"));
    }

    let primary = PrimaryCategory::from_code(&analysis.primary_category).ok_or_else(|| {
        StoreError::validation(format!(
            "unknown primary category '{}'",
            analysis.primary_category
        ))
    })?;

    let secondary = match &analysis.secondary_category {
        Some(code) => Some(primary.secondary(code).ok_or_else(|| {
            StoreError::validation(format!(
                "'{code}' is not a refinement of {}",
                primary.as_str()
            ))
        })?),
        None => None,
    };

    Ok(Classification {
        primary_category: primary,
        primary_category_name: analysis
            .primary_category_name
            .clone()
            .unwrap_or_else(|| primary.display_name().to_string()),
        secondary_category: secondary.map(|s| s.code.to_string()),
        secondary_category_name: analysis
            .secondary_category_name
            .clone()
            .or_else(|| secondary.map(|s| s.name.to_string())),
        object_name: object_name.to_string(),
    })
}
