//! Persisted label record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categories::PrimaryCategory;
use crate::models::analysis::Dimensions;

const CONFIDENCE_WEIGHT: f64 = 0.4;
const DIMENSIONS_WEIGHT: f64 = 0.3;
const FEEDBACK_WEIGHT: f64 = 0.3;

/// Validated classification stored with a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub primary_category: PrimaryCategory,
    pub primary_category_name: String,
    #[serde(default)]
    pub secondary_category: Option<String>,
    #[serde(default)]
    pub secondary_category_name: Option<String>,
    pub object_name: String,
}

/// User-entered note captured alongside a save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackNote {
    pub note: String,
    pub submitted_at: DateTime<Utc>,
}

/// One persisted observation: an image plus its classification metadata.
///
/// Records are immutable once written; a correction is a new record with a
/// new id, never an update in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub id: String,
    pub image_reference: String,
    pub created_at: DateTime<Utc>,
    pub classification: Classification,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub feedback: Option<FeedbackNote>,
    pub quality_score: f64,
}

/// Result of a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLabel {
    pub id: String,
    pub record: LabelRecord,
}

/// Completeness/confidence metric derived at save time.
///
/// Weighted sum of confidence, dimension completeness, and feedback
/// presence; the weights sum to 1.0, so the result stays within [0, 1].
pub fn compute_quality_score(
    confidence: Option<f64>,
    has_dimensions: bool,
    has_feedback_note: bool,
) -> f64 {
    let mut score = CONFIDENCE_WEIGHT * confidence.unwrap_or(0.0);
    if has_dimensions {
        score += DIMENSIONS_WEIGHT;
    }
    if has_feedback_note {
        score += FEEDBACK_WEIGHT;
    }
    score
}
