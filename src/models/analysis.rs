//! Input models produced by the vision collaborator.
//!
//! The vision pipeline (remote API or local detection) is opaque to this
//! crate; its output arrives as an `AnalysisResult` value and is validated
//! before anything touches disk.

use serde::{Deserialize, Serialize};

/// Classification output for one submitted image.
///
/// Category fields carry raw codes as produced by the collaborator; the
/// store validates them against the fixed taxonomy at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub object_name: String,
    pub primary_category: String,
    #[serde(default)]
    pub primary_category_name: Option<String>,
    #[serde(default)]
    pub secondary_category: Option<String>,
    #[serde(default)]
    pub secondary_category_name: Option<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Estimated object dimensions in centimetres.
///
/// `derived_sum` is always width + height + depth. The store recomputes it
/// at save time and never trusts an incoming value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default)]
    pub derived_sum: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
            derived_sum: width + height + depth,
        }
    }

    /// Copy with `derived_sum` recomputed from the three measurements.
    pub fn recomputed(&self) -> Self {
        Self::new(self.width, self.height, self.depth)
    }
}
