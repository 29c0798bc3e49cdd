//! UI-facing service boundary over the label store.
//!
//! The hosting UI calls these instead of the store directly: every store
//! fault is caught here, logged, and converted into a result the UI can
//! render, so a failed save or lookup never takes a page down with it.

use log::error;
use serde::{Deserialize, Serialize};

use crate::models::{AnalysisResult, CategoryStatistics, LabelRecord};
use crate::store::LabelStore;

/// Outcome of a save, shaped for direct display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLabelResponse {
    pub success: bool,
    pub label_id: Option<String>,
    pub message: String,
}

pub fn save_label(
    store: &LabelStore,
    image_bytes: &[u8],
    analysis: &AnalysisResult,
    feedback_note: Option<&str>,
) -> SaveLabelResponse {
    match store.save_label(image_bytes, analysis, feedback_note) {
        Ok(saved) => SaveLabelResponse {
            success: true,
            message: format!("Label {} saved", saved.id),
            label_id: Some(saved.id),
        },
        Err(err) => {
            error!("save_label failed: {err}");
            SaveLabelResponse {
                success: false,
                label_id: None,
                message: err.to_string(),
            }
        }
    }
}

pub fn get_category_statistics(store: &LabelStore) -> Result<CategoryStatistics, String> {
    store.get_category_statistics().map_err(|e| {
        error!("get_category_statistics failed: {e}");
        e.to_string()
    })
}

pub fn get_labels_by_primary_category(
    store: &LabelStore,
    primary: &str,
) -> Result<Vec<LabelRecord>, String> {
    store.get_labels_by_primary_category(primary).map_err(|e| {
        error!("get_labels_by_primary_category failed: {e}");
        e.to_string()
    })
}

pub fn get_labels_by_secondary_category(
    store: &LabelStore,
    primary: &str,
    secondary: &str,
) -> Result<Vec<LabelRecord>, String> {
    store
        .get_labels_by_secondary_category(primary, secondary)
        .map_err(|e| {
            error!("get_labels_by_secondary_category failed: {e}");
            e.to_string()
        })
}

pub fn get_label_details(store: &LabelStore, id: &str) -> Result<Option<LabelRecord>, String> {
    store.get_label_details(id).map_err(|e| {
        error!("get_label_details failed: {e}");
        e.to_string()
    })
}
