//! Training-data label storage for the binsight waste-identification app.
//!
//! The hosting UI shows the user a vision-pipeline classification of a
//! submitted photo; once the user confirms it, this crate persists the
//! image plus structured metadata as labeled training data and keeps an
//! aggregate category index for the admin views.

pub mod categories;
pub mod errors;
pub mod models;
pub mod service;
pub mod settings;
pub mod store;

pub use categories::{PrimaryCategory, SecondaryCategory};
pub use errors::{StoreError, StoreResult};
pub use models::{
    AnalysisResult, CategoryIndex, CategoryStatistics, Classification, Dimensions, FeedbackNote,
    LabelRecord, SavedLabel,
};
pub use settings::{SettingsStore, StorageSettings};
pub use store::LabelStore;
