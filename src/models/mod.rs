pub mod analysis;
pub mod index;
pub mod label;

pub use analysis::{AnalysisResult, Dimensions};
pub use index::{CategoryBucket, CategoryIndex, CategoryStatistics, IndexEntry};
pub use label::{compute_quality_score, Classification, FeedbackNote, LabelRecord, SavedLabel};
