use anyhow::Result;
use uuid::Uuid;

use binsight::models::compute_quality_score;
use binsight::{AnalysisResult, Dimensions, LabelStore, StorageSettings, StoreError};

// Enough of a JPEG header for format sniffing; the store keeps the payload
// verbatim.
fn jpeg_bytes() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
    bytes.extend_from_slice(b"JFIF\0");
    bytes.extend_from_slice(&[0u8; 32]);
    bytes
}

fn bed_analysis() -> AnalysisResult {
    AnalysisResult {
        object_name: "queen bed frame".into(),
        primary_category: "FURN".into(),
        primary_category_name: None,
        secondary_category: Some("FURN_BED".into()),
        secondary_category_name: None,
        dimensions: Some(Dimensions::new(200.0, 120.0, 30.0)),
        confidence: Some(0.95),
        reasoning: Some("headboard and slats visible".into()),
    }
}

#[test]
fn save_assigns_fresh_ids() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = LabelStore::open(dir.path())?;

    let first = store.save_label(&jpeg_bytes(), &bed_analysis(), None)?;
    let second = store.save_label(&jpeg_bytes(), &bed_analysis(), None)?;

    assert_ne!(first.id, second.id);
    assert!(Uuid::parse_str(&first.id).is_ok());
    assert!(Uuid::parse_str(&second.id).is_ok());
    assert_eq!(first.record.image_reference, format!("user_images/{}.jpg", first.id));
    Ok(())
}

#[test]
fn quality_score_is_the_weighted_sum() {
    assert_eq!(compute_quality_score(None, false, false), 0.0);
    assert_eq!(compute_quality_score(Some(1.0), true, true), 1.0);
    assert_eq!(compute_quality_score(Some(0.5), false, true), 0.4 * 0.5 + 0.3);
    assert_eq!(compute_quality_score(None, true, false), 0.3);
}

#[test]
fn worked_scenario_scores_068() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = LabelStore::open(dir.path())?;

    let saved = store.save_label(&jpeg_bytes(), &bed_analysis(), None)?;
    assert!((saved.record.quality_score - 0.68).abs() < 1e-9);

    let stats = store.get_category_statistics()?;
    let furn = stats
        .by_category
        .get(&binsight::PrimaryCategory::Furniture)
        .expect("FURN bucket");
    assert_eq!(furn.count, 1);
    assert_eq!(furn.subcategory_counts.get("FURN_BED"), Some(&1));
    Ok(())
}

#[test]
fn derived_sum_is_never_trusted_from_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = LabelStore::open(dir.path())?;

    let mut analysis = bed_analysis();
    analysis.dimensions = Some(Dimensions {
        width: 200.0,
        height: 120.0,
        depth: 30.0,
        derived_sum: 9999.0,
    });

    let saved = store.save_label(&jpeg_bytes(), &analysis, None)?;
    let dims = saved.record.dimensions.expect("dimensions");
    assert_eq!(dims.derived_sum, 350.0);
    Ok(())
}

#[test]
fn round_trip_preserves_every_field() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = LabelStore::open(dir.path())?;

    let saved = store.save_label(&jpeg_bytes(), &bed_analysis(), Some("looks right"))?;
    let reloaded = store
        .get_label_details(&saved.id)?
        .expect("record saved a moment ago");

    assert_eq!(reloaded, saved.record);
    assert_eq!(reloaded.classification.primary_category.as_str(), "FURN");
    assert_eq!(reloaded.classification.object_name, "queen bed frame");
    assert_eq!(reloaded.classification.secondary_category.as_deref(), Some("FURN_BED"));
    Ok(())
}

#[test]
fn feedback_note_is_stamped_and_scored() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = LabelStore::open(dir.path())?;

    let saved = store.save_label(&jpeg_bytes(), &bed_analysis(), Some("  actually a daybed  "))?;
    let feedback = saved.record.feedback.expect("feedback note");
    assert_eq!(feedback.note, "actually a daybed");
    assert!((saved.record.quality_score - (0.4 * 0.95 + 0.3 + 0.3)).abs() < 1e-9);

    // A blank note is not feedback and earns no score.
    let without = store.save_label(&jpeg_bytes(), &bed_analysis(), Some("   "))?;
    assert!(without.record.feedback.is_none());
    assert!((without.record.quality_score - 0.68).abs() < 1e-9);
    Ok(())
}

#[test]
fn rejected_input_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = LabelStore::open(dir.path())?;

    let mut unknown_category = bed_analysis();
    unknown_category.primary_category = "UNKNOWN_CAT".into();
    assert!(matches!(
        store.save_label(&jpeg_bytes(), &unknown_category, None),
        Err(StoreError::Validation(_))
    ));

    let mut wrong_refinement = bed_analysis();
    wrong_refinement.secondary_category = Some("APPL_FRIDGE".into());
    assert!(matches!(
        store.save_label(&jpeg_bytes(), &wrong_refinement, None),
        Err(StoreError::Validation(_))
    ));

    let mut no_name = bed_analysis();
    no_name.object_name = "  ".into();
    assert!(matches!(
        store.save_label(&jpeg_bytes(), &no_name, None),
        Err(StoreError::Validation(_))
    ));

    assert!(matches!(
        store.save_label(&[], &bed_analysis(), None),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        store.save_label(b"plain text, not an image", &bed_analysis(), None),
        Err(StoreError::Validation(_))
    ));

    let mut bad_confidence = bed_analysis();
    bad_confidence.confidence = Some(1.5);
    assert!(matches!(
        store.save_label(&jpeg_bytes(), &bad_confidence, None),
        Err(StoreError::Validation(_))
    ));

    assert_eq!(std::fs::read_dir(dir.path().join("user_images"))?.count(), 0);
    assert_eq!(std::fs::read_dir(dir.path().join("labels"))?.count(), 0);
    Ok(())
}

#[test]
fn oversized_image_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let settings = StorageSettings {
        data_dir: dir.path().to_path_buf(),
        max_image_bytes: 16,
    };
    let store = LabelStore::from_settings(&settings)?;

    assert!(matches!(
        store.save_label(&jpeg_bytes(), &bed_analysis(), None),
        Err(StoreError::Validation(_))
    ));
    Ok(())
}
