use triage::store::MODELS_DIR_ENV;
use triage::ModelStore;
use std::env;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_default_models_dir() {
    // Test with environment variable
    env::set_var(MODELS_DIR_ENV, "/tmp/triage-cache/models");
    let path = ModelStore::default_models_dir();
    assert_eq!(path, PathBuf::from("/tmp/triage-cache/models"));
    env::remove_var(MODELS_DIR_ENV);

    // Test without environment variable
    let path = ModelStore::default_models_dir();
    assert_eq!(path, PathBuf::from("./models"));
}

#[test]
fn test_artifact_paths() {
    let store = ModelStore::new("/srv/triage/models");

    assert!(store.vocabulary_path().ends_with("symptom_vocab.json"));
    assert!(store.classifier_path().ends_with("model.json"));
    assert!(store.labels_path().ends_with("label_encoder.json"));
    assert_eq!(store.models_dir(), PathBuf::from("/srv/triage/models"));
}

#[test]
fn test_bundle_presence_tracks_the_artifact_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = env::temp_dir().join("triage-store-test");

    // Clean up any existing files
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;

    let store = ModelStore::new(&dir);
    assert!(!store.is_bundle_present());

    // Two of three artifacts is still not a bundle
    fs::write(store.vocabulary_path(), "[]")?;
    fs::write(store.classifier_path(), "{}")?;
    assert!(!store.is_bundle_present());

    fs::write(store.labels_path(), "[]")?;
    assert!(store.is_bundle_present());

    fs::remove_dir_all(&dir)?;
    Ok(())
}
