use std::env;
use std::path::{Path, PathBuf};

/// File name of the persisted symptom-vocabulary artifact.
pub const VOCABULARY_FILE: &str = "symptom_vocab.json";
/// File name of the persisted fitted-classifier artifact.
pub const CLASSIFIER_FILE: &str = "model.json";
/// File name of the persisted label-table artifact.
pub const LABELS_FILE: &str = "label_encoder.json";

/// Environment variable overriding the models directory.
pub const MODELS_DIR_ENV: &str = "TRIAGE_MODELS_DIR";

const DEFAULT_MODELS_DIR: &str = "./models";

/// Locates the persisted model-bundle artifacts on disk.
///
/// The store only resolves paths; reading and validation happen in
/// [`ModelBundle::load`](crate::ModelBundle::load). Artifacts are local
/// files placed by whatever exported the fitted model; nothing here
/// fetches, writes, or refreshes them.
#[derive(Debug, Clone)]
pub struct ModelStore {
    models_dir: PathBuf,
}

impl ModelStore {
    /// Creates a store rooted at the default models directory.
    pub fn new_default() -> Self {
        Self::new(Self::default_models_dir())
    }

    /// Returns the default models directory path.
    pub fn default_models_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var(MODELS_DIR_ENV) {
            return PathBuf::from(path);
        }

        // 2. Fall back to the conventional location next to the process
        PathBuf::from(DEFAULT_MODELS_DIR)
    }

    pub fn new<P: AsRef<Path>>(models_dir: P) -> Self {
        Self {
            models_dir: models_dir.as_ref().to_path_buf(),
        }
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn vocabulary_path(&self) -> PathBuf {
        self.models_dir.join(VOCABULARY_FILE)
    }

    pub fn classifier_path(&self) -> PathBuf {
        self.models_dir.join(CLASSIFIER_FILE)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.models_dir.join(LABELS_FILE)
    }

    /// Whether all three bundle artifacts exist at this store's paths.
    pub fn is_bundle_present(&self) -> bool {
        let vocabulary = self.vocabulary_path();
        let classifier = self.classifier_path();
        let labels = self.labels_path();
        log::info!("checking for bundle artifacts:");
        log::info!(
            "  vocabulary: {} (exists: {})",
            vocabulary.display(),
            vocabulary.exists()
        );
        log::info!(
            "  classifier: {} (exists: {})",
            classifier.display(),
            classifier.exists()
        );
        log::info!(
            "  labels: {} (exists: {})",
            labels.display(),
            labels.exists()
        );
        vocabulary.exists() && classifier.exists() && labels.exists()
    }
}
