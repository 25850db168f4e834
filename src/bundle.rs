use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::inference::{Classifier, DecisionTree, LabelDecoder, LabelMap, Vocabulary};
use crate::store::ModelStore;

/// Represents the ways loading a persisted bundle artifact can fail at
/// startup. Any of these marks the whole bundle unavailable; partial
/// bundles are never used.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact missing: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid artifact {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The loaded triple the whole service runs on: vocabulary, classifier,
/// label decoder.
///
/// Loaded once at process startup and never mutated afterwards; share it
/// across request threads behind an `Arc`. The classifier and decoder are
/// trait objects so any fitted-model binding can stand in; only the
/// vocabulary is concrete, because the encoder needs its index layout.
#[derive(Debug)]
pub struct ModelBundle {
    vocabulary: Vocabulary,
    classifier: Box<dyn Classifier>,
    decoder: Box<dyn LabelDecoder>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<ModelBundle>();
    }
};

impl ModelBundle {
    /// Assembles a bundle from already-constructed parts.
    ///
    /// No cross-checks are applied here; callers bringing their own
    /// bindings are responsible for pairing artifacts from one training
    /// run. [`ModelBundle::load`] is the validated path.
    pub fn new(
        vocabulary: Vocabulary,
        classifier: Box<dyn Classifier>,
        decoder: Box<dyn LabelDecoder>,
    ) -> Self {
        Self {
            vocabulary,
            classifier,
            decoder,
        }
    }

    /// Loads the three persisted artifacts named by `store` as one atomic
    /// bundle: the first failure aborts the whole load, so a partial
    /// bundle value can never exist.
    ///
    /// The vocabulary and classifier are cross-checked for feature-count
    /// agreement; a mismatch means the artifacts are not from the same
    /// training run. Label-range agreement between classifier and decoder
    /// is deliberately not pre-checked; that fault surfaces per request as
    /// [`InferenceError::UnknownLabel`](crate::InferenceError::UnknownLabel).
    pub fn load(store: &ModelStore) -> Result<Self, ArtifactError> {
        let vocab_path = store.vocabulary_path();
        let terms: Vec<String> = load_json(&vocab_path)?;
        if terms.is_empty() {
            return Err(ArtifactError::Invalid {
                path: vocab_path,
                reason: "vocabulary is empty".to_string(),
            });
        }
        let vocabulary = Vocabulary::from_terms(terms).map_err(|reason| ArtifactError::Invalid {
            path: vocab_path.clone(),
            reason,
        })?;
        log::info!(
            "loaded vocabulary ({} symptoms) from {}",
            vocabulary.len(),
            vocab_path.display()
        );

        let tree_path = store.classifier_path();
        let tree: DecisionTree = load_json(&tree_path)?;
        tree.validate().map_err(|reason| ArtifactError::Invalid {
            path: tree_path.clone(),
            reason,
        })?;
        if tree.n_features != vocabulary.len() {
            return Err(ArtifactError::Invalid {
                path: tree_path,
                reason: format!(
                    "classifier expects {} features but the vocabulary has {}",
                    tree.n_features,
                    vocabulary.len()
                ),
            });
        }
        log::info!(
            "loaded classifier ({} nodes) from {}",
            tree.nodes.len(),
            tree_path.display()
        );

        let labels_path = store.labels_path();
        let names: Vec<String> = load_json(&labels_path)?;
        let decoder = LabelMap::new(names).map_err(|reason| ArtifactError::Invalid {
            path: labels_path.clone(),
            reason,
        })?;
        log::info!(
            "loaded label table ({} diagnoses) from {}",
            decoder.len(),
            labels_path.display()
        );

        Ok(Self::new(vocabulary, Box::new(tree), Box::new(decoder)))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn decoder(&self) -> &dyn LabelDecoder {
        self.decoder.as_ref()
    }

    /// Returns a summary of the loaded bundle.
    ///
    /// Classifier and decoder internals stay opaque; only the vocabulary
    /// is enumerable, since a front end needs it to offer the known
    /// symptoms.
    pub fn info(&self) -> BundleInfo {
        BundleInfo {
            vocabulary_size: self.vocabulary.len(),
            symptoms: self.vocabulary.terms().to_vec(),
        }
    }
}

/// Information about a loaded model bundle.
#[derive(Debug, Clone)]
pub struct BundleInfo {
    /// Number of known symptoms, which is also the feature-vector length.
    pub vocabulary_size: usize,
    /// Known symptom names in feature order.
    pub symptoms: Vec<String>,
}
