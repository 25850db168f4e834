//! A thread-safe symptom-to-diagnosis inference engine over pre-trained
//! classifier artifacts.
//!
//! The crate loads a fitted model bundle (symptom vocabulary, classifier,
//! label table) once at startup and then answers requests by encoding raw
//! symptom strings into a vocabulary-aligned binary feature vector, running
//! the classifier, and decoding the predicted label into a diagnosis name.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use triage::{infer, DecisionTree, EncodedLabel, LabelMap, ModelBundle, TreeNode, Vocabulary};
//!
//! let vocabulary = Vocabulary::from_terms(vec!["fever", "cough", "fatigue"])?;
//! let classifier = DecisionTree {
//!     n_features: 3,
//!     nodes: vec![
//!         TreeNode::Split { feature: 0, threshold: 0.5, left: 1, right: 2 },
//!         TreeNode::Leaf { label: EncodedLabel(0) },
//!         TreeNode::Split { feature: 2, threshold: 0.5, left: 3, right: 4 },
//!         TreeNode::Leaf { label: EncodedLabel(1) },
//!         TreeNode::Leaf { label: EncodedLabel(2) },
//!     ],
//! };
//! let decoder = LabelMap::new(vec!["Allergy", "Common Cold", "Flu"])?;
//! let bundle = ModelBundle::new(vocabulary, Box::new(classifier), Box::new(decoder));
//!
//! let prediction = infer(&["Fever ", "FATIGUE"], &bundle)?;
//! assert_eq!(prediction.diagnosis, "Flu");
//! # Ok(())
//! # }
//! ```
//!
//! # Loading persisted artifacts
//!
//! In production the bundle comes from three JSON artifacts in a models
//! directory (`symptom_vocab.json`, `model.json`, `label_encoder.json`),
//! loaded all-or-nothing at startup:
//!
//! ```rust,no_run
//! use triage::{InferenceService, ModelStore};
//!
//! let store = ModelStore::new_default();
//! let service = InferenceService::start(&store);
//! match service.infer(&["fever", "cough"]) {
//!     Ok(prediction) => println!("Diagnosis: {}", prediction.diagnosis),
//!     Err(e) => eprintln!("inference failed: {}", e),
//! }
//! ```
//!
//! # Thread Safety
//!
//! The bundle is read-only after load, so a service can be shared across
//! threads freely:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use triage::{DecisionTree, EncodedLabel, InferenceService, LabelMap, ModelBundle, TreeNode, Vocabulary};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let vocabulary = Vocabulary::from_terms(vec!["fever"])?;
//! let classifier = DecisionTree {
//!     n_features: 1,
//!     nodes: vec![TreeNode::Leaf { label: EncodedLabel(0) }],
//! };
//! let decoder = LabelMap::new(vec!["Flu"])?;
//! let service = Arc::new(InferenceService::from_bundle(
//!     ModelBundle::new(vocabulary, Box::new(classifier), Box::new(decoder)),
//! ));
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let service = Arc::clone(&service);
//!     handles.push(thread::spawn(move || {
//!         service.infer(&["fever"]).unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod inference;
pub mod service;
pub mod store;

pub use bundle::{ArtifactError, BundleInfo, ModelBundle};
pub use inference::{
    encode, infer, normalize_symptoms, Classifier, DecisionTree, EncodedLabel, FeatureVector,
    InferenceError, LabelDecoder, LabelMap, Prediction, TreeNode, Vocabulary,
};
pub use service::InferenceService;
pub use store::ModelStore;

pub fn init_logger() {
    env_logger::init();
}
