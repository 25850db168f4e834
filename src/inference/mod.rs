//! The symptom-encoding and inference pipeline.
//!
//! One request flows through three stages: [`encode`] turns raw symptom
//! strings into a vocabulary-aligned binary feature vector, a [`Classifier`]
//! maps the vector to an [`EncodedLabel`], and a [`LabelDecoder`] turns the
//! label back into a diagnosis name. [`infer`] orchestrates the three for a
//! single request against a read-only [`ModelBundle`](crate::ModelBundle).

mod classifier;
mod encoder;
mod error;
mod pipeline;
mod vocabulary;

pub use classifier::{Classifier, DecisionTree, EncodedLabel, LabelDecoder, LabelMap, TreeNode};
pub use encoder::{encode, normalize_symptoms, FeatureVector};
pub use error::InferenceError;
pub use pipeline::{infer, Prediction};
pub use vocabulary::Vocabulary;
