use serde::Serialize;

use super::classifier::EncodedLabel;
use super::encoder::encode;
use super::error::InferenceError;
use crate::bundle::ModelBundle;

/// The outcome of one inference request. Never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Raw class identifier the classifier produced.
    pub label: EncodedLabel,
    /// Decoded human-readable diagnosis name.
    pub diagnosis: String,
    /// The normalized symptom set the request reduced to, in sorted
    /// order. Entries the vocabulary did not match are still listed;
    /// they just set no vector position.
    pub symptoms_used: Vec<String>,
}

/// Runs one request through encode, classify, decode.
///
/// The classifier contract is batch-shaped, so the single feature vector is
/// passed as a one-element batch and the first result taken as the encoded
/// label. The whole call is synchronous, performs no I/O, and holds no
/// state; it is safe to run from any number of threads sharing the same
/// read-only bundle.
///
/// # Errors
/// * [`InferenceError::NoSymptoms`] when the input normalizes to nothing,
///   propagated unchanged from the encoder.
/// * [`InferenceError::Classifier`] when the classifier rejects the vector.
///   With a bundle whose artifacts come from one training run this cannot
///   happen; treat it as an integrity fault, not a user error.
/// * [`InferenceError::UnknownLabel`] when the decoder has no name for the
///   predicted label, meaning classifier and decoder are out of sync.
///
/// # Example
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use triage::{infer, DecisionTree, EncodedLabel, LabelMap, ModelBundle, TreeNode, Vocabulary};
///
/// let vocabulary = Vocabulary::from_terms(vec!["fever", "cough", "fatigue"])?;
/// let classifier = DecisionTree {
///     n_features: 3,
///     nodes: vec![
///         TreeNode::Split { feature: 0, threshold: 0.5, left: 1, right: 2 },
///         TreeNode::Leaf { label: EncodedLabel(0) },
///         TreeNode::Split { feature: 2, threshold: 0.5, left: 3, right: 4 },
///         TreeNode::Leaf { label: EncodedLabel(1) },
///         TreeNode::Leaf { label: EncodedLabel(2) },
///     ],
/// };
/// let decoder = LabelMap::new(vec!["Allergy", "Common Cold", "Flu"])?;
/// let bundle = ModelBundle::new(vocabulary, Box::new(classifier), Box::new(decoder));
///
/// let prediction = infer(&["Fever ", "FATIGUE"], &bundle)?;
/// assert_eq!(prediction.diagnosis, "Flu");
/// assert_eq!(prediction.symptoms_used, vec!["fatigue", "fever"]);
/// # Ok(())
/// # }
/// ```
pub fn infer<S: AsRef<str>>(
    symptoms: &[S],
    bundle: &ModelBundle,
) -> Result<Prediction, InferenceError> {
    let (vector, symptoms_used) = encode(symptoms, bundle.vocabulary())?;

    let labels = bundle.classifier().predict(std::slice::from_ref(&vector))?;
    let label = labels.first().copied().ok_or_else(|| {
        InferenceError::Classifier("classifier returned an empty batch".to_string())
    })?;

    let names = bundle.decoder().decode(&[label])?;
    let diagnosis = names
        .into_iter()
        .next()
        .ok_or(InferenceError::UnknownLabel(label))?;

    log::debug!(
        "predicted '{}' (label {}) from {} symptom(s)",
        diagnosis,
        label,
        symptoms_used.len()
    );

    Ok(Prediction {
        label,
        diagnosis,
        symptoms_used,
    })
}
