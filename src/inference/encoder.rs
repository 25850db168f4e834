use std::collections::BTreeSet;

use ndarray::Array1;

use super::error::InferenceError;
use super::vocabulary::Vocabulary;

/// A binary feature vector aligned to a [`Vocabulary`]: position i is 1.0
/// exactly when the i-th vocabulary symptom is present in the request.
pub type FeatureVector = Array1<f32>;

/// Normalizes one raw symptom: trims surrounding whitespace and lowercases.
/// Returns `None` when nothing is left.
pub(crate) fn normalize_symptom(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes a collection of raw symptoms into the canonical set the
/// encoder matches against: trimmed, lowercased, blanks dropped, duplicates
/// collapsed, sorted. Equal logical sets normalize identically regardless of
/// input order.
pub fn normalize_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<String> {
    let set: BTreeSet<String> = symptoms
        .iter()
        .filter_map(|s| normalize_symptom(s.as_ref()))
        .collect();
    set.into_iter().collect()
}

/// Encodes raw symptoms into a binary feature vector aligned to `vocabulary`.
///
/// Returns the vector together with the normalized symptom set it was built
/// from. Symptoms the vocabulary does not know set no vector position and
/// raise no error, but they stay in the returned set: callers see what the
/// request reduced to, not just what matched. An input that normalizes to
/// nothing at all is a caller error ([`InferenceError::NoSymptoms`]), kept
/// distinct from a legitimate all-unknown (all-zero) vector.
///
/// Encoding is a pure function of its inputs; input order and duplicates do
/// not affect the result.
///
/// # Example
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use triage::{encode, Vocabulary};
///
/// let vocabulary = Vocabulary::from_terms(vec!["fever", "cough", "fatigue"])?;
/// let (vector, used) = encode(&["Fever ", "FATIGUE"], &vocabulary)?;
///
/// assert_eq!(vector.to_vec(), vec![1.0, 0.0, 1.0]);
/// assert_eq!(used, vec!["fatigue", "fever"]);
/// # Ok(())
/// # }
/// ```
pub fn encode<S: AsRef<str>>(
    symptoms: &[S],
    vocabulary: &Vocabulary,
) -> Result<(FeatureVector, Vec<String>), InferenceError> {
    let normalized = normalize_symptoms(symptoms);
    if normalized.is_empty() {
        return Err(InferenceError::NoSymptoms);
    }

    let mut vector = Array1::zeros(vocabulary.len());
    for symptom in &normalized {
        match vocabulary.index_of(symptom) {
            Some(idx) => vector[idx] = 1.0,
            None => log::debug!("symptom not in vocabulary, dropped: '{}'", symptom),
        }
    }

    Ok((vector, normalized))
}
