use super::classifier::EncodedLabel;

/// Represents the different ways a single inference request can fail.
///
/// `ModelUnavailable` and `NoSymptoms` are caller-recoverable: the first is
/// a "try later" condition, the second a "re-prompt" condition. `Classifier`
/// and `UnknownLabel` are integrity faults between bundle artifacts; they
/// are not user-recoverable and should be logged by the caller while a
/// generic failure is shown to the end user. The pipeline never swallows an
/// error and substitutes a guessed diagnosis.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The model bundle failed to load at startup; inference is disabled
    /// for the lifetime of the process.
    #[error("model bundle unavailable: {0}")]
    ModelUnavailable(String),
    /// No usable symptom remained after normalization.
    #[error("no usable symptoms provided")]
    NoSymptoms,
    /// The classifier rejected or mishandled the feature vector.
    #[error("classifier error: {0}")]
    Classifier(String),
    /// The classifier produced a label the decoder has no name for, so the
    /// classifier and decoder artifacts are out of sync.
    #[error("no diagnosis name for encoded label {0}")]
    UnknownLabel(EncodedLabel),
}
