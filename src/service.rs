use std::sync::Arc;

use crate::bundle::{BundleInfo, ModelBundle};
use crate::inference::{infer, InferenceError, Prediction};
use crate::store::ModelStore;

/// Process-scoped inference state: a bundle loaded once at startup, or the
/// recorded reason it could not be.
///
/// A failed load does not crash the process. The service starts degraded
/// and answers every request with
/// [`InferenceError::ModelUnavailable`] until the process is restarted;
/// there is no reload, refresh, or hot swap. A healthy service is cheap to
/// clone and safe to share across request threads, because the bundle
/// behind it is read-only.
#[derive(Debug, Clone)]
pub struct InferenceService {
    state: BundleState,
}

#[derive(Debug, Clone)]
enum BundleState {
    Ready(Arc<ModelBundle>),
    Unavailable(String),
}

impl InferenceService {
    /// Attempts the bundle load, exactly once.
    ///
    /// On failure the error is logged and the service comes up degraded
    /// instead of panicking, so callers can be told the model is
    /// unavailable rather than watching the process die.
    pub fn start(store: &ModelStore) -> Self {
        match ModelBundle::load(store) {
            Ok(bundle) => {
                log::info!(
                    "inference service ready ({} known symptoms, models from {})",
                    bundle.vocabulary().len(),
                    store.models_dir().display()
                );
                Self {
                    state: BundleState::Ready(Arc::new(bundle)),
                }
            }
            Err(e) => {
                log::error!("failed to load model bundle: {}", e);
                Self {
                    state: BundleState::Unavailable(e.to_string()),
                }
            }
        }
    }

    /// Wraps an already-loaded bundle.
    pub fn from_bundle(bundle: ModelBundle) -> Self {
        Self {
            state: BundleState::Ready(Arc::new(bundle)),
        }
    }

    /// A service that is degraded for its whole lifetime, with the given
    /// reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: BundleState::Unavailable(reason.into()),
        }
    }

    /// Whether a bundle is loaded and requests can be served.
    pub fn is_available(&self) -> bool {
        matches!(self.state, BundleState::Ready(_))
    }

    /// The loaded bundle, when available.
    pub fn bundle(&self) -> Option<Arc<ModelBundle>> {
        match &self.state {
            BundleState::Ready(bundle) => Some(Arc::clone(bundle)),
            BundleState::Unavailable(_) => None,
        }
    }

    /// Summary of the loaded bundle, when available.
    pub fn info(&self) -> Option<BundleInfo> {
        self.bundle().map(|bundle| bundle.info())
    }

    /// Runs one inference request against the loaded bundle.
    ///
    /// While the service is degraded this fails with
    /// [`InferenceError::ModelUnavailable`] before any encoding work.
    pub fn infer<S: AsRef<str>>(&self, symptoms: &[S]) -> Result<Prediction, InferenceError> {
        match &self.state {
            BundleState::Ready(bundle) => infer(symptoms, bundle),
            BundleState::Unavailable(reason) => {
                Err(InferenceError::ModelUnavailable(reason.clone()))
            }
        }
    }
}
