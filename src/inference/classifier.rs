use std::fmt;

use serde::{Deserialize, Serialize};

use super::encoder::FeatureVector;
use super::error::InferenceError;

/// A classifier's raw output class identifier.
///
/// Opaque outside the bundle: it is meaningful only to the [`LabelDecoder`]
/// that was fitted alongside the classifier. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedLabel(pub u32);

impl fmt::Display for EncodedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque fitted model: maps a batch of feature vectors to a batch of
/// encoded labels.
///
/// This is the entire surface the inference pipeline sees. Any fitted-model
/// binding satisfying it can back a bundle; nothing else about the model is
/// observable. Implementations must reject vectors whose length differs
/// from what they were trained on rather than guessing.
pub trait Classifier: fmt::Debug + Send + Sync {
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<EncodedLabel>, InferenceError>;
}

/// An opaque fitted label mapping: decodes a batch of encoded labels back
/// to diagnosis names.
pub trait LabelDecoder: fmt::Debug + Send + Sync {
    fn decode(&self, labels: &[EncodedLabel]) -> Result<Vec<String>, InferenceError>;
}

/// One node of a fitted decision tree, stored in a flat arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal split: descend `left` when `vector[feature] <= threshold`,
    /// `right` otherwise.
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying the predicted class.
    Leaf { label: EncodedLabel },
}

/// A fitted decision tree deserialized from a persisted artifact.
///
/// The arena layout (root at index 0, children linked by index) is the
/// shape tree exporters write. The tree is read-only fitted state; nothing
/// here re-fits or mutates it.
///
/// # Example
/// ```rust
/// use triage::{Classifier, DecisionTree, EncodedLabel, TreeNode};
/// use ndarray::array;
///
/// let tree = DecisionTree {
///     n_features: 2,
///     nodes: vec![
///         TreeNode::Split { feature: 0, threshold: 0.5, left: 1, right: 2 },
///         TreeNode::Leaf { label: EncodedLabel(0) },
///         TreeNode::Leaf { label: EncodedLabel(1) },
///     ],
/// };
/// assert!(tree.validate().is_ok());
///
/// let labels = tree.predict(&[array![1.0, 0.0]]).unwrap();
/// assert_eq!(labels, vec![EncodedLabel(1)]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Feature-vector length the tree was trained on.
    pub n_features: usize,
    /// Node arena; index 0 is the root.
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Checks structural integrity: a non-empty arena, child indices in
    /// bounds, split features within `n_features`.
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (pos, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= self.n_features {
                    return Err(format!(
                        "node {} splits on feature {} but the tree has {} features",
                        pos, feature, self.n_features
                    ));
                }
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(format!("node {} links to a child outside the arena", pos));
                }
            }
        }
        Ok(())
    }

    fn predict_one(&self, vector: &FeatureVector) -> Result<EncodedLabel, InferenceError> {
        if vector.len() != self.n_features {
            return Err(InferenceError::Classifier(format!(
                "feature vector has {} positions, classifier was trained on {}",
                vector.len(),
                self.n_features
            )));
        }

        let mut at = 0usize;
        // A well-formed tree reaches a leaf within `nodes.len()` steps;
        // a longer walk means the arena links back on itself.
        for _ in 0..self.nodes.len() {
            let node = self.nodes.get(at).ok_or_else(|| {
                InferenceError::Classifier(format!("node index {} outside the arena", at))
            })?;
            match node {
                TreeNode::Leaf { label } => return Ok(*label),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = vector.get(*feature).copied().ok_or_else(|| {
                        InferenceError::Classifier(format!(
                            "split references feature {} outside the {}-length vector",
                            feature, self.n_features
                        ))
                    })?;
                    at = if value <= *threshold { *left } else { *right };
                }
            }
        }
        Err(InferenceError::Classifier(
            "tree traversal did not reach a leaf".to_string(),
        ))
    }
}

impl Classifier for DecisionTree {
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<EncodedLabel>, InferenceError> {
        batch.iter().map(|v| self.predict_one(v)).collect()
    }
}

/// An ordered diagnosis-name table: position equals encoded label.
///
/// This is the shape a fitted label encoder exports (its ordered class
/// array); decoding is a position lookup.
#[derive(Debug, Clone)]
pub struct LabelMap {
    classes: Vec<String>,
}

impl LabelMap {
    /// Builds a label map from class names in label order.
    ///
    /// Fails on an empty table or on blank names.
    pub fn new<I, S>(classes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err("label table has no classes".to_string());
        }
        if let Some(pos) = classes.iter().position(|c| c.trim().is_empty()) {
            return Err(format!("class name at position {} is blank", pos));
        }
        Ok(Self { classes })
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl LabelDecoder for LabelMap {
    fn decode(&self, labels: &[EncodedLabel]) -> Result<Vec<String>, InferenceError> {
        labels
            .iter()
            .map(|label| {
                self.classes
                    .get(label.0 as usize)
                    .cloned()
                    .ok_or(InferenceError::UnknownLabel(*label))
            })
            .collect()
    }
}
