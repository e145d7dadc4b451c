use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw label emitted by the classifier. Only the decision mapper assigns
/// it clinical meaning.
pub type RawLabel = i64;

/// Errors from the classifier boundary.
///
/// The load-time variants are fatal: the process cannot serve predictions
/// without a model and no graceful degradation is defined. `ShapeMismatch`
/// is request-scoped and aborts only the offending call.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifact is malformed: {0}")]
    Malformed(String),

    #[error("classifier expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl ModelError {
    /// Whether this error means the process cannot serve predictions at all.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ModelError::ShapeMismatch { .. })
    }
}

/// On-disk shape of the pre-trained model: a majority-vote ensemble of
/// binary decision trees, serialized as JSON by the training pipeline.
///
/// This format is private to the adapter crate; nothing else in the
/// pipeline may depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Optional human-readable model name, for logs only.
    #[serde(default)]
    pub name: Option<String>,
    /// Feature arity the ensemble was trained with.
    pub num_features: usize,
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Internal split: go `left` when `x[feature] < threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: RawLabel,
    },
}

impl ModelArtifact {
    /// Reads and parses an artifact from disk. Structural validation is the
    /// adapter's job; see [`crate::ReadmitModel::from_artifact`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks every structural invariant the predictor relies on: at least
    /// one non-empty tree, all node indices in bounds and pointing forward
    /// (so a walk always terminates), feature indices within arity, and
    /// binary leaf labels.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.num_features == 0 {
            return Err(ModelError::Malformed("feature arity is zero".into()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Malformed("ensemble has no trees".into()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::Malformed(format!("tree {t} has no nodes")));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                match *node {
                    Node::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if feature >= self.num_features {
                            return Err(ModelError::Malformed(format!(
                                "tree {t} node {n}: feature index {feature} out of bounds"
                            )));
                        }
                        if left <= n || right <= n || left >= tree.nodes.len() || right >= tree.nodes.len() {
                            return Err(ModelError::Malformed(format!(
                                "tree {t} node {n}: child links must point forward and in bounds"
                            )));
                        }
                    }
                    Node::Leaf { label } => {
                        if label != 0 && label != 1 {
                            return Err(ModelError::Malformed(format!(
                                "tree {t} node {n}: leaf label {label} is not binary"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks one tree for the given (already arity-checked) vector.
    pub(crate) fn walk(tree: &Tree, x: &[f64]) -> RawLabel {
        let mut idx = 0usize;
        loop {
            match tree.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[feature] < threshold { left } else { right };
                }
                Node::Leaf { label } => return label,
            }
        }
    }
}
