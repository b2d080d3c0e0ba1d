use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Decision-tree regressor
// ---------------------------------------------------------------------------

/// One node of the tree. `Split` children are indices into the node table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A pretrained regression tree. Node 0 is the root.
///
/// Named fields ensure a mismatched artifact fails at deserialization time
/// rather than producing garbage predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Length of the feature vector the tree splits over.
    pub n_features: usize,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    #[error("model has no nodes")]
    Empty,

    #[error("node {node}: splits on feature {feature} but the model takes {n_features}")]
    FeatureOutOfRange {
        node: usize,
        feature: usize,
        n_features: usize,
    },

    #[error("node {node}: threshold is not finite")]
    NonFiniteThreshold { node: usize },

    #[error("node {node}: leaf value is not finite")]
    NonFiniteLeaf { node: usize },

    #[error("node {node}: child index {child} out of range ({len} nodes)")]
    ChildOutOfRange { node: usize, child: usize, len: usize },

    #[error("node {node}: child index {child} does not point forward")]
    ChildNotForward { node: usize, child: usize },
}

impl DecisionTree {
    /// Structural validation, run once at load time.
    ///
    /// Children must point strictly forward in the node table, so every walk
    /// from the root terminates; [`predict`](Self::predict) relies on this.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(TreeError::NonFiniteLeaf { node: idx });
                    }
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= self.n_features {
                        return Err(TreeError::FeatureOutOfRange {
                            node: idx,
                            feature: *feature,
                            n_features: self.n_features,
                        });
                    }
                    if !threshold.is_finite() {
                        return Err(TreeError::NonFiniteThreshold { node: idx });
                    }
                    for child in [*left, *right] {
                        if child >= self.nodes.len() {
                            return Err(TreeError::ChildOutOfRange {
                                node: idx,
                                child,
                                len: self.nodes.len(),
                            });
                        }
                        if child <= idx {
                            return Err(TreeError::ChildNotForward { node: idx, child });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Predict a price for one feature vector.
    ///
    /// `features` must have `n_features` entries and the tree must have
    /// passed [`validate`](Self::validate). Deterministic: equal input gives
    /// equal output. `x <= threshold` descends left.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}
