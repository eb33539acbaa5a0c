//! Isolation-forest inference.
//!
//! Reproduces the decision function of the training side: the average path
//! length a point travels through the randomized trees, normalized by the
//! expected path length for the sub-sample size, mapped through
//! `2^(-E[h]/c)` and shifted by the fitted offset. Higher raw values mean
//! the point looks more like the training distribution.

use ndarray::Array1;

use super::artifact::{ForestParams, TreeParams};

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Average unsuccessful-search path length in a binary search tree over
/// `n` points.
pub fn average_path_length(n: f64) -> f64 {
    if n <= 1.0 {
        0.0
    } else if n == 2.0 {
        1.0
    } else {
        2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
    }
}

#[derive(Debug)]
pub struct IsolationForest {
    trees: Vec<Tree>,
    /// `n_estimators * c(max_samples)` — normalizer for the summed depths
    depth_norm: f64,
    offset: f64,
}

#[derive(Debug)]
struct Tree {
    children_left: Vec<i32>,
    children_right: Vec<i32>,
    feature: Vec<i32>,
    threshold: Vec<f64>,
    n_node_samples: Vec<u32>,
}

impl Tree {
    fn from_params(params: TreeParams) -> Self {
        Self {
            children_left: params.children_left,
            children_right: params.children_right,
            feature: params.feature,
            threshold: params.threshold,
            n_node_samples: params.n_node_samples,
        }
    }

    /// Edges walked to reach the leaf, plus the average-path-length
    /// correction for the samples left unseparated in that leaf.
    fn path_length(&self, x: &Array1<f64>) -> f64 {
        let mut node = 0usize;
        let mut depth = 0.0;
        while self.children_left[node] >= 0 {
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
            depth += 1.0;
        }
        depth + average_path_length(f64::from(self.n_node_samples[node]))
    }
}

impl IsolationForest {
    pub fn from_params(params: ForestParams) -> Self {
        let depth_norm =
            params.n_estimators as f64 * average_path_length(params.max_samples as f64);
        Self {
            trees: params.trees.into_iter().map(Tree::from_params).collect(),
            depth_norm,
            offset: params.offset,
        }
    }

    /// Raw, unbounded decision-function value; higher = more normal.
    pub fn decision_function(&self, x: &Array1<f64>) -> f64 {
        let depths: f64 = self.trees.iter().map(|tree| tree.path_length(x)).sum();
        let anomaly = 2_f64.powf(-depths / self.depth_norm);
        -anomaly - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Root splits feature 0 at 0.0; left leaf isolates one point, right
    // leaf keeps four.
    fn single_split_tree() -> TreeParams {
        TreeParams {
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature: vec![0, -2, -2],
            threshold: vec![0.0, -2.0, -2.0],
            n_node_samples: vec![5, 1, 4],
        }
    }

    #[test]
    fn average_path_length_edge_cases() {
        assert_eq!(average_path_length(0.0), 0.0);
        assert_eq!(average_path_length(1.0), 0.0);
        assert_eq!(average_path_length(2.0), 1.0);
        // c(256) ≈ 10.2448 (2*(ln(255)+γ) - 2*255/256)
        assert!((average_path_length(256.0) - 10.244_77).abs() < 1e-3);
    }

    #[test]
    fn path_length_follows_split() {
        let tree = Tree::from_params(single_split_tree());
        // isolated point: depth 1, leaf correction 0
        assert_eq!(tree.path_length(&Array1::from(vec![-1.0])), 1.0);
        // unseparated side: depth 1 + c(4)
        let expected = 1.0 + average_path_length(4.0);
        assert!((tree.path_length(&Array1::from(vec![1.0])) - expected).abs() < 1e-12);
    }

    #[test]
    fn isolated_points_score_lower() {
        let forest = IsolationForest::from_params(ForestParams {
            n_estimators: 1,
            max_samples: 5,
            offset: -0.5,
            trees: vec![single_split_tree()],
        });
        let isolated = forest.decision_function(&Array1::from(vec![-1.0]));
        let crowded = forest.decision_function(&Array1::from(vec![1.0]));
        assert!(isolated < crowded);
    }
}
