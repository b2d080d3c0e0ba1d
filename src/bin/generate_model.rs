//! Writes a sample pretrained price model (`model.bin` + `model.json`) so
//! the app has an artifact to load. Artifact generation only, no training.

use std::io::BufWriter;

use diamond_predict::model::tree::{DecisionTree, Node};

const CARAT: usize = 0;
const CUT: usize = 1;
const COLOR: usize = 2;
const CLARITY: usize = 3;

/// Declarative tree shape; flattened into forward-indexed nodes below.
enum Branch {
    Leaf(f64),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Branch>,
        right: Box<Branch>,
    },
}

fn leaf(value: f64) -> Branch {
    Branch::Leaf(value)
}

fn split(feature: usize, threshold: f64, left: Branch, right: Branch) -> Branch {
    Branch::Split {
        feature,
        threshold,
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// Flatten a branch into `nodes`, returning its index.
///
/// The parent slot is reserved before its children are emitted, so child
/// indices always point forward, the shape the tree walk requires.
fn flatten(branch: &Branch, nodes: &mut Vec<Node>) -> usize {
    match branch {
        Branch::Leaf(value) => {
            nodes.push(Node::Leaf { value: *value });
            nodes.len() - 1
        }
        Branch::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            let idx = nodes.len();
            nodes.push(Node::Leaf { value: 0.0 }); // placeholder
            let left = flatten(left, nodes);
            let right = flatten(right, nodes);
            nodes[idx] = Node::Split {
                feature: *feature,
                threshold: *threshold,
                left,
                right,
            };
            idx
        }
    }
}

/// Hand-specified price tree: carat bands first, then clarity / color / cut
/// refinements. Ordinals are worst→best, so higher index means higher grade.
fn price_tree() -> Branch {
    split(
        CARAT,
        0.495,
        // under half a carat
        split(
            CLARITY,
            2.5,
            split(CARAT, 0.305, leaf(438.0), leaf(632.0)),
            split(
                COLOR,
                3.5,
                split(CARAT, 0.305, leaf(547.0), leaf(812.0)),
                split(CARAT, 0.305, leaf(743.0), leaf(1124.0)),
            ),
        ),
        split(
            CARAT,
            0.995,
            // half-carat band
            split(
                CLARITY,
                1.5,
                leaf(1721.0),
                split(
                    COLOR,
                    2.5,
                    split(CUT, 1.5, leaf(1927.0), leaf(2293.0)),
                    split(CLARITY, 4.5, leaf(2656.0), leaf(3214.0)),
                ),
            ),
            split(
                CARAT,
                1.495,
                // one-carat band
                split(
                    CLARITY,
                    2.5,
                    split(COLOR, 3.5, leaf(3941.0), leaf(4522.0)),
                    split(
                        COLOR,
                        2.5,
                        leaf(5089.0),
                        split(CUT, 2.5, leaf(5734.0), leaf(6582.0)),
                    ),
                ),
                split(
                    CARAT,
                    1.995,
                    // 1.5-carat band
                    split(
                        CLARITY,
                        3.5,
                        split(COLOR, 2.5, leaf(7213.0), leaf(8541.0)),
                        leaf(10152.0),
                    ),
                    // two carats and up
                    split(
                        COLOR,
                        3.5,
                        split(CLARITY, 2.5, leaf(11318.0), leaf(13457.0)),
                        split(CLARITY, 4.5, leaf(14826.0), leaf(17059.0)),
                    ),
                ),
            ),
        ),
    )
}

fn main() {
    let mut nodes = Vec::new();
    flatten(&price_tree(), &mut nodes);

    let model = DecisionTree {
        n_features: 4,
        nodes,
    };
    model
        .validate()
        .expect("generated model must be structurally valid");

    let bin_path = "model.bin";
    let file = std::fs::File::create(bin_path).expect("Failed to create model.bin");
    bincode::serialize_into(BufWriter::new(file), &model).expect("Failed to write model.bin");

    let json_path = "model.json";
    let file = std::fs::File::create(json_path).expect("Failed to create model.json");
    serde_json::to_writer_pretty(BufWriter::new(file), &model)
        .expect("Failed to write model.json");

    println!(
        "Wrote {} nodes over {} features to {bin_path} and {json_path}",
        model.nodes.len(),
        model.n_features
    );
}
