use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::features::FEATURE_COUNT;

use super::tree::DecisionTree;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the pretrained price model from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.bin` / `.model` – bincode encoding of [`DecisionTree`] (the artifact)
/// * `.json`           – JSON encoding of the same struct, for debugging
///
/// The tree is structurally validated and checked against the 4-feature
/// schema here, so a bad artifact fails at startup rather than mid-session.
pub fn load_model(path: &Path) -> Result<DecisionTree> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let tree = match ext.as_str() {
        "bin" | "model" => load_bincode(path)?,
        "json" => load_json(path)?,
        other => bail!("Unsupported model extension: .{other}"),
    };

    tree.validate().context("validating model structure")?;
    if tree.n_features != FEATURE_COUNT {
        bail!(
            "model takes {} features, expected {} (carat, cut, color, clarity)",
            tree.n_features,
            FEATURE_COUNT
        );
    }

    Ok(tree)
}

// ---------------------------------------------------------------------------
// Format readers
// ---------------------------------------------------------------------------

fn load_bincode(path: &Path) -> Result<DecisionTree> {
    let file = std::fs::File::open(path).context("opening model file")?;
    bincode::deserialize_from(BufReader::new(file)).context("decoding binary model")
}

fn load_json(path: &Path) -> Result<DecisionTree> {
    let file = std::fs::File::open(path).context("opening model file")?;
    serde_json::from_reader(BufReader::new(file)).context("parsing JSON model")
}
