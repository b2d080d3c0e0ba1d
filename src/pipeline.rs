use crate::features::{self, Encoded, EncodeError, FormSession};
use crate::model::tree::DecisionTree;

// ---------------------------------------------------------------------------
// Prediction pipeline: encode → predict → format
// ---------------------------------------------------------------------------

/// Shown while the form is incomplete.
pub const UNKNOWN_PRICE: &str = "$?";

/// Currency formatting: two decimal places, no thousands separators.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Re-evaluate the price for the current session.
///
/// Incomplete input short-circuits to [`UNKNOWN_PRICE`] without touching the
/// predictor. `Err` only on the defensive out-of-scale label path.
pub fn estimate(model: &DecisionTree, session: &FormSession) -> Result<String, EncodeError> {
    match features::encode(session)? {
        Encoded::Incomplete => Ok(UNKNOWN_PRICE.to_string()),
        Encoded::Complete(vector) => {
            let price = model.predict(&vector.as_array());
            Ok(format_price(price))
        }
    }
}
