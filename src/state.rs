use crate::features::FormSession;
use crate::model::tree::DecisionTree;
use crate::pipeline::{self, UNKNOWN_PRICE};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A value-changed notification from one form field.
///
/// Widgets publish these; the app consumes them one at a time, re-evaluating
/// the pipeline per event. No batching, no debouncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    CaratEdited,
    CutSelected,
    ColorSelected,
    ClaritySelected,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The pretrained price model. Loaded once, immutable thereafter.
    pub model: DecisionTree,

    /// Current values of the four form fields.
    pub session: FormSession,

    /// Formatted price readout ("$?" until the form is complete).
    pub price_text: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(model: DecisionTree) -> Self {
        Self {
            model,
            session: FormSession::default(),
            price_text: UNKNOWN_PRICE.to_string(),
            status_message: None,
        }
    }

    /// Consume one field event: re-run encode → predict → format.
    pub fn handle_event(&mut self, event: FieldEvent) {
        log::debug!("field changed: {event:?}");
        self.recompute();
    }

    /// Re-evaluate the price from the current session.
    ///
    /// An out-of-scale label (defensive path, the UI constrains selections)
    /// resets the readout to "$?" and surfaces a status message; the session
    /// stays live.
    fn recompute(&mut self) {
        match pipeline::estimate(&self.model, &self.session) {
            Ok(text) => {
                self.price_text = text;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to encode selection: {e}");
                self.price_text = UNKNOWN_PRICE.to_string();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
