use eframe::egui;

use crate::model::tree::DecisionTree;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DiamondPredictApp {
    pub state: AppState,
}

impl DiamondPredictApp {
    pub fn new(model: DecisionTree) -> Self {
        Self {
            state: AppState::new(model),
        }
    }
}

impl eframe::App for DiamondPredictApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Central panel: the prediction form ----
        let events = egui::CentralPanel::default()
            .show(ctx, |ui| panels::form_panel(ui, &mut self.state))
            .inner;

        // Each event completes its full re-evaluation before the next.
        for event in events {
            self.state.handle_event(event);
        }
    }
}
