use eframe::egui::{self, Color32, RichText, Ui};

use crate::features::{self, Scale};
use crate::state::{AppState, FieldEvent};

// ---------------------------------------------------------------------------
// Central panel – the prediction form
// ---------------------------------------------------------------------------

/// Render the form and return the field events raised this frame.
pub fn form_panel(ui: &mut Ui, state: &mut AppState) -> Vec<FieldEvent> {
    let mut events = Vec::new();

    // ---- Header ----
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Diamond Predict").size(28.0).strong());
    });
    ui.add_space(8.0);

    ui.horizontal(|ui: &mut Ui| {
        // ---- Input fields ----
        ui.vertical(|ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Carat: ");
                carat_field(ui, state, &mut events);
            });
            ui.add_space(6.0);

            ui.horizontal(|ui: &mut Ui| {
                selection_combo(
                    ui,
                    "Cut",
                    &features::CUT,
                    &mut state.session.cut,
                    FieldEvent::CutSelected,
                    &mut events,
                );
                selection_combo(
                    ui,
                    "Color",
                    &features::COLOR,
                    &mut state.session.color,
                    FieldEvent::ColorSelected,
                    &mut events,
                );
                selection_combo(
                    ui,
                    "Clarity",
                    &features::CLARITY,
                    &mut state.session.clarity,
                    FieldEvent::ClaritySelected,
                    &mut events,
                );
            });
        });

        // ---- Diamond image ----
        let diamond = egui::include_image!("../../assets/diamond.png");
        ui.add(
            egui::Image::new(diamond)
                .max_height(110.0)
                .rounding(4.0),
        );
    });

    // ---- Price readout ----
    ui.add_space(10.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&state.price_text).size(30.0));
    });

    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
    }

    events
}

// ---------------------------------------------------------------------------
// Field widgets
// ---------------------------------------------------------------------------

/// Free-text carat entry with boundary validation.
///
/// Edits go to a scratch buffer and are committed only when the new text
/// passes [`features::accepts_carat_text`]; a rejected keystroke leaves the
/// field at its prior value and raises no event.
fn carat_field(ui: &mut Ui, state: &mut AppState, events: &mut Vec<FieldEvent>) {
    let mut text = state.session.carat_text.clone();
    let response = ui.text_edit_singleline(&mut text);
    if response.changed() && features::accepts_carat_text(&text) {
        state.session.carat_text = text;
        events.push(FieldEvent::CaratEdited);
    }
}

/// One categorical selector: placeholder text until a label is chosen.
fn selection_combo(
    ui: &mut Ui,
    placeholder: &str,
    scale: &Scale,
    slot: &mut Option<&'static str>,
    event: FieldEvent,
    events: &mut Vec<FieldEvent>,
) {
    egui::ComboBox::from_id_salt(scale.name)
        .selected_text(slot.unwrap_or(placeholder))
        .show_ui(ui, |ui: &mut Ui| {
            for &label in scale.labels {
                if ui.selectable_label(*slot == Some(label), label).clicked()
                    && *slot != Some(label)
                {
                    *slot = Some(label);
                    events.push(event);
                }
            }
        });
}
