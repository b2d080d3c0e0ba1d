use std::path::Path;

use anyhow::Context;
use diamond_predict::app::DiamondPredictApp;
use diamond_predict::model;
use eframe::egui;

/// Fixed relative path of the pretrained model artifact.
const MODEL_PATH: &str = "model.bin";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The app cannot run without a predictor: a missing or corrupt artifact
    // halts startup here.
    let model = model::loader::load_model(Path::new(MODEL_PATH))
        .with_context(|| format!("loading price model from '{MODEL_PATH}'"))?;
    log::info!(
        "Loaded price model: {} nodes over {} features",
        model.nodes.len(),
        model.n_features
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([675.0, 265.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Diamond Predict",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the diamond png.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DiamondPredictApp::new(model)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
