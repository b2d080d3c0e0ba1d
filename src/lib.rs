//! Diamond Predict: estimate a diamond's market price from carat, cut,
//! color, and clarity with a pretrained decision-tree regressor.

pub mod app;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod state;
pub mod ui;
