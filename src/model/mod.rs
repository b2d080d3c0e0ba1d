//! Model layer: the pretrained regressor and its loading.
//!
//! Architecture:
//! ```text
//!  model.bin / model.json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read file → DecisionTree, validate structure
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ DecisionTree │  predict([carat, cut, color, clarity]) → price
//!   └──────────────┘
//! ```

pub mod loader;
pub mod tree;
