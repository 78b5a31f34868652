pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use crate::core::{engine::ModelEngine, pipeline::GenerationPipeline};
pub use domain::{Axis, BorderType, Borders, FillType, FillValues, Model3D, Params3D};
pub use utils::error::{ModelError, Result};
