pub mod engine;
pub mod layers;
pub mod pipeline;

pub use crate::domain::model::{BorderSurface, Model3D};
pub use crate::domain::ports::{ConfigProvider, ModelPipeline, Storage};
pub use crate::utils::error::Result;
