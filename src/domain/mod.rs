// Domain layer: model parameters, generated model data, and the ports the
// pipeline is wired through.

pub mod axis;
pub mod borders;
pub mod fill;
pub mod model;
pub mod params;
pub mod ports;

pub use axis::Axis;
pub use borders::{BorderType, Borders};
pub use fill::{FillType, FillValues};
pub use model::{BorderSurface, Model3D};
pub use params::Params3D;
pub use ports::{ConfigProvider, ModelPipeline, Storage};
