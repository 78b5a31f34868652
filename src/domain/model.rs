use serde::Serialize;

use crate::domain::Params3D;

/// One generated border surface: depth values indexed `[y][x]`.
pub type BorderSurface = Vec<Vec<u32>>;

/// The assembled model: the parameters it was generated from plus one
/// surface per border.
#[derive(Debug, Clone, Serialize)]
pub struct Model3D {
    params: Params3D,
    borders: Vec<BorderSurface>,
}

impl Model3D {
    pub fn new(params: Params3D, borders: Vec<BorderSurface>) -> Model3D {
        Model3D { params, borders }
    }

    pub fn params(&self) -> &Params3D {
        &self.params
    }

    pub fn borders(&self) -> &[BorderSurface] {
        &self.borders
    }
}
