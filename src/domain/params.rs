use serde::Serialize;

use crate::domain::{Axis, Borders, FillValues};

/// Everything a model is generated from: the X and Y partitions plus the
/// border and fill parameters. Built once, then read-only.
#[derive(Debug, Clone, Serialize)]
pub struct Params3D {
    axis_x: Axis,
    axis_y: Axis,
    borders: Borders,
    fill_values: Vec<FillValues>,
}

impl Default for Params3D {
    fn default() -> Params3D {
        Params3D::new(Axis::default(), Axis::default())
    }
}

impl Params3D {
    /// Pairs two pre-built axes with default border and fill parameters.
    pub fn new(axis_x: Axis, axis_y: Axis) -> Params3D {
        Params3D {
            axis_x,
            axis_y,
            borders: Borders::default(),
            fill_values: vec![FillValues::default()],
        }
    }

    pub fn with_borders(mut self, borders: Borders) -> Params3D {
        self.borders = borders;
        self
    }

    pub fn with_fill_values(mut self, fill_values: Vec<FillValues>) -> Params3D {
        self.fill_values = fill_values;
        self
    }
}

impl Params3D {
    pub fn axis_x(&self) -> &Axis {
        &self.axis_x
    }

    pub fn axis_y(&self) -> &Axis {
        &self.axis_y
    }

    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    pub fn fill_values(&self) -> &[FillValues] {
        &self.fill_values
    }
}
