use serde::Serialize;

use crate::utils::error::{ModelError, Result};

/// A 1-dimensional partition of a numeric interval into contiguous blocks.
///
/// Every generated coordinate is rounded to 3 decimal places, so the usable
/// range is roughly -10000 to 10000 before float error shows up. Edges and
/// centers always strictly increase, and an axis never changes after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    /// First edge of the axis
    start: f64,
    /// Last edge of the axis
    end: f64,
    /// Distance between edges, when the axis was generated from one
    step: Option<f64>,
    /// Number of blocks (= number of centers)
    blocks_count: usize,
    /// Center coordinate of every block
    blocks_centers: Vec<f64>,
    /// Edge coordinates, one more than there are blocks
    blocks_edges: Vec<f64>,
}

impl Default for Axis {
    fn default() -> Axis {
        Axis {
            start: 1.0,
            end: 10.0,
            step: Some(1.0),
            blocks_count: 9,
            blocks_centers: vec![1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5, 8.5, 9.5],
            blocks_edges: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        }
    }
}

/// Round to the 3-decimal resolution every axis coordinate is kept at.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Axis {
    /// Builds an axis by generating its edges from `start` to `end`.
    ///
    /// `step` defaults to 1.0 when omitted and may not be smaller than
    /// 0.001. `start` must be smaller than `end`. The last edge is the
    /// largest generated value, which can fall short of `end` when the
    /// interval is not a whole number of steps.
    ///
    /// ```
    /// use terrane::Axis;
    ///
    /// let axis = Axis::generate_on_edges(1, 4, Some(1)).unwrap();
    /// assert_eq!(axis.blocks_edges(), [1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(axis.blocks_centers(), [1.5, 2.5, 3.5]);
    /// ```
    pub fn generate_on_edges<T: Into<f64>>(start: T, end: T, step: Option<T>) -> Result<Axis> {
        let (start, step, count) = Axis::generation_info(start, end, step)?;

        let mut edges: Vec<f64> = Vec::with_capacity(count);

        let mut value = start;
        for _ in 0..count {
            edges.push(value);
            value = round3(value + step);
        }

        let centers = Axis::centers_from_edges(&edges, Some(step));

        Ok(Axis {
            start,
            end: edges[edges.len() - 1],
            step: Some(step),
            blocks_count: centers.len(),
            blocks_centers: centers,
            blocks_edges: edges,
        })
    }

    /// Builds an axis by generating its block centers from `start` to `end`,
    /// then extending half a step on each side for the edges.
    ///
    /// Input rules are the same as for [`Axis::generate_on_edges`].
    ///
    /// ```
    /// use terrane::Axis;
    ///
    /// let axis = Axis::generate_on_centers(1, 4, Some(1)).unwrap();
    /// assert_eq!(axis.blocks_edges(), [0.5, 1.5, 2.5, 3.5, 4.5]);
    /// assert_eq!(axis.blocks_centers(), [1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn generate_on_centers<T: Into<f64>>(start: T, end: T, step: Option<T>) -> Result<Axis> {
        let (start, step, count) = Axis::generation_info(start, end, step)?;

        let mut centers: Vec<f64> = Vec::with_capacity(count);

        let mut value = start;
        for _ in 0..count {
            centers.push(value);
            value = round3(value + step);
        }

        let edges = Axis::edges_from_centers(&centers, Some(step));

        Ok(Axis {
            start: edges[0],
            end: edges[edges.len() - 1],
            step: Some(step),
            blocks_count: centers.len(),
            blocks_centers: centers,
            blocks_edges: edges,
        })
    }

    /// Builds an axis from explicit edge positions. The values must strictly
    /// increase and there must be at least two of them. Block centers are
    /// the pairwise midpoints.
    pub fn from_edges<T: Into<f64> + Copy>(input_edges: &[T]) -> Result<Axis> {
        if input_edges.len() < 2 {
            return Err(ModelError::NotEnoughAxisPoints {
                required: 2,
                got: input_edges.len(),
            });
        }

        let edges = Axis::increasing_values(input_edges)?;
        let centers = Axis::centers_from_edges(&edges, None);

        Ok(Axis {
            start: edges[0],
            end: edges[edges.len() - 1],
            step: None,
            blocks_count: centers.len(),
            blocks_centers: centers,
            blocks_edges: edges,
        })
    }

    /// Builds an axis from explicit block centers. The values must strictly
    /// increase. Interior edges are pairwise midpoints, the outer edges
    /// mirror the first and last gaps; a single center gets unit-width
    /// edges.
    pub fn from_centers<T: Into<f64> + Copy>(input_centers: &[T]) -> Result<Axis> {
        if input_centers.is_empty() {
            return Err(ModelError::NotEnoughAxisPoints {
                required: 1,
                got: 0,
            });
        }

        let centers = Axis::increasing_values(input_centers)?;
        let edges = Axis::edges_from_centers(&centers, None);

        Ok(Axis {
            start: edges[0],
            end: edges[edges.len() - 1],
            step: None,
            blocks_count: centers.len(),
            blocks_centers: centers,
            blocks_edges: edges,
        })
    }
}

impl Axis {
    // Normalizes generation input to f64 and derives how many values to
    // generate. Shared by the edge and center generators.
    fn generation_info<T: Into<f64>>(start: T, end: T, step: Option<T>) -> Result<(f64, f64, usize)> {
        let start = round3(start.into());
        let end = round3(end.into());

        if start >= end {
            return Err(ModelError::InvalidAxisRange { start, end });
        }

        let step = match step {
            Some(step) => {
                let step = round3(step.into());
                if step < 0.001 {
                    return Err(ModelError::StepBelowResolution(step));
                }
                step
            }
            None => 1.0,
        };

        let count = (round3(end - start) / step).floor() as usize + 1;
        Ok((start, step, count))
    }

    fn increasing_values<T: Into<f64> + Copy>(input: &[T]) -> Result<Vec<f64>> {
        let mut values: Vec<f64> = Vec::with_capacity(input.len());

        let mut previous = f64::NEG_INFINITY;
        for raw in input {
            let value: f64 = (*raw).into();
            if value <= previous {
                return Err(ModelError::UnorderedAxisValues);
            }
            values.push(value);
            previous = value;
        }

        Ok(values)
    }

    fn centers_from_edges(edges: &[f64], step: Option<f64>) -> Vec<f64> {
        let mut centers: Vec<f64> = Vec::with_capacity(edges.len() - 1);

        if let Some(step) = step {
            let mut value = edges[0] + step / 2.0;
            for _ in 0..(edges.len() - 1) {
                centers.push(value);
                value = round3(value + step);
            }
        } else {
            let mut previous = edges[0];
            for edge in &edges[1..] {
                centers.push(round3((previous + edge) / 2.0));
                previous = *edge;
            }
        }

        centers
    }

    fn edges_from_centers(centers: &[f64], step: Option<f64>) -> Vec<f64> {
        let mut edges: Vec<f64> = Vec::with_capacity(centers.len() + 1);

        if let Some(step) = step {
            let mut value = centers[0] - step / 2.0;
            for _ in 0..(centers.len() + 1) {
                edges.push(value);
                value = round3(value + step);
            }
        } else if centers.len() == 1 {
            // No gap to infer a width from; fall back to the default step.
            edges.push(round3(centers[0] - 0.5));
            edges.push(round3(centers[0] + 0.5));
        } else {
            edges.push(round3(centers[0] - (centers[1] - centers[0]) / 2.0));
            for pair in centers.windows(2) {
                edges.push(round3((pair[0] + pair[1]) / 2.0));
            }
            let last = centers[centers.len() - 1];
            let previous = centers[centers.len() - 2];
            edges.push(round3(last + (last - previous) / 2.0));
        }

        edges
    }
}

impl Axis {
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }

    pub fn blocks_count(&self) -> usize {
        self.blocks_count
    }

    pub fn blocks_centers(&self) -> &[f64] {
        &self.blocks_centers
    }

    pub fn blocks_edges(&self) -> &[f64] {
        &self.blocks_edges
    }
}
