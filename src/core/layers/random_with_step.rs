use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::domain::BorderSurface;

/// Generates a neighbor-correlated border surface.
///
/// The first row is a bounded random walk: each cell stays within
/// `max_step` of its left neighbor. Every later row walks under the row
/// above it, keeping each cell within `max_step` of both the cell to its
/// left and the cell above where the limits allow. A cell only moves at
/// all with probability `deviation_prob`; otherwise it copies its
/// reference value (the left neighbor in the first row, the cell above
/// everywhere else).
pub fn generate_layer(
    rng: &mut impl Rng,
    max_step: u16,
    deviation_prob: f32,
    sizes: (usize, usize),
    limits: [u32; 2],
) -> BorderSurface {
    let step = max_step as u32;
    let limits_range = Uniform::from(limits[0]..=limits[1]);

    let mut layer: BorderSurface = Vec::with_capacity(sizes.0);

    // First row: walk right from a uniform anchor.
    let mut row: Vec<u32> = Vec::with_capacity(sizes.1);
    let mut value = limits_range.sample(rng);
    row.push(value);
    for _ in 1..sizes.1 {
        if rng.gen::<f32>() < deviation_prob {
            value = bounded_step(rng, value, step, limits);
        }
        row.push(value);
    }
    layer.push(row);

    // Every later row walks under the one above it.
    for y in 1..sizes.0 {
        let mut row: Vec<u32> = Vec::with_capacity(sizes.1);

        let mut value = layer[y - 1][0];
        if rng.gen::<f32>() < deviation_prob {
            value = bounded_step(rng, value, step, limits);
        }
        row.push(value);

        for x in 1..sizes.1 {
            let above = layer[y - 1][x];
            value = if rng.gen::<f32>() < deviation_prob {
                within_step_of_both(rng, value, above, step, limits)
            } else {
                above
            };
            row.push(value);
        }

        layer.push(row);
    }

    layer
}

// Uniform sample within `step` of `reference`, clamped to the limits.
fn bounded_step(rng: &mut impl Rng, reference: u32, step: u32, limits: [u32; 2]) -> u32 {
    let lower = reference.saturating_sub(step).max(limits[0]);
    let upper = reference.saturating_add(step).min(limits[1]);
    rng.gen_range(lower..=upper)
}

// Uniform sample within `step` of both neighbors when that band exists,
// otherwise between the two neighbors.
fn within_step_of_both(
    rng: &mut impl Rng,
    left: u32,
    above: u32,
    step: u32,
    limits: [u32; 2],
) -> u32 {
    let near = left.max(above);
    let far = left.min(above);

    let lower = near.saturating_sub(step).max(limits[0]);
    let upper = far.saturating_add(step).min(limits[1]);

    if lower <= upper {
        rng.gen_range(lower..=upper)
    } else {
        rng.gen_range(far..=near)
    }
}
