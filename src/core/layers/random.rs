use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::domain::BorderSurface;

/// Generates one border surface from the limits alone: every cell is an
/// independent uniform sample.
/// `sizes` is (Y blocks, X blocks); `limits` is [min, max], inclusive.
pub fn generate_layer(
    rng: &mut impl Rng,
    sizes: (usize, usize),
    limits: [u32; 2],
) -> BorderSurface {
    let range = Uniform::from(limits[0]..=limits[1]);

    let mut layer: BorderSurface = Vec::with_capacity(sizes.0);
    for _ in 0..sizes.0 {
        let mut row: Vec<u32> = Vec::with_capacity(sizes.1);
        for _ in 0..sizes.1 {
            row.push(range.sample(rng));
        }
        layer.push(row);
    }

    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn layer_has_requested_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let layer = generate_layer(&mut rng, (4, 9), [5, 10]);

        assert_eq!(layer.len(), 4);
        assert!(layer.iter().all(|row| row.len() == 9));
    }

    #[test]
    fn values_stay_within_limits() {
        let mut rng = StdRng::seed_from_u64(7);
        let layer = generate_layer(&mut rng, (20, 20), [5, 10]);

        assert!(layer
            .iter()
            .flatten()
            .all(|&depth| (5..=10).contains(&depth)));
    }

    #[test]
    fn degenerate_limits_produce_a_constant_layer() {
        let mut rng = StdRng::seed_from_u64(7);
        let layer = generate_layer(&mut rng, (3, 3), [7, 7]);

        assert!(layer.iter().flatten().all(|&depth| depth == 7));
    }
}
