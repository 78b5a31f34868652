use rand::Rng;

use crate::domain::{BorderSurface, BorderType, Params3D};

mod random;
mod random_with_step;

/// Generates the border surfaces for a model, one per configured border.
/// Each surface is `axis_y.blocks_count()` rows by `axis_x.blocks_count()`
/// columns.
pub fn generate_borders(params: &Params3D, rng: &mut impl Rng) -> Vec<BorderSurface> {
    let sizes = (
        params.axis_y().blocks_count(),
        params.axis_x().blocks_count(),
    );

    let types = params.borders().borders_type();
    let limits = params.borders().borders_limits();

    let mut borders: Vec<BorderSurface> = Vec::with_capacity(types.len());
    for (border_type, border_limits) in types.iter().zip(limits) {
        borders.push(match border_type {
            BorderType::Random => random::generate_layer(rng, sizes, *border_limits),
            BorderType::RandomWithStep(max_step, deviation_prob) => {
                random_with_step::generate_layer(
                    rng,
                    *max_step,
                    *deviation_prob,
                    sizes,
                    *border_limits,
                )
            }
        });
    }

    borders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Axis, Borders};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_surface_per_border_with_axis_dimensions() {
        let axis_x = Axis::generate_on_edges(0.0, 5.0, Some(1.0)).unwrap();
        let axis_y = Axis::generate_on_edges(0.0, 3.0, Some(1.0)).unwrap();
        let borders = Borders::new(
            vec![BorderType::Random, BorderType::RandomWithStep(2, 0.75)],
            vec![[5, 10], [15, 20]],
        )
        .unwrap();
        let params = Params3D::new(axis_x, axis_y).with_borders(borders);

        let mut rng = StdRng::seed_from_u64(1);
        let surfaces = generate_borders(&params, &mut rng);

        assert_eq!(surfaces.len(), 2);
        for surface in &surfaces {
            assert_eq!(surface.len(), 3);
            assert!(surface.iter().all(|row| row.len() == 5));
        }
        assert!(surfaces[0].iter().flatten().all(|d| (5..=10).contains(d)));
        assert!(surfaces[1].iter().flatten().all(|d| (15..=20).contains(d)));
    }
}
