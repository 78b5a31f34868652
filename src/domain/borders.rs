use serde::Serialize;

use crate::utils::error::{ModelError, Result};

/// How a single border surface is generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BorderType {
    /// Every cell sampled uniformly within the border's limits.
    Random,
    /// Neighbor-correlated surface: cells stay within `max_step` of the
    /// cells already placed next to them. The second value is the
    /// probability that a cell deviates from its reference at all.
    RandomWithStep(u16, f32),
}

/// Parameters for the border surfaces of a model: how many there are, how
/// each one is generated, and the depth limits each must stay within.
#[derive(Debug, Clone, Serialize)]
pub struct Borders {
    number_of_borders: u8,
    borders_type: Vec<BorderType>,
    borders_limits: Vec<[u32; 2]>,
}

impl Default for Borders {
    fn default() -> Borders {
        Borders {
            number_of_borders: 2,
            borders_type: vec![BorderType::Random, BorderType::Random],
            borders_limits: vec![[5, 10], [15, 20]],
        }
    }
}

impl Borders {
    /// The border count is the length of the lists, so the two must match
    /// one to one and carry between 1 and 255 entries.
    pub fn new(borders_type: Vec<BorderType>, borders_limits: Vec<[u32; 2]>) -> Result<Borders> {
        if borders_type.len() != borders_limits.len() {
            return Err(ModelError::MismatchedBorderLists {
                types: borders_type.len(),
                limits: borders_limits.len(),
            });
        }

        let number_of_borders = match u8::try_from(borders_type.len()) {
            Ok(count) if count > 0 => count,
            _ => return Err(ModelError::IncorrectBordersCount),
        };

        if !borders_limits.iter().all(|limits| limits[0] <= limits[1]) {
            return Err(ModelError::IncorrectBorderLimits);
        }

        Ok(Borders {
            number_of_borders,
            borders_type,
            borders_limits,
        })
    }
}

impl Borders {
    pub fn number_of_borders(&self) -> u8 {
        self.number_of_borders
    }

    pub fn borders_type(&self) -> &[BorderType] {
        &self.borders_type
    }

    pub fn borders_limits(&self) -> &[[u32; 2]] {
        &self.borders_limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_derived_from_lists() {
        let borders = Borders::new(
            vec![BorderType::Random, BorderType::RandomWithStep(3, 0.8)],
            vec![[5, 10], [15, 20]],
        )
        .unwrap();

        assert_eq!(borders.number_of_borders(), 2);
        assert_eq!(borders.borders_limits()[1], [15, 20]);
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert!(matches!(
            Borders::new(vec![], vec![]),
            Err(ModelError::IncorrectBordersCount)
        ));
    }

    #[test]
    fn too_many_borders_are_rejected() {
        let types = vec![BorderType::Random; 256];
        let limits = vec![[0, 10]; 256];
        assert!(matches!(
            Borders::new(types, limits),
            Err(ModelError::IncorrectBordersCount)
        ));
    }

    #[test]
    fn mismatched_lists_are_rejected() {
        assert!(matches!(
            Borders::new(vec![BorderType::Random], vec![[5, 10], [15, 20]]),
            Err(ModelError::MismatchedBorderLists { types: 1, limits: 2 })
        ));
    }

    #[test]
    fn inverted_limits_are_rejected() {
        assert!(matches!(
            Borders::new(vec![BorderType::Random], vec![[10, 5]]),
            Err(ModelError::IncorrectBorderLimits)
        ));
    }
}
