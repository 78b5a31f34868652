use serde::Serialize;

use crate::utils::error::{ModelError, Result};

/// One way of valuing the blocks between two borders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FillType {
    /// Uniform random value within the inclusive bounds.
    RandomBetween(u32, u32),
    /// Value drawn from a fixed preset.
    ValueFrom(Vec<u32>),
}

/// Fill parameters for one layer of the model. Carried in the params and
/// exported with the model; generation itself does not consume them.
#[derive(Debug, Clone, Serialize)]
pub struct FillValues {
    fill_values: Vec<FillType>,
    values_smooth: u16,
    is_preset_ordered: bool,
}

impl Default for FillValues {
    fn default() -> FillValues {
        FillValues {
            fill_values: vec![FillType::RandomBetween(1, 10)],
            values_smooth: 0,
            is_preset_ordered: true,
        }
    }
}

impl FillValues {
    pub fn new(
        fill_values: Vec<FillType>,
        values_smooth: u16,
        is_preset_ordered: bool,
    ) -> Result<FillValues> {
        for fill_value in &fill_values {
            match fill_value {
                FillType::RandomBetween(lower_bound, upper_bound) => {
                    if lower_bound > upper_bound {
                        return Err(ModelError::IncorrectFillLimits);
                    }
                }
                FillType::ValueFrom(values) => {
                    if values.is_empty() {
                        return Err(ModelError::EmptyFillPreset);
                    }
                }
            }
        }

        Ok(FillValues {
            fill_values,
            values_smooth,
            is_preset_ordered,
        })
    }
}

impl FillValues {
    pub fn fill_values(&self) -> &[FillType] {
        &self.fill_values
    }

    pub fn values_smooth(&self) -> u16 {
        self.values_smooth
    }

    pub fn is_preset_ordered(&self) -> bool {
        self.is_preset_ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fill_values_pass() {
        let fill = FillValues::new(
            vec![FillType::RandomBetween(1, 10), FillType::ValueFrom(vec![3, 5])],
            2,
            false,
        )
        .unwrap();

        assert_eq!(fill.fill_values().len(), 2);
        assert_eq!(fill.values_smooth(), 2);
        assert!(!fill.is_preset_ordered());
    }

    #[test]
    fn inverted_random_bounds_are_rejected() {
        assert!(matches!(
            FillValues::new(vec![FillType::RandomBetween(10, 1)], 0, true),
            Err(ModelError::IncorrectFillLimits)
        ));
    }

    #[test]
    fn empty_preset_is_rejected() {
        assert!(matches!(
            FillValues::new(vec![FillType::ValueFrom(vec![])], 0, true),
            Err(ModelError::EmptyFillPreset)
        ));
    }
}
