use crate::core::ConfigProvider;
use crate::domain::{Axis, BorderType, Borders, FillType, FillValues, Params3D};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub model: ModelConfig,
    pub axis_x: AxisConfig,
    pub axis_y: AxisConfig,
    pub borders: Option<Vec<BorderConfig>>,
    pub fill: Option<Vec<FillConfig>>,
    pub export: ExportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// An axis is either generated from start/end/step (`mode` picks whether
/// the generated values are edges or centers) or given explicitly as an
/// `edges` or `centers` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisConfig {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub step: Option<f64>,
    pub mode: Option<String>,
    pub edges: Option<Vec<f64>>,
    pub centers: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderConfig {
    pub r#type: String,
    pub limits: [u32; 2],
    pub max_step: Option<u16>,
    pub deviation_prob: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillConfig {
    pub values: Vec<FillValueConfig>,
    pub smooth: Option<u16>,
    pub ordered: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillValueConfig {
    pub random_between: Option<[u32; 2]>,
    pub preset: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub compress: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    fn build_axis(field: &str, config: &AxisConfig) -> Result<Axis> {
        if let Some(edges) = &config.edges {
            return Axis::from_edges(edges);
        }

        if let Some(centers) = &config.centers {
            return Axis::from_centers(centers);
        }

        let start = config.start.ok_or_else(|| ModelError::MissingConfigError {
            field: format!("{field}.start"),
        })?;
        let end = config.end.ok_or_else(|| ModelError::MissingConfigError {
            field: format!("{field}.end"),
        })?;

        match config.mode.as_deref() {
            None | Some("edges") => Axis::generate_on_edges(start, end, config.step),
            Some("centers") => Axis::generate_on_centers(start, end, config.step),
            Some(other) => Err(ModelError::InvalidConfigValueError {
                field: format!("{field}.mode"),
                value: other.to_string(),
                reason: "Axis mode must be 'edges' or 'centers'".to_string(),
            }),
        }
    }

    fn build_borders(&self) -> Result<Option<Borders>> {
        let Some(configs) = &self.borders else {
            return Ok(None);
        };

        let mut types: Vec<BorderType> = Vec::with_capacity(configs.len());
        let mut limits: Vec<[u32; 2]> = Vec::with_capacity(configs.len());

        for (index, config) in configs.iter().enumerate() {
            types.push(match config.r#type.as_str() {
                "random" => BorderType::Random,
                "random_with_step" => BorderType::RandomWithStep(
                    config.max_step.unwrap_or(1),
                    config.deviation_prob.unwrap_or(1.0),
                ),
                other => {
                    return Err(ModelError::InvalidConfigValueError {
                        field: format!("borders[{index}].type"),
                        value: other.to_string(),
                        reason: "Border type must be 'random' or 'random_with_step'".to_string(),
                    })
                }
            });
            limits.push(config.limits);
        }

        Borders::new(types, limits).map(Some)
    }

    fn build_fill(&self) -> Result<Option<Vec<FillValues>>> {
        let Some(configs) = &self.fill else {
            return Ok(None);
        };

        let mut fill_values: Vec<FillValues> = Vec::with_capacity(configs.len());

        for (index, config) in configs.iter().enumerate() {
            let mut values: Vec<FillType> = Vec::with_capacity(config.values.len());

            for value in &config.values {
                values.push(match (&value.random_between, &value.preset) {
                    (Some(limits), None) => FillType::RandomBetween(limits[0], limits[1]),
                    (None, Some(preset)) => FillType::ValueFrom(preset.clone()),
                    _ => {
                        return Err(ModelError::InvalidConfigValueError {
                            field: format!("fill[{index}].values"),
                            value: String::new(),
                            reason: "Each fill value needs exactly one of 'random_between' or 'preset'"
                                .to_string(),
                        })
                    }
                });
            }

            fill_values.push(FillValues::new(
                values,
                config.smooth.unwrap_or(0),
                config.ordered.unwrap_or(true),
            )?);
        }

        Ok(Some(fill_values))
    }
}

impl ConfigProvider for TomlConfig {
    fn params(&self) -> Result<Params3D> {
        let axis_x = Self::build_axis("axis_x", &self.axis_x)?;
        let axis_y = Self::build_axis("axis_y", &self.axis_y)?;

        let mut params = Params3D::new(axis_x, axis_y);

        if let Some(borders) = self.build_borders()? {
            params = params.with_borders(borders);
        }

        if let Some(fill_values) = self.build_fill()? {
            params = params.with_fill_values(fill_values);
        }

        Ok(params)
    }

    fn model_name(&self) -> &str {
        &self.model.name
    }

    fn output_path(&self) -> &str {
        &self.export.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.export.output_formats
    }

    fn compress(&self) -> bool {
        self.export.compress.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_model_name("model.name", &self.model.name)?;
        validation::validate_path("export.output_path", &self.export.output_path)?;
        validation::validate_output_formats("export.output_formats", &self.export.output_formats)?;

        for (field, axis) in [("axis_x", &self.axis_x), ("axis_y", &self.axis_y)] {
            if axis.edges.is_none() && axis.centers.is_none() {
                if let (Some(start), Some(end)) = (axis.start, axis.end) {
                    validation::validate_axis_range(field, start, end)?;
                }
            }
        }

        if let Some(borders) = &self.borders {
            for (index, border) in borders.iter().enumerate() {
                if let Some(prob) = border.deviation_prob {
                    validation::validate_range(
                        &format!("borders[{index}].deviation_prob"),
                        prob,
                        0.0,
                        1.0,
                    )?;
                }
            }
        }

        Ok(())
    }
}
