use crate::utils::error::{ModelError, Result};
use regex::Regex;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Model names become file names, so they are restricted to a portable
/// character set.
pub fn validate_model_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Model name cannot be empty".to_string(),
        });
    }

    let allowed = Regex::new(r"^[A-Za-z0-9._-]+$").expect("model name pattern is valid");
    if !allowed.is_match(name) {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Model name may only contain letters, digits, '.', '_' and '-'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    let allowed: HashSet<&str> = ["json", "csv"].into_iter().collect();
    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(ModelError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: "Supported output formats are: json, csv".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_axis_range(field_name: &str, start: f64, end: f64) -> Result<()> {
    if start >= end {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{start}..{end}"),
            reason: "Axis start must be smaller than axis end".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
