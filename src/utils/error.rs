use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Axis range is invalid: start ({start}) must be smaller than end ({end})")]
    InvalidAxisRange { start: f64, end: f64 },

    #[error("Axis step {0} is below the 0.001 resolution limit")]
    StepBelowResolution(f64),

    #[error("Axis values must strictly increase")]
    UnorderedAxisValues,

    #[error("Axis needs at least {required} points, got {got}")]
    NotEnoughAxisPoints { required: usize, got: usize },

    #[error("Number of borders must be between 1 and 255")]
    IncorrectBordersCount,

    #[error("Each border needs one type and one limit pair: {types} types, {limits} limits")]
    MismatchedBorderLists { types: usize, limits: usize },

    #[error("Border limits must be [min value, <= max value]")]
    IncorrectBorderLimits,

    #[error("Fill limits must be [min value, <= max value]")]
    IncorrectFillLimits,

    #[error("Fill preset needs at least one value")]
    EmptyFillPreset,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
