pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::core::ConfigProvider;
    use crate::domain::{Axis, Params3D};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    /// Axis defaults mirror the default axis: edges 1 to 10, step 1.
    /// Borders and fill parameters come from the domain defaults; use a
    /// TOML config (the `toml_gen` binary) for full control.
    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "terrane")]
    #[command(about = "Generates randomized layered 3D subsurface models")]
    pub struct CliConfig {
        #[arg(long, default_value = "1.0")]
        pub x_start: f64,

        #[arg(long, default_value = "10.0")]
        pub x_end: f64,

        #[arg(long, help = "Distance between X edges, at least 0.001")]
        pub x_step: Option<f64>,

        #[arg(long, default_value = "1.0")]
        pub y_start: f64,

        #[arg(long, default_value = "10.0")]
        pub y_end: f64,

        #[arg(long, help = "Distance between Y edges, at least 0.001")]
        pub y_step: Option<f64>,

        #[arg(long, default_value = "model3d")]
        pub model_name: String,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_delimiter = ',', default_value = "json")]
        pub formats: Vec<String>,

        #[arg(long, help = "Bundle the output files into one zip archive")]
        pub compress: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU/memory usage between stages")]
        pub monitor: bool,
    }

    impl ConfigProvider for CliConfig {
        fn params(&self) -> Result<Params3D> {
            let axis_x = Axis::generate_on_edges(self.x_start, self.x_end, self.x_step)?;
            let axis_y = Axis::generate_on_edges(self.y_start, self.y_end, self.y_step)?;
            Ok(Params3D::new(axis_x, axis_y))
        }

        fn model_name(&self) -> &str {
            &self.model_name
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn compress(&self) -> bool {
            self.compress
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_model_name("model_name", &self.model_name)?;
            validation::validate_path("output_path", &self.output_path)?;
            validation::validate_output_formats("formats", &self.formats)?;
            validation::validate_axis_range("x", self.x_start, self.x_end)?;
            validation::validate_axis_range("y", self.y_start, self.y_end)?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn base_config() -> CliConfig {
            CliConfig {
                x_start: 1.0,
                x_end: 10.0,
                x_step: None,
                y_start: -100.0,
                y_end: 100.0,
                y_step: Some(1.0),
                model_name: "model3d".to_string(),
                output_path: "./output".to_string(),
                formats: vec!["json".to_string()],
                compress: false,
                verbose: false,
                monitor: false,
            }
        }

        #[test]
        fn params_follow_the_flags() {
            let params = base_config().params().unwrap();

            assert_eq!(params.axis_x().blocks_count(), 9);
            assert_eq!(params.axis_y().blocks_count(), 200);
            assert_eq!(params.borders().number_of_borders(), 2);
        }

        #[test]
        fn validation_rejects_bad_flags() {
            let mut config = base_config();
            config.model_name = "has space".to_string();
            assert!(config.validate().is_err());

            let mut config = base_config();
            config.x_end = 0.0;
            assert!(config.validate().is_err());

            let mut config = base_config();
            config.formats = vec!["yaml".to_string()];
            assert!(config.validate().is_err());

            assert!(base_config().validate().is_ok());
        }
    }
}
