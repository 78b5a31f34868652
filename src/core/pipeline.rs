use crate::core::layers;
use crate::core::{BorderSurface, ConfigProvider, Model3D, ModelPipeline, Storage};
use crate::domain::Params3D;
use crate::utils::error::{ModelError, Result};
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct GenerationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GenerationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> ModelPipeline for GenerationPipeline<S, C> {
    async fn prepare(&self) -> Result<Params3D> {
        let params = self.config.params()?;

        tracing::debug!(
            "Prepared axes: {} x blocks over [{}, {}], {} y blocks over [{}, {}]",
            params.axis_x().blocks_count(),
            params.axis_x().start(),
            params.axis_x().end(),
            params.axis_y().blocks_count(),
            params.axis_y().start(),
            params.axis_y().end(),
        );

        Ok(params)
    }

    async fn generate(&self, params: &Params3D) -> Result<Vec<BorderSurface>> {
        tracing::debug!(
            "Generating {} border surfaces",
            params.borders().number_of_borders()
        );

        let mut rng = rand::thread_rng();
        Ok(layers::generate_borders(params, &mut rng))
    }

    async fn export(&self, model: Model3D) -> Result<String> {
        let name = self.config.model_name();
        let formats = self.config.output_formats();

        let mut files: Vec<(String, Vec<u8>)> = Vec::new();

        if formats.iter().any(|format| format == "json") {
            files.push((format!("{name}.json"), render_json(name, &model)?));
        }

        if formats.iter().any(|format| format == "csv") {
            files.push((format!("{name}.borders.csv"), render_borders_csv(&model)?));
        }

        if files.is_empty() {
            return Err(ModelError::ConfigError {
                message: "no output formats selected".to_string(),
            });
        }

        if self.config.compress() {
            let archive_name = format!("{name}.zip");
            tracing::debug!("Bundling {} files into {}", files.len(), archive_name);

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

                for (file_name, data) in &files {
                    zip.start_file::<_, ()>(file_name.as_str(), FileOptions::default())?;
                    zip.write_all(data)?;
                }

                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            self.storage.write_file(&archive_name, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), archive_name));
        }

        for (file_name, data) in &files {
            tracing::debug!("Writing {} ({} bytes)", file_name, data.len());
            self.storage.write_file(file_name, data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}

#[derive(Serialize)]
struct ModelDocument<'a> {
    name: &'a str,
    generated_at: String,
    params3d: &'a Params3D,
    borders: &'a [BorderSurface],
}

fn render_json(name: &str, model: &Model3D) -> Result<Vec<u8>> {
    let document = ModelDocument {
        name,
        generated_at: Utc::now().to_rfc3339(),
        params3d: model.params(),
        borders: model.borders(),
    };

    Ok(serde_json::to_vec_pretty(&document)?)
}

// One row per cell, so downstream tools can pivot however they need.
fn render_borders_csv(model: &Model3D) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["border", "y", "x", "depth"])?;

    for (border_id, surface) in model.borders().iter().enumerate() {
        for (y, row) in surface.iter().enumerate() {
            for (x, depth) in row.iter().enumerate() {
                writer.write_record([
                    border_id.to_string(),
                    y.to_string(),
                    x.to_string(),
                    depth.to_string(),
                ])?;
            }
        }
    }

    writer.into_inner().map_err(|e| ModelError::ProcessingError {
        message: format!("CSV buffer error: {e}"),
    })
}
