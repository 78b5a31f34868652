use crate::core::ModelPipeline;
use crate::domain::Model3D;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through its three stages and reports progress.
pub struct ModelEngine<P: ModelPipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: ModelPipeline> ModelEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting model generation");

        let params = self.pipeline.prepare().await?;
        tracing::info!(
            "Prepared params: {}x{} blocks, {} borders",
            params.axis_x().blocks_count(),
            params.axis_y().blocks_count(),
            params.borders().number_of_borders()
        );
        self.monitor.log_stats("prepare");

        let borders = self.pipeline.generate(&params).await?;
        tracing::info!("Generated {} border surfaces", borders.len());
        self.monitor.log_stats("generate");

        let model = Model3D::new(params, borders);
        let output_path = self.pipeline.export(model).await?;
        tracing::info!("Model saved to: {}", output_path);
        self.monitor.log_stats("export");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
