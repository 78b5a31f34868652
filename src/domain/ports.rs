use crate::domain::model::{BorderSurface, Model3D};
use crate::domain::Params3D;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn params(&self) -> Result<Params3D>;
    fn model_name(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn compress(&self) -> bool;
}

#[async_trait]
pub trait ModelPipeline: Send + Sync {
    async fn prepare(&self) -> Result<Params3D>;
    async fn generate(&self, params: &Params3D) -> Result<Vec<BorderSurface>>;
    async fn export(&self, model: Model3D) -> Result<String>;
}
