use crate::domain::model::{ConversionResult, ParsedExport, VlanMapping};
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
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Caller-supplied mapping; an empty mapping means "use what the export declares".
    fn explicit_mapping(&self) -> Result<VlanMapping>;
    fn detected_mappings_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ParsedExport>;
    async fn transform(&self, parsed: ParsedExport) -> Result<ConversionResult>;
    async fn load(&self, result: ConversionResult) -> Result<String>;
}
