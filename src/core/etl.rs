use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting conversion...");

        // Extract
        let parsed = self.pipeline.extract().await?;
        tracing::info!(
            "Parsed {} binding records across {} VLANs",
            parsed.records.len(),
            parsed.observed_vlans.len()
        );
        if !parsed.mappings.is_empty() {
            tracing::info!("Detected {} VLAN mappings in the export", parsed.mappings.len());
        }

        // Transform
        let result = self.pipeline.transform(parsed).await?;
        tracing::info!(
            "Formatted {} rows using {:?} mappings",
            result.record_count,
            result.mapping_source
        );

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
