use crate::core::{convert, parser};
use crate::core::{ConfigProvider, ConversionResult, ParsedExport, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};

/// Reads an export through `Storage`, converts it and writes the CSV back.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    async fn extract(&self) -> Result<ParsedExport> {
        tracing::debug!("Reading export from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ConvertError::EmptyInput);
        }

        let text = String::from_utf8(bytes)?;
        Ok(parser::parse(&text))
    }

    async fn transform(&self, parsed: ParsedExport) -> Result<ConversionResult> {
        let explicit = self.config.explicit_mapping()?;
        convert::render(parsed, Some(&explicit))
    }

    async fn load(&self, result: ConversionResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::debug!(
            "Writing CSV ({} bytes) to storage",
            result.csv_output.len()
        );
        self.storage
            .write_file(&output_path, result.csv_output.as_bytes())
            .await?;

        // 偵測到的對應表另存一份，方便下次直接用 --mappings 帶入
        if let Some(mappings_path) = self.config.detected_mappings_path() {
            let json_data = serde_json::to_string_pretty(&result.detected_mappings)?;
            self.storage
                .write_file(mappings_path, json_data.as_bytes())
                .await?;
            tracing::debug!("Detected mappings saved to: {}", mappings_path);
        }

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MappingSource, VlanMapping};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ConvertError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        explicit: VlanMapping,
        detected_out: Option<String>,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                explicit: VlanMapping::new(),
                detected_out: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            "show_mab.txt"
        }

        fn output_path(&self) -> &str {
            "nile_import.csv"
        }

        fn explicit_mapping(&self) -> Result<VlanMapping> {
            Ok(self.explicit.clone())
        }

        fn detected_mappings_path(&self) -> Option<&str> {
            self.detected_out.as_deref()
        }
    }

    const EXPORT: &[u8] = b"1 = 'Wired Production'\n1    001e.0b41.7afd    DYNAMIC     Gi1/0/15\n";

    #[tokio::test]
    async fn test_extract_reads_and_parses() {
        let storage = MockStorage::new();
        storage.put_file("show_mab.txt", EXPORT).await;
        let pipeline = FilePipeline::new(storage, MockConfig::new());

        let parsed = pipeline.extract().await.unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.mappings.get("1"), Some("Wired Production"));
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let pipeline = FilePipeline::new(MockStorage::new(), MockConfig::new());
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ConvertError::IoError(_)));
    }

    #[tokio::test]
    async fn test_extract_blank_file_is_empty_input() {
        let storage = MockStorage::new();
        storage.put_file("show_mab.txt", b"  \r\n\n").await;
        let pipeline = FilePipeline::new(storage, MockConfig::new());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ConvertError::EmptyInput));
    }

    #[tokio::test]
    async fn test_extract_rejects_invalid_utf8() {
        let storage = MockStorage::new();
        storage.put_file("show_mab.txt", &[0xff, 0xfe, 0x31]).await;
        let pipeline = FilePipeline::new(storage, MockConfig::new());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ConvertError::InvalidEncoding(_)));
    }

    #[tokio::test]
    async fn test_transform_uses_explicit_mapping() {
        let mut config = MockConfig::new();
        config.explicit.insert("1", "Override");
        let pipeline = FilePipeline::new(MockStorage::new(), config);

        let parsed = parser::parse(std::str::from_utf8(EXPORT).unwrap());
        let result = pipeline.transform(parsed).await.unwrap();

        assert_eq!(result.mapping_source, MappingSource::Explicit);
        assert!(result.csv_output.contains("00:1e:0b:41:7a:fd,Override,"));
    }

    #[tokio::test]
    async fn test_load_writes_csv_and_detected_mappings() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new();
        config.detected_out = Some("detected.json".to_string());
        let pipeline = FilePipeline::new(storage.clone(), config);

        let parsed = parser::parse(std::str::from_utf8(EXPORT).unwrap());
        let result = pipeline.transform(parsed).await.unwrap();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "nile_import.csv");

        let csv = storage.get_file("nile_import.csv").await.unwrap();
        let csv = String::from_utf8(csv).unwrap();
        assert!(csv.ends_with("00:1e:0b:41:7a:fd,Wired Production,,,,,Allow,,No,,No\r\n"));

        let json = storage.get_file("detected.json").await.unwrap();
        let detected: VlanMapping = serde_json::from_slice(&json).unwrap();
        assert_eq!(detected.get("1"), Some("Wired Production"));
    }
}
