pub mod cli;
pub mod lambda;
pub mod mapping_file;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, VlanMapping};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mab-csv")]
#[command(about = "Convert a switch MAB binding export into a MAC import CSV")]
pub struct CliConfig {
    /// MAB binding export (text)
    #[arg(short, long)]
    pub input: String,

    #[arg(short, long, default_value = "nile_import.csv")]
    pub output: String,

    /// VLAN to segment mapping file (.toml or .json); replaces mappings found in the export
    #[arg(long)]
    pub mappings: Option<String>,

    /// Extra VLAN=NAME mapping, may be repeated; wins over --mappings
    #[arg(long = "map", value_name = "VLAN=NAME")]
    pub map: Vec<String>,

    /// Also write the mappings detected in the export as JSON
    #[arg(long)]
    pub detected_mappings_out: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn explicit_mapping(&self) -> Result<VlanMapping> {
        let mut mapping = match &self.mappings {
            Some(path) => mapping_file::load_mapping_file(path)?,
            None => VlanMapping::new(),
        };

        for arg in &self.map {
            let (vlan, segment) = mapping_file::parse_mapping_arg(arg)?;
            mapping.insert(vlan, segment);
        }

        Ok(mapping)
    }

    fn detected_mappings_path(&self) -> Option<&str> {
        self.detected_mappings_out.as_deref()
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;

        if let Some(path) = &self.mappings {
            validate_path("mappings", path)?;
            validate_file_extension("mappings", path, &mapping_file::MAPPING_FILE_EXTENSIONS)?;
        }

        for arg in &self.map {
            mapping_file::parse_mapping_arg(arg)?;
        }

        if let Some(path) = &self.detected_mappings_out {
            validate_path("detected_mappings_out", path)?;
        }

        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    fn config(args: &[&str]) -> CliConfig {
        let mut argv = vec!["mab-csv"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&["--input", "show_mab.txt"]);
        assert_eq!(cfg.output, "nile_import.csv");
        assert!(cfg.mappings.is_none());
        assert!(cfg.map.is_empty());
        assert!(cfg.validate().is_ok());
        assert!(cfg.explicit_mapping().unwrap().is_empty());
    }

    #[test]
    fn test_inline_maps_build_explicit_mapping() {
        let cfg = config(&[
            "-i",
            "in.txt",
            "--map",
            "1=Wired",
            "--map",
            "5=Guest",
            "--map",
            "1=Override",
        ]);
        let mapping = cfg.explicit_mapping().unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("1"), Some("Override"));
        assert_eq!(mapping.get("5"), Some("Guest"));
    }

    #[test]
    fn test_validation_failures() {
        assert!(config(&["-i", ""]).validate().is_err());
        assert!(config(&["-i", "in.txt", "--mappings", "vlans.csv"]).validate().is_err());
        assert!(config(&["-i", "in.txt", "--map", "Guest"]).validate().is_err());
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(CliConfig::try_parse_from(["mab-csv"]).is_err());
    }
}
