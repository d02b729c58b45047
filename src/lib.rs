pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::{handle_request, ApiGatewayRequest, ApiGatewayResponse};
pub use crate::config::{cli::LocalStorage, lambda::LambdaConfig};
pub use crate::core::{
    convert::convert, etl::ConversionEngine, formatter::format_csv, mac::normalize_mac,
    parser::parse, pipeline::FilePipeline,
};
pub use crate::domain::model::{
    BindingRecord, ConversionResult, MappingSource, ParsedExport, VlanMapping,
};
pub use crate::utils::error::{ConvertError, Result};
