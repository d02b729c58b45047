pub mod convert;
pub mod etl;
pub mod formatter;
pub mod mac;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{
    BindingRecord, ConversionResult, MappingSource, ParsedExport, VlanMapping,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
