pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, ResolvedConfig};

pub use adapters::source::{resolve_sources, FileSource, ReaderSource, StdinSource};
pub use crate::core::{
    engine::HashEngine,
    hash::{domain_hash, hash},
    pipeline::ReportPipeline,
};
pub use domain::model::{Delimiter, ReportSummary};
pub use utils::error::{GadhashError, Result};
