pub mod engine;
pub mod hash;
pub mod pipeline;

pub use crate::domain::model::{Delimiter, OutputRow, ReportSummary};
pub use crate::domain::ports::{ConfigProvider, LineSource, Lines, Pipeline};
pub use crate::utils::error::Result;
