use crate::domain::model::Delimiter;
use crate::utils::error::Result;
use std::io::Write;

/// A single-pass stream of raw lines, newline already stripped.
pub type Lines = Box<dyn Iterator<Item = Result<Vec<u8>>>>;

pub trait LineSource {
    /// Name used in logs: the file path, or `-` for stdin.
    fn name(&self) -> &str;

    /// Consumes the source; a source can be read only once.
    fn into_lines(self: Box<Self>) -> Result<Lines>;
}

pub trait ConfigProvider {
    /// Delimiter as the user typed it, before escape interpretation.
    fn raw_delimiter(&self) -> &str;
    fn files(&self) -> &[String];

    fn delimiter(&self) -> Delimiter {
        Delimiter::parse(self.raw_delimiter())
    }
}

pub trait Pipeline {
    fn write_header(&self, out: &mut dyn Write) -> Result<()>;

    /// Writes one row per line and returns how many were written.
    fn write_rows(&self, lines: Lines, out: &mut dyn Write) -> Result<usize>;
}
