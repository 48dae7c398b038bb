use crate::core::hash::domain_hash;
use crate::core::{Delimiter, Lines, OutputRow, Pipeline, Result};
use std::io::Write;

/// Lazily hashes each line of a [`Lines`] stream.
pub struct HashRows {
    lines: Lines,
}

impl HashRows {
    pub fn new(lines: Lines) -> Self {
        Self { lines }
    }
}

impl Iterator for HashRows {
    type Item = Result<OutputRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map(|domain| {
            let hash = domain_hash(&domain);
            OutputRow { domain, hash }
        }))
    }
}

/// Writes the `domain<delimiter>hash` report.
#[derive(Debug, Clone, Default)]
pub struct ReportPipeline {
    delimiter: Delimiter,
}

impl ReportPipeline {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    pub fn rows(&self, lines: Lines) -> HashRows {
        HashRows::new(lines)
    }

    /// 整份報表 (標頭 + 所有列) 一次輸出到記憶體，方便測試與小量輸入
    pub fn render(&self, lines: Lines) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_header(&mut out)?;
        self.write_rows(lines, &mut out)?;
        Ok(out)
    }
}

impl Pipeline for ReportPipeline {
    fn write_header(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "domain{}hash", self.delimiter)?;
        Ok(())
    }

    fn write_rows(&self, lines: Lines, out: &mut dyn Write) -> Result<usize> {
        let mut written = 0;
        for row in self.rows(lines) {
            row?.write_to(&self.delimiter, out)?;
            written += 1;
        }
        Ok(written)
    }
}
