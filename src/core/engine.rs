use crate::core::{LineSource, Pipeline, ReportSummary, Result};
use std::io::Write;

/// Runs a pipeline over every source in order, under a single header.
pub struct HashEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> HashEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run<W: Write>(
        &self,
        sources: Vec<Box<dyn LineSource>>,
        mut out: W,
    ) -> Result<ReportSummary> {
        let mut summary = ReportSummary::default();

        // 先打開所有來源，讀不到檔案時 stdout 不留任何輸出 (連標頭都沒有)
        let opened = sources
            .into_iter()
            .map(|source| {
                let name = source.name().to_string();
                tracing::debug!("Opening domain source: {}", name);
                source.into_lines().map(|lines| (name, lines))
            })
            .collect::<Result<Vec<_>>>()?;

        self.pipeline.write_header(&mut out)?;

        for (name, lines) in opened {
            let rows = self.pipeline.write_rows(lines, &mut out)?;

            tracing::debug!("Hashed {} domains from {}", rows, name);
            summary.sources += 1;
            summary.rows += rows;
        }

        out.flush()?;

        tracing::info!(
            "✅ Hashed {} domains from {} source(s)",
            summary.rows,
            summary.sources
        );
        Ok(summary)
    }
}
