use crate::core::{LineSource, Lines};
use crate::utils::error::{GadhashError, Result};
use crate::utils::validation::{validate_source_selection, STDIN_PATH};
use memchr::memchr;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Any buffered reader, split on `\n`.
pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: BufRead + 'static> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl<R: BufRead + 'static> LineSource for ReaderSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn into_lines(self: Box<Self>) -> Result<Lines> {
        // split 會吃掉換行符號，且結尾換行不會多出一個空行
        Ok(Box::new(
            self.reader.split(b'\n').map(|line| line.map_err(GadhashError::from)),
        ))
    }
}

/// Standard input; the lock is taken only once reading starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn name(&self) -> &str {
        STDIN_PATH
    }

    fn into_lines(self: Box<Self>) -> Result<Lines> {
        Box::new(ReaderSource::new(STDIN_PATH, io::stdin().lock())).into_lines()
    }
}

/// A named file, read whole into memory.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
        }
    }
}

impl LineSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn into_lines(self: Box<Self>) -> Result<Lines> {
        let buf = fs::read(&self.path).map_err(|source| GadhashError::SourceReadError {
            path: self.name.clone(),
            source,
        })?;
        tracing::debug!("Loaded {} bytes from {}", buf.len(), self.name);
        Ok(Box::new(BufferLines::new(buf)))
    }
}

/// Splits an in-memory buffer with the same rules as [`BufRead::split`].
pub struct BufferLines {
    buf: Vec<u8>,
    pos: usize,
}

impl BufferLines {
    pub fn new(buf: Vec<u8>) -> Self {
        Self { buf, pos: 0 }
    }
}

impl Iterator for BufferLines {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            return None;
        }
        let rest = &self.buf[self.pos..];
        let line = match memchr(b'\n', rest) {
            Some(end) => {
                self.pos += end + 1;
                rest[..end].to_vec()
            }
            None => {
                self.pos = self.buf.len();
                rest.to_vec()
            }
        };
        Some(Ok(line))
    }
}

/// Maps file arguments to sources: none or a lone `-` reads stdin,
/// otherwise every path is read in order.
pub fn resolve_sources(files: &[String]) -> Result<Vec<Box<dyn LineSource>>> {
    validate_source_selection("file", files)?;

    if files.is_empty() || files[0] == STDIN_PATH {
        return Ok(vec![Box::new(StdinSource)]);
    }

    Ok(files
        .iter()
        .map(|f| Box::new(FileSource::new(f)) as Box<dyn LineSource>)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn collect(source: Box<dyn LineSource>) -> Vec<Vec<u8>> {
        source
            .into_lines()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_reader_source_line_rules() {
        let source = ReaderSource::new("mem", Cursor::new(b"a.com\n\nb.com\r\nc.com".to_vec()));
        assert_eq!(
            collect(Box::new(source)),
            vec![
                b"a.com".to_vec(),
                b"".to_vec(),
                b"b.com\r".to_vec(),
                b"c.com".to_vec()
            ]
        );

        let trailing = ReaderSource::new("mem", Cursor::new(b"a.com\n".to_vec()));
        assert_eq!(collect(Box::new(trailing)), vec![b"a.com".to_vec()]);
    }

    #[test]
    fn test_buffer_lines_match_reader_split() {
        let inputs: [&[u8]; 6] = [b"", b"\n", b"a\nb", b"a\nb\n", b"\n\na\n", b" x \r\n\xff\n"];
        for input in inputs {
            let from_buffer: Vec<Vec<u8>> = BufferLines::new(input.to_vec())
                .collect::<Result<_>>()
                .unwrap();
            let from_reader: Vec<Vec<u8>> = Cursor::new(input.to_vec())
                .split(b'\n')
                .collect::<io::Result<_>>()
                .unwrap();
            assert_eq!(from_buffer, from_reader, "input {:?}", input);
        }
    }

    #[test]
    fn test_file_source_reads_lines() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"google.com\nexample.com\n").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(
            collect(Box::new(source)),
            vec![b"google.com".to_vec(), b"example.com".to_vec()]
        );
    }

    #[test]
    fn test_missing_file_names_path() {
        let source = Box::new(FileSource::new("/definitely/not/here.txt"));
        match source.into_lines() {
            Err(GadhashError::SourceReadError { path, .. }) => {
                assert_eq!(path, "/definitely/not/here.txt")
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected read failure"),
        }
    }

    #[test]
    fn test_resolve_sources() {
        let stdin = resolve_sources(&[]).unwrap();
        assert_eq!(stdin.len(), 1);
        assert_eq!(stdin[0].name(), "-");

        let hyphen = resolve_sources(&["-".to_string()]).unwrap();
        assert_eq!(hyphen[0].name(), "-");

        let files = resolve_sources(&["one.txt".to_string(), "two.txt".to_string()]).unwrap();
        let names: Vec<&str> = files.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["one.txt", "two.txt"]);

        assert!(matches!(
            resolve_sources(&["one.txt".to_string(), "-".to_string()]),
            Err(GadhashError::MixedSourcesError)
        ));
    }
}
