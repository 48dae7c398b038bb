use std::fmt;
use std::io::{self, Write};

/// Field separator used between the domain and its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter(String);

impl Delimiter {
    pub const DEFAULT: &'static str = ",";

    /// Shells hand `\t` and `\n` over as two literal characters; turn those
    /// two spellings into the real control characters, keep anything else as is.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "\\t" => Self("\t".to_string()),
            "\\n" => Self("\n".to_string()),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One input line paired with its domain hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub domain: Vec<u8>,
    pub hash: i32,
}

impl OutputRow {
    pub fn write_to<W: Write + ?Sized>(&self, delimiter: &Delimiter, out: &mut W) -> io::Result<()> {
        out.write_all(&self.domain)?;
        out.write_all(delimiter.as_bytes())?;
        writeln!(out, "{}", self.hash)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub sources: usize,
    pub rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_escapes() {
        assert_eq!(Delimiter::parse("\\t").as_str(), "\t");
        assert_eq!(Delimiter::parse("\\n").as_str(), "\n");
        assert_eq!(Delimiter::parse("|").as_str(), "|");
        assert_eq!(Delimiter::parse(" :: ").as_str(), " :: ");
        // 只有完全相符才轉換
        assert_eq!(Delimiter::parse("\\t\\t").as_str(), "\\t\\t");
        assert_eq!(Delimiter::default().as_str(), ",");
    }

    #[test]
    fn test_row_keeps_raw_bytes() {
        let row = OutputRow {
            domain: vec![b'x', 0xff, b'\r'],
            hash: -16512,
        };
        let mut out = Vec::new();
        row.write_to(&Delimiter::parse(";"), &mut out).unwrap();
        assert_eq!(out, b"x\xff\r;-16512\n");
    }
}
