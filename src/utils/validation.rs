use crate::utils::error::{GadhashError, Result};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GadhashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GadhashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// `-` 只能單獨出現，不能和其他檔名混用
pub fn validate_source_selection(field_name: &str, files: &[String]) -> Result<()> {
    if files.len() > 1 && files.iter().any(|f| f == STDIN_PATH) {
        return Err(GadhashError::MixedSourcesError);
    }

    for file in files {
        validate_path(field_name, file)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("file", "domains.txt").is_ok());
        assert!(validate_path("file", "-").is_ok());
        assert!(validate_path("file", "").is_err());
        assert!(validate_path("file", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_source_selection() {
        assert!(validate_source_selection("file", &[]).is_ok());
        assert!(validate_source_selection("file", &["-".to_string()]).is_ok());
        assert!(
            validate_source_selection("file", &["a.txt".to_string(), "b.txt".to_string()]).is_ok()
        );

        let mixed = vec!["a.txt".to_string(), "-".to_string()];
        assert!(matches!(
            validate_source_selection("file", &mixed),
            Err(GadhashError::MixedSourcesError)
        ));

        // 兩個 `-` 也算混用
        let doubled = vec!["-".to_string(), "-".to_string()];
        assert!(validate_source_selection("file", &doubled).is_err());
    }
}
