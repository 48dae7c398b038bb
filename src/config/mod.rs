#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::domain::model::Delimiter;
use crate::utils::error::Result;
use crate::utils::validation::{validate_source_selection, Validate};
use toml_config::TomlConfig;

/// Settings after layering command line over config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub delimiter: String,
    pub files: Vec<String>,
}

impl ResolvedConfig {
    /// 命令列優先；命令列給了檔案就整組取代設定檔裡的檔案
    pub fn layer(file_config: Option<&TomlConfig>, delimiter: Option<&str>, files: Vec<String>) -> Self {
        let delimiter = delimiter
            .or_else(|| file_config.and_then(|c| c.output.delimiter.as_deref()))
            .unwrap_or(Delimiter::DEFAULT)
            .to_string();

        let files = if files.is_empty() {
            file_config.map(|c| c.input.files.clone()).unwrap_or_default()
        } else {
            files
        };

        Self { delimiter, files }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::layer(None, None, Vec::new())
    }
}

impl ConfigProvider for ResolvedConfig {
    fn raw_delimiter(&self) -> &str {
        &self.delimiter
    }

    fn files(&self) -> &[String] {
        &self.files
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_source_selection("file", &self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolvedConfig::default();
        assert_eq!(config.raw_delimiter(), ",");
        assert!(config.files().is_empty());
        assert_eq!(config.delimiter(), Delimiter::parse(","));
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let file_config = TomlConfig::from_toml_str(
            r#"
[input]
files = ["from-config.txt"]

[output]
delimiter = ";"
"#,
        )
        .unwrap();

        let only_file = ResolvedConfig::layer(Some(&file_config), None, Vec::new());
        assert_eq!(only_file.delimiter, ";");
        assert_eq!(only_file.files, vec!["from-config.txt".to_string()]);

        let overridden = ResolvedConfig::layer(
            Some(&file_config),
            Some("\\t"),
            vec!["cli.txt".to_string()],
        );
        assert_eq!(overridden.delimiter(), Delimiter::parse("\t"));
        assert_eq!(overridden.files, vec!["cli.txt".to_string()]);
    }

    #[test]
    fn test_mixed_sources_rejected() {
        let config = ResolvedConfig::layer(None, None, vec!["a.txt".to_string(), "-".to_string()]);
        assert!(config.validate().is_err());
    }
}
