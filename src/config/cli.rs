use crate::config::toml_config::TomlConfig;
use crate::config::ResolvedConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_source_selection, Validate};
use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

const ABOUT: &str = "\
Google Analytics Domain Hash Calculator

When analyzing Google Analytics cookies, you will see an Urchin Tracking
Module A (UTMA) value (utma=) in the URL. The part for comparison is only
the number before the first dot (\".\"). For instance, in \"utma=173272373.nnnnn...\",
the domain hash is 173272373 (\"google.com\", where n is any arbitrary number).
Enter the domain (without the protocol, i.e., don't include \"http://\", just use
\"google.com\") and the domain hash will be calculated. A hash of 0 indicates an error.";

const VERSION: &str = concat!(
    "v",
    env!("CARGO_PKG_VERSION"),
    "\nGoogle Analytics Domain Hash Calculator\nCopyright (C) 2017 Dan O'Day <d@4n68r.com>"
);

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "gadhash",
    version = VERSION,
    about = ABOUT,
    disable_version_flag = true
)]
pub struct CliConfig {
    /// Delimiter string (comma by default; can be multiple characters, `\t` and `\n` are expanded)
    #[arg(short, long, allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// File containing domains, one per line; `-` reads stdin (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Vec<String>,

    /// More files; stdin is read when no file is given
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Optional TOML config file with [input] and [output] tables
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Enable verbose output on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    /// `--file` and positional values merged in command-line order.
    #[arg(skip)]
    ordered_files: Vec<String>,
}

impl CliConfig {
    /// clap 預設的 `-V` 改成 `-v/--version`
    pub fn cli_command() -> Command {
        Self::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Display version")
                .action(ArgAction::Version),
        )
    }

    /// Parses `std::env::args_os`, exiting with clap's message on error.
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Like [`Parser::try_parse_from`], but keeps `-f` and positional files
    /// in the order they were typed.
    pub fn try_parse_args_from<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::cli_command().try_get_matches_from(args)?;
        let mut config = Self::from_arg_matches(&matches)?;
        config.ordered_files = values_in_order(&matches, &["file", "files"]);
        Ok(config)
    }

    pub fn all_files(&self) -> Vec<String> {
        self.ordered_files.clone()
    }

    /// 載入設定檔 (若有) 並套用命令列覆蓋
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        if let Some(config) = &file_config {
            config.validate()?;
        }

        Ok(ResolvedConfig::layer(
            file_config.as_ref(),
            self.delimiter.as_deref(),
            self.all_files(),
        ))
    }
}

/// 依照參數在命令列上的位置合併多個參數的值
fn values_in_order(matches: &ArgMatches, ids: &[&str]) -> Vec<String> {
    let mut indexed: Vec<(usize, String)> = Vec::new();
    for id in ids {
        if let (Some(indices), Some(values)) =
            (matches.indices_of(id), matches.get_many::<String>(id))
        {
            indexed.extend(indices.zip(values.cloned()));
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, value)| value).collect()
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        validate_source_selection("file", &self.all_files())
    }
}
