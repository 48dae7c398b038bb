use gadhash::core::ConfigProvider;
use gadhash::utils::error::{unexpected_failure_message, ErrorSeverity, GadhashError, Result};
use gadhash::utils::{logger, validation::Validate};
use gadhash::{resolve_sources, CliConfig, HashEngine, ReportPipeline, ReportSummary};
use std::io::{self, BufWriter};

fn main() {
    let config = CliConfig::parse_args();

    // 初始化日誌 (stderr)
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    // 非預期的 panic 也用統一格式回報
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("❌ Unexpected failure: {}", info);
        eprintln!("{}", unexpected_failure_message(info));
    }));

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(summary) => {
            tracing::debug!("Done: {:?}", summary);
        }
        Err(e) => std::process::exit(report_failure(&e)),
    }
}

fn run(config: &CliConfig) -> Result<ReportSummary> {
    // 驗證配置，來源混用時不啟動管線
    config.validate()?;
    let resolved = config.resolve()?;
    resolved.validate()?;

    let sources = resolve_sources(resolved.files())?;
    let engine = HashEngine::new(ReportPipeline::new(resolved.delimiter()));

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    engine.run(sources, out)
}

/// Prints the failure and returns the process exit code.
fn report_failure(e: &GadhashError) -> i32 {
    tracing::error!(
        "❌ gadhash failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 0, // 下游提早關閉，不算失敗
        severity => {
            eprintln!("ERROR: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            match severity {
                ErrorSeverity::Critical => 3,
                _ => 1,
            }
        }
    }
}
