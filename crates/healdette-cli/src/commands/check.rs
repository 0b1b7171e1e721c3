use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use healdette::core::config::error::{ConfigError, ConfigLoadError};
use healdette::core::config::loader::{ConfigFormat, parse_document};
use healdette::core::config::validator::{ConfigReport, ConfigValidator};
use std::path::Path;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let report = check_file(&args.config)?;

    if report.valid {
        println!("✓ Configuration '{}' is valid.", args.config.display());
        return Ok(());
    }

    eprintln!(
        "✗ Configuration '{}' has {} error(s):",
        args.config.display(),
        report.errors.len()
    );
    for error in &report.errors {
        eprintln!("  - {}", error);
    }
    Err(CliError::Config(format!(
        "{} error(s) in '{}'",
        report.errors.len(),
        args.config.display()
    )))
}

pub fn check_file(path: &Path) -> Result<ConfigReport> {
    info!("Checking population configuration {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let report = match parse_document(&content, ConfigFormat::from_path(path)) {
        Ok(document) => ConfigValidator::new().check(&document),
        Err(error) => ConfigReport {
            valid: false,
            errors: vec![error],
        },
    };

    if let Some(ConfigError::MalformedInput { reason }) = report.errors.first() {
        info!("Document could not be parsed: {}", reason);
    }
    Ok(report)
}
