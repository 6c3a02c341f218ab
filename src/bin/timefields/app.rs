use std::path::{Path, PathBuf};

use timefields::Result;
use timefields::config::Config;
use timefields::document;
use timefields::error::{ConfigError, Error as AppError};
use timefields::formatter::Formatter;
use timefields::telemetry::init_tracing;
use timefields::types::ClassName;
use tracing::{info, warn};

use super::cli::Cli;

const DEFAULT_CONFIG: &str = "config.toml";

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_filter.as_deref(), cli.json_logs)?;

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut config = Config::from_env_and_file(&config_path)?;

    if cli.in_place && cli.output.is_some() {
        return Err(AppError::from(ConfigError::InvalidField {
            field: "cli.in_place",
            message: "cannot be combined with --output".to_string(),
        }));
    }

    if let Some(class) = cli.class {
        config.class = ClassName::from(class);
    }
    if let Some(zone) = cli.zone {
        config.zone = zone;
    }
    if let Some(pattern) = cli.pattern {
        config.pattern = pattern;
    }
    if let Some(input) = cli.input {
        config.io.input = Some(input);
    }
    if let Some(output) = cli.output {
        config.io.output = Some(output);
    }
    if cli.pretty {
        config.io.pretty = true;
    }
    if cli.in_place {
        config.io.output = Some(in_place_target(config.io.input.as_deref())?);
    }

    let formatter = Formatter::new(config.zone, &config.pattern).map_err(AppError::from)?;

    let mut doc = document::load(config.io.input.as_deref())?;
    info!(
        elements = doc.len(),
        source = %display_target(config.io.input.as_deref()),
        "document loaded"
    );

    let stats = formatter.apply(&mut doc, &config.class);
    if stats.invalid > 0 {
        warn!(
            invalid = stats.invalid,
            "some fields did not contain a valid epoch timestamp"
        );
    }
    info!(
        class = %config.class,
        zone = %config.zone,
        rewritten = stats.rewritten,
        "timestamp fields formatted"
    );

    if cli.dry_run {
        info!("dry-run: résultat non écrit");
        return Ok(());
    }

    document::save(&doc, config.io.output.as_deref(), config.io.pretty)?;
    Ok(())
}

fn in_place_target(input: Option<&Path>) -> Result<PathBuf> {
    match input {
        Some(path) if path.as_os_str() != document::STDIO => Ok(path.to_path_buf()),
        _ => Err(AppError::from(ConfigError::InvalidField {
            field: "cli.in_place",
            message: "requires a file input".to_string(),
        })),
    }
}

fn display_target(path: Option<&Path>) -> String {
    path.map_or_else(|| document::STDIO.to_string(), |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::in_place_target;
    use std::path::Path;

    #[test]
    fn in_place_requires_a_file_input() {
        assert!(in_place_target(None).is_err());
        assert!(in_place_target(Some(Path::new("-"))).is_err());
        assert!(in_place_target(Some(Path::new("doc.json"))).is_ok());
    }
}
