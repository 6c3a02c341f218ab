use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::Result;
use crate::error::ConfigError;
use crate::formatter::pattern_is_valid;
use crate::types::{ClassName, Zone};

use super::defaults::{default_class, default_pattern, default_zone};
use super::env::{env_bool, env_string};
use super::{Config, IoSettings};

pub(super) fn load(path: impl AsRef<Path>) -> std::result::Result<RawConfig, ConfigError> {
    let mut builder = ::config::Config::builder();
    let path = path.as_ref();
    builder = builder.add_source(::config::File::from(path).required(false));
    builder = builder.add_source(
        ::config::Environment::with_prefix("TIMEFIELDS")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .map_err(|err| ConfigError::Other(err.to_string()))?
        .try_deserialize()
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

#[derive(Debug, Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub(super) format: RawFormat,
    #[serde(default)]
    pub(super) io: RawIo,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawFormat {
    #[serde(default = "default_class")]
    pub(super) class: String,
    #[serde(default)]
    pub(super) zone: Option<String>,
    #[serde(default = "default_pattern")]
    pub(super) pattern: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawIo {
    #[serde(default)]
    pub(super) input: Option<PathBuf>,
    #[serde(default)]
    pub(super) output: Option<PathBuf>,
    #[serde(default)]
    pub(super) pretty: bool,
}

impl RawConfig {
    pub(super) fn apply_env_overrides(&mut self) -> std::result::Result<(), ConfigError> {
        if let Some(class) = env_string("FIELD_CLASS")? {
            self.format.class = class;
        }
        if let Some(zone) = env_string("FIELD_ZONE")? {
            self.format.zone = Some(zone);
        }
        if let Some(pattern) = env_string("FIELD_PATTERN")? {
            self.format.pattern = pattern;
        }
        if let Some(pretty) = env_bool("OUT_PRETTY")? {
            self.io.pretty = pretty;
        }
        Ok(())
    }

    pub(super) fn validate_and_build(self) -> Result<Config> {
        let zone_src = self.format.zone.unwrap_or_else(default_zone);
        let zone = Zone::from_str(&zone_src).map_err(|err| ConfigError::InvalidField {
            field: "format.zone",
            message: err,
        })?;

        if !pattern_is_valid(&self.format.pattern) {
            return Err(ConfigError::InvalidField {
                field: "format.pattern",
                message: format!("not a valid strftime pattern: {}", self.format.pattern),
            }
            .into());
        }

        Ok(Config {
            class: ClassName::from(self.format.class),
            zone,
            pattern: self.format.pattern,
            io: IoSettings {
                input: self.io.input,
                output: self.io.output,
                pretty: self.io.pretty,
            },
        })
    }
}

impl Default for RawFormat {
    fn default() -> Self {
        Self {
            class: default_class(),
            zone: Some(default_zone()),
            pattern: default_pattern(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RawConfig, RawFormat, RawIo};
    use crate::types::Zone;

    fn raw() -> RawConfig {
        RawConfig {
            format: RawFormat::default(),
            io: RawIo::default(),
        }
    }

    #[test]
    fn defaults_build_a_local_config() {
        let config = match raw().validate_and_build() {
            Ok(config) => config,
            Err(err) => panic!("defaults should validate: {err}"),
        };
        assert_eq!(config.class.as_str(), "timestamp");
        assert_eq!(config.zone, Zone::Local);
        assert_eq!(config.pattern, crate::formatter::DEFAULT_PATTERN);
        assert!(!config.io.pretty);
    }

    #[test]
    fn bad_zone_is_rejected() {
        let mut raw = raw();
        raw.format.zone = Some("nowhere".to_string());
        assert!(raw.validate_and_build().is_err());
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let mut raw = raw();
        raw.format.pattern = "%".to_string();
        assert!(raw.validate_and_build().is_err());
    }
}
