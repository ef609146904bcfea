use crate::domain::TrialCount;
use crate::error::{Error, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

const DEFAULT_CONFIG_DIR: &str = "config";
const ENVIRONMENT_VARIABLE: &str = "EQUALITY_IDIOMS_ENVIRONMENT";
const ENVIRONMENT_PREFIX: &str = "EQUALITY_IDIOMS";
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_MAX_LOCAL_REJECTS: u32 = 65_536;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    pub fixture: FixtureSettings,
    pub verification: VerificationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FixtureSettings {
    /// Fixed seed for reproducible specimens; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    pub max_local_rejects: u32,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct VerificationSettings {
    pub symmetric_trials: TrialCount,
    pub transitive_trials: TrialCount,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Full,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            seed: None,
            max_local_rejects: DEFAULT_MAX_LOCAL_REJECTS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from the `config/` directory and the environment
    pub fn new() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_DIR))
    }

    /// Load settings layered from `config_dir` and the environment
    ///
    /// Later sources win: built-in defaults, `default`, `<environment>`,
    /// `local`, then `EQUALITY_IDIOMS__*` variables.
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let environment =
            env::var(ENVIRONMENT_VARIABLE).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let config = Config::builder()
            .set_default("fixture.max_local_rejects", i64::from(DEFAULT_MAX_LOCAL_REJECTS))?
            .set_default("verification.symmetric_trials", 1)?
            .set_default("verification.transitive_trials", 1)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("logging.format", "compact")?
            .add_source(File::with_name(&config_file(config_dir, "default")).required(false))
            .add_source(File::with_name(&config_file(config_dir, &environment)).required(false))
            .add_source(File::with_name(&config_file(config_dir, "local")).required(false))
            .add_source(
                Environment::with_prefix(ENVIRONMENT_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map_err(Error::from)
    }
}

fn config_file(config_dir: &Path, name: &str) -> String {
    config_dir.join(name).to_string_lossy().into_owned()
}
