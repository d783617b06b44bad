use serde::{Deserialize, Serialize};
use std::fs;

use fleadevil_engine::game::MAX_STRIKES;
use fleadevil_engine::round::STARTING_MONEY;

/// Names the TOML file to read settings from.
pub const CONFIG_ENV: &str = "FLEADEVIL_CONFIG";
pub const SEED_ENV: &str = "FLEADEVIL_SEED";
pub const STARTING_MONEY_ENV: &str = "FLEADEVIL_STARTING_MONEY";
pub const MAX_STRIKES_ENV: &str = "FLEADEVIL_MAX_STRIKES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Money granted at the start of every round
    pub starting_money: u32,
    /// Lost rounds that end the game
    pub max_strikes: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_money: ValueSource,
    pub max_strikes: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_money: ValueSource::Default,
            max_strikes: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            max_strikes: MAX_STRIKES,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Layers defaults, the TOML file named by [`CONFIG_ENV`] and the
/// `FLEADEVIL_*` variables, reading variables through `env`.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.max_strikes {
            cfg.max_strikes = v;
            sources.max_strikes = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = env(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(money) = env(STARTING_MONEY_ENV)
        && !money.is_empty()
    {
        cfg.starting_money = money
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting_money: {}", money)))?;
        sources.starting_money = ValueSource::Env;
    }
    if let Some(strikes) = env(MAX_STRIKES_ENV)
        && !strikes.is_empty()
    {
        cfg.max_strikes = strikes
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid max_strikes: {}", strikes)))?;
        sources.max_strikes = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_money: Option<u32>,
    #[serde(default)]
    max_strikes: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_strikes == 0 {
        return Err(ConfigError::Invalid("max_strikes must be >= 1".into()));
    }
    Ok(())
}
