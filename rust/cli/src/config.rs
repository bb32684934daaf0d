use serde::{Deserialize, Serialize};
use std::fs;

use unosim_engine::rules::{MatchConfig, DEFAULT_HAND_SIZE, DEFAULT_PLAYERS};

pub const CONFIG_PATH_VAR: &str = "UNOSIM_CONFIG";
pub const PLAYERS_VAR: &str = "UNOSIM_PLAYERS";
pub const HAND_SIZE_VAR: &str = "UNOSIM_HAND_SIZE";
pub const SEED_VAR: &str = "UNOSIM_SEED";
pub const OUTPUT_DIR_VAR: &str = "UNOSIM_OUTPUT_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub hand_size: usize,
    pub seed: Option<u64>,
    pub output_dir: String,
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
    pub players: ValueSource,
    pub hand_size: ValueSource,
    pub seed: ValueSource,
    pub output_dir: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            hand_size: ValueSource::Default,
            seed: ValueSource::Default,
            output_dir: ValueSource::Default,
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
            players: DEFAULT_PLAYERS,
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
            output_dir: ".".into(),
        }
    }
}

impl Config {
    /// Table shape with command-line overrides applied.
    pub fn match_config(&self, players: Option<usize>, hand_size: Option<usize>) -> MatchConfig {
        MatchConfig::new(
            players.unwrap_or(self.players),
            hand_size.unwrap_or(self.hand_size),
        )
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration, reading variables through `lookup`.
///
/// Precedence is default < file (`UNOSIM_CONFIG`) < environment.
pub fn load_with_sources_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(CONFIG_PATH_VAR)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.output_dir {
            cfg.output_dir = v;
            sources.output_dir = ValueSource::File;
        }
    }

    if let Some(players) = lookup(PLAYERS_VAR)
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Some(hand_size) = lookup(HAND_SIZE_VAR)
        && !hand_size.is_empty()
    {
        cfg.hand_size = hand_size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hand_size".into()))?;
        sources.hand_size = ValueSource::Env;
    }
    if let Some(seed) = lookup(SEED_VAR)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(dir) = lookup(OUTPUT_DIR_VAR)
        && !dir.is_empty()
    {
        cfg.output_dir = dir;
        sources.output_dir = ValueSource::Env;
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
    players: Option<usize>,
    #[serde(default)]
    hand_size: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    output_dir: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.match_config(None, None)
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}
