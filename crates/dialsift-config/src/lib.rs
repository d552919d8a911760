use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialsift_core::compare::DEFAULT_PHONE_PREFIX;
use dialsift_core::{
    validate_token_length, NumberKind, SampleRules, SplitMode, DEFAULT_TOKEN_LENGTH,
};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialsift";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub compare: CompareConfig,
    pub sample: SampleRules,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    pub kind: NumberKind,
    pub split: SplitMode,
    pub token_length: usize,
    pub phone_prefix: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            kind: NumberKind::Phone,
            split: SplitMode::Lines,
            token_length: DEFAULT_TOKEN_LENGTH,
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid compare.token_length value: {0}")]
    InvalidTokenLength(usize),
    #[error("invalid {field} value: {value:?}")]
    InvalidPrefix { field: &'static str, value: String },
    #[error("invalid {field} value: {value}")]
    InvalidLength { field: &'static str, value: usize },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    compare: Option<CompareFile>,
    sample: Option<SampleFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompareFile {
    kind: Option<NumberKind>,
    split: Option<SplitMode>,
    token_length: Option<usize>,
    phone_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SampleFile {
    domestic_prefix: Option<String>,
    domestic_length: Option<usize>,
    international_prefix: Option<String>,
    international_length: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(compare) = parsed.compare {
        if let Some(kind) = compare.kind {
            config.compare.kind = kind;
        }
        if let Some(split) = compare.split {
            config.compare.split = split;
        }
        if let Some(length) = compare.token_length {
            config.compare.token_length = validate_token_length(length)
                .map_err(|_| ConfigError::InvalidTokenLength(length))?;
        }
        if let Some(prefix) = compare.phone_prefix {
            config.compare.phone_prefix = validate_prefix("compare.phone_prefix", prefix)?;
        }
    }

    if let Some(sample) = parsed.sample {
        if let Some(prefix) = sample.domestic_prefix {
            config.sample.domestic_prefix = validate_prefix("sample.domestic_prefix", prefix)?;
        }
        if let Some(length) = sample.domestic_length {
            config.sample.domestic_length = length;
        }
        if let Some(prefix) = sample.international_prefix {
            config.sample.international_prefix =
                validate_prefix("sample.international_prefix", prefix)?;
        }
        if let Some(length) = sample.international_length {
            config.sample.international_length = length;
        }
        ensure_longer_than_prefix(
            "sample.domestic_length",
            config.sample.domestic_length,
            &config.sample.domestic_prefix,
        )?;
        ensure_longer_than_prefix(
            "sample.international_length",
            config.sample.international_length,
            &config.sample.international_prefix,
        )?;
        let converted_length =
            config.sample.international_length - config.sample.international_prefix.len() + 1;
        if converted_length != config.sample.domestic_length {
            return Err(ConfigError::InvalidLength {
                field: "sample.international_length",
                value: config.sample.international_length,
            });
        }
    }

    Ok(config)
}

fn validate_prefix(field: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(ConfigError::InvalidPrefix { field, value });
    }
    Ok(trimmed.to_string())
}

fn ensure_longer_than_prefix(field: &'static str, value: usize, prefix: &str) -> Result<()> {
    if value <= prefix.len() {
        return Err(ConfigError::InvalidLength { field, value });
    }
    Ok(())
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
