//! Reading the config file and merging it with values given on the
//! command line.
//!
//! The config file is a TOML file like this:
//!
//! ```toml
//! username = "me@example.com"
//! password = "secret"
//! # optional
//! api_url = "https://my.yota.ru"
//! ```
//!
//! Values from the file are defaults, anything given explicitly on the
//! command line wins.

use crate::data::secret::Secret;
use crate::util::path;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "~/.config/yotarc";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("Unable to read config file {}: {}", path.display(), source))]
    ReadFile {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Unable to parse file {}: {}", path.display(), source))]
    ParseFile {
        source: toml::de::Error,
        path: PathBuf,
    },
    #[snafu(display("The key '{}' is missing, add it to {} or pass it as option", key, path.display()))]
    MissingKey { key: String, path: PathBuf },

    #[snafu(display("Unable to expand '{}': {}", path.display(), source))]
    Home {
        source: path::Error,
        path: PathBuf,
    },
}

/// The contents of a config file. All keys are optional here, missing
/// required ones are detected when resolving [`Credentials`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct YotaConfig {
    pub username: Option<String>,
    pub password: Option<Secret>,
    pub api_url: Option<String>,
}

impl YotaConfig {
    pub fn parse(content: &str, file: &Path) -> Result<YotaConfig, ConfigError> {
        toml::from_str(content).context(ParseFileSnafu { path: file })
    }

    /// Overlays `other` on top of `self`, values present in `other`
    /// replace the ones in `self`.
    pub fn merge(self, other: YotaConfig) -> YotaConfig {
        YotaConfig {
            username: other.username.or(self.username),
            password: other.password.or(self.password),
            api_url: other.api_url.or(self.api_url),
        }
    }

    /// Returns the credentials, failing if one of the keys is
    /// missing. `file` is only used for the error message.
    pub fn credentials(&self, file: &Path) -> Result<Credentials, ConfigError> {
        let username = self.username.clone().filter(|s| !s.is_empty());
        let username = username.ok_or_else(|| missing_key("username", file))?;
        let password = self.password.clone().filter(|p| !p.as_str().is_empty());
        let password = password.ok_or_else(|| missing_key("password", file))?;
        Ok(Credentials { username, password })
    }
}

fn missing_key(key: &str, file: &Path) -> ConfigError {
    ConfigError::MissingKey {
        key: key.to_string(),
        path: file.to_path_buf(),
    }
}

/// Something that provides the base configuration.
pub trait ConfigSource {
    /// A short description of where the values come from, for error
    /// messages.
    fn location(&self) -> PathBuf;

    fn load(&self) -> Result<YotaConfig, ConfigError>;
}

/// A TOML config file. A file that does not exist yields an empty
/// config.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Creates a config file source, a leading `~/` is expanded to the
    /// home directory.
    pub fn new(file: &Path) -> Result<ConfigFile, ConfigError> {
        let path = path::expand_home(file).context(HomeSnafu { path: file })?;
        Ok(ConfigFile { path })
    }
}

impl ConfigSource for ConfigFile {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn load(&self) -> Result<YotaConfig, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(cnt) => {
                log::debug!("Read config file {}", self.path.display());
                YotaConfig::parse(&cnt, &self.path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "Config file {} doesn't exist, using options only",
                    self.path.display()
                );
                Ok(YotaConfig::default())
            }
            Err(e) => Err(ConfigError::ReadFile {
                source: e,
                path: self.path.clone(),
            }),
        }
    }
}

/// Loads the config from `source` and overlays the values given on
/// the command line.
pub fn resolve<S: ConfigSource>(
    source: &S,
    overrides: YotaConfig,
) -> Result<YotaConfig, ConfigError> {
    let cfg = source.load()?;
    Ok(cfg.merge(overrides))
}

/// Username and password used to login.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: Secret,
}

impl Credentials {
    pub fn new<S: Into<String>>(username: S, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: Secret::new(password),
        }
    }
}
