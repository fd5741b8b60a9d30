use super::cmd::shell_completion::GeneratorChoice;
use super::cmd::*;
use crate::config::{YotaConfig, DEFAULT_CONFIG_FILE};
use crate::data::secret::Secret;
use crate::data::tariff_query::TariffQuery;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, CommandFactory, Parser, ValueEnum, ValueHint};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

/// Main options are available to all commands.
#[derive(Parser, Debug, Clone)]
#[command()]
pub struct CommonOpts {
    /// Be more verbose when logging. Verbosity increases with each
    /// occurence of that option.
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// How to format the output. The default is human readable which
    /// may choose to not show every detail for better readability.
    /// The json output format can be used to always show all details
    /// in a structured form.
    #[arg(long, value_enum, default_value_t = Format::Default)]
    pub format: Format,

    /// The config file to read username and password from. It is a
    /// TOML file with keys `username` and `password`. A leading `~/`
    /// refers to the home directory. A missing file is ignored.
    #[arg(short = 'f', long = "config", default_value = DEFAULT_CONFIG_FILE, value_hint = ValueHint::FilePath)]
    pub config_file: PathBuf,

    /// The username to login with. Overrides the value from the
    /// config file.
    #[arg(short, long)]
    pub username: Option<String>,

    /// The password to login with. Overrides the value from the
    /// config file.
    #[arg(short, long)]
    pub password: Option<Secret>,

    /// The (base) URL to the account api. It can be given as
    /// environment variable YOTA_CLI_API_URL or as `api_url` in the
    /// config file.
    #[arg(long, value_hint = ValueHint::Url)]
    pub api_url: Option<Url>,

    /// Set a proxy to use for doing http requests. By default, the
    /// system proxy will be used. Can be either `none` or <url>. If
    /// `none`, the system proxy will be ignored; otherwise specify
    /// the proxy url, like `http://myproxy.com`.
    #[arg(long)]
    pub proxy: Option<ProxySetting>,

    /// The user to authenticate at the proxy.
    #[arg(long)]
    pub proxy_user: Option<String>,

    /// The password to authenticate at the proxy.
    #[arg(long)]
    pub proxy_password: Option<Secret>,
}

impl CommonOpts {
    /// The config values given as options, they take precedence over
    /// the config file.
    pub fn config_overrides(&self) -> YotaConfig {
        YotaConfig {
            username: self.username.clone(),
            password: self.password.clone(),
            api_url: None,
        }
    }
}

/// Selects what to do. Exactly one of these must be given.
#[derive(Args, Debug, Clone)]
#[group(id = "mode", required = true, multiple = false)]
pub struct ModeOpts {
    /// List all tariffs available for the account. The active one is
    /// marked with a `*`.
    #[arg(short = 'L', long)]
    pub list: bool,

    /// Change the tariff. The new one is selected with `--code` or
    /// `--speed`.
    #[arg(short = 'C', long, requires = "query")]
    pub change: bool,

    /// Show the current balance.
    #[arg(short = 'B', long)]
    pub balance: bool,

    /// Show the remaining data/voice allowance.
    #[arg(short = 'R', long)]
    pub remains: bool,

    /// Print version information.
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Print completions for the given shell.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<GeneratorChoice>,
}

/// The other modes, a tariff query is only valid with `--change`.
const NOT_CHANGE: [&str; 5] = ["list", "balance", "remains", "version", "completions"];

/// Selects the tariff for `--change`. If both are given, the first
/// tariff matching either of them is used.
#[derive(Args, Debug, Clone)]
#[group(id = "query", multiple = true)]
pub struct QueryOpts {
    /// Select the tariff by its code, like 'POS-MA6-0004'.
    #[arg(short = 'c', long, conflicts_with_all = NOT_CHANGE)]
    pub code: Option<String>,

    /// Select the tariff by its speed, like '1.0' or 'max'.
    #[arg(short = 's', long, conflicts_with_all = NOT_CHANGE)]
    pub speed: Option<String>,
}

/// A command line interface to the Yota account api. It logs in with
/// username and password and then either lists the available tariffs,
/// changes the tariff, or shows the balance or remaining allowance.
///
/// Username and password are read from the config file
/// (~/.config/yotarc by default) and can be overridden with options.
#[derive(Parser, Debug)]
#[command(name = "yota-cli", disable_version_flag = true, args_override_self = true)]
pub struct MainOpts {
    #[clap(flatten)]
    pub common_opts: CommonOpts,

    #[clap(flatten)]
    pub mode_opts: ModeOpts,

    #[clap(flatten)]
    pub query_opts: QueryOpts,
}

/// The command to run, derived from the mode options.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    List(list::Input),
    Change(change::Input),
    Balance(balance::Input),
    Remains(remains::Input),
    Version(version::Input),
    ShellCompletion(shell_completion::Input),
}

impl MainOpts {
    /// Rejects what clap can't express: `--change` with only empty
    /// values for `--code` and `--speed`.
    pub fn check(self) -> Result<MainOpts, clap::Error> {
        if let Mode::Change(input) = self.mode() {
            if input.query.is_empty() {
                return Err(MainOpts::command().error(
                    ErrorKind::MissingRequiredArgument,
                    "--change needs a non-empty --code or --speed",
                ));
            }
        }
        Ok(self)
    }

    /// Returns the selected command. clap makes sure exactly one of the
    /// mode options is present.
    pub fn mode(&self) -> Mode {
        let m = &self.mode_opts;
        if let Some(shell) = &m.completions {
            Mode::ShellCompletion(shell_completion::Input {
                shell: shell.clone(),
            })
        } else if m.list {
            Mode::List(list::Input {})
        } else if m.change {
            let q = &self.query_opts;
            Mode::Change(change::Input {
                query: TariffQuery::new(q.code.clone(), q.speed.clone()),
            })
        } else if m.balance {
            Mode::Balance(balance::Input {})
        } else if m.remains {
            Mode::Remains(remains::Input {})
        } else {
            Mode::Version(version::Input {})
        }
    }
}

/// The format for presenting the results.
#[derive(ValueEnum, Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum Format {
    Json,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProxySetting {
    /// Don't use any proxy; this will also discard the system proxy.
    None,

    /// Use a custom defined proxy.
    Custom { url: String },
}

impl FromStr for ProxySetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            Ok(ProxySetting::None)
        } else {
            Ok(ProxySetting::Custom { url: s.to_string() })
        }
    }
}
