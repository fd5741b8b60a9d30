pub mod cmd;
pub mod opts;
pub mod sink;

use self::cmd::{CmdError, Context};
use self::opts::{CommonOpts, MainOpts, Mode, ProxySetting};
use crate::config::{self, ConfigFile, ConfigSource, YotaConfig};
use crate::error::{ConfigSnafu, Error, LoginSnafu};
use crate::httpclient::{proxy, Client, Session};
use clap::CommandFactory;
use serde::Serialize;
use snafu::ResultExt;
use std::fmt;

const DEFAULT_API_URL: &str = "https://my.yota.ru";
const API_URL_ENV: &str = "YOTA_CLI_API_URL";

pub async fn execute_cmd(opts: MainOpts) -> Result<(), Error> {
    let mode = opts.mode();
    log::info!("Running command: {:?}", mode);
    match &mode {
        Mode::Version(input) => input
            .exec(&opts.common_opts)
            .await
            .map_err(CmdError::from)?,
        Mode::ShellCompletion(input) => {
            let mut app = MainOpts::command();
            input.print_completions(&mut app).await;
        }
        Mode::List(input) => {
            let ctx = login(&opts.common_opts).await?;
            input.exec(&ctx).await.map_err(CmdError::from)?
        }
        Mode::Change(input) => {
            let ctx = login(&opts.common_opts).await?;
            input.exec(&ctx).await.map_err(CmdError::from)?
        }
        Mode::Balance(input) => {
            let ctx = login(&opts.common_opts).await?;
            input.exec(&ctx).await.map_err(CmdError::from)?
        }
        Mode::Remains(input) => {
            let ctx = login(&opts.common_opts).await?;
            input.exec(&ctx).await.map_err(CmdError::from)?
        }
    };
    Ok(())
}

/// Resolves the credentials from config file and options and logs in.
async fn login(opts: &CommonOpts) -> Result<Context<Session>, Error> {
    let source = ConfigFile::new(&opts.config_file).context(ConfigSnafu)?;
    let cfg = config::resolve(&source, opts.config_overrides()).context(ConfigSnafu)?;
    let creds = cfg.credentials(&source.location()).context(ConfigSnafu)?;

    let api_url = get_api_url(opts, &cfg);
    let client = Client::new(api_url, &proxy_settings(opts), opts.verbose > 1)
        .context(LoginSnafu)?;
    let session = client.login(&creds).await.context(LoginSnafu)?;
    Ok(Context::new(opts, session))
}

fn get_api_url(opts: &CommonOpts, cfg: &YotaConfig) -> String {
    if let Some(u) = &opts.api_url {
        log::debug!("Use api url from arguments: {}", u);
        return u.to_string();
    }
    if let Ok(u) = std::env::var(API_URL_ENV) {
        log::debug!("Use api url from env {}: {}", API_URL_ENV, u);
        return u;
    }
    match &cfg.api_url {
        Some(u) => {
            log::debug!("Use api url from config file: {}", u);
            u.clone()
        }
        None => {
            log::debug!("Use api url: {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        }
    }
}

fn proxy_settings(opts: &CommonOpts) -> proxy::ProxySetting {
    let user = opts.proxy_user.clone();
    let password = opts.proxy_password.clone();

    log::debug!("Using proxy: {:?} @ {:?}", user, opts.proxy);
    match &opts.proxy {
        None => proxy::ProxySetting::System,
        Some(ProxySetting::None) => proxy::ProxySetting::None,
        Some(ProxySetting::Custom { url }) => proxy::ProxySetting::Custom {
            url: url.clone(),
            user,
            password,
        },
    }
}

#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub build_date: &'static str,
    pub build_version: &'static str,
    pub git_commit: &'static str,
    pub rustc_host_triple: &'static str,
    pub rustc_llvm_version: &'static str,
    pub rustc_version: &'static str,
    pub cargo_target_triple: &'static str,
}
impl Default for BuildInfo {
    fn default() -> Self {
        BuildInfo {
            build_date: env!("VERGEN_BUILD_TIMESTAMP"),
            build_version: env!("CARGO_PKG_VERSION"),
            git_commit: env!("VERGEN_GIT_SHA"),
            rustc_host_triple: env!("VERGEN_RUSTC_HOST_TRIPLE"),
            rustc_llvm_version: env!("VERGEN_RUSTC_LLVM_VERSION"),
            rustc_version: env!("VERGEN_RUSTC_SEMVER"),
            cargo_target_triple: env!("VERGEN_CARGO_TARGET_TRIPLE"),
        }
    }
}
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cc = self.git_commit.get(..8).unwrap_or(self.git_commit);
        write!(
            f,
            "  Built at: {}\n  Version: {}\n  Sha: {}\n  Rustc: {} ({})",
            self.build_date, self.build_version, cc, self.rustc_version, self.cargo_target_triple
        )
    }
}
