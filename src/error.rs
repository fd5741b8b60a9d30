//! Global error types

use crate::cli::cmd;
use crate::config::ConfigError;
use crate::httpclient;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Configuration error: {}", source))]
    Config { source: ConfigError },

    #[snafu(display("Could not login: {}", source))]
    Login { source: httpclient::Error },

    #[snafu(display("{}", source), context(false))]
    Cmd { source: cmd::CmdError },
}

impl Error {
    /// The process exit code for this error. Usage errors never get
    /// here, clap exits with 2 on its own.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config { .. } => 1,
            Error::Login { .. } => 1,
            Error::Cmd { .. } => 1,
        }
    }
}

pub type Result<A> = std::result::Result<A, Error>;
