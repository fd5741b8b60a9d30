pub mod balance;
pub mod change;
pub mod list;
pub mod remains;
pub mod shell_completion;
pub mod version;

use super::sink::{Error as SinkError, Sink};
use crate::account::AccountApi;
use crate::cli::opts::CommonOpts;
use crate::httpclient::Session;
use serde::Serialize;
use snafu::Snafu;

/// Everything a command needs: the options and a logged in account.
pub struct Context<A = Session> {
    pub opts: CommonOpts,
    pub account: A,
}

impl<A: AccountApi> Context<A> {
    pub fn new(opts: &CommonOpts, account: A) -> Context<A> {
        Context {
            opts: opts.clone(),
            account,
        }
    }

    /// A short hand for `Sink::write(&self.opts.format, value)`
    async fn write_result<S: Sink + Serialize>(&self, value: &S) -> Result<(), SinkError> {
        let fmt = self.opts.format;
        Sink::write(&fmt, value)
    }
}

#[derive(Debug, Snafu)]
pub enum CmdError {
    #[snafu(display("List - {}", source))]
    List { source: list::Error },

    #[snafu(display("Change - {}", source))]
    Change { source: change::Error },

    #[snafu(display("Balance - {}", source))]
    Balance { source: balance::Error },

    #[snafu(display("Remains - {}", source))]
    Remains { source: remains::Error },

    #[snafu(display("Version - {}", source))]
    Version { source: version::Error },
}

impl From<list::Error> for CmdError {
    fn from(source: list::Error) -> Self {
        CmdError::List { source }
    }
}

impl From<change::Error> for CmdError {
    fn from(source: change::Error) -> Self {
        CmdError::Change { source }
    }
}

impl From<balance::Error> for CmdError {
    fn from(source: balance::Error) -> Self {
        CmdError::Balance { source }
    }
}

impl From<remains::Error> for CmdError {
    fn from(source: remains::Error) -> Self {
        CmdError::Remains { source }
    }
}

impl From<version::Error> for CmdError {
    fn from(source: version::Error) -> Self {
        CmdError::Version { source }
    }
}
