use crate::cli::opts::CommonOpts;
use crate::cli::sink::Error as SinkError;
use crate::cli::sink::Sink;
use crate::cli::BuildInfo;
use serde::Serialize;
use snafu::{ResultExt, Snafu};
use std::fmt;

/// Prints version information about this client.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

impl Input {
    pub async fn exec(&self, opts: &CommonOpts) -> Result<(), Error> {
        let vinfo = Versions::default();
        Sink::write(&opts.format, &vinfo).context(WriteResultSnafu)?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Default)]
pub struct Versions {
    pub client: BuildInfo,
}

impl fmt::Display for Versions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\n{}",
            env!("CARGO_PKG_NAME"),
            self.client.build_version,
            self.client
        )
    }
}
