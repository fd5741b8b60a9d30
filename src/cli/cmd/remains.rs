use super::Context;
use crate::account::AccountApi;
use crate::cli::sink::Error as SinkError;
use crate::httpclient::data::Remains;
use crate::httpclient::Error as HttpError;
use snafu::{ResultExt, Snafu};
use std::fmt;

/// Shows the remaining allowance of the current billing period.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("An http error occurred: {}", source))]
    HttpClient { source: HttpError },

    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

impl Input {
    pub async fn exec<A: AccountApi>(&self, ctx: &Context<A>) -> Result<(), Error> {
        let remains = ctx.account.remains().await.context(HttpClientSnafu)?;
        ctx.write_result(&remains).await.context(WriteResultSnafu)?;
        Ok(())
    }
}

impl fmt::Display for Remains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
