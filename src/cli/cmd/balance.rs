use super::Context;
use crate::account::AccountApi;
use crate::cli::sink::Error as SinkError;
use crate::httpclient::data::Balance;
use crate::httpclient::Error as HttpError;
use snafu::{ResultExt, Snafu};
use std::fmt;

/// Shows the balance of the account.
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
        let balance = ctx.account.balance().await.context(HttpClientSnafu)?;
        ctx.write_result(&balance).await.context(WriteResultSnafu)?;
        Ok(())
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

#[test]
fn display_two_decimals() {
    let b = Balance {
        amount: 42.5,
        currency: "RUB".into(),
    };
    assert_eq!(b.to_string(), "42.50 RUB");
    let b = Balance {
        amount: -3.0,
        currency: "RUB".into(),
    };
    assert_eq!(b.to_string(), "-3.00 RUB");
}
