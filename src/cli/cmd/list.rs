use super::Context;
use crate::account::AccountApi;
use crate::cli::sink::Error as SinkError;
use crate::httpclient::data::Tariff;
use crate::httpclient::Error as HttpError;
use serde::Serialize;
use snafu::{ResultExt, Snafu};
use std::fmt;

/// Lists all tariffs of the account.
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
        let table = fetch(&ctx.account).await?;
        ctx.write_result(&table).await.context(WriteResultSnafu)?;
        Ok(())
    }
}

pub async fn fetch<A: AccountApi>(account: &A) -> Result<TariffTable, Error> {
    let tariffs = account.tariffs().await.context(HttpClientSnafu)?;
    log::debug!("Got {} tariffs", tariffs.len());
    Ok(TariffTable(tariffs))
}

/// The tariffs in the order returned from the server. Displayed as a
/// header followed by one row per tariff, the active one is marked by
/// a `*`. The json output is only the list.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TariffTable(pub Vec<Tariff>);

impl fmt::Display for TariffTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TariffTable(tariffs) = self;
        write!(f, "  {:<12} {:<6} {}", "Code", "Speed", "Name")?;
        for t in tariffs {
            writeln!(f)?;
            let marker = if t.active { '*' } else { ' ' };
            write!(f, "{} {:<12} {:<6} {}", marker, t.code, t.speed, t.name)?;
        }
        Ok(())
    }
}
