use super::Context;
use crate::account::AccountApi;
use crate::cli::sink::Error as SinkError;
use crate::data::simple_message::SimpleMessage;
use crate::data::tariff_query::TariffQuery;
use crate::httpclient::data::Tariff;
use crate::httpclient::Error as HttpError;
use snafu::{OptionExt, ResultExt, Snafu};

/// Switches the account to another tariff.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub query: TariffQuery,
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("An http error occurred: {}", source))]
    HttpClient { source: HttpError },

    #[snafu(display("can't find specified tariff ({})", query))]
    TariffNotFound { query: TariffQuery },

    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

impl Input {
    pub async fn exec<A: AccountApi>(&self, ctx: &Context<A>) -> Result<(), Error> {
        let tariff = change_tariff(&ctx.account, &self.query).await?;
        log::debug!("Changed to tariff {:?}", tariff);
        let msg = SimpleMessage::new("tariff successfully changed");
        ctx.write_result(&msg).await.context(WriteResultSnafu)?;
        Ok(())
    }
}

/// Looks up the first tariff matching `query` and switches to it. If
/// nothing matches, no change is requested.
pub async fn change_tariff<A: AccountApi>(
    account: &A,
    query: &TariffQuery,
) -> Result<Tariff, Error> {
    let tariffs = account.tariffs().await.context(HttpClientSnafu)?;
    let tariff = query.find(&tariffs).context(TariffNotFoundSnafu {
        query: query.clone(),
    })?;
    if tariff.active {
        log::info!("Tariff {} is already active", tariff.code);
    }
    account
        .change_tariff(tariff)
        .await
        .context(HttpClientSnafu)?;
    Ok(tariff.clone())
}
