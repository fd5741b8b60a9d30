//! The operations available on an authenticated account.
//!
//! Handlers only talk to an [`AccountApi`], the http session in
//! [`crate::httpclient::Session`] is the implementation used by the
//! binary.

use async_trait::async_trait;

use crate::httpclient::data::{Balance, Remains, Tariff};
use crate::httpclient::Error;

#[async_trait]
pub trait AccountApi {
    /// All tariffs available for the account, in the order the server
    /// returns them.
    async fn tariffs(&self) -> Result<Vec<Tariff>, Error>;

    async fn balance(&self) -> Result<Balance, Error>;

    async fn remains(&self) -> Result<Remains, Error>;

    /// Requests to switch the account to the given tariff.
    async fn change_tariff(&self, tariff: &Tariff) -> Result<(), Error>;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    /// An in-memory account that records the tariff changes.
    pub struct FakeAccount {
        tariffs: Option<Vec<Tariff>>,
        fail_change: bool,
        changes: Mutex<Vec<String>>,
    }

    fn server_error(path: &str) -> Error {
        Error::Status {
            url: format!("http://fake{}", path),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "fake error".into(),
        }
    }

    impl FakeAccount {
        pub fn with_tariffs(tariffs: &[(&str, &str, &str, bool)]) -> FakeAccount {
            let tariffs = tariffs
                .iter()
                .map(|(code, speed, name, active)| Tariff {
                    code: code.to_string(),
                    speed: speed.to_string(),
                    name: name.to_string(),
                    active: *active,
                })
                .collect();
            FakeAccount {
                tariffs: Some(tariffs),
                fail_change: false,
                changes: Mutex::new(Vec::new()),
            }
        }

        /// An account whose tariffs can't be fetched and where
        /// changing fails.
        pub fn failing() -> FakeAccount {
            FakeAccount {
                tariffs: None,
                fail_change: true,
                changes: Mutex::new(Vec::new()),
            }
        }

        pub fn fail_change(mut self) -> FakeAccount {
            self.fail_change = true;
            self
        }

        /// The codes of all tariffs `change_tariff` was called with.
        pub fn changes(&self) -> Vec<String> {
            self.changes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AccountApi for FakeAccount {
        async fn tariffs(&self) -> Result<Vec<Tariff>, Error> {
            self.tariffs.clone().ok_or_else(|| server_error("/tariffs"))
        }

        async fn balance(&self) -> Result<Balance, Error> {
            Ok(Balance {
                amount: 100.0,
                currency: "RUB".into(),
            })
        }

        async fn remains(&self) -> Result<Remains, Error> {
            Ok(Remains {
                description: "1 GB".into(),
            })
        }

        async fn change_tariff(&self, tariff: &Tariff) -> Result<(), Error> {
            self.changes.lock().unwrap().push(tariff.code.clone());
            if self.fail_change {
                Err(server_error("/tariffs/change"))
            } else {
                Ok(())
            }
        }
    }
}
