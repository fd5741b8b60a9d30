//! A http client for the account api
//!
//! Provides a http client to the carrier's account api based on
//! reqwest.
//!
//! # Usage
//!
//! ```rust
//! use yota_cli::config::Credentials;
//! use yota_cli::httpclient;
//! let client = httpclient::Client::new(
//!    "https://my.yota.ru",
//!    &httpclient::proxy::ProxySetting::System,
//!    false
//! ).unwrap();
//! let creds = Credentials::new("me@example.com", "secret");
//! async {
//!   let session = client.login(&creds).await;
//! };
//! ```
//!
//! # Authentication
//!
//! `Client::login` posts the credentials and turns the client into a
//! [`Session`]. The server answers with a session cookie which is kept
//! in the cookie store of the underlying reqwest client and sent with
//! every following request. Nothing is persisted, the session ends
//! with the process.

pub mod data;
pub mod proxy;

use self::data::*;
use crate::account::AccountApi;
use crate::config::Credentials;
use async_trait::async_trait;
use reqwest::{ClientBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::{ResultExt, Snafu};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const LOGIN_PATH: &str = "/api/login";
const TARIFFS_PATH: &str = "/api/tariffs";
const CHANGE_TARIFF_PATH: &str = "/api/tariffs/change";
const BALANCE_PATH: &str = "/api/balance";
const REMAINS_PATH: &str = "/api/remains";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("An error was received from {}: {}", url, source))]
    Http { source: reqwest::Error, url: String },

    #[snafu(display("An error occurred creating the http client: {}", source))]
    ClientCreate { source: reqwest::Error },

    #[snafu(display("An error occured reading the response: {}", source))]
    DeserializeResp { source: reqwest::Error },

    #[snafu(display("An error occured reading the response: {}", source))]
    DeserializeJson { source: serde_json::Error },

    #[snafu(display("Request to {} failed with status {}: {}", url, status, body))]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[snafu(display("Login rejected for user '{}' ({})", username, status))]
    LoginRejected { username: String, status: StatusCode },
}

/// The http client for the account api.
///
/// This wraps a reqwest client with methods corresponding to the api
/// endpoints. It must be turned into a [`Session`] via `login` before
/// any account data can be queried.
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    debug: bool,
}

impl Client {
    /// Creates a new client. When `debug` is true, all response
    /// bodies are logged at debug level.
    pub fn new<S: Into<String>>(
        base_url: S,
        proxy: &proxy::ProxySetting,
        debug: bool,
    ) -> Result<Client, Error> {
        let url: String = base_url.into();
        let url = url.trim_end_matches('/').to_string();
        log::debug!("Create account api client for: {}", url);
        let client_builder = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .cookie_store(true);
        let client = proxy
            .apply(client_builder)
            .context(ClientCreateSnafu)?
            .build()
            .context(ClientCreateSnafu)?;
        Ok(Client {
            client,
            base_url: url,
            debug,
        })
    }

    /// Logs in with the given credentials. A 401 or 403 answer is
    /// reported as `LoginRejected`.
    pub async fn login(self, creds: &Credentials) -> Result<Session, Error> {
        log::info!("Logging in as {}", creds.username);
        let body = LoginRequest {
            username: &creds.username,
            password: &creds.password,
        };
        let url = self.url(LOGIN_PATH);
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context(HttpSnafu { url: &url })?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return LoginRejectedSnafu {
                username: &creds.username,
                status,
            }
            .fail();
        }
        check_status(resp, &url).await?;
        log::debug!("Login successful");
        Ok(Session {
            client: self,
            username: creds.username.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Runs a GET request to the given path. When `debug` is set, the
    /// response is first decoded into utf8 chars and logged at debug
    /// level. Otherwise bytes are directly decoded from JSON into the
    /// expected structure.
    async fn json_get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let url = &self.url(path);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context(HttpSnafu { url })?;
        let resp = check_status(resp, url).await?;
        if self.debug {
            let body = resp.text().await.context(DeserializeRespSnafu)?;
            log::debug!("GET {} -> {}", url, body);
            serde_json::from_str::<R>(&body).context(DeserializeJsonSnafu)
        } else {
            resp.json::<R>().await.context(DeserializeRespSnafu)
        }
    }

    /// Runs a POST request with a JSON body, the response body is
    /// discarded.
    async fn json_post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), Error> {
        let url = &self.url(path);
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context(HttpSnafu { url })?;
        let resp = check_status(resp, url).await?;
        if self.debug {
            let body = resp.text().await.context(DeserializeRespSnafu)?;
            log::debug!("POST {} -> {}", url, body);
        }
        Ok(())
    }
}

/// Turns any non-success response into an `Error::Status` carrying the
/// response body.
async fn check_status(resp: Response, url: &str) -> Result<Response, Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        log::debug!("{} answered with {}: {}", url, status, body);
        StatusSnafu { url, status, body }.fail()
    }
}

/// An authenticated session, obtained from `Client::login`.
pub struct Session {
    client: Client,
    username: String,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl AccountApi for Session {
    async fn tariffs(&self) -> Result<Vec<Tariff>, Error> {
        self.client.json_get::<Vec<Tariff>>(TARIFFS_PATH).await
    }

    async fn balance(&self) -> Result<Balance, Error> {
        self.client.json_get::<Balance>(BALANCE_PATH).await
    }

    async fn remains(&self) -> Result<Remains, Error> {
        self.client.json_get::<Remains>(REMAINS_PATH).await
    }

    async fn change_tariff(&self, tariff: &Tariff) -> Result<(), Error> {
        log::info!("Changing tariff to {} ({})", tariff.code, tariff.speed);
        let body = ChangeTariffRequest::from(tariff);
        self.client.json_post(CHANGE_TARIFF_PATH, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::proxy::ProxySetting;
    use super::*;
    use mockito::Matcher;

    fn creds() -> Credentials {
        Credentials::new("me@example.com", "secret")
    }

    async fn login(server: &mockito::ServerGuard) -> Session {
        let client = Client::new(server.url(), &ProxySetting::None, false).unwrap();
        client.login(&creds()).await.unwrap()
    }

    #[tokio::test]
    async fn login_and_list_tariffs() {
        let mut server = mockito::Server::new_async().await;
        let login_mock = server
            .mock("POST", "/api/login")
            .match_body(Matcher::Json(serde_json::json!({
                "username": "me@example.com",
                "password": "secret"
            })))
            .with_status(200)
            .with_header("set-cookie", "session=abc123; Path=/")
            .create_async()
            .await;
        let tariffs_mock = server
            .mock("GET", "/api/tariffs")
            .match_header("cookie", "session=abc123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"code":"A","speed":"1.0","name":"Slow","active":true},
                    {"code":"B","speed":"max","name":"Fast"}]"#,
            )
            .create_async()
            .await;

        let session = login(&server).await;
        assert_eq!(session.username(), "me@example.com");
        let tariffs = session.tariffs().await.unwrap();

        login_mock.assert_async().await;
        tariffs_mock.assert_async().await;
        assert_eq!(tariffs.len(), 2);
        assert!(tariffs[0].active);
        assert_eq!(tariffs[1].code, "B");
        assert!(!tariffs[1].active);
    }

    #[tokio::test]
    async fn login_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_status(401)
            .create_async()
            .await;

        let client = Client::new(server.url(), &ProxySetting::None, false).unwrap();
        let err = client.login(&creds()).await.err().unwrap();
        assert!(matches!(err, Error::LoginRejected { .. }), "{:?}", err);
    }

    #[tokio::test]
    async fn balance_and_remains() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_status(200)
            .create_async()
            .await;
        server
            .mock("GET", "/api/balance")
            .with_body(r#"{"amount": 123.5, "currency": "RUB"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/remains")
            .with_body(r#"{"description": "3 GB left"}"#)
            .create_async()
            .await;

        let session = login(&server).await;
        let balance = session.balance().await.unwrap();
        assert_eq!(balance.amount, 123.5);
        assert_eq!(balance.currency, "RUB");
        let remains = session.remains().await.unwrap();
        assert_eq!(remains.description, "3 GB left");
    }

    #[tokio::test]
    async fn change_tariff_posts_code() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_status(200)
            .create_async()
            .await;
        let change_mock = server
            .mock("POST", "/api/tariffs/change")
            .match_body(Matcher::Json(serde_json::json!({"code": "B", "speed": "max"})))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let session = login(&server).await;
        let tariff = Tariff {
            code: "B".into(),
            speed: "max".into(),
            name: "Fast".into(),
            active: false,
        };
        session.change_tariff(&tariff).await.unwrap();
        change_mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/login")
            .with_status(200)
            .create_async()
            .await;
        server
            .mock("GET", "/api/balance")
            .with_status(500)
            .with_body("maintenance")
            .create_async()
            .await;

        let session = login(&server).await;
        match session.balance().await {
            Err(Error::Status { status, body, .. }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
