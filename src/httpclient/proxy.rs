use reqwest::ClientBuilder;
use reqwest::{Proxy, Result};

use crate::data::secret::Secret;

/// How requests to the account api are proxied.
#[derive(Debug, Clone, Default)]
pub enum ProxySetting {
    #[default]
    System,
    None,
    Custom {
        url: String,
        user: Option<String>,
        password: Option<Secret>,
    },
}

impl ProxySetting {
    pub fn apply(&self, builder: ClientBuilder) -> Result<ClientBuilder> {
        match self {
            ProxySetting::System => {
                log::debug!("Using system proxy");
                Ok(builder)
            }
            ProxySetting::None => {
                log::info!("Not using any proxy");
                Ok(builder.no_proxy())
            }
            ProxySetting::Custom {
                url,
                user,
                password,
            } => {
                log::info!("Using proxy: {}", url);
                let mut p = Proxy::all(url)?;
                if let Some(login) = user {
                    log::debug!("Proxy auth for {}/{:?}", login, password);
                    let pass = password.as_ref().map(Secret::as_str).unwrap_or_default();
                    p = p.basic_auth(login, pass);
                }
                Ok(builder.proxy(p))
            }
        }
    }
}
