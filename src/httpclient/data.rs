//! Defines data structures for requests and responses and their
//! `De/Serialize` instances.

use serde::{Deserialize, Serialize};

use crate::data::secret::Secret;

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a Secret,
}

/// A tariff as offered for the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub code: String,
    pub speed: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct ChangeTariffRequest<'a> {
    pub code: &'a str,
    pub speed: &'a str,
}

impl<'a> From<&'a Tariff> for ChangeTariffRequest<'a> {
    fn from(t: &'a Tariff) -> Self {
        ChangeTariffRequest {
            code: &t.code,
            speed: &t.speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub amount: f64,
    pub currency: String,
}

/// Describes the unused allowance of the current billing period. The
/// text is carrier specific and not interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remains {
    pub description: String,
}
