use std::fmt;

use serde::Serialize;

use crate::httpclient::data::Tariff;

/// Selects the tariff to switch to, either by its code or by its
/// speed. A tariff matches if either of the given values is equal.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TariffQuery {
    pub code: Option<String>,
    pub speed: Option<String>,
}

impl TariffQuery {
    /// Creates a query, empty strings are treated as not given.
    pub fn new(code: Option<String>, speed: Option<String>) -> TariffQuery {
        TariffQuery {
            code: code.filter(|s| !s.is_empty()),
            speed: speed.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.speed.is_none()
    }

    pub fn matches(&self, tariff: &Tariff) -> bool {
        let by_code = self.code.as_deref().is_some_and(|c| c == tariff.code);
        let by_speed = self.speed.as_deref().is_some_and(|s| s == tariff.speed);
        by_code || by_speed
    }

    /// Returns the first tariff in list order that matches.
    pub fn find<'a>(&self, tariffs: &'a [Tariff]) -> Option<&'a Tariff> {
        tariffs.iter().find(|t| self.matches(t))
    }
}

impl fmt::Display for TariffQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.speed) {
            (Some(c), Some(s)) => write!(f, "code={} or speed={}", c, s),
            (Some(c), None) => write!(f, "code={}", c),
            (None, Some(s)) => write!(f, "speed={}", s),
            (None, None) => write!(f, "<nothing>"),
        }
    }
}
