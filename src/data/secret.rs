use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string that must not show up in logs, like a password.
///
/// `Debug` prints a placeholder, use `as_str` to get to the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new<S: Into<String>>(s: S) -> Secret {
        Secret(s.into())
    }

    pub fn as_str(&self) -> &str {
        let Secret(s) = self;
        s
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl FromStr for Secret {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Secret::new(s))
    }
}

#[test]
fn debug_hides_value() {
    let s = Secret::new("hunter2");
    assert_eq!(format!("{:?}", s), "***");
    assert_eq!(s.as_str(), "hunter2");
}
