use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// One locally stored newsletter signup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Subscriber {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Always lower-cased before it is stored. Blank on records that lack one.
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    /// Signup time, `Date.toISOString()` shape (UTC, milliseconds, `Z`).
    #[serde(default, deserialize_with = "lenient::string")]
    pub at: String,
}

impl Subscriber {
    pub fn new(name: Option<String>, email: String, at: DateTime<Utc>) -> Self {
        Subscriber {
            name,
            email,
            at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
