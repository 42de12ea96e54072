use std::path::PathBuf;

use rocket::figment::Figment;
use serde::Deserialize;

/// `[default.site]` table of Rocket.toml (or `ROCKET_SITE={root="..."}`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding index.html, data/ and pkg/.
    pub root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            root: PathBuf::from("site"),
        }
    }
}

impl SiteConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, String> {
        figment
            .focus("site")
            .extract::<SiteConfig>()
            .map_err(|e| e.to_string())
    }
}
