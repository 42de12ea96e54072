use serde::{Deserialize, Serialize};

use super::lenient;

/// A blog post as shipped in `data/posts.json`.
/// Missing, `null` or mistyped fields read as blank, so one bad entry
/// never fails the whole load.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub excerpt: String,
    /// Display label, e.g. "AI × 工程專題解析".
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    /// Filter key matched against the category routes.
    #[serde(deserialize_with = "lenient::string")]
    pub category_key: String,
    /// ISO-8601 date; listings sort on the raw string.
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub word_count: u32,
    /// Pre-rendered body. Trusted, never escaped.
    #[serde(deserialize_with = "lenient::string")]
    pub content_html: String,
}
