use std::collections::HashSet;

use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{Newsletter, Post};

/// Paths of the two content resources, relative to the site root.
pub const POSTS_PATH: &str = "data/posts.json";
pub const NEWSLETTERS_PATH: &str = "data/newsletters.json";

/// Number of posts on the home page.
pub const HOME_POST_LIMIT: usize = 5;

#[derive(Debug)]
pub enum ContentError {
    /// The resource could not be fetched at all.
    Fetch { resource: String, reason: String },
    /// The resource answered with a non-success status.
    Status { resource: String, status: u16 },
    /// The resource body is not the expected JSON array.
    Parse { resource: String, reason: String },
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Fetch { resource, reason } => {
                write!(f, "failed to fetch {}: {}", resource, reason)
            }
            ContentError::Status { resource, status } => {
                write!(f, "{} answered with HTTP {}", resource, status)
            }
            ContentError::Parse { resource, reason } => {
                write!(f, "{} is not valid content JSON: {}", resource, reason)
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Immutable snapshot of the site content, built once at boot.
#[derive(Debug, Clone, Default)]
pub struct Content {
    posts: Vec<Post>,
    newsletters: Vec<Newsletter>,
}

impl Content {
    pub fn new(posts: Vec<Post>, newsletters: Vec<Newsletter>) -> Self {
        warn_duplicate_slugs("post", posts.iter().map(|p| p.slug.as_str()));
        warn_duplicate_slugs("newsletter", newsletters.iter().map(|n| n.slug.as_str()));
        Content { posts, newsletters }
    }

    /// Parse both resources. Either one failing fails the whole load.
    /// Only a body that is not a JSON array fails; bad entries inside it are
    /// skipped or read with blank fields.
    pub fn from_json(posts_json: &str, newsletters_json: &str) -> Result<Self, ContentError> {
        let posts: Vec<Post> = parse_entries(POSTS_PATH, posts_json)?;
        let newsletters: Vec<Newsletter> = parse_entries(NEWSLETTERS_PATH, newsletters_json)?;

        info!(
            "Loaded {} post(s) and {} newsletter(s)",
            posts.len(),
            newsletters.len()
        );
        Ok(Self::new(posts, newsletters))
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn newsletter_count(&self) -> usize {
        self.newsletters.len()
    }

    /// Newest posts first, at most `limit` of them.
    pub fn latest_posts(&self, limit: usize) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts.truncate(limit);
        posts
    }

    /// Posts whose `categoryKey` matches exactly, newest first.
    pub fn posts_in_category(&self, category_key: &str) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| p.category_key == category_key)
            .collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    pub fn find_post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn newsletters_by_date(&self) -> Vec<&Newsletter> {
        let mut items: Vec<&Newsletter> = self.newsletters.iter().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    pub fn find_newsletter(&self, slug: &str) -> Option<&Newsletter> {
        self.newsletters.iter().find(|n| n.slug == slug)
    }
}

fn parse_entries<T: DeserializeOwned>(resource: &str, json: &str) -> Result<Vec<T>, ContentError> {
    let entries: Vec<Value> = serde_json::from_str(json).map_err(|e| ContentError::Parse {
        resource: resource.to_string(),
        reason: e.to_string(),
    })?;

    let mut items = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value(entry) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping entry {} of {}: {}", i, resource, e),
        }
    }
    Ok(items)
}

fn warn_duplicate_slugs<'a>(kind: &str, slugs: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            warn!("Duplicate {} slug '{}': only the first entry is reachable", kind, slug);
        }
    }
}

/// Where the router is with respect to the content load.
#[derive(Debug, Clone)]
pub enum ContentState {
    Loading,
    Ready(Content),
    Unavailable(String),
}

impl ContentState {
    pub fn from_load(result: Result<Content, ContentError>) -> Self {
        match result {
            Ok(content) => ContentState::Ready(content),
            Err(e) => {
                error!("Content unavailable: {}", e);
                ContentState::Unavailable(e.to_string())
            }
        }
    }
}
