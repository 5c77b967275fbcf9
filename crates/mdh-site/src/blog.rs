//! Blog index and posts.

use std::sync::{Arc, LazyLock};

use mdh_storage::Storage;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, read_json};

/// Data key of the blog index.
pub const POSTS_PATH: &str = "blog/posts.json";

static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// URL slug for a post title: lower-cased, punctuation dropped, whitespace
/// runs replaced by `_`.
///
/// `"Choosing the Right Caregiver"` → `"choosing_the_right_caregiver"`.
#[must_use]
pub fn blog_slug(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = NON_SLUG_RE.replace_all(&lower, "");
    WHITESPACE_RE.replace_all(&stripped, "_").into_owned()
}

/// One entry of the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    /// Explicit slug; derived from the title when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub description: String,
    /// HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub read_time: String,
}

impl BlogPost {
    /// Slug the post is served under.
    #[must_use]
    pub fn url_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| blog_slug(&self.title))
    }
}

/// Blog backed by the `blog/posts.json` index.
pub struct Blog {
    storage: Arc<dyn Storage>,
}

impl Blog {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All posts, newest first. An unreadable index yields no posts.
    #[must_use]
    pub fn posts(&self) -> Vec<BlogPost> {
        let index = read_json::<Vec<BlogPost>>(
            self.storage.as_ref(),
            POSTS_PATH,
            "Blog index",
            POSTS_PATH,
        );
        let mut posts = match index {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(path = POSTS_PATH, error = %e, "Failed to load blog index");
                return Vec::new();
            }
        };
        // ISO dates order lexically; ties keep index order.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Post served under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] if no post has that slug.
    pub fn post(&self, slug: &str) -> Result<BlogPost, SiteError> {
        self.posts()
            .into_iter()
            .find(|post| post.url_slug() == slug)
            .ok_or_else(|| SiteError::NotFound {
                kind: "Blog post",
                slug: slug.to_owned(),
            })
    }
}

impl std::fmt::Debug for Blog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blog").finish_non_exhaustive()
    }
}
