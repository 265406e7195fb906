//! Placeholder post endpoints

use crate::client::SampleClient;
use crate::error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Path of the post list, relative to the source base URL
pub const POSTS_PATH: &str = "posts";

/// Anything that can produce posts
#[async_trait]
pub trait PostService: Send + Sync {
    /// GET posts
    async fn posts(&self) -> ApiResult<Vec<Post>>;

    /// GET posts?_start=<start>&_limit=<limit>
    async fn posts_page(&self, start: u64, limit: u32) -> ApiResult<Vec<Post>>;
}

/// Placeholder posts API interface
#[derive(Clone)]
pub struct PostsApi {
    client: SampleClient,
}

impl PostsApi {
    /// Create a new posts API interface
    pub(crate) fn new(client: SampleClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostService for PostsApi {
    async fn posts(&self) -> ApiResult<Vec<Post>> {
        self.client.get(POSTS_PATH).await
    }

    async fn posts_page(&self, start: u64, limit: u32) -> ApiResult<Vec<Post>> {
        self.client
            .get_query(POSTS_PATH, &[("_start", start.to_string()), ("_limit", limit.to_string())])
            .await
    }
}

/// A placeholder post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Author id, `userId` on the wire
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Post id
    pub id: i64,
    /// Headline
    pub title: String,
    /// Post text
    pub body: String,
}
