use super::{finish, finish_page, PagedRepository, Repository};
use crate::client::SampleClient;
use crate::endpoints::{Post, PostService, PostsApi};
use crate::error::ApiResult;
use async_trait::async_trait;
use samplekit_core::paging::{Page, PagingConfig};
use samplekit_telemetry::Timer;

/// Page size used for offset pages unless overridden
pub const DEFAULT_POST_PAGE_SIZE: u32 = 20;

/// Placeholder posts, as a whole list or as zero-based offset pages
pub struct PostRepository<S> {
    service: S,
    paging: PagingConfig,
}

impl<S: PostService> PostRepository<S> {
    /// Wrap a service binding
    pub fn new(service: S) -> Self {
        Self {
            service,
            paging: PagingConfig::zero_based(DEFAULT_POST_PAGE_SIZE),
        }
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.paging.page_size = page_size;
        self
    }
}

impl PostRepository<PostsApi> {
    /// Repository backed by the HTTP binding of `client`
    pub fn http(client: &SampleClient) -> Self {
        Self::new(client.posts())
    }
}

#[async_trait]
impl<S: PostService> Repository for PostRepository<S> {
    type Entity = Post;
    const SOURCE: &'static str = "posts";

    async fn fetch(&self) -> ApiResult<Vec<Post>> {
        let timer = Timer::start(Self::SOURCE);
        let result = self.service.posts().await;
        finish(Self::SOURCE, timer, result)
    }
}

#[async_trait]
impl<S: PostService> PagedRepository for PostRepository<S> {
    fn paging(&self) -> PagingConfig {
        self.paging
    }

    async fn fetch_page(&self, page: u32) -> ApiResult<Page<Post>> {
        let request = self.paging.request(page)?;
        let timer = Timer::start(Self::SOURCE);
        let result = self
            .service
            .posts_page(request.offset(), request.page_size)
            .await
            .map(|items| Page::from_items(request, items));
        finish_page(Self::SOURCE, timer, result)
    }
}
