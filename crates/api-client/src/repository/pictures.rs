use super::{finish, finish_page, PagedRepository, Repository};
use crate::client::SampleClient;
use crate::endpoints::pictures::DEFAULT_PICTURE_LIMIT;
use crate::endpoints::{Picture, PictureService, PicturesApi};
use crate::error::ApiResult;
use async_trait::async_trait;
use samplekit_core::paging::{Page, PagingConfig};
use samplekit_telemetry::Timer;

/// Picture list; `fetch()` returns the first page
pub struct PictureRepository<S> {
    service: S,
    paging: PagingConfig,
}

impl<S: PictureService> PictureRepository<S> {
    /// Wrap a service binding
    pub fn new(service: S) -> Self {
        Self {
            service,
            paging: PagingConfig::one_based(DEFAULT_PICTURE_LIMIT),
        }
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.paging.page_size = page_size;
        self
    }
}

impl PictureRepository<PicturesApi> {
    /// Repository backed by the HTTP binding of `client`
    pub fn http(client: &SampleClient) -> Self {
        Self::new(client.pictures())
    }
}

#[async_trait]
impl<S: PictureService> Repository for PictureRepository<S> {
    type Entity = Picture;
    const SOURCE: &'static str = "pictures";

    async fn fetch(&self) -> ApiResult<Vec<Picture>> {
        let first = self.paging.first();
        let timer = Timer::start(Self::SOURCE);
        let result = self.service.pictures(first.page, first.page_size).await;
        finish(Self::SOURCE, timer, result)
    }
}

#[async_trait]
impl<S: PictureService> PagedRepository for PictureRepository<S> {
    fn paging(&self) -> PagingConfig {
        self.paging
    }

    async fn fetch_page(&self, page: u32) -> ApiResult<Page<Picture>> {
        let request = self.paging.request(page)?;
        let timer = Timer::start(Self::SOURCE);
        let result = self
            .service
            .pictures(request.page, request.page_size)
            .await
            .map(|items| Page::from_items(request, items));
        finish_page(Self::SOURCE, timer, result)
    }
}
