use super::{finish, finish_page, PagedRepository, Repository};
use crate::client::SampleClient;
use crate::endpoints::repos::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_ITEM_TYPE};
use crate::endpoints::{RepoModel, RepoQuery, RepoService, ReposApi};
use crate::error::ApiResult;
use async_trait::async_trait;
use samplekit_core::paging::{Page, PagingConfig};
use samplekit_telemetry::Timer;

/// Repository browser items of one type; `fetch()` returns the first page
pub struct RepoRepository<S> {
    service: S,
    item_type: String,
    paging: PagingConfig,
}

impl<S: RepoService> RepoRepository<S> {
    /// Wrap a service binding
    pub fn new(service: S) -> Self {
        Self {
            service,
            item_type: DEFAULT_ITEM_TYPE.to_string(),
            paging: PagingConfig::one_based(DEFAULT_ITEMS_PER_PAGE),
        }
    }

    /// Browse a different item type
    #[must_use]
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.paging.page_size = page_size;
        self
    }

    fn query(&self, page: u32, page_size: u32) -> RepoQuery {
        RepoQuery::page(page)
            .with_type(self.item_type.clone())
            .with_items_per_page(page_size)
    }
}

impl RepoRepository<ReposApi> {
    /// Repository backed by the HTTP binding of `client`
    pub fn http(client: &SampleClient) -> Self {
        Self::new(client.repos())
    }
}

#[async_trait]
impl<S: RepoService> Repository for RepoRepository<S> {
    type Entity = RepoModel;
    const SOURCE: &'static str = "repos";

    async fn fetch(&self) -> ApiResult<Vec<RepoModel>> {
        let first = self.paging.first();
        let query = self.query(first.page, first.page_size);
        let timer = Timer::start(Self::SOURCE);
        let result = self.service.items(&query).await;
        finish(Self::SOURCE, timer, result)
    }
}

#[async_trait]
impl<S: RepoService> PagedRepository for RepoRepository<S> {
    fn paging(&self) -> PagingConfig {
        self.paging
    }

    async fn fetch_page(&self, page: u32) -> ApiResult<Page<RepoModel>> {
        let request = self.paging.request(page)?;
        let query = self.query(request.page, request.page_size);
        let timer = Timer::start(Self::SOURCE);
        let result = self
            .service
            .items(&query)
            .await
            .map(|items| Page::from_items(request, items));
        finish_page(Self::SOURCE, timer, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingService {
        queries: Mutex<Vec<RepoQuery>>,
        items_per_call: usize,
    }

    #[async_trait]
    impl RepoService for RecordingService {
        async fn items(&self, query: &RepoQuery) -> ApiResult<Vec<RepoModel>> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(vec![RepoModel::default(); self.items_per_call])
        }
    }

    #[test]
    fn test_fetch_requests_first_wallpaper_page() {
        let repository = RepoRepository::new(RecordingService {
            items_per_call: 3,
            ..Default::default()
        });

        let items = tokio_test::block_on(repository.fetch()).unwrap();
        assert_eq!(items.len(), 3);

        let queries = repository.service.queries.lock().unwrap();
        assert_eq!(queries[0], RepoQuery::page(1));
    }

    #[test]
    fn test_fetch_page_uses_type_and_size() {
        let repository = RepoRepository::new(RecordingService::default())
            .with_type("RINGTONE")
            .with_page_size(25);

        let page = tokio_test::block_on(repository.fetch_page(4)).unwrap();
        assert_eq!(page.prev_key, Some(3));
        assert_eq!(page.next_key, None);

        let queries = repository.service.queries.lock().unwrap();
        assert_eq!(queries[0].item_type, "RINGTONE");
        assert_eq!(queries[0].items_per_page, 25);
        assert_eq!(queries[0].page, 4);
    }

    #[test]
    fn test_fetch_page_rejects_page_zero() {
        let repository = RepoRepository::new(RecordingService::default());
        let result = tokio_test::block_on(repository.fetch_page(0));
        assert!(result.is_err());
        assert!(repository.service.queries.lock().unwrap().is_empty());
    }
}
