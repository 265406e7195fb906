//! Repositories: one `fetch()` per sample source
//!
//! A repository calls its service binding, maps the response body into a
//! list of records, and returns either that list or the error. Nothing is
//! retried or cached.

mod employees;
mod pictures;
mod places;
mod posts;
mod repos;

pub use employees::EmployeeRepository;
pub use pictures::PictureRepository;
pub use places::PlaceRepository;
pub use posts::PostRepository;
pub use repos::RepoRepository;

use crate::error::ApiResult;
use async_trait::async_trait;
use samplekit_core::paging::{Page, PagingConfig};
use samplekit_telemetry::Timer;
use tracing::{debug, warn};

/// Fetch a full list of records from one source
#[async_trait]
pub trait Repository: Send + Sync {
    /// Record type the source produces
    type Entity: Clone + Send + Sync + 'static;

    /// Source name used in logs and metrics
    const SOURCE: &'static str;

    /// Fetch the list, or the error that prevented it
    async fn fetch(&self) -> ApiResult<Vec<Self::Entity>>;
}

/// A repository whose source can also be read one page at a time
#[async_trait]
pub trait PagedRepository: Repository {
    /// How this source numbers and sizes its pages
    fn paging(&self) -> PagingConfig;

    /// Fetch a single page and compute its neighbouring keys
    async fn fetch_page(&self, page: u32) -> ApiResult<Page<Self::Entity>>;

    /// Fetch the first page
    async fn fetch_first_page(&self) -> ApiResult<Page<Self::Entity>> {
        let first = self.paging().first_page;
        self.fetch_page(first).await
    }
}

/// Record metrics and log the outcome of a list fetch
pub(crate) fn finish<T>(
    source: &'static str,
    timer: Timer,
    result: ApiResult<Vec<T>>,
) -> ApiResult<Vec<T>> {
    let elapsed = timer.finish(result.is_ok());
    match &result {
        Ok(items) => debug!(
            source,
            count = items.len(),
            elapsed_ms = elapsed.as_millis(),
            "Fetch succeeded"
        ),
        Err(e) => warn!(source, error = %e, "Fetch failed"),
    }
    result
}

/// Record metrics and log the outcome of a page fetch
pub(crate) fn finish_page<T>(
    source: &'static str,
    timer: Timer,
    result: ApiResult<Page<T>>,
) -> ApiResult<Page<T>> {
    let elapsed = timer.finish(result.is_ok());
    match &result {
        Ok(page) => debug!(
            source,
            page = page.page,
            count = page.items.len(),
            end_of_pagination = page.end_of_pagination_reached(),
            elapsed_ms = elapsed.as_millis(),
            "Page fetch succeeded"
        ),
        Err(e) => warn!(source, error = %e, "Page fetch failed"),
    }
    result
}
