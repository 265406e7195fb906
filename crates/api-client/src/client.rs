//! Main API client implementation

use crate::config::{ClientConfig, Source};
use crate::endpoints::{EmployeesApi, PicturesApi, PostsApi, ReposApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, trace, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// HTTP client shared by the service bindings of one source
///
/// This client wraps `reqwest` and adds:
/// - Base URL joining and JSON decoding into typed records
/// - Non-2xx responses turned into [`ApiError::ApiResponse`]
/// - Request correlation IDs for tracing
///
/// Each call is a single attempt and nothing is cached.
#[derive(Clone)]
pub struct SampleClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl SampleClient {
    /// Create a client for a source with its built-in configuration
    pub fn for_source(source: Source) -> ApiResult<Self> {
        Self::with_config(ClientConfig::for_source(source))
    }

    /// Create a client for a source from environment variables
    pub fn from_env(source: Source) -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env(source)?)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access employee directory endpoints
    #[must_use]
    pub fn employees(&self) -> EmployeesApi {
        EmployeesApi::new(self.clone())
    }

    /// Access placeholder post endpoints
    #[must_use]
    pub fn posts(&self) -> PostsApi {
        PostsApi::new(self.clone())
    }

    /// Access picture list endpoints
    #[must_use]
    pub fn pictures(&self) -> PicturesApi {
        PicturesApi::new(self.clone())
    }

    /// Access repository browser endpoints
    #[must_use]
    pub fn repos(&self) -> ReposApi {
        ReposApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request relative to the base URL
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.url_for(path);
        self.request_url(&url, Option::<&()>::None).await
    }

    /// Perform a GET request with query parameters
    #[instrument(skip(self, query), fields(request_id))]
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized + Sync,
    {
        let url = self.config.url_for(path);
        self.request_url(&url, Some(query)).await
    }

    /// Perform a GET request to an absolute URL
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(url.to_string()));
        }
        self.request_url(url, Option::<&()>::None).await
    }

    /// GET relative to the base URL, returning the elapsed time too
    pub async fn timed_get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<(T, Duration)> {
        let start = Instant::now();
        let result = self.get(path).await?;
        Ok((result, start.elapsed()))
    }

    /// Execute a single GET and decode the body
    async fn request_url<T, Q>(&self, url: &str, query: Option<&Q>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized + Sync,
    {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let mut request = self.inner.get(url).header(X_REQUEST_ID, &request_id);
        if let Some(q) = query {
            request = request.query(q);
        }

        let start = Instant::now();
        let result = match request.send().await {
            Ok(response) => self.handle_response(&request_id, response).await,
            Err(e) => Err(ApiError::Request(e)),
        };
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => debug!(
                request_id = %request_id,
                url = %url,
                elapsed_ms = elapsed.as_millis(),
                "Request succeeded"
            ),
            Err(e) => warn!(
                request_id = %request_id,
                url = %url,
                elapsed_ms = elapsed.as_millis(),
                error = %e,
                "Request failed"
            ),
        }

        result
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(
        &self,
        request_id: &str,
        response: Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::api_response(status.as_u16(), message));
        }

        let body = response.bytes().await?;
        if self.config.log_bodies {
            trace!(
                request_id = %request_id,
                body = %String::from_utf8_lossy(&body),
                "Response body"
            );
        }

        serde_json::from_slice(&body).map_err(ApiError::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SampleClient::for_source(Source::Posts);
        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().base_url(),
            "https://jsonplaceholder.typicode.com/"
        );
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let result = SampleClient::for_source(Source::Repos);
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_get_url_rejects_relative_url() {
        let client = SampleClient::for_source(Source::Posts).unwrap();
        let result: ApiResult<serde_json::Value> =
            tokio_test::block_on(client.get_url("posts/1"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
