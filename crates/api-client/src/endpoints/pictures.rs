//! Picture list endpoints

use crate::client::SampleClient;
use crate::error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Path of the picture list, relative to the source base URL
pub const PICTURES_PATH: &str = "list";

/// Page size used when none is given
pub const DEFAULT_PICTURE_LIMIT: u32 = 30;

/// Anything that can produce pages of pictures
#[async_trait]
pub trait PictureService: Send + Sync {
    /// GET list?page=<page>&limit=<limit>
    async fn pictures(&self, page: u32, limit: u32) -> ApiResult<Vec<Picture>>;
}

/// Picture list API interface
#[derive(Clone)]
pub struct PicturesApi {
    client: SampleClient,
}

impl PicturesApi {
    /// Create a new pictures API interface
    pub(crate) fn new(client: SampleClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PictureService for PicturesApi {
    async fn pictures(&self, page: u32, limit: u32) -> ApiResult<Vec<Picture>> {
        self.client
            .get_query(PICTURES_PATH, &[("page", page), ("limit", limit)])
            .await
    }
}

/// A picture entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Picture id as a string
    pub id: String,
    /// Photographer
    pub author: String,
    /// Full-size image URL
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_ignores_extra_fields() {
        let json = r#"{
            "id": "0",
            "author": "Alejandro Escamilla",
            "width": 5000,
            "height": 3333,
            "url": "https://unsplash.com/photos/yC-Yzbqy7PY",
            "download_url": "https://picsum.photos/id/0/5000/3333"
        }"#;

        let picture: Picture = serde_json::from_str(json).unwrap();
        assert_eq!(picture.author, "Alejandro Escamilla");
        assert_eq!(picture.download_url, "https://picsum.photos/id/0/5000/3333");
    }
}
