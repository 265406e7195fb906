//! Wallpaper repository browser endpoints
//!
//! Every field of a [`RepoModel`] is optional: the feed omits whatever an
//! item does not have.

use crate::client::SampleClient;
use crate::error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Path of the item list, relative to the source base URL
pub const ITEMS_PATH: &str = "items";

/// Item type requested when none is given
pub const DEFAULT_ITEM_TYPE: &str = "WALLPAPER";

/// Items per page requested when none is given
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Anything that can produce pages of repository items
#[async_trait]
pub trait RepoService: Send + Sync {
    /// GET items?page=<page>&type=<type>&itemsPerPage=<n>
    async fn items(&self, query: &RepoQuery) -> ApiResult<Vec<RepoModel>>;
}

/// Repository browser API interface
#[derive(Clone)]
pub struct ReposApi {
    client: SampleClient,
}

impl ReposApi {
    /// Create a new repository browser API interface
    pub(crate) fn new(client: SampleClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepoService for ReposApi {
    async fn items(&self, query: &RepoQuery) -> ApiResult<Vec<RepoModel>> {
        self.client.get_query(ITEMS_PATH, query).await
    }
}

/// Query parameters for one page of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoQuery {
    /// One-based page index
    pub page: u32,
    /// Item type filter, `type` on the wire
    #[serde(rename = "type")]
    pub item_type: String,
    /// Page size, `itemsPerPage` on the wire
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: u32,
}

impl Default for RepoQuery {
    fn default() -> Self {
        Self {
            page: 1,
            item_type: DEFAULT_ITEM_TYPE.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl RepoQuery {
    /// Query for a page with default type and size
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Set the item type
    #[must_use]
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: u32) -> Self {
        self.items_per_page = items_per_page;
        self
    }
}

/// A repository item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoModel {
    /// Download count, `countDownloads` on the wire
    #[serde(rename = "countDownloads")]
    pub count_downloads: Option<i64>,
    /// Original file URL
    pub file: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Preview or avatar image URL
    pub image: Option<String>,
    /// Thumbnail URL
    pub thumbnail_file: Option<String>,
    /// Numeric id
    pub id: Option<i64>,
    /// Item type, `type` on the wire
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    /// Uploader
    pub user: Option<RepoUser>,
    /// Zoomed preview URL
    pub zoomed_file: Option<String>,
    /// Tags; the feed may contain null entries
    pub tags: Option<Vec<Option<TagsItem>>>,
}

/// A tag on a repository item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsItem {
    /// Display name
    pub name: Option<String>,
    /// Numeric id
    pub id: Option<i64>,
}

/// Uploader of a repository item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoUser {
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Preview or avatar image URL
    pub image: Option<String>,
    /// Numeric id
    pub id: Option<i64>,
}

impl RepoUser {
    /// First and last name joined, skipping missing parts
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_serializes_wire_names() {
        let query = RepoQuery::page(3);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["page"], 3);
        assert_eq!(json["type"], "WALLPAPER");
        assert_eq!(json["itemsPerPage"], 10);
    }

    #[test]
    fn test_repo_model_deserialize() {
        let json = r#"{
            "countDownloads": 1042,
            "file": "https://cdn.example.com/w/1.jpg",
            "name": "Dunes",
            "thumbnail_file": "https://cdn.example.com/w/1_t.jpg",
            "id": 7,
            "type": "WALLPAPER",
            "user": {"firstName": "Ada", "lastName": "Lovelace", "id": 3},
            "tags": [{"name": "desert", "id": 1}, null]
        }"#;

        let item: RepoModel = serde_json::from_str(json).unwrap();
        assert_eq!(item.count_downloads, Some(1042));
        assert_eq!(item.item_type.as_deref(), Some("WALLPAPER"));
        assert_eq!(item.user.unwrap().display_name().as_deref(), Some("Ada Lovelace"));
        assert_eq!(item.tags.unwrap().len(), 2);
        assert!(item.zoomed_file.is_none());
    }

    #[test]
    fn test_empty_object_is_valid() {
        let item: RepoModel = serde_json::from_str("{}").unwrap();
        assert_eq!(item, RepoModel::default());
    }
}
