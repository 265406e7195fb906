//! Typed fetch clients and repositories for the samplekit sample sources
//!
//! Every sample follows the same shallow pipeline: a repository calls a
//! service binding, the binding performs an HTTP GET and decodes JSON into
//! plain records, and the repository hands back a success-or-failure result.
//! A [`loader::Loader`] runs that fetch on a background task and publishes
//! the outcome as a [`LoadState`].
//!
//! # Sources
//!
//! - **Employees**: employee directory (`employees.json`)
//! - **Posts**: placeholder posts, whole list or offset pages
//! - **Pictures**: paged picture list
//! - **Repos**: paged wallpaper repository browser
//! - **Places**: curated nearby places, no network
//!
//! # Example
//!
//! ```rust,no_run
//! use samplekit_api_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SampleClient::for_source(Source::Employees)?;
//!     let repository = EmployeeRepository::new(client.employees());
//!
//!     let employees = repository.fetch().await?;
//!     println!("Got {} employees", employees.len());
//!
//!     let loader = Loader::new(repository);
//!     let state = loader.load().await;
//!     println!("Loaded: {}", state.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod loader;
pub mod repository;

pub use client::SampleClient;
pub use config::{ClientConfig, Source};
pub use error::{ApiError, ApiResult};
pub use samplekit_core::load_state::LoadState;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::SampleClient;
    pub use crate::config::{ClientConfig, Source};
    pub use crate::endpoints::{
        CuratedPlaces, EmployeeService, EmployeesApi, PictureService, PicturesApi, PlaceService,
        PostService, PostsApi, RepoService, ReposApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::loader::Loader;
    pub use crate::repository::{
        EmployeeRepository, PagedRepository, PictureRepository, PlaceRepository,
        PostRepository, RepoRepository, Repository,
    };
    pub use samplekit_core::load_state::LoadState;
    pub use samplekit_core::paging::{Page, PagingConfig};
}
