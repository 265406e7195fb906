//! Endpoint-specific service bindings
//!
//! Each module defines the records a source returns, a service trait the
//! repositories depend on, and the HTTP implementation of that trait.
//!
//! | Module | Path | Records |
//! |--------|------|---------|
//! | `employees` | `GET employees.json` | [`Employee`] |
//! | `posts` | `GET posts` | [`Post`] |
//! | `pictures` | `GET list?page&limit` | [`Picture`] |
//! | `repos` | `GET items?page&type&itemsPerPage` | [`RepoModel`] |
//! | `places` | none, curated in memory | [`Place`] |

pub mod employees;
pub mod pictures;
pub mod places;
pub mod posts;
pub mod repos;

pub use employees::{Employee, EmployeeResponse, EmployeeService, EmployeeType, EmployeesApi};
pub use pictures::{Picture, PictureService, PicturesApi};
pub use places::{Coordinate, CuratedPlaces, Place, PlaceService};
pub use posts::{Post, PostService, PostsApi};
pub use repos::{RepoModel, RepoQuery, RepoService, RepoUser, ReposApi, TagsItem};
