//! Shared building blocks for the samplekit fetch samples
//!
//! This crate holds the pieces every sample source needs regardless of which
//! endpoint it talks to:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML settings file with endpoint overrides
//! - **Load state**: the success/empty/failure wrapper handed to a UI layer
//! - **Paging**: page requests and previous/next page keys
//!
//! # Example
//!
//! ```rust
//! use samplekit_core::load_state::LoadState;
//!
//! let state: LoadState<Vec<u32>> = LoadState::from_result(Ok::<_, String>(vec![1, 2]));
//! assert!(state.is_success());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod load_state;
pub mod paging;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, Settings};
    pub use crate::error::{Error, ErrorCode, Result, ResultExt};
    pub use crate::load_state::LoadState;
    pub use crate::paging::{Page, PageRequest, PagingConfig};
}
