//! Settings file loading and schema definitions
//!
//! Every sample source reads the same optional `samplekit.toml`.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_CANDIDATES};
pub use schema::*;
