//! `AskMyCity` — essential-services directory client.
//!
//! Resolves a geographic location (state, then city) to a catalog of
//! emergency and civic services served by a read-only REST backend. The core
//! is the cascading selection flow and the classification of fetch outcomes
//! so the frontend degrades predictably.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod resolver;
pub mod routing;
pub mod selector;

// Re-export core types for public API
pub use catalog::CatalogClient;
pub use config::DirectoryConfig;
pub use error::CatalogError;
pub use models::{City, CityDetail, Service, State};
pub use resolver::{LocationResolver, Resolution};
pub use routing::Route;
pub use selector::{CascadingSelector, Fetch};

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CatalogError>;
