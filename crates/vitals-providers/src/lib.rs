pub mod error;
pub mod fixture;
pub mod normalization;
pub mod registry;
pub mod synthetic;
pub mod traits;

pub use error::{Error, Result};
pub use fixture::FixtureConnector;
pub use normalization::normalize_date;
pub use registry::{SourceMetadata, get_all_sources, get_source_metadata};
pub use synthetic::SyntheticConnector;
pub use traits::Connector;
