pub mod config;
pub mod value;

pub use config::{ConnectorConfig, DEFAULT_TIMEOUT};
pub use value::{ResultSet, Row};

#[doc(hidden)]
pub use serde_json;
