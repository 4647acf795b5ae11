//! Blocking PostgREST client for Supabase tables.
//!
//! Every request carries the `apikey`, `Authorization: Bearer`,
//! `Content-Type: application/json` and `Prefer: return=representation`
//! headers, so mutations echo the affected rows back.
//!
//! # Usage
//!
//! ```no_run
//! use supabase_connector_core::{row, ConnectorConfig};
//! use supabase_connector_rest::{QueryOptions, RestClient};
//!
//! let client = RestClient::new(ConnectorConfig::from_env())?;
//! let rows = client.fetch("posts", &QueryOptions::new().select("*").limit(10))?;
//! let updated = client.update("profiles", &row![("bio", "x")], [("id", "eq.42")])?;
//! # Ok::<(), supabase_connector_rest::ApiError>(())
//! ```

pub mod client;
pub mod error;
pub mod request;

pub use client::RestClient;
pub use error::{ApiError, ApiErrorKind};
pub use request::{HttpMethod, Params, QueryOptions, RestRequest};
