//! Display Supabase tables and profiles as HTML fragments.
//!
//! The REST client fetches rows over PostgREST, the renderer lays them out,
//! and [`Connector`] ties both to content directives.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use supabase_connector::prelude::*;
//!
//! let connector = Connector::new(ConnectorConfig::from_env())?;
//! let attrs = HashMap::from([
//!     ("table".to_string(), "posts".to_string()),
//!     ("template".to_string(), "list".to_string()),
//! ]);
//! let html = connector.render_collection_attributes(&attrs);
//! # Ok::<(), ApiError>(())
//! ```

pub mod connector;
pub mod directive;

pub use connector::{Connector, Notices};
pub use directive::{coerce_int, CollectionDirective, DirectiveError, ProfileDirective};

pub use supabase_connector_core::*;
pub use supabase_connector_render;
pub use supabase_connector_rest;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use supabase_connector::prelude::*;
/// ```
pub mod prelude {
    pub use supabase_connector_core::{row, ConnectorConfig, ResultSet, Row};

    pub use supabase_connector_render::{
        HtmlRenderer, Labels, NoticeKind, ProfileTemplate, TableTemplate,
    };

    pub use supabase_connector_rest::{
        ApiError, ApiErrorKind, QueryOptions, RestClient, RestRequest,
    };

    pub use crate::{CollectionDirective, Connector, Notices, ProfileDirective};
}
