//! Directive attributes as written by content authors.
//!
//! `[supabase_data table="posts" limit="5" template="list"]` and
//! `[supabase_profile user_id="..." template="detail"]` arrive here as
//! attribute maps; missing attributes take their defaults and unknown
//! template names fall back to the default layout.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::warn;

use supabase_connector_render::{ProfileTemplate, TableTemplate};
use supabase_connector_rest::QueryOptions;

/// Table queried by profile directives.
pub const PROFILES_TABLE: &str = "profiles";

pub const DEFAULT_SELECT: &str = "*";
pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_DATA_CLASS: &str = "supabase-data";
pub const DEFAULT_PROFILE_CLASS: &str = "supabase-profile";

/// A directive could not be turned into a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    #[error("the \"{0}\" attribute is required")]
    MissingAttribute(&'static str),
}

/// `supabase_data`: render rows of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDirective {
    pub table: String,
    pub select: String,
    pub limit: i64,
    pub order: Option<String>,
    pub template: TableTemplate,
    pub class_name: String,
}

impl CollectionDirective {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: DEFAULT_SELECT.to_string(),
            limit: DEFAULT_LIMIT,
            order: None,
            template: TableTemplate::default(),
            class_name: DEFAULT_DATA_CLASS.to_string(),
        }
    }

    /// Read `table`, `select`, `limit`, `order`, `template` and `class`.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, DirectiveError> {
        let table = attrs
            .get("table")
            .filter(|t| !t.is_empty())
            .ok_or(DirectiveError::MissingAttribute("table"))?;

        let mut directive = Self::new(table.as_str());
        if let Some(select) = attrs.get("select") {
            directive.select = select.clone();
        }
        if let Some(limit) = attrs.get("limit") {
            directive.limit = coerce_int(limit);
        }
        directive.order = attrs.get("order").filter(|o| !o.is_empty()).cloned();
        directive.template = template_or_default(attrs.get("template"));
        if let Some(class) = attrs.get("class") {
            directive.class_name = class.clone();
        }
        Ok(directive)
    }

    /// `select`, `limit` and, when set, `order`.
    pub fn query(&self) -> QueryOptions {
        let options = QueryOptions::new().select(&self.select).limit(self.limit);
        match &self.order {
            Some(order) => options.order(order),
            None => options,
        }
    }
}

/// `supabase_profile`: render one row of the `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDirective {
    pub user_id: String,
    pub template: ProfileTemplate,
    pub class_name: String,
}

impl ProfileDirective {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            template: ProfileTemplate::default(),
            class_name: DEFAULT_PROFILE_CLASS.to_string(),
        }
    }

    /// Read `user_id`, `template` and `class`.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self, DirectiveError> {
        let user_id = attrs
            .get("user_id")
            .filter(|u| !u.is_empty())
            .ok_or(DirectiveError::MissingAttribute("user_id"))?;

        let mut directive = Self::new(user_id.as_str());
        directive.template = template_or_default(attrs.get("template"));
        if let Some(class) = attrs.get("class") {
            directive.class_name = class.clone();
        }
        Ok(directive)
    }

    /// `select=*`, `id=eq.<user_id>`, `limit=1`.
    pub fn query(&self) -> QueryOptions {
        QueryOptions::new()
            .select(DEFAULT_SELECT)
            .eq("id", &self.user_id)
            .limit(1)
    }
}

fn template_or_default<T>(name: Option<&String>) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match name.map(|n| n.parse::<T>()) {
        Some(Ok(template)) => template,
        Some(Err(err)) => {
            warn!(error = %err, "Falling back to the default template");
            T::default()
        }
        None => T::default(),
    }
}

/// Integer coercion for attribute values: optional leading whitespace and
/// sign, then as many digits as present. No digits gives 0; overflow saturates.
pub fn coerce_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}
