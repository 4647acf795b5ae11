use std::fmt;

use supabase_connector_core::Row;

/// HTTP methods used against PostgREST table resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Whether requests with this method carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An ordered string-to-string mapping; setting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Options for [`RestClient::fetch`](crate::RestClient::fetch).
///
/// Filter keys are passed verbatim as query-string parameters; operator
/// syntax such as `eq.42` or `created_at.desc` is left to PostgREST.
///
/// # Example
/// ```
/// use supabase_connector_rest::QueryOptions;
///
/// let options = QueryOptions::new()
///     .select("id,title")
///     .limit(5)
///     .order("created_at.desc")
///     .filter("status", "eq.published");
/// assert_eq!(options.filter.get("limit"), Some("5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub select: Option<String>,
    pub filter: Params,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns to return (`select=` parameter).
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = Some(columns.into());
        self
    }

    /// Add or replace a query parameter.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.set(key, value);
        self
    }

    /// Equality filter: `column=eq.value`.
    pub fn eq(self, column: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(column, format!("eq.{}", value))
    }

    pub fn limit(self, limit: i64) -> Self {
        self.filter("limit", limit.to_string())
    }

    pub fn order(self, order: impl Into<String>) -> Self {
        self.filter("order", order)
    }

    /// All query parameters: `select` first (when set and non-empty), then the filters.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(select) = self.select.as_deref().filter(|s| !s.is_empty()) {
            params.set("select", select);
        }
        for (k, v) in self.filter.iter() {
            params.set(k, v);
        }
        params
    }
}

/// A single request against `rest/v1/{table}`.
///
/// The CRUD methods on [`RestClient`](crate::RestClient) build one of these;
/// use it directly with [`RestClient::send`](crate::RestClient::send) to add
/// headers that override the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: HttpMethod,
    pub table: String,
    pub query: Params,
    pub body: Option<Row>,
    pub headers: Params,
}

impl RestRequest {
    pub fn new(method: HttpMethod, table: impl Into<String>) -> Self {
        Self {
            method,
            table: table.into(),
            query: Params::new(),
            body: None,
            headers: Params::new(),
        }
    }

    pub fn get(table: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, table)
    }

    pub fn post(table: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, table)
    }

    pub fn patch(table: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, table)
    }

    pub fn delete(table: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, table)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.set(key, value);
        self
    }

    pub fn queries<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in params {
            self.query.set(k, v);
        }
        self
    }

    pub fn body(mut self, record: Row) -> Self {
        self.body = Some(record);
        self
    }

    /// Add a header. A header with the same name as a default replaces it.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// The body actually sent: only for POST/PATCH and only when the record
    /// has at least one column.
    pub(crate) fn effective_body(&self) -> Option<&Row> {
        self.body
            .as_ref()
            .filter(|row| self.method.has_body() && !row.is_empty())
    }
}
