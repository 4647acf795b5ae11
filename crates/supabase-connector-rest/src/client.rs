use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;

use supabase_connector_core::{ConnectorConfig, ResultSet, Row};

use crate::error::ApiError;
use crate::request::{Params, QueryOptions, RestRequest};

/// Blocking HTTP client for PostgREST table resources at `/rest/v1/{table}`.
///
/// Every call performs at most one request. Nothing is retried; a failed
/// `insert` repeated by the caller may create duplicate rows.
///
/// # Example
/// ```no_run
/// use supabase_connector_core::ConnectorConfig;
/// use supabase_connector_rest::{QueryOptions, RestClient};
///
/// let client = RestClient::new(ConnectorConfig::new("https://your-project.supabase.co", "anon-key"))?;
/// let posts = client.fetch("posts", &QueryOptions::new().select("*").limit(5))?;
/// # Ok::<(), supabase_connector_rest::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::blocking::Client,
    config: ConnectorConfig,
}

impl RestClient {
    /// Create a client. An unconfigured `config` is accepted; its requests
    /// fail with [`ApiError::NotConfigured`].
    pub fn new(config: ConnectorConfig) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// True iff both the API URL and key are non-empty.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// `GET rest/v1/{table}` with `select` and every filter as query parameters.
    pub fn fetch(&self, table: &str, options: &QueryOptions) -> Result<ResultSet, ApiError> {
        let params = options.to_params();
        self.send(RestRequest::get(table).queries(params.iter()))
    }

    /// `POST rest/v1/{table}` with `record` as the JSON body.
    pub fn insert(&self, table: &str, record: &Row) -> Result<ResultSet, ApiError> {
        self.send(RestRequest::post(table).body(record.clone()))
    }

    /// `PATCH rest/v1/{table}?{conditions}` with `record` as the JSON body.
    pub fn update<I, K, V>(
        &self,
        table: &str,
        record: &Row,
        conditions: I,
    ) -> Result<ResultSet, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.send(
            RestRequest::patch(table)
                .queries(conditions)
                .body(record.clone()),
        )
    }

    /// `DELETE rest/v1/{table}?{conditions}`.
    pub fn delete<I, K, V>(&self, table: &str, conditions: I) -> Result<ResultSet, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.send(RestRequest::delete(table).queries(conditions))
    }

    /// Execute a request and normalize the response.
    ///
    /// # Errors
    /// * [`ApiError::NotConfigured`] before any I/O when URL or key is missing.
    /// * [`ApiError::TransportFailure`] on a malformed URL or header, network failure or timeout.
    /// * [`ApiError::HttpError`] when the status is outside `200..300`.
    ///
    /// The body is read before the status is checked, so a connection that
    /// drops mid-body is a `TransportFailure` even after an error status.
    pub fn send(&self, request: RestRequest) -> Result<ResultSet, ApiError> {
        let (Some(base), Some(key)) = (self.config.url(), self.config.key()) else {
            return Err(ApiError::NotConfigured);
        };

        let url = endpoint(base, &request.table, &request.query)?;
        let headers = build_headers(key, &request.headers)?;

        debug!(method = %request.method, url = %url, "Executing PostgREST request");

        let mut builder = self
            .http
            .request(request.method.as_reqwest(), url)
            .headers(headers);
        if let Some(record) = request.effective_body() {
            let bytes = serde_json::to_vec(record)
                .map_err(|e| ApiError::transport(format!("failed to encode record: {}", e)))?;
            builder = builder.body(bytes);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;

        // Unparseable bodies are treated as absent.
        let body = serde_json::from_str::<JsonValue>(&text).ok();

        if !(200..300).contains(&status) {
            let err = ApiError::http(status, body);
            debug!(status, message = %err.message(), "PostgREST request failed");
            return Err(err);
        }

        Ok(into_result_set(body))
    }
}

/// `{base}/rest/v1/{table}` plus the form-encoded query, if any.
pub(crate) fn endpoint(base: &str, table: &str, query: &Params) -> Result<Url, ApiError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| ApiError::transport(format!("API URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .extend(["rest", "v1", table]);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter());
    }
    Ok(url)
}

fn build_headers(api_key: &str, overrides: &Params) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert("apikey", header_value(api_key)?);
    headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", api_key))?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("prefer", HeaderValue::from_static("return=representation"));

    for (name, value) in overrides.iter() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::transport(format!("Invalid header name '{}': {}", name, e)))?;
        headers.insert(name, header_value(value)?);
    }
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|e| ApiError::transport(format!("Invalid header value: {}", e)))
}

fn into_result_set(body: Option<JsonValue>) -> ResultSet {
    match body {
        Some(JsonValue::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                JsonValue::Object(map) => Some(Row(map)),
                _ => None,
            })
            .collect(),
        Some(JsonValue::Object(map)) => vec![Row(map)],
        _ => Vec::new(),
    }
}
