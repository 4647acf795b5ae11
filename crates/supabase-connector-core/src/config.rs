use std::time::Duration;

/// Host option holding the Supabase project URL.
pub const API_URL_OPTION: &str = "wordpress_supabase_connector_api_url";

/// Host option holding the Supabase API key.
pub const API_KEY_OPTION: &str = "wordpress_supabase_connector_api_key";

/// Environment variable read by [`ConnectorConfig::from_env`] for the project URL.
pub const API_URL_ENV: &str = "SUPABASE_CONNECTOR_API_URL";

/// Environment variable read by [`ConnectorConfig::from_env`] for the API key.
pub const API_KEY_ENV: &str = "SUPABASE_CONNECTOR_API_KEY";

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a Supabase project.
///
/// Both the URL and the key are optional; a config missing either one (or
/// holding an empty string) is "not configured" and the REST client refuses
/// to touch the network with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Supabase project URL (e.g. "https://xyz.supabase.co")
    pub api_url: Option<String>,
    /// Supabase anon or service_role key
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ConnectorConfig {
    /// Create a config with both credentials set.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::default().api_url(api_url).api_key(api_key)
    }

    /// Build a config from the host's option store.
    ///
    /// `lookup` receives [`API_URL_OPTION`] and [`API_KEY_OPTION`] and returns
    /// the stored value, if any.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            api_url: lookup(API_URL_OPTION),
            api_key: lookup(API_KEY_OPTION),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a config from [`API_URL_ENV`] and [`API_KEY_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|option| {
            let var = match option {
                API_URL_OPTION => API_URL_ENV,
                API_KEY_OPTION => API_KEY_ENV,
                _ => return None,
            };
            std::env::var(var).ok()
        })
    }

    /// Set the project URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// True iff both the URL and the key are present and non-empty.
    pub fn is_configured(&self) -> bool {
        non_empty(&self.api_url).is_some() && non_empty(&self.api_key).is_some()
    }

    /// The project URL, when configured.
    pub fn url(&self) -> Option<&str> {
        non_empty(&self.api_url)
    }

    /// The API key, when configured.
    pub fn key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
