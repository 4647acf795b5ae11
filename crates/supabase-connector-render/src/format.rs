use minijinja::HtmlEscape;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use url::Url;

/// Localizable words emitted by the renderer.
///
/// Hosts can load translations from JSON; missing keys keep their English
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Shown (in `<em>`) for null values.
    pub null: String,
    pub true_label: String,
    pub false_label: String,
    /// Avatar alt text when a profile has no username.
    pub user: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            null: "Null".to_string(),
            true_label: "True".to_string(),
            false_label: "False".to_string(),
            user: "User".to_string(),
        }
    }
}

/// HTML-escape `text`.
pub fn escape(text: &str) -> String {
    HtmlEscape(text).to_string()
}

/// Format one column value as an HTML fragment.
///
/// | value | output |
/// |---|---|
/// | null | `<em>Null</em>` |
/// | array / object | `<pre>` + escaped pretty JSON + `</pre>` |
/// | bool | `True` / `False` |
/// | string / number | escaped text |
pub fn format_value(value: &JsonValue, labels: &Labels) -> String {
    match value {
        JsonValue::Null => format!("<em>{}</em>", escape(&labels.null)),
        JsonValue::Array(_) | JsonValue::Object(_) => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            format!("<pre>{}</pre>", escape(&pretty))
        }
        JsonValue::Bool(true) => escape(&labels.true_label),
        JsonValue::Bool(false) => escape(&labels.false_label),
        JsonValue::Number(n) => escape(&n.to_string()),
        JsonValue::String(s) => escape(s),
    }
}

/// Plain text for a value used as heading or link text. Empty strings and
/// non-scalar values yield `None`.
pub(crate) fn text_of(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accept only `http`/`https` URLs for `href` and `src` attributes.
///
/// A bare host such as `example.com` is read as `http://example.com`.
pub fn sanitize_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return None;
    }
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) if !raw.starts_with('/') => {
            Url::parse(&format!("http://{}", raw)).ok()?
        }
        Err(_) => return None,
    };
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}
