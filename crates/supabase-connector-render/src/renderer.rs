use minijinja::{context, Environment};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::error;

use supabase_connector_core::Row;

use crate::format::{format_value, sanitize_url, text_of, Labels};
use crate::template::{NoticeKind, ProfileTemplate, TableTemplate};

/// Avatar shown when a profile has no usable `avatar_url`.
pub const PLACEHOLDER_AVATAR: &str = "https://www.gravatar.com/avatar/?d=mp&f=y";

const TEMPLATES: [(&str, &str); 7] = [
    ("table.html", include_str!("templates/table.html")),
    ("list.html", include_str!("templates/list.html")),
    ("cards.html", include_str!("templates/cards.html")),
    ("avatar.html", include_str!("templates/avatar.html")),
    ("profile_card.html", include_str!("templates/profile_card.html")),
    ("profile_detail.html", include_str!("templates/profile_detail.html")),
    ("notice.html", include_str!("templates/notice.html")),
];

#[derive(Debug, Serialize)]
struct Field {
    label: String,
    /// Already-escaped HTML from [`format_value`].
    value: String,
}

#[derive(Debug, Serialize)]
struct Link {
    href: Option<String>,
    text: String,
}

#[derive(Debug, Serialize)]
struct Avatar {
    src: String,
    alt: String,
}

#[derive(Debug, Serialize)]
struct ProfileField {
    label: String,
    value: String,
    link: Option<Link>,
}

/// Renders rows and profiles into HTML fragments.
///
/// Rendering never fails: empty input yields `""` and a template error is
/// logged and also yields `""`.
///
/// # Example
/// ```
/// use supabase_connector_core::row;
/// use supabase_connector_render::{HtmlRenderer, TableTemplate};
///
/// let renderer = HtmlRenderer::new();
/// let rows = vec![row![("id", 1), ("title", "Hello")]];
/// let html = renderer.render_collection(&rows, TableTemplate::Table, "supabase-data");
/// assert!(html.contains("<th>title</th>"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    env: Environment<'static>,
    labels: Labels,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::with_labels(Labels::default())
    }

    /// Create a renderer emitting the given (translated) labels.
    pub fn with_labels(labels: Labels) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        for (name, source) in TEMPLATES {
            if let Err(err) = env.add_template(name, source) {
                error!(template = name, error = %err, "Failed to compile template");
            }
        }
        Self { env, labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Format one value; see [`format_value`].
    pub fn format_value(&self, value: &JsonValue) -> String {
        format_value(value, &self.labels)
    }

    /// Render a result set with one of the collection layouts.
    ///
    /// The table header comes from the first row's columns; every row's cells
    /// follow that row's own column order.
    pub fn render_collection(
        &self,
        data: &[Row],
        template: TableTemplate,
        class_name: &str,
    ) -> String {
        let Some(first) = data.first() else {
            return String::new();
        };

        match template {
            TableTemplate::Table => {
                let headers = first.columns();
                let rows: Vec<Vec<String>> = data
                    .iter()
                    .map(|row| row.values().map(|v| self.format_value(v)).collect())
                    .collect();
                self.render(
                    template.file(),
                    context! { class_name, headers, rows },
                )
            }
            TableTemplate::List | TableTemplate::Cards => {
                let items: Vec<Vec<Field>> = data.iter().map(|row| self.fields(row)).collect();
                self.render(template.file(), context! { class_name, items })
            }
        }
    }

    /// Render a single profile row.
    ///
    /// `Card` shows the avatar, `username`, `full_name` and `website`.
    /// `Detail` shows the avatar followed by every other column.
    pub fn render_profile(
        &self,
        profile: &Row,
        template: ProfileTemplate,
        class_name: &str,
    ) -> String {
        if profile.is_empty() {
            return String::new();
        }
        let avatar = self.avatar(profile);

        match template {
            ProfileTemplate::Card => {
                let username = text_of(profile.get_value("username"));
                let full_name = text_of(profile.get_value("full_name"));
                let website = text_of(profile.get_value("website")).map(|text| Link {
                    href: sanitize_url(&text),
                    text,
                });
                self.render(
                    template.file(),
                    context! { class_name, avatar, username, full_name, website },
                )
            }
            ProfileTemplate::Detail => {
                let fields: Vec<ProfileField> = profile
                    .iter()
                    .filter(|(key, _)| key.as_str() != "avatar_url")
                    .map(|(key, value)| self.profile_field(key, value))
                    .collect();
                self.render(template.file(), context! { class_name, avatar, fields })
            }
        }
    }

    /// Render an inline `supabase-error` / `supabase-notice` message.
    pub fn render_notice(&self, kind: NoticeKind, message: &str) -> String {
        self.render(
            "notice.html",
            context! { kind => kind.css_suffix(), message },
        )
    }

    fn fields(&self, row: &Row) -> Vec<Field> {
        row.iter()
            .map(|(key, value)| Field {
                label: key.clone(),
                value: self.format_value(value),
            })
            .collect()
    }

    fn avatar(&self, profile: &Row) -> Avatar {
        let src = profile
            .get_str("avatar_url")
            .and_then(sanitize_url)
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());
        let alt = text_of(profile.get_value("username")).unwrap_or_else(|| self.labels.user.clone());
        Avatar { src, alt }
    }

    fn profile_field(&self, key: &str, value: &JsonValue) -> ProfileField {
        let link = match (key, text_of(Some(value))) {
            ("website", Some(text)) => sanitize_url(&text).map(|href| Link {
                href: Some(href),
                text,
            }),
            _ => None,
        };
        ProfileField {
            label: key.to_string(),
            value: self.format_value(value),
            link,
        }
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> String {
        match self.env.get_template(name).and_then(|t| t.render(ctx)) {
            Ok(html) => html,
            Err(err) => {
                error!(template = name, error = %err, "Failed to render template");
                String::new()
            }
        }
    }
}
