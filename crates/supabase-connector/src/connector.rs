use std::collections::HashMap;

use tracing::debug;

use supabase_connector_core::ConnectorConfig;
use supabase_connector_render::{HtmlRenderer, NoticeKind};
use supabase_connector_rest::{ApiError, RestClient};

use crate::directive::{CollectionDirective, DirectiveError, ProfileDirective, PROFILES_TABLE};

/// Localizable messages shown in place of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notices {
    /// `{attribute}` is replaced with the attribute name.
    pub missing_attribute: String,
    pub not_configured: String,
    pub no_data: String,
    pub profile_not_found: String,
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            missing_attribute: "Error: the \"{attribute}\" attribute is required.".to_string(),
            not_configured: "Error: the Supabase API is not configured.".to_string(),
            no_data: "No data found.".to_string(),
            profile_not_found: "Profile not found.".to_string(),
        }
    }
}

/// Runs directives end to end: query the backend, then render the rows or
/// the appropriate notice.
///
/// An empty result and a failed request produce different notices.
#[derive(Debug, Clone)]
pub struct Connector {
    client: RestClient,
    renderer: HtmlRenderer,
    notices: Notices,
}

impl Connector {
    pub fn new(config: ConnectorConfig) -> Result<Self, ApiError> {
        Ok(Self::from_parts(RestClient::new(config)?, HtmlRenderer::new()))
    }

    pub fn from_parts(client: RestClient, renderer: HtmlRenderer) -> Self {
        Self {
            client,
            renderer,
            notices: Notices::default(),
        }
    }

    pub fn with_notices(mut self, notices: Notices) -> Self {
        self.notices = notices;
        self
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }

    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }

    /// Parse a `supabase_data` attribute map and render it.
    pub fn render_collection_attributes(&self, attrs: &HashMap<String, String>) -> String {
        match CollectionDirective::from_attributes(attrs) {
            Ok(directive) => self.render_collection(&directive),
            Err(err) => self.directive_error(err),
        }
    }

    /// Parse a `supabase_profile` attribute map and render it.
    pub fn render_profile_attributes(&self, attrs: &HashMap<String, String>) -> String {
        match ProfileDirective::from_attributes(attrs) {
            Ok(directive) => self.render_profile(&directive),
            Err(err) => self.directive_error(err),
        }
    }

    pub fn render_collection(&self, directive: &CollectionDirective) -> String {
        if directive.table.is_empty() {
            return self.directive_error(DirectiveError::MissingAttribute("table"));
        }
        if !self.client.is_configured() {
            return self.error(&self.notices.not_configured);
        }

        match self.client.fetch(&directive.table, &directive.query()) {
            Err(err) => self.api_error(err),
            Ok(rows) if rows.is_empty() => self.notice(&self.notices.no_data),
            Ok(rows) => {
                self.renderer
                    .render_collection(&rows, directive.template, &directive.class_name)
            }
        }
    }

    pub fn render_profile(&self, directive: &ProfileDirective) -> String {
        if directive.user_id.is_empty() {
            return self.directive_error(DirectiveError::MissingAttribute("user_id"));
        }
        if !self.client.is_configured() {
            return self.error(&self.notices.not_configured);
        }

        match self.client.fetch(PROFILES_TABLE, &directive.query()) {
            Err(err) => self.api_error(err),
            Ok(rows) => match rows.first() {
                None => self.notice(&self.notices.profile_not_found),
                Some(profile) => {
                    self.renderer
                        .render_profile(profile, directive.template, &directive.class_name)
                }
            },
        }
    }

    fn directive_error(&self, err: DirectiveError) -> String {
        match err {
            DirectiveError::MissingAttribute(name) => {
                let message = self.notices.missing_attribute.replace("{attribute}", name);
                self.error(&message)
            }
        }
    }

    fn api_error(&self, err: ApiError) -> String {
        debug!(kind = %err.kind(), error = %err, "Directive request failed");
        match err {
            ApiError::NotConfigured => self.error(&self.notices.not_configured),
            other => self.error(&other.to_string()),
        }
    }

    fn error(&self, message: &str) -> String {
        self.renderer.render_notice(NoticeKind::Error, message)
    }

    fn notice(&self, message: &str) -> String {
        self.renderer.render_notice(NoticeKind::Notice, message)
    }
}
