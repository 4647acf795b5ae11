use std::fmt;
use std::str::FromStr;

/// Layouts for a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TableTemplate {
    #[default]
    Table,
    List,
    Cards,
}

impl TableTemplate {
    pub const ALL: [TableTemplate; 3] = [Self::Table, Self::List, Self::Cards];

    pub fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::List => "list",
            Self::Cards => "cards",
        }
    }

    pub(crate) fn file(self) -> &'static str {
        match self {
            Self::Table => "table.html",
            Self::List => "list.html",
            Self::Cards => "cards.html",
        }
    }
}

/// Layouts for a single profile row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProfileTemplate {
    #[default]
    Card,
    Detail,
}

impl ProfileTemplate {
    pub const ALL: [ProfileTemplate; 2] = [Self::Card, Self::Detail];

    pub fn name(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Detail => "detail",
        }
    }

    pub(crate) fn file(self) -> &'static str {
        match self {
            Self::Card => "profile_card.html",
            Self::Detail => "profile_detail.html",
        }
    }
}

/// Inline message fragments shown in place of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// `supabase-error`: a failed request or a missing attribute.
    Error,
    /// `supabase-notice`: a successful request that matched nothing.
    Notice,
}

impl NoticeKind {
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Notice => "notice",
        }
    }
}

/// Returned when a template name matches no layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

impl FromStr for TableTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s.trim())
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

impl FromStr for ProfileTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s.trim())
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for TableTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ProfileTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
