//! HTML layouts for Supabase rows.
//!
//! Collections render as a table, a list or a grid of cards; a single
//! profile renders as a card or a detail view. All text is HTML-escaped.
//! Templates are embedded minijinja `.html` files with auto-escaping on.

pub mod format;
pub mod renderer;
pub mod template;

pub use format::{escape, format_value, sanitize_url, Labels};
pub use renderer::{HtmlRenderer, PLACEHOLDER_AVATAR};
pub use template::{NoticeKind, ProfileTemplate, TableTemplate, UnknownTemplate};
