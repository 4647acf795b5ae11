//! Layout tests for collection and profile rendering.

use serde_json::{json, Value as JsonValue};
use supabase_connector_core::{row, Row};
use supabase_connector_render::{
    escape, HtmlRenderer, ProfileTemplate, TableTemplate, PLACEHOLDER_AVATAR,
};

fn posts() -> Vec<Row> {
    vec![
        row![("id", 1), ("title", "First")],
        row![("id", 2), ("title", "Second")],
        row![("id", 3), ("title", "Third")],
    ]
}

fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html.find(start).expect("start marker") + start.len();
    let to = html[from..].find(end).expect("end marker") + from;
    &html[from..to]
}

// ─── Collections ──────────────────────────────────────────────

#[test]
fn empty_data_renders_nothing_for_every_layout() {
    let renderer = HtmlRenderer::new();
    for template in TableTemplate::ALL {
        assert_eq!(renderer.render_collection(&[], template, "x"), "");
    }
}

#[test]
fn table_header_and_body_counts() {
    let renderer = HtmlRenderer::new();
    let data = vec![
        row![("id", 1), ("title", "a"), ("views", 10)],
        row![("id", 2), ("title", "b"), ("views", 20)],
    ];
    let html = renderer.render_collection(&data, TableTemplate::Table, "supabase-data");

    let head = between(&html, "<thead>", "</thead>");
    let body = between(&html, "<tbody>", "</tbody>");
    assert_eq!(head.matches("<th>").count(), 3);
    assert_eq!(body.matches("<tr>").count(), 2);
    assert_eq!(body.matches("<td>").count(), 6);
    assert!(html.starts_with(r#"<div class="supabase-data-container">"#));
    assert!(html.contains(r#"<table class="supabase-data">"#));
}

#[test]
fn table_headers_follow_first_row_order() {
    let renderer = HtmlRenderer::new();
    let data = vec![row![("zeta", 1), ("alpha", 2)]];
    let html = renderer.render_collection(&data, TableTemplate::Table, "x");
    let zeta = html.find("<th>zeta</th>").unwrap();
    let alpha = html.find("<th>alpha</th>").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn table_cells_follow_each_row_order() {
    let renderer = HtmlRenderer::new();
    let data = vec![row![("a", "A1"), ("b", "B1")], row![("b", "B2"), ("a", "A2")]];
    let html = renderer.render_collection(&data, TableTemplate::Table, "x");
    let body = between(&html, "<tbody>", "</tbody>");
    let second_row = body.rsplit("<tr>").next().unwrap();
    assert!(second_row.find("B2").unwrap() < second_row.find("A2").unwrap());
}

#[test]
fn table_cells_are_formatted() {
    let renderer = HtmlRenderer::new();
    let data = vec![row![
        ("deleted_at", JsonValue::Null),
        ("active", true),
        ("tags", ["a", "b"]),
        ("note", "<b>hi</b>")
    ]];
    let html = renderer.render_collection(&data, TableTemplate::Table, "x");
    assert!(html.contains("<td><em>Null</em></td>"));
    assert!(html.contains("<td>True</td>"));
    assert!(html.contains("<td><pre>["));
    assert!(html.contains("<td>&lt;b&gt;hi&lt;&#x2f;b&gt;</td>"));
    assert!(!html.contains("<b>hi"));
}

#[test]
fn list_round_trip_three_rows_two_fields() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_collection(&posts(), TableTemplate::List, "x");

    assert!(html.starts_with(r#"<ul class="supabase-data-list x">"#));
    let items: Vec<&str> = html.split(r#"<li class="supabase-data-item">"#).skip(1).collect();
    assert_eq!(items.len(), 3);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.matches(r#"<div class="supabase-data-field">"#).count(), 2);
        let id = item.find(r#"<span class="supabase-data-label">id:</span>"#).unwrap();
        let title = item
            .find(r#"<span class="supabase-data-label">title:</span>"#)
            .unwrap();
        assert!(id < title);
        assert!(item.contains(&format!(
            r#"<span class="supabase-data-value">{}</span>"#,
            i + 1
        )));
    }
}

#[test]
fn cards_one_card_per_row() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_collection(&posts(), TableTemplate::Cards, "grid");

    assert!(html.starts_with(r#"<div class="supabase-data-grid grid">"#));
    assert_eq!(html.matches(r#"<div class="supabase-data-card">"#).count(), 3);
    assert_eq!(html.matches(r#"<div class="supabase-data-label">title</div>"#).count(), 3);
    assert!(html.contains(r#"<div class="supabase-data-value">Second</div>"#));
}

#[test]
fn class_name_is_escaped() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_collection(&posts(), TableTemplate::Table, r#""><script>"#);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&quot;&gt;&lt;script&gt;"));
}

#[test]
fn column_names_are_escaped() {
    let renderer = HtmlRenderer::new();
    let data = vec![row![("<i>", 1)]];
    let html = renderer.render_collection(&data, TableTemplate::List, "x");
    assert!(html.contains("&lt;i&gt;:"));
}

// ─── Profiles ─────────────────────────────────────────────────

fn profile() -> Row {
    row![
        ("id", "8d0f"),
        ("username", "ada"),
        ("full_name", "Ada Lovelace"),
        ("avatar_url", "https://cdn.example.com/ada.png"),
        ("website", "https://ada.dev"),
        ("bio", JsonValue::Null)
    ]
}

#[test]
fn profile_card_shows_known_fields() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_profile(&profile(), ProfileTemplate::Card, "supabase-profile");

    assert!(html.starts_with(r#"<div class="supabase-profile-container supabase-profile">"#));
    assert!(html.contains(r#"<div class="supabase-profile-card">"#));
    assert!(html.contains(&format!(
        r#"<img src="{}" alt="ada" />"#,
        escape("https://cdn.example.com/ada.png")
    )));
    assert!(html.contains(r#"<h3 class="supabase-profile-username">ada</h3>"#));
    assert!(html.contains(r#"<div class="supabase-profile-fullname">Ada Lovelace</div>"#));
    assert!(html.contains(&format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape("https://ada.dev/"),
        escape("https://ada.dev")
    )));
    // Card never lists other columns.
    assert!(!html.contains("8d0f"));
    assert!(!html.contains("bio"));
}

#[test]
fn profile_card_omits_missing_sections() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_profile(&row![("id", "x"), ("username", "")], ProfileTemplate::Card, "p");

    assert!(html.contains(&format!(r#"<img src="{}" alt="User" />"#, escape(PLACEHOLDER_AVATAR))));
    assert!(!html.contains("supabase-profile-username"));
    assert!(!html.contains("supabase-profile-fullname"));
    assert!(!html.contains("supabase-profile-website"));
    assert!(html.contains(r#"<div class="supabase-profile-info">"#));
}

#[test]
fn profile_card_unsafe_website_is_plain_text() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_profile(
        &row![("website", "javascript:alert(1)")],
        ProfileTemplate::Card,
        "p",
    );
    assert!(html.contains("supabase-profile-website"));
    assert!(!html.contains("<a "));
    assert!(html.contains("javascript:alert(1)"));
}

#[test]
fn profile_detail_lists_fields_without_avatar_url() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_profile(&profile(), ProfileTemplate::Detail, "p");

    assert!(html.contains(r#"<div class="supabase-profile-detail">"#));
    assert!(!html.contains(r#"<span class="supabase-profile-label">avatar_url:</span>"#));
    assert_eq!(html.matches(r#"<div class="supabase-profile-field">"#).count(), 5);
    // avatar still shown as image
    assert!(html.contains(&escape("https://cdn.example.com/ada.png")));

    let labels: Vec<usize> = ["id", "username", "full_name", "website", "bio"]
        .iter()
        .map(|key| {
            html.find(&format!(r#"<span class="supabase-profile-label">{}:</span>"#, key))
                .unwrap()
        })
        .collect();
    assert!(labels.windows(2).all(|w| w[0] < w[1]));

    assert!(html.contains(r#"<span class="supabase-profile-label">bio:</span> <em>Null</em>"#));
    assert!(html.contains(&format!(
        r#"<span class="supabase-profile-label">website:</span> <a href="{}""#,
        escape("https://ada.dev/")
    )));
}

#[test]
fn profile_detail_without_avatar_uses_placeholder() {
    let renderer = HtmlRenderer::new();
    let html = renderer.render_profile(
        &row![("id", 1), ("avatar_url", JsonValue::Null), ("meta", json!({"k": "v"}))],
        ProfileTemplate::Detail,
        "p",
    );
    assert!(html.contains(&escape(PLACEHOLDER_AVATAR)));
    assert!(!html.contains("avatar_url:"));
    assert!(html.contains("<pre>{"));
}

#[test]
fn empty_profile_renders_nothing() {
    let renderer = HtmlRenderer::new();
    for template in ProfileTemplate::ALL {
        assert_eq!(renderer.render_profile(&Row::new(), template, "p"), "");
    }
}

#[test]
fn translated_labels() {
    let renderer = HtmlRenderer::with_labels(supabase_connector_render::Labels {
        null: "Nul".into(),
        true_label: "Vrai".into(),
        false_label: "Faux".into(),
        user: "Utilisateur".into(),
    });
    let html = renderer.render_profile(&row![("ok", false), ("x", JsonValue::Null)], ProfileTemplate::Detail, "p");
    assert!(html.contains(r#"alt="Utilisateur""#));
    assert!(html.contains("Faux"));
    assert!(html.contains("<em>Nul</em>"));
    assert_eq!(renderer.format_value(&json!(true)), "Vrai");
}
