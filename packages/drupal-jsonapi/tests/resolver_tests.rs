//! End-to-end resolution over realistic CMS documents.
//!
//! Fixtures mirror what the live endpoint returns for a page request
//! with `include=` chains: a primary node plus a flat included table of
//! media and file entities, some of them deliberately incomplete.

use drupal_jsonapi::{
    normalize_text, resolve_media_url, resolve_media_urls, to_absolute_url, to_safe_link_href,
    Document, Hop, TextMode,
};
use serde_json::json;

const BASE: &str = "https://cms.lakeshorehomecare.com";

const MEDIA_CHAIN: [Hop<'static>; 2] = [
    Hop {
        field: "field_hero_image",
        expected_type: Some("media--image"),
    },
    Hop {
        field: "field_media_image",
        expected_type: Some("file--file"),
    },
];

/// A home-page response: hero image fully included, body in the
/// `{value, processed}` shape.
fn home_page_document() -> Document {
    serde_json::from_value(json!({
        "data": {
            "id": "7f3a2c10-9a1e-4f6d-8a78-0f7d6f1e2b3c",
            "type": "node--home_page",
            "attributes": {
                "title": "Care that comes to you",
                "body": {
                    "value": "<p>We provide <strong>in-home care</strong> across the lakeshore.</p>",
                    "processed": "<p>We provide <strong>in-home care</strong> across the lakeshore.</p>"
                },
                "field_cta_link": {"uri": "/services", "title": "Our services"}
            },
            "relationships": {
                "field_hero_image": {
                    "data": {"id": "media-hero", "type": "media--image"}
                }
            }
        },
        "included": [
            {
                "id": "media-hero",
                "type": "media--image",
                "attributes": {"name": "hero.jpg"},
                "relationships": {
                    "field_media_image": {
                        "data": {"id": "file-hero", "type": "file--file"}
                    }
                }
            },
            {
                "id": "file-hero",
                "type": "file--file",
                "attributes": {"uri": {"value": "public://hero.jpg", "url": "/sites/default/files/hero.jpg"}}
            }
        ]
    }))
    .unwrap()
}

#[test]
fn full_chain_resolution_yields_base_plus_file_path() {
    let doc = home_page_document();
    let node = doc.primary().unwrap();

    let url = resolve_media_url(node, &doc.included, &MEDIA_CHAIN, BASE);
    assert_eq!(
        url.as_deref(),
        Some("https://cms.lakeshorehomecare.com/sites/default/files/hero.jpg")
    );
}

#[test]
fn resolution_is_pure_and_repeatable_over_the_same_document() {
    let doc = home_page_document();
    let node = doc.primary().unwrap();

    let first = resolve_media_url(node, &doc.included, &MEDIA_CHAIN, BASE);
    let second = resolve_media_url(node, &doc.included, &MEDIA_CHAIN, BASE);
    assert_eq!(first, second);
}

#[test]
fn sparse_fetch_without_included_table_degrades_to_none() {
    let mut doc = home_page_document();
    doc.included.clear();

    let node = doc.primary().unwrap();
    assert_eq!(resolve_media_url(node, &doc.included, &MEDIA_CHAIN, BASE), None);
}

#[test]
fn body_field_normalizes_for_both_modes() {
    let doc = home_page_document();
    let body = doc.primary().unwrap().attr("body").unwrap();

    assert_eq!(
        normalize_text(body, TextMode::Html),
        "<p>We provide <strong>in-home care</strong> across the lakeshore.</p>"
    );
    assert_eq!(
        normalize_text(body, TextMode::Plain),
        "We provide in-home care across the lakeshore."
    );
}

#[test]
fn cta_link_uri_passes_href_validation() {
    let doc = home_page_document();
    let uri = doc
        .primary()
        .unwrap()
        .attr("field_cta_link")
        .and_then(|link| link.get("uri"))
        .and_then(|uri| uri.as_str())
        .unwrap();

    assert_eq!(to_safe_link_href(uri), "/services");
}

#[test]
fn gallery_resolution_preserves_relative_order_of_survivors() {
    let doc: Document = serde_json::from_value(json!({
        "data": {
            "id": "loc-1",
            "type": "node--location",
            "relationships": {
                "field_photos": {
                    "data": [
                        {"id": "m-a", "type": "media--image"},
                        {"id": "m-b", "type": "media--image"},
                        {"id": "m-c", "type": "media--document"},
                        {"id": "m-d", "type": "media--image"}
                    ]
                }
            }
        },
        "included": [
            {
                "id": "m-d",
                "type": "media--image",
                "relationships": {"field_media_image": {"data": {"id": "f-d", "type": "file--file"}}}
            },
            {
                "id": "m-a",
                "type": "media--image",
                "relationships": {"field_media_image": {"data": {"id": "f-a", "type": "file--file"}}}
            },
            {"id": "f-a", "type": "file--file", "attributes": {"uri": {"url": "/files/a.jpg"}}},
            {"id": "f-d", "type": "file--file", "attributes": {"uri": {"url": "/files/d.jpg"}}}
        ]
    }))
    .unwrap();

    // m-b is not included, m-c has the wrong media type: both drop out
    // without leaving placeholder entries, and a/d keep their order even
    // though the included table lists them reversed.
    let chain = [
        Hop::new("field_photos", "media--image"),
        Hop::new("field_media_image", "file--file"),
    ];
    let urls = resolve_media_urls(doc.primary().unwrap(), &doc.included, &chain, BASE);
    assert_eq!(
        urls,
        [
            "https://cms.lakeshorehomecare.com/files/a.jpg",
            "https://cms.lakeshorehomecare.com/files/d.jpg"
        ]
    );
}

#[test]
fn absolute_file_urls_from_a_cdn_are_left_alone() {
    let doc: Document = serde_json::from_value(json!({
        "data": {
            "id": "n-1",
            "type": "node--home_page",
            "relationships": {
                "field_hero_image": {"data": {"id": "m-1", "type": "media--image"}}
            }
        },
        "included": [
            {
                "id": "m-1",
                "type": "media--image",
                "relationships": {"field_media_image": {"data": {"id": "f-1", "type": "file--file"}}}
            },
            {
                "id": "f-1",
                "type": "file--file",
                "attributes": {"uri": {"url": "https://cdn.example.com/hero.jpg"}}
            }
        ]
    }))
    .unwrap();

    let url = resolve_media_url(doc.primary().unwrap(), &doc.included, &MEDIA_CHAIN, BASE);
    assert_eq!(url.as_deref(), Some("https://cdn.example.com/hero.jpg"));
}

#[test]
fn shared_ids_across_types_do_not_collide() {
    let doc: Document = serde_json::from_value(json!({
        "data": {
            "id": "n-1",
            "type": "node--home_page",
            "relationships": {
                "field_hero_image": {"data": {"id": "same-id", "type": "media--image"}}
            }
        },
        "included": [
            {"id": "same-id", "type": "file--file", "attributes": {"uri": {"url": "/files/wrong.jpg"}}},
            {
                "id": "same-id",
                "type": "media--image",
                "relationships": {"field_media_image": {"data": {"id": "f-1", "type": "file--file"}}}
            },
            {"id": "f-1", "type": "file--file", "attributes": {"uri": {"url": "/files/right.jpg"}}}
        ]
    }))
    .unwrap();

    let url = resolve_media_url(doc.primary().unwrap(), &doc.included, &MEDIA_CHAIN, BASE);
    assert_eq!(
        url.as_deref(),
        Some("https://cms.lakeshorehomecare.com/files/right.jpg")
    );
}

#[test]
fn collection_document_resolves_per_entity() {
    let doc: Document = serde_json::from_value(json!({
        "data": [
            {
                "id": "svc-1",
                "type": "node--service",
                "attributes": {"title": "Companion care"},
                "relationships": {
                    "field_hero_image": {"data": {"id": "m-1", "type": "media--image"}}
                }
            },
            {
                "id": "svc-2",
                "type": "node--service",
                "attributes": {"title": "Respite care"}
            }
        ],
        "included": [
            {
                "id": "m-1",
                "type": "media--image",
                "relationships": {"field_media_image": {"data": {"id": "f-1", "type": "file--file"}}}
            },
            {"id": "f-1", "type": "file--file", "attributes": {"uri": {"url": "/files/companion.jpg"}}}
        ]
    }))
    .unwrap();

    let urls: Vec<Option<String>> = doc
        .entities()
        .iter()
        .map(|node| resolve_media_url(node, &doc.included, &MEDIA_CHAIN, BASE))
        .collect();

    assert_eq!(
        urls,
        [
            Some("https://cms.lakeshorehomecare.com/files/companion.jpg".to_string()),
            None
        ]
    );
}

#[test]
fn absolutization_round_trips_with_trailing_slash_bases() {
    let joined = to_absolute_url(Some("/files/a.jpg"), "https://api.example.com/");
    assert_eq!(joined, "https://api.example.com/files/a.jpg");
    assert_eq!(
        to_absolute_url(Some(joined.as_str()), "https://api.example.com/"),
        joined
    );
}
