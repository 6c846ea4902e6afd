use std::path::PathBuf;

use mixcast::{
    mixcloud::upload::{form_fields, outcome, upload_url},
    tracklist::Track,
    types::{Cloudcast, ProOptions, UploadResponse},
};

fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// Helper function to create a test cloudcast
fn create_test_cloudcast() -> Cloudcast {
    Cloudcast {
        name: "Saturday Session\n".to_string(),
        description: "Live from the basement".to_string(),
        tags: vec!["house".to_string(), "techno".to_string()],
        audio: Some(PathBuf::from("mix.mp3")),
        cover: None,
        pro: None,
    }
}

#[test]
fn test_form_fields_order() {
    let tracks = vec![
        Track::new("DJ One", "First Track"),
        Track::new("DJ Two", "Second Track").with_duration(180),
    ];

    assert_eq!(
        form_fields(&create_test_cloudcast(), &tracks),
        pairs(&[
            ("name", "Saturday Session"),
            ("description", "Live from the basement"),
            ("tags-0-tag", "house"),
            ("tags-1-tag", "techno"),
            ("sections-0-start_time", "0"),
            ("sections-0-artist", "DJ One"),
            ("sections-0-song", "First Track"),
            ("sections-1-start_time", "180"),
            ("sections-1-artist", "DJ Two"),
            ("sections-1-song", "Second Track"),
        ])
    );
}

#[test]
fn test_form_fields_skip_blank_name_and_description() {
    let cloudcast = Cloudcast {
        name: " ".to_string(),
        description: String::new(),
        tags: Vec::new(),
        ..Default::default()
    };

    assert!(form_fields(&cloudcast, &[]).is_empty());
}

#[test]
fn test_form_fields_pro_options() {
    let cloudcast = Cloudcast {
        pro: Some(ProOptions {
            publish_date: Some("2026-10-18T09:30:00Z".to_string()),
            disable_comments: true,
            hide_stats: false,
            unlisted: true,
        }),
        tags: Vec::new(),
        ..create_test_cloudcast()
    };

    assert_eq!(
        form_fields(&cloudcast, &[]),
        pairs(&[
            ("name", "Saturday Session"),
            ("description", "Live from the basement"),
            ("publish_date", "2026-10-18T09:30:00Z"),
            ("disable_comments", "1"),
            ("unlisted", "1"),
        ])
    );
}

#[test]
fn test_pro_options_is_empty() {
    assert!(ProOptions::default().is_empty());
    assert!(
        !ProOptions {
            hide_stats: true,
            ..Default::default()
        }
        .is_empty()
    );
}

#[test]
fn test_upload_url() {
    assert!(upload_url(None).ends_with("/upload/"));
    assert!(upload_url(Some("/spartacus/party-time/")).ends_with("/upload/spartacus/party-time/edit/"));
}

#[test]
fn test_outcome_success() {
    let response: UploadResponse = serde_json::from_str(
        r#"{"result": {"success": true, "key": "/spartacus/party-time/", "message": "Uploaded"}}"#,
    )
    .unwrap();

    let result = outcome(response).unwrap();
    assert_eq!(result.key, "/spartacus/party-time/");
    assert!(result.success);
}

#[test]
fn test_outcome_error_with_details() {
    let response: UploadResponse = serde_json::from_str(
        r#"{
            "error": {"message": "Your upload contained errors", "type": "UploadFailedException"},
            "details": {"sections-1-start_time": ["Must be later than previous section"], "name": ["Required"]}
        }"#,
    )
    .unwrap();

    let message = outcome(response).unwrap_err();
    assert_eq!(
        message,
        "Your upload contained errors\n  name: Required\n  sections-1-start_time: Must be later than previous section"
    );
}

#[test]
fn test_outcome_rate_limited() {
    let response: UploadResponse = serde_json::from_str(
        r#"{"error": {"message": "Slow down", "type": "RateLimitException", "retry_after": 30}}"#,
    )
    .unwrap();

    let message = outcome(response).unwrap_err();
    assert!(message.starts_with("Slow down"));
    assert!(message.ends_with("Retry after 30 seconds."));
}

#[test]
fn test_outcome_empty_response() {
    let response: UploadResponse = serde_json::from_str("{}").unwrap();

    assert!(outcome(response).is_err());
}
