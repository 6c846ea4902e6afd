use chrono::{FixedOffset, TimeZone, Utc};
use mixcast::utils::*;

#[test]
fn test_split_tags() {
    assert_eq!(
        split_tags(" house, techno ,,disco\n"),
        vec!["house", "techno", "disco"]
    );
    assert!(split_tags("").is_empty());
    assert!(split_tags(" , ").is_empty());
}

#[test]
fn test_or_default() {
    assert_eq!(or_default("\n", "house,techno"), "house,techno");
    assert_eq!(or_default("  ", " deep "), "deep");
    assert_eq!(or_default("disco\n", "house"), "disco");
}

#[test]
fn test_parse_publish_date_utc() {
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();

    assert_eq!(
        parse_publish_date("18/10/2026 09:30", &now).unwrap(),
        "2026-10-18T09:30:00Z"
    );
    assert_eq!(
        parse_publish_date(" 17/10/2026 12:01\n", &now).unwrap(),
        "2026-10-17T12:01:00Z"
    );
}

#[test]
fn test_parse_publish_date_converts_to_utc() {
    let berlin = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = berlin.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();

    assert_eq!(
        parse_publish_date("18/10/2026 09:30", &now).unwrap(),
        "2026-10-18T07:30:00Z"
    );
}

#[test]
fn test_parse_publish_date_rejects_past_and_garbage() {
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();

    let past = parse_publish_date("17/10/2026 12:00", &now).unwrap_err();
    assert!(past.contains("not in the future"));

    let garbage = parse_publish_date("2026-10-18 09:30", &now).unwrap_err();
    assert!(garbage.contains("Incorrect date format"));

    assert!(parse_publish_date("31/02/2027 10:00", &now).is_err());
}

#[test]
fn test_cloudcast_key() {
    let expected = "/spartacus/party-time/";

    assert_eq!(cloudcast_key("spartacus/party-time").unwrap(), expected);
    assert_eq!(cloudcast_key("/spartacus/party-time/").unwrap(), expected);
    assert_eq!(
        cloudcast_key("https://www.mixcloud.com/spartacus/party-time/").unwrap(),
        expected
    );
    assert_eq!(
        cloudcast_key("https://www.mixcloud.com/spartacus/party-time/edit/").unwrap(),
        expected
    );
    assert!(cloudcast_key(" / ").is_err());
    assert!(cloudcast_key("https://www.mixcloud.com/").is_err());
}

#[test]
fn test_edit_page_url() {
    assert_eq!(
        edit_page_url("/spartacus/party-time/"),
        "https://www.mixcloud.com/spartacus/party-time/edit/"
    );
}
