use mixcast::tracklist::{
    ParseError, Track,
    timing::{TimeLayout, TimestampDeltas, derive_durations},
};

#[test]
fn test_clock24_layout() {
    assert_eq!(TimeLayout::Clock24.parse_millis("00:00").unwrap(), 0);
    assert_eq!(TimeLayout::Clock24.parse_millis("09:03").unwrap(), 32_580_000);
    assert_eq!(TimeLayout::Clock24.parse_millis(" 23:59 ").unwrap(), 86_340_000);
    assert!(TimeLayout::Clock24.parse_millis("24:00").is_err());
    assert!(TimeLayout::Clock24.parse_millis("9.03").is_err());
}

#[test]
fn test_clock12_layout() {
    assert_eq!(TimeLayout::Clock12.parse_millis("12:00:00 AM").unwrap(), 0);
    assert_eq!(TimeLayout::Clock12.parse_millis("12:00:30 PM").unwrap(), 43_230_000);
    assert_eq!(TimeLayout::Clock12.parse_millis("09:15:05 pm").unwrap(), 76_505_000);
    assert!(TimeLayout::Clock12.parse_millis("21:15:05").is_err());
}

#[test]
fn test_elapsed_layout() {
    assert_eq!(TimeLayout::Elapsed.parse_millis("42").unwrap(), 42_000);
    assert_eq!(TimeLayout::Elapsed.parse_millis("1:32.5").unwrap(), 92_500);
    assert_eq!(TimeLayout::Elapsed.parse_millis("1:02:03.0456").unwrap(), 3_723_045);
    assert!(TimeLayout::Elapsed.parse_millis("").is_err());
    assert!(TimeLayout::Elapsed.parse_millis("1:2:3:4").is_err());
    assert!(TimeLayout::Elapsed.parse_millis("1:-2").is_err());
    assert!(TimeLayout::Elapsed.parse_millis("1.2.3").is_err());

    // too large for i64 milliseconds
    assert!(TimeLayout::Elapsed.parse_millis("999999999999999999:0:0").is_err());
    assert!(TimeLayout::Elapsed.parse_millis("999999999999999:0").is_err());
    assert!(TimeLayout::Elapsed.parse_millis("99999999999999999999").is_err());
}

#[test]
fn test_timestamp_error_names_layout() {
    let err = TimeLayout::Clock12.parse_millis("noon").unwrap_err();

    assert_eq!(err.value, "noon");
    assert_eq!(err.expected, "HH:MM:SS AM/PM");
}

#[test]
fn test_first_delta_is_zero() {
    let mut deltas = TimestampDeltas::new(TimeLayout::Clock24);

    assert_eq!(deltas.advance("13:37").unwrap(), 0);
    assert_eq!(deltas.advance("13:40").unwrap(), 180);
    assert_eq!(deltas.advance("13:40").unwrap(), 0);
}

#[test]
fn test_sub_second_remainder_is_truncated() {
    let mut deltas = TimestampDeltas::new(TimeLayout::Elapsed);

    deltas.advance("0.600").unwrap();
    assert_eq!(deltas.advance("1.300").unwrap(), 0);
    assert_eq!(deltas.advance("3.299").unwrap(), 1);
}

#[test]
fn test_derive_durations_increasing_sequence() {
    let stamps = ["20:00", "20:03", "20:09", "20:30", "21:45"];
    let entries = stamps
        .iter()
        .enumerate()
        .map(|(i, s)| (*s, Track::new(format!("Artist {i}"), format!("Song {i}"))));

    let tracks = derive_durations(TimeLayout::Clock24, 1, entries).unwrap();
    let seconds: Vec<i64> = stamps
        .iter()
        .map(|s| TimeLayout::Clock24.parse_millis(s).unwrap() / 1000)
        .collect();

    assert_eq!(tracks.len(), stamps.len());
    assert_eq!(tracks[0].duration, 0);
    for i in 0..stamps.len() - 1 {
        assert_eq!(tracks[i + 1].duration, seconds[i + 1] - seconds[i]);
        assert_eq!(tracks[i].artist, format!("Artist {i}"));
    }

    let total: i64 = tracks.iter().map(|t| t.duration).sum();
    assert_eq!(total, seconds[stamps.len() - 1] - seconds[0]);
}

#[test]
fn test_derive_durations_fails_fast() {
    let entries = vec![
        ("20:00", Track::new("A", "One")),
        ("later", Track::new("B", "Two")),
        ("20:10", Track::new("C", "Three")),
    ];

    let err = derive_durations(TimeLayout::Clock24, 1, entries).unwrap_err();
    assert!(matches!(err, ParseError::Timestamp { line: 2, .. }));
}

#[test]
fn test_derive_durations_reports_file_line() {
    let entries = [
        ("0:00", Track::new("A", "One")),
        ("0:30", Track::new("B", "Two")),
        ("soon", Track::new("C", "Three")),
    ];

    let err = derive_durations(TimeLayout::Elapsed, 5, entries).unwrap_err();
    assert!(matches!(err, ParseError::Timestamp { line: 7, .. }));
}
