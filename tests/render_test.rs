use mixcast::tracklist::{
    NoRepair, Track,
    render::{format_duration, render, rows, section_fields, start_times},
    virtualdj,
};

// Helper function to create a tracklist with the given durations
fn tracks_with(durations: &[i64]) -> Vec<Track> {
    durations
        .iter()
        .enumerate()
        .map(|(i, d)| Track::new(format!("Artist {i}"), format!("Song {i}")).with_duration(*d))
        .collect()
}

#[test]
fn test_start_times_are_prefix_sums() {
    let tracks = tracks_with(&[0, 240, 420, 3000]);
    let starts = start_times(&tracks);

    assert_eq!(starts, vec![0, 240, 660, 3660]);
    assert!(starts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_start_times_empty() {
    assert!(start_times(&[]).is_empty());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00:00");
    assert_eq!(format_duration(59), "0:00:59");
    assert_eq!(format_duration(3725), "1:02:05");
    assert_eq!(format_duration(36_000), "10:00:00");
    assert_eq!(format_duration(-60), "-0:01:00");
}

#[test]
fn test_render_track_lines() {
    let input = "09:00 : DJ One - First Track\n09:03 : DJ Two - Second Track\n";
    let tracks = virtualdj::parse_reader(input.as_bytes(), &mut NoRepair).unwrap();

    assert_eq!(
        render(&tracks),
        vec![
            "1. DJ One - First Track 0:00:00 0:00:00",
            "2. DJ Two - Second Track 0:03:00 0:03:00",
        ]
    );
}

#[test]
fn test_render_chapter_lines() {
    let tracks = vec![
        Track::chapter("Intro"),
        Track::new("Four Tet", "Baby").with_duration(95),
        Track::chapter("Part Two").with_duration(300),
    ];

    assert_eq!(
        render(&tracks),
        vec![
            "1. [Intro] 0:00:00 0:00:00",
            "2. Four Tet - Baby 0:01:35 0:01:35",
            "3. [Part Two] 0:05:00 0:06:35",
        ]
    );
}

#[test]
fn test_empty_chapter_renders_as_track() {
    let mut track = Track::new("A", "B").with_duration(10);
    track.chapter = Some(String::new());

    assert_eq!(render(&[track]), vec!["1. A - B 0:00:10 0:00:10"]);
}

#[test]
fn test_rows() {
    let tracks = vec![
        Track::chapter("Intro"),
        Track::new("Four Tet", "Baby").with_duration(95),
    ];
    let rows = rows(&tracks);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 1);
    assert_eq!(rows[0].artist, "");
    assert_eq!(rows[0].title, "[Intro]");
    assert_eq!(rows[1].index, 2);
    assert_eq!(rows[1].artist, "Four Tet");
    assert_eq!(rows[1].title, "Baby");
    assert_eq!(rows[1].duration, "0:01:35");
    assert_eq!(rows[1].start, "0:01:35");
}

#[test]
fn test_section_fields() {
    let tracks = vec![
        Track::new("DJ One", "First Track"),
        Track::chapter("Breakdown").with_duration(120),
        Track::new("DJ Two", "Second Track").with_duration(180),
    ];

    let expected: Vec<(String, String)> = [
        ("sections-0-start_time", "0"),
        ("sections-0-artist", "DJ One"),
        ("sections-0-song", "First Track"),
        ("sections-1-start_time", "120"),
        ("sections-1-chapter", "Breakdown"),
        ("sections-2-start_time", "300"),
        ("sections-2-artist", "DJ Two"),
        ("sections-2-song", "Second Track"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    assert_eq!(section_fields(&tracks), expected);
}

#[test]
fn test_section_start_times_match_display() {
    let tracks = tracks_with(&[0, 61, 305, 1200]);
    let starts = start_times(&tracks);

    let submitted: Vec<i64> = section_fields(&tracks)
        .into_iter()
        .filter(|(k, _)| k.ends_with("-start_time"))
        .map(|(_, v)| v.parse().unwrap())
        .collect();
    assert_eq!(submitted, starts);

    for (line, start) in render(&tracks).iter().zip(&starts) {
        assert!(line.ends_with(&format_duration(*start)));
    }
}

#[test]
fn test_render_is_idempotent() {
    let input = "21:00 : A - One\n21:04 : B - Two\n21:11 : C - Three\n";
    let first = virtualdj::parse_reader(input.as_bytes(), &mut NoRepair).unwrap();
    let second = virtualdj::parse_reader(input.as_bytes(), &mut NoRepair).unwrap();

    assert_eq!(render(&first), render(&second));

    // recomputed independently from the stored durations
    let mut total = 0;
    let recomputed: Vec<i64> = first
        .iter()
        .map(|t| {
            total += t.duration;
            total
        })
        .collect();
    assert_eq!(start_times(&first), recomputed);
}
