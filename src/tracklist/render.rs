//! Display and form encoding of a parsed tracklist.
//!
//! Both outputs share [`start_times`], so what the user sees in the terminal is
//! exactly what gets submitted as `sections-{i}-start_time`.

use tabled::Table;

use super::Track;
use crate::types::TracklistRow;

/// Running total of durations, including each entry's own duration.
pub fn start_times(tracks: &[Track]) -> Vec<i64> {
    tracks
        .iter()
        .scan(0i64, |total, track| {
            *total += track.duration;
            Some(*total)
        })
        .collect()
}

/// Formats seconds as `H:MM:SS`.
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.abs();
    format!(
        "{sign}{}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

/// One line per entry, numbered from 1.
pub fn render(tracks: &[Track]) -> Vec<String> {
    tracks
        .iter()
        .zip(start_times(tracks))
        .enumerate()
        .map(|(i, (track, start))| match track.chapter_name() {
            Some(chapter) => format!(
                "{}. [{}] {} {}",
                i + 1,
                chapter,
                format_duration(track.duration),
                format_duration(start)
            ),
            None => format!(
                "{}. {} - {} {} {}",
                i + 1,
                track.artist,
                track.song,
                format_duration(track.duration),
                format_duration(start)
            ),
        })
        .collect()
}

pub fn rows(tracks: &[Track]) -> Vec<TracklistRow> {
    tracks
        .iter()
        .zip(start_times(tracks))
        .enumerate()
        .map(|(i, (track, start))| {
            let (artist, title) = match track.chapter_name() {
                Some(chapter) => (String::new(), format!("[{}]", chapter)),
                None => (track.artist.clone(), track.song.clone()),
            };

            TracklistRow {
                index: i + 1,
                artist,
                title,
                duration: format_duration(track.duration),
                start: format_duration(start),
            }
        })
        .collect()
}

pub fn table(tracks: &[Track]) -> Table {
    Table::new(rows(tracks))
}

/// The `sections-*` fields of the upload form, indexed from 0.
pub fn section_fields(tracks: &[Track]) -> Vec<(String, String)> {
    let mut fields = Vec::with_capacity(tracks.len() * 3);

    for (i, (track, start)) in tracks.iter().zip(start_times(tracks)).enumerate() {
        fields.push((format!("sections-{i}-start_time"), start.to_string()));

        match track.chapter_name() {
            Some(chapter) => {
                fields.push((format!("sections-{i}-chapter"), chapter.to_string()));
            }
            None => {
                fields.push((format!("sections-{i}-artist"), track.artist.clone()));
                fields.push((format!("sections-{i}-song"), track.song.clone()));
            }
        }
    }

    fields
}
