//! Reaper Region/Marker Manager export (CSV).
//!
//! ```text
//! #,Name,Start,End,Length
//! M1,Intro,0:00.000,,
//! M2,Floating Points - Silhouettes,1:32.500,,
//! ```
//!
//! Start times are offsets into the project, not wall-clock times. Markers
//! named `Artist - Song` become tracks, anything else becomes a chapter.

use std::{io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};

use super::{
    ParseError, Track,
    timing::{TimeLayout, derive_durations},
};

const NAME_COLUMN: &str = "Name";
const START_COLUMN: &str = "Start";

pub fn parse(path: &Path) -> Result<Vec<Track>, ParseError> {
    parse_reader(super::open(path)?)
}

pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Track>, ParseError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let name = column(&headers, NAME_COLUMN)?;
    let start = column(&headers, START_COLUMN)?;

    let rows: Vec<StringRecord> = csv.records().collect::<Result<_, _>>()?;
    let entries = rows.iter().map(|record| {
        (
            record.get(start).unwrap_or_default(),
            marker_track(record.get(name).unwrap_or_default()),
        )
    });

    // header is line 1
    derive_durations(TimeLayout::Elapsed, 2, entries)
}

fn column(headers: &StringRecord, wanted: &'static str) -> Result<usize, ParseError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        .ok_or(ParseError::MissingColumn { column: wanted })
}

fn marker_track(name: &str) -> Track {
    match name.split_once(" - ") {
        Some((artist, song)) => Track::new(artist.trim(), song.trim()),
        None => Track::chapter(name.trim()),
    }
}
