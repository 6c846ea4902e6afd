//! Serato history export (CSV).
//!
//! Columns: `name, artist, bpm, start time, end time, playtime, deck, notes,
//! album`. The first row holds the column headings and the second one
//! describes the whole session, so tracks start on the third row. Timings are
//! measured from the `start time` column.

use std::{io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};

use super::{
    ParseError, Track,
    timing::{TimeLayout, derive_durations},
};

pub const FIELD_COUNT: usize = 9;
const SKIPPED_ROWS: usize = 2;

const NAME: usize = 0;
const ARTIST: usize = 1;
const START_TIME: usize = 3;

pub fn parse(path: &Path) -> Result<Vec<Track>, ParseError> {
    parse_reader(super::open(path)?)
}

/// Reads the whole export before converting anything, so a single bad row
/// fails the file without producing a partial list.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Track>, ParseError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let rows: Vec<StringRecord> = csv.records().collect::<Result<_, _>>()?;

    if let Some((row, record)) = rows
        .iter()
        .enumerate()
        .find(|(_, record)| record.len() != FIELD_COUNT)
    {
        return Err(ParseError::FieldCount {
            row,
            expected: FIELD_COUNT,
            found: record.len(),
        });
    }

    let entries = rows
        .iter()
        .skip(SKIPPED_ROWS)
        .map(|record| (&record[START_TIME], Track::new(&record[ARTIST], &record[NAME])));

    derive_durations(TimeLayout::Clock12, SKIPPED_ROWS + 1, entries)
}
