//! VirtualDJ tracklist text, one track per line:
//!
//! ```text
//! 21:04 : Moodymann - Shades Of Jae
//! 21:09 : Theo Parrish - Falling Up
//! ```

use std::{
    io::{BufRead, BufReader},
    path::Path,
};

use super::{
    MalformedRow, ParseError, RowRepair, Track,
    timing::{TimeLayout, TimestampDeltas},
};
use crate::warning;

const TIME_SEPARATOR: &str = " : ";
const TRACK_SEPARATOR: &str = " - ";

/// Parses the tracklist at `path`.
///
/// A missing file is not an error: a warning is printed and an empty list is
/// returned so the upload can go ahead without sections.
pub fn parse<R>(path: &Path, repair: &mut R) -> Result<Vec<Track>, ParseError>
where
    R: RowRepair + ?Sized,
{
    let file = match super::open(path) {
        Ok(file) => file,
        Err(e) if e.is_not_found() => {
            warning!("The file {} does not exist!", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    parse_reader(BufReader::new(file), repair)
}

pub fn parse_reader<B, R>(reader: B, repair: &mut R) -> Result<Vec<Track>, ParseError>
where
    B: BufRead,
    R: RowRepair + ?Sized,
{
    let mut deltas = TimestampDeltas::new(TimeLayout::Clock24);
    let mut tracks = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let number = i + 1;
        let line = line.map_err(|source| ParseError::Read {
            line: number,
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let (timestamp, content) =
            line.split_once(TIME_SEPARATOR)
                .ok_or_else(|| ParseError::MissingSeparator {
                    line: number,
                    content: line.clone(),
                })?;

        let (artist, song) = match content.split_once(TRACK_SEPARATOR) {
            Some((artist, song)) => (artist.to_string(), song.to_string()),
            None => {
                let row = MalformedRow {
                    line: number,
                    timestamp: timestamp.to_string(),
                    content: content.to_string(),
                };
                repair
                    .repair(&row)
                    .map_err(|reason| ParseError::Repair {
                        line: number,
                        reason,
                    })?
            }
        };

        let duration = deltas
            .advance(timestamp)
            .map_err(|source| ParseError::Timestamp {
                line: number,
                source,
            })?;

        tracks.push(Track::new(artist, song).with_duration(duration));
    }

    Ok(tracks)
}
