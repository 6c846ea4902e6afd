//! Turns the timestamps of a tracklist into per-entry durations.
//!
//! Every format stores absolute start times; what the upload form wants is the
//! time between entries. [`TimestampDeltas`] walks the timestamps in file order
//! and reports, for each one, the whole seconds elapsed since the one before it.
//! The first timestamp has nothing to compare against and always yields `0`.
//!
//! Wall-clock layouts carry no date. A recording that runs past midnight
//! produces a negative delta at the crossing; that value is passed through
//! untouched.

use chrono::{NaiveTime, Timelike};

use super::{Track, TimestampError};

/// The fixed timestamp layouts understood by the parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// `HH:MM`, 24-hour clock without seconds (VirtualDJ).
    Clock24,
    /// `HH:MM:SS AM`, 12-hour clock with seconds (Serato).
    Clock12,
    /// `[[H:]M:]S[.fff]`, offset from the start of the recording (Reaper).
    Elapsed,
}

impl TimeLayout {
    pub fn describe(&self) -> &'static str {
        match self {
            TimeLayout::Clock24 => "HH:MM",
            TimeLayout::Clock12 => "HH:MM:SS AM/PM",
            TimeLayout::Elapsed => "H:MM:SS.fff",
        }
    }

    /// Parses `raw` into milliseconds since midnight (clock layouts) or since
    /// the start of the recording (elapsed layout).
    pub fn parse_millis(&self, raw: &str) -> Result<i64, TimestampError> {
        let value = raw.trim();
        let parsed = match self {
            TimeLayout::Clock24 => clock_millis(value, "%H:%M"),
            TimeLayout::Clock12 => clock_millis(value, "%I:%M:%S %p"),
            TimeLayout::Elapsed => elapsed_millis(value),
        };

        parsed.ok_or_else(|| TimestampError {
            value: value.to_string(),
            expected: self.describe(),
        })
    }
}

fn clock_millis(value: &str, layout: &str) -> Option<i64> {
    NaiveTime::parse_from_str(value, layout)
        .ok()
        .map(|t| t.num_seconds_from_midnight() as i64 * 1000)
}

fn elapsed_millis(value: &str) -> Option<i64> {
    let (clock, fraction) = value.split_once('.').unwrap_or((value, ""));

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut seconds: i64 = 0;
    for part in parts {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        seconds = seconds
            .checked_mul(60)?
            .checked_add(part.parse::<i64>().ok()?)?;
    }

    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let millis: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(3)
        .collect();

    seconds
        .checked_mul(1000)?
        .checked_add(millis.parse::<i64>().ok()?)
}

/// Forward cursor over the timestamps of one tracklist.
#[derive(Debug)]
pub struct TimestampDeltas {
    layout: TimeLayout,
    last: Option<i64>,
}

impl TimestampDeltas {
    pub fn new(layout: TimeLayout) -> Self {
        Self { layout, last: None }
    }

    /// Consumes the next timestamp and returns the whole seconds since the
    /// previous one, truncating any sub-second remainder.
    pub fn advance(&mut self, raw: &str) -> Result<i64, TimestampError> {
        let current = self.layout.parse_millis(raw)?;
        let delta = match self.last {
            Some(previous) => (current - previous) / 1000,
            None => 0,
        };
        self.last = Some(current);
        Ok(delta)
    }
}

/// Fills in the duration of each track from its raw start timestamp.
///
/// # Arguments
///
/// * `layout` - Layout every timestamp of the list is written in
/// * `first_line` - Line (or row) number of the first entry in its file, used
///   for error reporting; entries are assumed to sit on consecutive lines
/// * `entries` - `(raw timestamp, track)` pairs in file order
///
/// # Behavior
///
/// Entries keep their order. The first bad timestamp aborts the whole list,
/// so a caller never sees a partially timed tracklist.
///
/// # Example
///
/// ```
/// let tracks = derive_durations(
///     TimeLayout::Clock24,
///     1,
///     [("21:00", Track::new("A", "One")), ("21:04", Track::new("B", "Two"))],
/// )?;
/// assert_eq!(tracks[1].duration, 240);
/// ```
pub fn derive_durations<I, S>(
    layout: TimeLayout,
    first_line: usize,
    entries: I,
) -> Result<Vec<Track>, super::ParseError>
where
    I: IntoIterator<Item = (S, Track)>,
    S: AsRef<str>,
{
    let mut deltas = TimestampDeltas::new(layout);

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (raw, track))| {
            let duration = deltas
                .advance(raw.as_ref())
                .map_err(|source| super::ParseError::Timestamp {
                    line: first_line + i,
                    source,
                })?;
            Ok(track.with_duration(duration))
        })
        .collect()
}
