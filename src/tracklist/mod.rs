//! # Tracklist Module
//!
//! Reads the tracklist exports of DJ software into an ordered list of
//! [`Track`]s and renders that list for the terminal and for the upload form.
//!
//! ## Formats
//!
//! - [`virtualdj`] - one `HH:MM : Artist - Song` line per track
//! - [`serato`] - Serato history CSV export (9 columns, two leading rows)
//! - [`reaper`] - Reaper Region/Marker Manager CSV export
//!
//! Each parser feeds its timestamps through [`timing::TimestampDeltas`], so
//! all formats share one duration convention: a track stores the seconds
//! elapsed since the previous entry started, and the first entry stores `0`.
//! Summing durations up to and including an entry therefore gives its start
//! offset within the recording (see [`render::start_times`]).
//!
//! ## Malformed rows
//!
//! A VirtualDJ line whose track part has no `" - "` is not fatal. The parser
//! hands it to a [`RowRepair`] implementation and uses the artist and song it
//! returns. Every other problem is a [`ParseError`] and the whole tracklist is
//! discarded.

mod error;
pub mod reaper;
pub mod render;
pub mod serato;
pub mod timing;
pub mod virtualdj;

use std::{
    fs::File,
    io::{self, ErrorKind},
    path::Path,
};

pub use error::{ParseError, TimestampError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub artist: String,
    pub song: String,
    pub chapter: Option<String>,
    /// Seconds since the previous entry started; `0` for the first entry.
    pub duration: i64,
}

impl Track {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
            ..Default::default()
        }
    }

    pub fn chapter(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            song: name.clone(),
            chapter: Some(name),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// The chapter name, if this entry is a chapter marker.
    pub fn chapter_name(&self) -> Option<&str> {
        self.chapter.as_deref().filter(|c| !c.is_empty())
    }
}

/// Opens a tracklist file for reading.
///
/// A directory opens fine on some platforms and only fails on the first read,
/// so it is rejected here as an open error.
pub(crate) fn open(path: &Path) -> Result<File, ParseError> {
    let open_file = || -> io::Result<File> {
        let file = File::open(path)?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(ErrorKind::IsADirectory, "is a directory"));
        }
        Ok(file)
    };

    open_file().map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// A row that could not be split into artist and song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    pub line: usize,
    pub timestamp: String,
    pub content: String,
}

/// Supplies replacement `(artist, song)` for a malformed row.
///
/// Implemented for closures, so tests can pass
/// `|row: &MalformedRow| Ok(("Artist".into(), "Song".into()))`.
pub trait RowRepair {
    fn repair(&mut self, row: &MalformedRow) -> Result<(String, String), String>;
}

impl<F> RowRepair for F
where
    F: FnMut(&MalformedRow) -> Result<(String, String), String>,
{
    fn repair(&mut self, row: &MalformedRow) -> Result<(String, String), String> {
        self(row)
    }
}

/// Refuses every repair, turning malformed rows into errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRepair;

impl RowRepair for NoRepair {
    fn repair(&mut self, row: &MalformedRow) -> Result<(String, String), String> {
        Err(format!("cannot split '{}' into artist and song", row.content))
    }
}

/// The tracklist export formats, used to pick a parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TracklistFormat {
    #[default]
    #[value(name = "virtualdj", alias = "vdj")]
    VirtualDj,
    Serato,
    Reaper,
}

impl TracklistFormat {
    pub fn parse(
        &self,
        path: &Path,
        repair: &mut dyn RowRepair,
    ) -> Result<Vec<Track>, ParseError> {
        match self {
            TracklistFormat::VirtualDj => virtualdj::parse(path, repair),
            TracklistFormat::Serato => serato::parse(path),
            TracklistFormat::Reaper => reaper::parse(path),
        }
    }
}

impl std::fmt::Display for TracklistFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TracklistFormat::VirtualDj => "VirtualDJ",
            TracklistFormat::Serato => "Serato",
            TracklistFormat::Reaper => "Reaper",
        };
        write!(f, "{}", name)
    }
}
