//! # CLI Module
//!
//! User-facing commands of mixcast. Each command loads what it needs
//! (settings, tracklist), talks to [`crate::mixcloud`] and reports through the
//! crate's output macros. Fatal problems end the process via `error!`.
//!
//! ## Commands
//!
//! - [`auth`] - authorize with Mixcloud and store the access token and default tags
//! - [`upload`] - upload a new cloudcast or edit an existing one
//! - [`tracklist`] - parse and display a tracklist without uploading
//! - [`about`] - version and configuration locations
//!
//! ## Usage
//!
//! ```bash
//! mixcast auth
//! mixcast upload --file mix.mp3 --cover cover.jpg --tracklist history.csv --format serato
//! mixcast upload --edit spartacus/party-time --tracklist tracklist.txt
//! mixcast tracklist markers.csv --format reaper
//! ```

mod about;
mod auth;
pub mod prompt;
mod tracklist;
mod upload;

use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

pub use about::about;
pub use auth::auth;
pub use tracklist::tracklist;
pub use upload::{UploadOptions, upload};

use crate::{
    error, info,
    tracklist::{Track, TracklistFormat},
};

/// Parses a tracklist, asking on the terminal for any track that cannot be
/// split.
///
/// # Arguments
///
/// * `path` - Tracklist file exported by the DJ software
/// * `format` - Which parser to use
///
/// # Behavior
///
/// - Malformed VirtualDJ rows are repaired through [`prompt::TerminalRepair`]
/// - A missing VirtualDJ file yields an empty list after a warning
/// - Any other parse problem ends the program via `error!`
///
/// # Returns
///
/// The timed tracks in file order.
pub(crate) fn load_tracklist(path: &Path, format: TracklistFormat) -> Vec<Track> {
    info!("Reading {} tracklist {}", format, path.display());

    match format.parse(path, &mut prompt::TerminalRepair) {
        Ok(tracks) => tracks,
        Err(e) => error!("Error processing {} tracklist - {}", format, e),
    }
}

/// Steady spinner for network calls whose length is unknown.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
