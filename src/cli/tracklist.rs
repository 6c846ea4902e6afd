use std::path::Path;

use crate::{
    success,
    tracklist::{TracklistFormat, render},
    warning,
};

/// Parses a tracklist and shows it without uploading anything.
///
/// `plain` prints one line per entry instead of a table, handy for pasting
/// into a description.
pub fn tracklist(path: &Path, format: TracklistFormat, plain: bool) {
    let tracks = super::load_tracklist(path, format);

    if tracks.is_empty() {
        warning!("No tracks found in {}", path.display());
        return;
    }

    if plain {
        for line in render::render(&tracks) {
            println!("{}", line);
        }
    } else {
        println!("{}", render::table(&tracks));
    }

    let last_start = render::start_times(&tracks).last().copied().unwrap_or_default();
    success!(
        "{} entries, the last one starts at {}",
        tracks.len(),
        render::format_duration(last_start)
    );
}
