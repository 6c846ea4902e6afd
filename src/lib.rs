//! Mixcloud Uploader CLI Library
//!
//! This library provides the pieces behind the `mixcast` command: reading DJ
//! software tracklists, turning them into timed sections, authorizing against
//! Mixcloud and uploading or editing cloudcasts.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Environment configuration
//! - `management` - Persistent settings (access token, default tags)
//! - `mixcloud` - Mixcloud API client
//! - `server` - Local HTTP server for OAuth callbacks
//! - `tracklist` - Tracklist parsers and rendering
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use mixcast::tracklist::{NoRepair, TracklistFormat, render};
//!
//! let tracks = TracklistFormat::Serato.parse(Path::new("history.csv"), &mut NoRepair)?;
//! for line in render::render(&tracks) {
//!     println!("{}", line);
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod mixcloud;
pub mod server;
pub mod tracklist;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error so network, I/O and decoding failures can be
/// propagated with `?` from the same function. Send + Sync keeps it usable
/// across await points.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use mixcast::Res;
///
/// async fn read_cover(path: &std::path::Path) -> Res<Vec<u8>> {
///     Ok(async_fs::read(path).await?)
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a blue "o" indicator followed by the
/// message. Used for progress and status lines such as the tracklist being
/// read or the account an upload goes to.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Reading {} tracklist {}", format, path.display());
/// info!("Uploading to Mixcloud as {}", user.username);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Arguments
///
/// Same as `println!`.
///
/// # Example
///
/// ```
/// success!("Successfully uploaded file");
/// success!("{}", utils::edit_page_url(&result.key));
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits the
/// program with status 1.
///
/// # Arguments
///
/// Same as `eprintln!`.
///
/// # Behavior
///
/// Only for fatal errors: code after this does not run, which also lets the
/// macro stand in for a value in `match` arms.
///
/// # Example
///
/// ```
/// let tracks = match format.parse(&path, &mut repair) {
///     Ok(tracks) => tracks,
///     Err(e) => error!("Error processing {} tracklist - {}", format, e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning with a yellow exclamation mark to stderr.
///
/// For problems the run can continue past, like a missing VirtualDJ
/// tracklist or a malformed row that is about to be repaired.
///
/// # Example
///
/// ```
/// warning!("The file {} does not exist!", path.display());
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
