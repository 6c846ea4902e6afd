use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use mixcast::{cli, config, error, tracklist::TracklistFormat};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Mixcloud API
    Auth(AuthOptions),

    /// Upload a new cloudcast or edit an existing one
    Upload(UploadArgs),

    /// Parse a tracklist and show it without uploading
    Tracklist(TracklistOptions),

    /// About the application
    About,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Authorization code to exchange, skips the browser flow
    #[clap(long)]
    pub code: Option<String>,

    /// Default tags (comma separated), asked for when missing
    #[clap(long)]
    pub tags: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct UploadArgs {
    /// The mp3 file to upload to Mixcloud
    #[clap(long)]
    pub file: Option<PathBuf>,

    /// The image file to upload as the cover
    #[clap(long)]
    pub cover: Option<PathBuf>,

    /// A tracklist file for the cloudcast
    #[clap(long)]
    pub tracklist: Option<PathBuf>,

    /// Format of the tracklist file
    #[clap(long, value_enum, default_value_t = TracklistFormat::VirtualDj)]
    pub format: TracklistFormat,

    /// Name of the cloudcast, asked for when missing
    #[clap(long)]
    pub name: Option<String>,

    /// Description of the cloudcast, asked for when missing
    #[clap(long)]
    pub description: Option<String>,

    /// Tags (comma separated), asked for when missing
    #[clap(long)]
    pub tags: Option<String>,

    /// Edit the cloudcast with this key (user/slug or URL) instead of uploading
    #[clap(long)]
    pub edit: Option<String>,

    /// Publish date in local time, DD/MM/YYYY HH:MM (Pro only)
    #[clap(long)]
    pub publish_date: Option<String>,

    /// Disable comments (Pro only)
    #[clap(long)]
    pub disable_comments: bool,

    /// Hide statistics (Pro only)
    #[clap(long)]
    pub hide_stats: bool,

    /// Make the cloudcast unlisted (Pro only)
    #[clap(long)]
    pub unlisted: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TracklistOptions {
    /// The tracklist file
    pub path: PathBuf,

    /// Format of the tracklist file
    #[clap(long, value_enum, default_value_t = TracklistFormat::VirtualDj)]
    pub format: TracklistFormat,

    /// Print one line per entry instead of a table
    #[clap(long)]
    pub plain: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

impl From<UploadArgs> for cli::UploadOptions {
    fn from(args: UploadArgs) -> Self {
        cli::UploadOptions {
            file: args.file,
            cover: args.cover,
            tracklist: args.tracklist,
            format: args.format,
            name: args.name,
            description: args.description,
            tags: args.tags,
            edit: args.edit,
            publish_date: args.publish_date,
            disable_comments: args.disable_comments,
            hide_stats: args.hide_stats,
            unlisted: args.unlisted,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.code, opt.tags).await,
        Command::Upload(opt) => cli::upload(opt.into()).await,
        Command::Tracklist(opt) => cli::tracklist(&opt.path, opt.format, opt.plain),
        Command::About => cli::about(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
