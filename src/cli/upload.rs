use std::path::PathBuf;

use chrono::Local;

use super::{prompt, spinner};
use crate::{
    error, info,
    management::SettingsManager,
    mixcloud, success,
    tracklist::{Track, TracklistFormat, render},
    types::{Cloudcast, ProOptions},
    utils, warning,
};

#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub file: Option<PathBuf>,
    pub cover: Option<PathBuf>,
    pub tracklist: Option<PathBuf>,
    pub format: TracklistFormat,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub edit: Option<String>,
    pub publish_date: Option<String>,
    pub disable_comments: bool,
    pub hide_stats: bool,
    pub unlisted: bool,
}

/// Uploads a new cloudcast or edits an existing one.
///
/// # Arguments
///
/// * `opts` - Command line options; anything missing is asked for
///
/// # Behavior
///
/// 1. Loads the settings and access token, exiting when not authorized
/// 2. Parses the tracklist, if one was given
/// 3. Fetches the profile to learn whether Pro options may be sent
/// 4. Asks for name, description and tags that were not passed
/// 5. Submits the form and prints the edit page URL and the tracklist
///
/// Every failure ends the program via `error!`.
pub async fn upload(opts: UploadOptions) {
    let settings = match SettingsManager::load().await {
        Ok(settings) => settings,
        Err(e) => error!(
            "Failed to load configuration. Please run mixcast auth\n Error: {}",
            e
        ),
    };

    let token = match settings.access_token() {
        Ok(token) => token.to_string(),
        Err(e) => error!("{}", e),
    };

    let tracks = match &opts.tracklist {
        Some(path) => super::load_tracklist(path, opts.format),
        None => Vec::new(),
    };

    let edit = match &opts.edit {
        Some(key) => match utils::cloudcast_key(key) {
            Ok(key) => Some(key),
            Err(e) => error!("{}", e),
        },
        None => None,
    };

    if opts.file.is_none() && edit.is_none() {
        error!("You must pass a file to upload, use --file or see --help.\n Exiting.");
    }

    for path in [&opts.file, &opts.cover].into_iter().flatten() {
        if !path.is_file() {
            error!("Error opening file {}", path.display());
        }
    }

    let pb = spinner("Fetching your user data...");
    let user = mixcloud::user::fetch_me(&token).await;
    pb.finish_and_clear();

    let user = match user {
        Ok(user) => user,
        Err(e) => error!("Error fetching your profile data: {}", e),
    };

    let cloudcast = match gather_cloudcast(&opts, settings.default_tags(), edit.is_some(), user.is_pro) {
        Ok(cloudcast) => cloudcast,
        Err(e) => error!("{}", e),
    };

    info!("Uploading to Mixcloud as {}", user.username);

    let response = match mixcloud::upload::submit(&token, &cloudcast, &tracks, edit.as_deref()).await {
        Ok(response) => response,
        Err(e) => error!("Error: {}", e),
    };

    match mixcloud::upload::outcome(response) {
        Ok(result) => {
            if edit.is_some() {
                success!("Successfully updated cloudcast");
            } else {
                success!("Successfully uploaded file");
            }
            success!("{}", utils::edit_page_url(&result.key));
            print_tracklist(&tracks);
        }
        Err(e) => error!("{}", e),
    }
}

fn gather_cloudcast(
    opts: &UploadOptions,
    default_tags: &str,
    editing: bool,
    is_pro: bool,
) -> Result<Cloudcast, String> {
    let name = match &opts.name {
        Some(name) => name.clone(),
        None => prompt::ask("Enter a name for the cloudcast: ")
            .map_err(|e| format!("Incorrect name. {}", e))?,
    };

    if name.trim().is_empty() && !editing {
        return Err("A cloudcast needs a name.".to_string());
    }

    let description = match &opts.description {
        Some(description) => description.clone(),
        None => prompt::ask("Enter a description: ")
            .map_err(|e| format!("Incorrect description. {}", e))?,
    };

    let tags = match &opts.tags {
        Some(tags) => tags.clone(),
        None if editing => prompt::ask("Enter tags (comma separated): ")
            .map_err(|e| format!("Incorrect tag format. {}", e))?,
        None => prompt::ask_with_default("Enter tags (comma separated)", default_tags)
            .map_err(|e| format!("Incorrect tag format. {}", e))?,
    };

    Ok(Cloudcast {
        name,
        description,
        tags: utils::split_tags(&tags),
        audio: opts.file.clone(),
        cover: opts.cover.clone(),
        pro: pro_options(opts, is_pro)?,
    })
}

fn pro_options(opts: &UploadOptions, is_pro: bool) -> Result<Option<ProOptions>, String> {
    let requested = ProOptions {
        publish_date: opts.publish_date.clone(),
        disable_comments: opts.disable_comments,
        hide_stats: opts.hide_stats,
        unlisted: opts.unlisted,
    };

    if requested.is_empty() {
        return Ok(None);
    }

    if !is_pro {
        warning!("Publish date, comments, statistics and unlisted settings need a Mixcloud Pro account, ignoring them.");
        return Ok(None);
    }

    info!("Setting pro user attributes...");

    let publish_date = match requested.publish_date {
        Some(input) => Some(validated_publish_date(input)?),
        None => None,
    };

    Ok(Some(ProOptions {
        publish_date,
        ..requested
    }))
}

/// Validates the publish date, asking again while it is malformed or past.
fn validated_publish_date(mut input: String) -> Result<String, String> {
    loop {
        let now = Local::now();
        match utils::parse_publish_date(&input, &now) {
            Ok(date) => return Ok(date),
            Err(e) => {
                warning!("{}", e);
                input = prompt::ask(&format!(
                    "Enter a publish date in {} [DD/MM/YYYY HH:MM]: ",
                    now.format("%:z")
                ))
                .map_err(|e| format!("Incorrect publish date. {}", e))?;
            }
        }
    }
}

fn print_tracklist(tracks: &[Track]) {
    if tracks.is_empty() {
        return;
    }

    info!("Tracklist");
    println!("{}", render::table(tracks));
}

