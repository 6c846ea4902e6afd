use std::path::Path;

use futures::{StreamExt, stream};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{
    Body,
    header::ACCEPT,
    multipart::{Form, Part},
};

use crate::{
    Res, config,
    tracklist::{Track, render},
    types::{Cloudcast, UploadResponse, UploadResult},
};

const CHUNK_SIZE: usize = 64 * 1024;

/// Text fields of the upload form, in submission order.
///
/// Empty name and description are left out so an edit does not blank them.
/// Pro attributes are included whenever `cloudcast.pro` is set; deciding
/// whether the account may use them is up to the caller.
pub fn form_fields(cloudcast: &Cloudcast, tracks: &[Track]) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    if !cloudcast.name.trim().is_empty() {
        fields.push(("name".to_string(), cloudcast.name.trim().to_string()));
    }
    if !cloudcast.description.trim().is_empty() {
        fields.push((
            "description".to_string(),
            cloudcast.description.trim().to_string(),
        ));
    }

    for (i, tag) in cloudcast.tags.iter().enumerate() {
        fields.push((format!("tags-{i}-tag"), tag.clone()));
    }

    fields.extend(render::section_fields(tracks));

    if let Some(pro) = &cloudcast.pro {
        if let Some(publish_date) = &pro.publish_date {
            fields.push(("publish_date".to_string(), publish_date.clone()));
        }
        for (flag, set) in [
            ("disable_comments", pro.disable_comments),
            ("hide_stats", pro.hide_stats),
            ("unlisted", pro.unlisted),
        ] {
            if set {
                fields.push((flag.to_string(), "1".to_string()));
            }
        }
    }

    fields
}

/// `/upload/` for new cloudcasts, `/upload/<key>/edit/` for edits.
///
/// `edit` must already be normalized with [`crate::utils::cloudcast_key`].
pub fn upload_url(edit: Option<&str>) -> String {
    let api = config::mixcloud_api_url();
    match edit {
        Some(key) => format!("{}/upload{}edit/", api, key),
        None => format!("{}/upload/", api),
    }
}

/// Sends the cloudcast with its tracklist, showing upload progress.
///
/// # Arguments
///
/// * `token` - Access token of the uploading account
/// * `cloudcast` - Metadata plus the audio and cover files to send
/// * `tracks` - Timed tracklist, sent as `sections-*` fields
/// * `edit` - Normalized key of an existing cloudcast to edit instead
///
/// # Behavior
///
/// Audio (`mp3`) and cover (`picture`) are read fully, then streamed in
/// chunks so a byte progress bar can follow the transfer. The bar is hidden
/// when there are no files, which is the case for metadata-only edits.
///
/// # Returns
///
/// The decoded API response; pass it to [`outcome`] to tell success from
/// failure.
pub async fn submit(
    token: &str,
    cloudcast: &Cloudcast,
    tracks: &[Track],
    edit: Option<&str>,
) -> Res<UploadResponse> {
    let mut form = Form::new();
    for (name, value) in form_fields(cloudcast, tracks) {
        form = form.text(name, value);
    }

    let mut files = Vec::new();
    for (field, path) in [("mp3", &cloudcast.audio), ("picture", &cloudcast.cover)] {
        if let Some(path) = path {
            let bytes = async_fs::read(path)
                .await
                .map_err(|e| format!("Error opening file {}: {}", path.display(), e))?;
            files.push((field, file_name(path), bytes));
        }
    }

    let total: u64 = files.iter().map(|(_, _, bytes)| bytes.len() as u64).sum();
    let pb = upload_bar(total);

    for (field, name, bytes) in files {
        form = form.part(field, progress_part(bytes, name, pb.clone()));
    }

    let client = super::client()?;
    let response = client
        .post(upload_url(edit))
        .query(&[("access_token", token)])
        .header(ACCEPT, "application/json")
        .multipart(form)
        .send()
        .await;

    let response = match response {
        Ok(resp) => {
            pb.finish();
            resp
        }
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };

    let body = response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("Error decoding response from API - {}", e))?;

    Ok(body)
}

/// Turns the API response into the uploaded cloudcast or a readable error.
///
/// # Behavior
///
/// - An `error` object wins: its message is followed by one line per invalid
///   field from `details` (sorted by field name) and by the `retry_after`
///   hint when rate limited
/// - Otherwise a `result` with `success` or a key is the uploaded cloudcast
/// - A response with neither is an error
pub fn outcome(response: UploadResponse) -> Result<UploadResult, String> {
    if let Some(error) = response.error {
        let mut message = if error.message.is_empty() {
            format!("Upload failed ({})", error.kind)
        } else {
            error.message
        };

        if let Some(details) = response.details {
            let mut fields: Vec<_> = details.into_iter().collect();
            fields.sort();
            for (field, problems) in fields {
                message.push_str(&format!("\n  {}: {}", field, problems.join(", ")));
            }
        }

        if error.retry_after > 0 {
            message.push_str(&format!("\nRetry after {} seconds.", error.retry_after));
        }

        return Err(message);
    }

    match response.result {
        Some(result) if result.success || !result.key.is_empty() => Ok(result),
        Some(result) => Err(format!("Upload failed: {}", result.message)),
        None => Err("Unexpected response from API".to_string()),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn upload_bar(total: u64) -> ProgressBar {
    if total == 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.green/red}] {bytes}/{total_bytes} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );
    pb
}

fn progress_part(bytes: Vec<u8>, name: String, pb: ProgressBar) -> Part {
    let len = bytes.len() as u64;
    let chunks: Vec<Result<Vec<u8>, std::io::Error>> =
        bytes.chunks(CHUNK_SIZE).map(|c| Ok(c.to_vec())).collect();

    let stream = stream::iter(chunks).inspect(move |chunk| {
        if let Ok(chunk) = chunk {
            pb.inc(chunk.len() as u64);
        }
    });

    Part::stream_with_length(Body::wrap_stream(stream), len).file_name(name)
}
