use std::{collections::HashMap, path::PathBuf};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub access_token: String,
    #[serde(default)]
    pub default_tags: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub key: String,
    pub url: String,
    pub name: String,
    pub username: String,
    pub city: String,
    pub country: String,
    pub cloudcast_count: u64,
    pub follower_count: u64,
    pub following_count: u64,
    pub is_pro: bool,
    pub is_premium: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub details: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub error: Option<ApiError>,
    #[serde(default)]
    pub result: Option<UploadResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub retry_after: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadResult {
    pub key: String,
    pub message: String,
    pub success: bool,
}

/// Attributes only Mixcloud Pro accounts may set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProOptions {
    /// RFC 3339, UTC.
    pub publish_date: Option<String>,
    pub disable_comments: bool,
    pub hide_stats: bool,
    pub unlisted: bool,
}

impl ProOptions {
    pub fn is_empty(&self) -> bool {
        self.publish_date.is_none() && !self.disable_comments && !self.hide_stats && !self.unlisted
    }
}

/// Everything submitted for one cloudcast besides its tracklist.
#[derive(Debug, Clone, Default)]
pub struct Cloudcast {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub audio: Option<PathBuf>,
    pub cover: Option<PathBuf>,
    pub pro: Option<ProOptions>,
}

#[derive(Tabled)]
pub struct TracklistRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub artist: String,
    pub title: String,
    pub duration: String,
    pub start: String,
}
