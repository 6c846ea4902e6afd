//! # Mixcloud Module
//!
//! Thin client for the parts of the Mixcloud API the uploader needs.
//!
//! - [`auth`] - OAuth code exchange and the browser based authorization flow
//! - [`user`] - profile of the authorized account (`/me/`)
//! - [`upload`] - multipart form for new cloudcasts and edits
//!
//! The access token is passed in by the caller; nothing here reads settings on
//! its own.

pub mod auth;
pub mod upload;
pub mod user;

use reqwest::Client;

pub const USER_AGENT: &str = concat!("mixcast/", env!("CARGO_PKG_VERSION"));

/// Retry-After delays longer than this are reported instead of waited out.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

pub(crate) fn client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}
