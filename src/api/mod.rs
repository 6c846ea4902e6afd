//! # API Module
//!
//! HTTP endpoints of the short-lived local server started by `mixcast auth`.
//!
//! - [`callback`] - receives the OAuth `code` from Mixcloud's redirect and
//!   exchanges it for an access token, which it leaves in the shared state for
//!   the waiting auth command.
//! - [`health`] - liveness check returning status and version.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
