//! This crate contains the shared chain status types and the fullstack server functions.

pub mod chain;
pub mod explorer;
pub mod gas_price;
pub mod prefs;
pub mod quantity;

use dioxus::prelude::*;
use prefs::status_prefs::StatusPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the status bar preferences.
///
/// These are read from env vars on the server, so one build can be pointed
/// at different networks without recompiling the client.
#[post("/api/status_prefs")]
pub async fn status_prefs() -> Result<StatusPrefs, ApiError> {
    let prefs = StatusPrefs::from_env();

    let json = serde_json::to_string(&prefs)?;
    dioxus_logger::tracing::debug!("status prefs json: {}", json);

    Ok(prefs)
}
