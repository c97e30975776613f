//! Loading the event document from disk or over HTTP.

use std::fmt;
use std::path::PathBuf;

use crate::error::{EventfinderError, EventfinderResult};
use crate::event::EventCatalog;

/// Where the event document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` are URLs; anything else is a path (`~` expanded).
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(shellexpand::tilde(s).into_owned()))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch and parse the event document.
pub async fn load_catalog(source: &DataSource) -> EventfinderResult<EventCatalog> {
    let content = match source {
        DataSource::Url(url) => fetch(url).await?,
        DataSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            EventfinderError::DataLoad(format!("could not read {}: {e}", path.display()))
        })?,
    };

    let catalog = EventCatalog::from_json(&content)?;
    tracing::debug!(%source, events = catalog.len(), "loaded event catalog");
    Ok(catalog)
}

async fn fetch(url: &str) -> EventfinderResult<String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| EventfinderError::DataLoad(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(EventfinderError::DataLoad(format!("HTTP status {status}")));
    }

    response
        .text()
        .await
        .map_err(|e| EventfinderError::DataLoad(format!("could not read response body: {e}")))
}
