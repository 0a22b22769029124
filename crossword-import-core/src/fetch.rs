//! Puzzle API client.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{error, info};

use crate::config::ImportConfig;
use crate::contract::PuzzleSource;
use crate::date::PuzzleDate;
use crate::error::ImportError;
use crate::source::PuzzleResponse;

/// Marker header the puzzle API accepts in place of a subscriber session.
pub const AUTH_BYPASS_HEADER: &str = "X-Games-Auth-Bypass";

pub(crate) const USER_AGENT: &str = concat!("crossword-import/", env!("CARGO_PKG_VERSION"));

pub struct NytClient {
    http: reqwest::Client,
    config: ImportConfig,
}

impl NytClient {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl PuzzleSource for NytClient {
    async fn fetch(&self, date: &PuzzleDate) -> Result<PuzzleResponse, ImportError> {
        let url = self.config.puzzle_url(date);
        info!(url = %url, date = %date, "Fetching puzzle");

        let resp = self
            .http
            .get(&url)
            .header(AUTH_BYPASS_HEADER, "true")
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, url = %url, "Failed to reach puzzle API");
                ImportError::Http(e)
            })?;

        decode_puzzle_response(resp).await
    }
}

/// Anything but a 200 is an error; the body is only decoded on success.
pub(crate) async fn decode_puzzle_response(
    resp: reqwest::Response,
) -> Result<PuzzleResponse, ImportError> {
    let status = resp.status();
    if status != StatusCode::OK {
        error!(status = %status, "Puzzle API returned an error status");
        return Err(ImportError::PuzzleRequest {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let bytes = resp.bytes().await?;
    let response: PuzzleResponse = serde_json::from_slice(&bytes).map_err(|e| {
        error!(error = %e, "Puzzle API response is not the expected JSON");
        ImportError::Decode(e)
    })?;
    info!(bodies = response.body.len(), "Decoded puzzle response");
    Ok(response)
}
