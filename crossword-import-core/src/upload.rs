//! squares.io upload client.
//!
//! The hosting API takes a multipart form with three text fields and answers
//! with the ids of the created puzzles:
//!
//! | field  | value                              |
//! |--------|------------------------------------|
//! | `data` | `{"options":{}}` (UI default)      |
//! | `puz`  | the serialized ipuz document       |
//! | `v`    | `2`                                |

use async_trait::async_trait;
use reqwest::multipart::Form;
use serde::Deserialize;
use tracing::{error, info};

use crate::config::ImportConfig;
use crate::contract::{UploadReceipt, Uploader};
use crate::error::ImportError;
use crate::fetch::USER_AGENT;

pub const UPLOAD_OPTIONS: &str = r#"{"options":{}}"#;
pub const UPLOAD_FORMAT_VERSION: &str = "2";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    pids: Vec<serde_json::Value>,
}

pub struct SquaresClient {
    http: reqwest::Client,
    upload_url: String,
}

impl SquaresClient {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            upload_url: config.upload_url.clone(),
        })
    }
}

pub fn upload_form(ipuz_json: &str) -> Form {
    Form::new()
        .text("data", UPLOAD_OPTIONS)
        .text("puz", ipuz_json.to_string())
        .text("v", UPLOAD_FORMAT_VERSION)
}

#[async_trait]
impl Uploader for SquaresClient {
    async fn upload(&self, ipuz_json: &str) -> Result<UploadReceipt, ImportError> {
        info!(url = %self.upload_url, size = ipuz_json.len(), "Uploading puzzle");

        let resp = self
            .http
            .post(&self.upload_url)
            .multipart(upload_form(ipuz_json))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, url = %self.upload_url, "Failed to reach upload API");
                ImportError::Http(e)
            })?;

        decode_upload_response(resp).await
    }
}

pub(crate) async fn decode_upload_response(
    resp: reqwest::Response,
) -> Result<UploadReceipt, ImportError> {
    let status = resp.status();
    if !status.is_success() {
        error!(status = %status, "Upload API returned an error status");
        return Err(ImportError::UploadRequest {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let bytes = resp.bytes().await?;
    let parsed: UploadResponse = serde_json::from_slice(&bytes)?;
    let pid = match parsed.pids.into_iter().next() {
        Some(serde_json::Value::String(pid)) => pid,
        Some(other) => other.to_string(),
        None => {
            error!("Upload response has an empty pids array");
            return Err(ImportError::MissingPuzzleId);
        }
    };

    info!(pid = %pid, "Puzzle uploaded");
    Ok(UploadReceipt { pid })
}
