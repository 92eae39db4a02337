//! Dropbox HTTP client for the remote file store.
//!
//! RPC calls go to the API host with a JSON body. Uploads and downloads go to
//! the content host with their arguments in the `Dropbox-API-Arg` header; a
//! download carries its metadata in the `dropbox-api-result` response header
//! and the raw file content in the body.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Download, RemoteResult, RemoteStore, WriteMode};
use crate::config::ClientConfig;
use crate::error::RemoteError;
use crate::models::{Entry, WireFileMetadata, WireMetadata};
use crate::util::{compact_text, normalize_base_url};
use crate::{Error, Result};

const API_ARG_HEADER: &str = "Dropbox-API-Arg";
const API_RESULT_HEADER: &str = "dropbox-api-result";

/// HTTP client for the Dropbox v2 files API.
#[derive(Clone)]
pub struct DropboxClient {
    api_base_url: String,
    content_base_url: String,
    access_token: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for DropboxClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DropboxClient")
            .field("api_base_url", &self.api_base_url)
            .field("content_base_url", &self.content_base_url)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl DropboxClient {
    /// Builds a client for explicit API and content hosts.
    pub fn new(
        access_token: impl Into<String>,
        api_base_url: &str,
        content_base_url: &str,
    ) -> Result<Self> {
        let access_token = access_token.into().trim().to_string();
        if access_token.is_empty() {
            return Err(Error::Config("access token must not be empty".to_string()));
        }
        let api_base_url = normalize_base_url(api_base_url, "api_base_url").map_err(Error::Config)?;
        let content_base_url =
            normalize_base_url(content_base_url, "content_base_url").map_err(Error::Config)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;

        Ok(Self {
            api_base_url,
            content_base_url,
            access_token,
            client,
        })
    }

    /// Builds a client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.access_token.clone(),
            &config.api_base_url,
            &config.content_base_url,
        )
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    async fn rpc<B, T>(&self, operation: &str, route: &str, body: &B) -> RemoteResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(operation, route, "Issuing remote request");
        let request = self
            .client
            .post(format!("{}{route}", self.api_base_url))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body);
        let response = send(operation, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|error| RemoteError::transport(operation, format!("invalid response: {error}")))
    }

    fn content_request<A: Serialize>(
        &self,
        operation: &str,
        route: &str,
        arg: &A,
    ) -> RemoteResult<RequestBuilder> {
        let arg = serde_json::to_value(arg)
            .map_err(|error| RemoteError::transport(operation, error))?;
        Ok(self
            .client
            .post(format!("{}{route}", self.content_base_url))
            .bearer_auth(&self.access_token)
            .header(API_ARG_HEADER, header_safe_json(&arg)))
    }
}

impl RemoteStore for DropboxClient {
    async fn list_folder(&self, path: &str) -> RemoteResult<Vec<Entry>> {
        let mut page: ListFolderResponse = self
            .rpc(
                "list_folder",
                "/files/list_folder",
                &serde_json::json!({ "path": path, "recursive": false }),
            )
            .await?;
        let mut entries = Vec::new();

        loop {
            entries.extend(page.entries.into_iter().filter_map(WireMetadata::into_entry));
            if !page.has_more {
                break;
            }
            page = self
                .rpc(
                    "list_folder",
                    "/files/list_folder/continue",
                    &serde_json::json!({ "cursor": page.cursor }),
                )
                .await?;
        }

        Ok(entries)
    }

    async fn create_folder(&self, path: &str) -> RemoteResult<()> {
        let _: serde_json::Value = self
            .rpc(
                "create_folder",
                "/files/create_folder_v2",
                &serde_json::json!({ "path": path, "autorename": false }),
            )
            .await?;
        Ok(())
    }

    async fn move_entry(&self, from_path: &str, to_path: &str) -> RemoteResult<Entry> {
        let response: MetadataResponse = self
            .rpc(
                "move",
                "/files/move_v2",
                &serde_json::json!({
                    "from_path": from_path,
                    "to_path": to_path,
                    "autorename": true,
                }),
            )
            .await?;
        response.metadata.into_entry().ok_or_else(|| {
            RemoteError::transport("move", "response did not describe a file or folder")
        })
    }

    async fn delete(&self, path: &str) -> RemoteResult<()> {
        let _: serde_json::Value = self
            .rpc(
                "delete",
                "/files/delete_v2",
                &serde_json::json!({ "path": path }),
            )
            .await?;
        Ok(())
    }

    async fn upload(&self, path: &str, mode: &WriteMode, content: &str) -> RemoteResult<Entry> {
        let request = self
            .content_request(
                "upload",
                "/files/upload",
                &UploadArg {
                    path,
                    mode,
                    autorename: true,
                    mute: false,
                },
            )?
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(content.as_bytes().to_vec());

        let response = send("upload", request).await?;
        let metadata = response.json::<WireFileMetadata>().await.map_err(|error| {
            RemoteError::transport("upload", format!("invalid response: {error}"))
        })?;
        Ok(metadata.into())
    }

    async fn download(&self, path: &str) -> RemoteResult<Download> {
        let request = self.content_request(
            "download",
            "/files/download",
            &serde_json::json!({ "path": path }),
        )?;
        let response = send("download", request).await?;

        let metadata = response
            .headers()
            .get(API_RESULT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
            .ok_or_else(|| {
                RemoteError::transport("download", "response is missing the metadata header")
            })?;
        let metadata = serde_json::from_str::<WireFileMetadata>(&metadata).map_err(|error| {
            RemoteError::transport("download", format!("invalid metadata header: {error}"))
        })?;

        let content = response
            .text()
            .await
            .map_err(|error| RemoteError::transport("download", error))?;

        Ok(Download {
            entry: metadata.into(),
            content,
        })
    }

    async fn search(
        &self,
        query: &str,
        path: &str,
        max_results: usize,
    ) -> RemoteResult<Vec<Entry>> {
        let response: SearchResponse = self
            .rpc(
                "search",
                "/files/search",
                &serde_json::json!({
                    "path": path,
                    "query": query,
                    "start": 0,
                    "max_results": max_results,
                    "mode": "filename_and_content",
                }),
            )
            .await?;

        Ok(response
            .matches
            .into_iter()
            .filter_map(|found| found.metadata.into_entry())
            .collect())
    }
}

#[derive(Debug, Serialize)]
struct UploadArg<'a> {
    path: &'a str,
    mode: &'a WriteMode,
    autorename: bool,
    mute: bool,
}

#[derive(Debug, Deserialize)]
struct ListFolderResponse {
    entries: Vec<WireMetadata>,
    #[serde(default)]
    cursor: String,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct MetadataResponse {
    metadata: WireMetadata,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    matches: Vec<SearchMatch>,
}

#[derive(Debug, Deserialize)]
struct SearchMatch {
    metadata: WireMetadata,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_summary: Option<String>,
    message: Option<String>,
}

async fn send(operation: &str, request: RequestBuilder) -> RemoteResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|error| RemoteError::transport(operation, error))?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::new(
        operation,
        Some(status.as_u16()),
        parse_api_error(status, &body),
    ))
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.error_summary.or(payload.message) {
            return compact_text(&message);
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed
    }
}

/// Serialize JSON for an HTTP header: non-ASCII characters become `\uXXXX`.
fn header_safe_json(value: &serde_json::Value) -> String {
    let raw = value.to_string();
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii() {
            escaped.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    escaped
}
