//! CurseForge API client
//!
//! Every request is tried against the configured base URLs in order. Server
//! errors, empty bodies and network failures move on to the next endpoint;
//! client errors (4xx) stop immediately since a mirror would answer the same.
//! Without an API key, 401 and 403 also move on, as mirrors may not need one.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::app_info;
use crate::config::CurseForgeApiConfig;
use crate::error::{InstallerError, Result};

/// Endpoint for bulk file lookups
pub const FILES_ENDPOINT: &str = "/mods/files";

/// Endpoint for bulk project lookups
pub const MODS_ENDPOINT: &str = "/mods";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw answer of a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self.status, 401 | 403)
    }
}

/// Sends JSON `POST` requests. An `Err` means the request never produced an
/// HTTP response.
pub trait ApiTransport: Send + Sync {
    fn post_json(&self, url: &str, body: String) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(app_info::DISPLAY_NAME)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, api_key })
    }
}

impl ApiTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<ApiResponse> {
        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);

        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ApiResponse {
            status,
            body: (!text.is_empty()).then_some(text),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GetFilesRequest<'a> {
    file_ids: &'a [u32],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GetModsRequest<'a> {
    mod_ids: &'a [u32],
}

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// File record returned by `/mods/files`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfFile {
    pub id: u32,
    pub mod_id: u32,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Project record returned by `/mods`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CfMod {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub links: Option<CfLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfLinks {
    #[serde(default)]
    pub website_url: String,
}

/// CurseForge client over an arbitrary transport
#[derive(Debug, Clone)]
pub struct CurseForgeClient<T> {
    transport: T,
    api_urls: Vec<String>,
    /// Treat 401/403 as retryable on the next endpoint
    auth_fallback: bool,
}

impl CurseForgeClient<HttpTransport> {
    /// Builds an HTTP client from configuration
    pub fn from_config(config: &CurseForgeApiConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.api_key().map(str::to_string))?;
        Ok(Self::new(transport, config.api_urls()).with_auth_fallback(config.api_key().is_none()))
    }
}

impl<T: ApiTransport> CurseForgeClient<T> {
    pub fn new(transport: T, api_urls: Vec<String>) -> Self {
        Self {
            transport,
            api_urls,
            auth_fallback: false,
        }
    }

    /// Builder pattern: let 401/403 fall through to the next endpoint
    pub fn with_auth_fallback(mut self, enable: bool) -> Self {
        self.auth_fallback = enable;
        self
    }

    pub fn api_urls(&self) -> &[String] {
        &self.api_urls
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Looks up files by ID
    pub async fn get_files(&self, file_ids: &[u32]) -> Result<Vec<CfFile>> {
        let body = serde_json::to_string(&GetFilesRequest { file_ids })?;
        let text = self.execute_with_fallback(FILES_ENDPOINT, body, "file data").await?;
        let response: DataResponse<CfFile> = serde_json::from_str(&text)?;
        Ok(response.data)
    }

    /// Looks up projects by ID
    pub async fn get_mods(&self, mod_ids: &[u32]) -> Result<Vec<CfMod>> {
        let body = serde_json::to_string(&GetModsRequest { mod_ids })?;
        let text = self.execute_with_fallback(MODS_ENDPOINT, body, "mod data").await?;
        let response: DataResponse<CfMod> = serde_json::from_str(&text)?;
        Ok(response.data)
    }

    /// Posts `body` to `endpoint` on each base URL until one answers
    /// successfully, returning the response body.
    pub async fn execute_with_fallback(
        &self,
        endpoint: &str,
        body: String,
        operation: &str,
    ) -> Result<String> {
        let mut last_error: Option<String> = None;

        for (index, base_url) in self.api_urls.iter().enumerate() {
            let kind = if index == 0 { "primary" } else { "mirror" };
            let url = format!("{}{}", base_url, endpoint);
            info!("Attempting CurseForge {} via {} API: {}", operation, kind, url);

            match self.transport.post_json(&url, body.clone()).await {
                Ok(response) => {
                    if response.is_success() {
                        if let Some(text) = response.body {
                            if index > 0 {
                                info!("Successfully retrieved {} from {} API", operation, kind);
                            }
                            return Ok(text);
                        }
                        warn!("{} API returned an empty body for {}, trying next endpoint...", kind, operation);
                        last_error = Some(format!("{} API returned an empty body", kind));
                        continue;
                    }

                    if response.is_client_error() && !(self.auth_fallback && response.is_auth_error()) {
                        return Err(InstallerError::ApiStatus {
                            operation: operation.to_string(),
                            status: response.status,
                        });
                    }

                    warn!(
                        "{} API failed for {}: {}, trying next endpoint...",
                        kind, operation, response.status
                    );
                    last_error = Some(format!("{} API returned error code {}", kind, response.status));
                }
                Err(e) => {
                    warn!("{} API failed for {}: {}, trying next endpoint...", kind, operation, e);
                    last_error = Some(e.to_string());
                }
            }
        }

        debug!("No endpoint answered {} successfully", operation);
        Err(InstallerError::AllEndpointsFailed {
            operation: operation.to_string(),
            last_error: last_error.unwrap_or_else(|| "no API endpoints configured".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_string(&GetFilesRequest { file_ids: &[1, 2] }).unwrap();
        assert_eq!(body, r#"{"fileIds":[1,2]}"#);

        let body = serde_json::to_string(&GetModsRequest { mod_ids: &[7] }).unwrap();
        assert_eq!(body, r#"{"modIds":[7]}"#);
    }

    #[test]
    fn test_file_response_parsing() {
        let response: DataResponse<CfFile> = serde_json::from_str(
            r#"{"data":[
                {"id":10,"modId":1,"downloadUrl":"https://edge.forgecdn.net/a.jar","extra":true},
                {"id":11,"modId":2,"downloadUrl":null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].download_url.as_deref(), Some("https://edge.forgecdn.net/a.jar"));
        assert!(response.data[1].download_url.is_none());
    }

    #[test]
    fn test_mod_response_without_links() {
        let response: DataResponse<CfMod> =
            serde_json::from_str(r#"{"data":[{"id":5,"name":"Shaders"}]}"#).unwrap();
        assert_eq!(response.data[0].name, "Shaders");
        assert!(response.data[0].links.is_none());
    }

    #[test]
    fn test_auth_fallback_follows_api_key() {
        let keyless = CurseForgeClient::from_config(&CurseForgeApiConfig::default()).unwrap();
        assert!(keyless.auth_fallback);

        let config = CurseForgeApiConfig {
            key: Some("k1".to_string()),
            ..CurseForgeApiConfig::default()
        };
        let keyed = CurseForgeClient::from_config(&config).unwrap();
        assert!(!keyed.auth_fallback);
    }

    #[test]
    fn test_status_classes() {
        let ok = ApiResponse { status: 204, body: None };
        let missing = ApiResponse { status: 404, body: None };
        let down = ApiResponse { status: 503, body: None };

        assert!(ok.is_success());
        assert!(missing.is_client_error());
        assert!(!down.is_success() && !down.is_client_error());
    }
}
