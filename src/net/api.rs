//! REST client for the piracy-assist backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so callers can surface a visible
//! error state and restore their UI controls on any outcome. Transport
//! failures, non-2xx statuses, and undecodable bodies are distinct variants.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::RequestCredentials;

use crate::config::AppConfig;
use crate::net::types::{CrewMember, UploadResponse};

/// Errors produced by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned {status} for /{path}")]
    Status { path: String, status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid box payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Thin HTTP client bound to the configured API base path.
///
/// Every request includes credentials so the backend session cookie is sent
/// on cross-origin deployments.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_owned(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    /// `GET /search/{collection}/{query}` — the collection's best match for
    /// the query, as an opaque document.
    pub async fn search(&self, collection: &str, query: &str) -> Result<Value, ApiError> {
        self.get_json(&format!("search/{collection}/{query}")).await
    }

    /// `GET /current_crew` — members currently in the guild's voice channels.
    pub async fn current_crew(&self) -> Result<Vec<CrewMember>, ApiError> {
        self.get_json("current_crew").await
    }

    /// `GET /profit` — the crew's total profit, served as a plain-text
    /// numeric string.
    pub async fn profit(&self) -> Result<f64, ApiError> {
        let text = self.get_text("profit").await?;
        text.trim()
            .parse::<f64>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /discord` — submit the assembled report to the Discord relay.
    /// The relay's response body carries nothing actionable and is only
    /// logged.
    pub async fn post_report(&self, body: &Value) -> Result<(), ApiError> {
        let path = "discord";
        let resp = Request::post(&self.endpoint(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;

        if !resp.ok() {
            return Err(ApiError::Status {
                path: path.to_owned(),
                status: resp.status(),
            });
        }

        match resp.text().await {
            Ok(text) => log::debug!("discord relay replied: {text}"),
            Err(err) => log::debug!("discord relay reply unreadable: {err}"),
        }
        Ok(())
    }

    /// `PUT /upload/sc` — upload a screenshot as multipart field `file`;
    /// returns the hosted image URL.
    pub async fn upload_screenshot(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let path = "upload/sc";

        let form = web_sys::FormData::new().map_err(js_err)?;
        form.append_with_blob("file", file).map_err(js_err)?;

        let resp = Request::put(&self.endpoint(path))
            .credentials(RequestCredentials::Include)
            .body(form)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;

        if !resp.ok() {
            return Err(ApiError::Status {
                path: path.to_owned(),
                status: resp.status(),
            });
        }

        resp.json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let resp = Request::get(&self.endpoint(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(net_err)?;

        if resp.ok() {
            Ok(resp)
        } else {
            Err(ApiError::Status {
                path: path.to_owned(),
                status: resp.status(),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.get(path).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let resp = self.get(path).await?;
        resp.text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_err(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}
