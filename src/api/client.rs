//! HTTP Client Wrapper
//!
//! Attaches the base URL, JSON content type and `credentials: include` to
//! every request, and turns non-2xx responses into `ApiError::Status`.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

use crate::error::{ApiError, ApiResult};

/// Error body returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!(path, "GET");
        let response = self.prepare(Request::get(&self.url(path))).send().await?;
        Self::json(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        tracing::debug!(path, "POST");
        let response = self.prepare(Request::post(&self.url(path))).json(body)?.send().await?;
        Self::json(response).await
    }

    /// POST whose response body is ignored
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        tracing::debug!(path, "POST");
        let response = self.prepare(Request::post(&self.url(path))).json(body)?.send().await?;
        Self::check(response).await.map(|_| ())
    }

    /// PUT whose response body is ignored
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        tracing::debug!(path, "PUT");
        let response = self.prepare(Request::put(&self.url(path))).json(body)?.send().await?;
        Self::check(response).await.map(|_| ())
    }

    /// `DELETE path?id=<id>`
    pub async fn delete(&self, path: &str, id: &str) -> ApiResult<()> {
        tracing::debug!(path, id, "DELETE");
        let response = self
            .prepare(Request::delete(&self.url(path)))
            .query([("id", id)])
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    async fn json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn check(response: Response) -> ApiResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => response.status_text(),
        };
        tracing::warn!(status, %message, url = %response.url(), "request rejected");
        Err(ApiError::Status { status, message })
    }
}
