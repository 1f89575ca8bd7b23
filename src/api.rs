//! Backend API Client
//!
//! One thin async wrapper per REST operation. Authenticated calls take the
//! session token explicitly and attach it as a bearer header; every request
//! races a timeout so a hung backend never leaves a view spinning forever.

use futures::future::{self, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

use crate::models::{
    ApiMessage, Comment, LoginResponse, UploadResponse, Video, VideoListResponse, Workspace,
};

/// Backend base URL, overridable at compile time.
pub const API_BASE: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Errors surfaced to views. `Status` carries the backend's own message
/// when the error body has one, and views render it verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn transport_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

/// Race a request future against the request timeout.
async fn timed<T>(request: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(request);
    pin_mut!(timeout);
    match future::select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Extract the backend's error message from a non-2xx response.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ApiMessage>().await {
        Ok(ApiMessage { message: Some(m) }) => m,
        _ => format!("Request failed ({})", status),
    };
    ApiError::Status { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_ok(response: Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CreateWorkspaceBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PrivacyBody {
    #[serde(rename = "isPublic")]
    is_public: bool,
}

/// Comment submission body; `timestamp` is the player position in seconds.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub timestamp: f64,
}

// ========================
// Auth
// ========================

pub async fn register(name: &str, email: &str, password: &str) -> ApiResult<()> {
    let body = RegisterBody { name, email, password };
    timed(async move {
        let request = Request::post(&url("/api/auth/register"))
            .json(&body)
            .map_err(transport_error)?;
        let response = request.send().await.map_err(transport_error)?;
        expect_ok(response).await
    })
    .await
}

pub async fn login(email: &str, password: &str) -> ApiResult<LoginResponse> {
    let body = LoginBody { email, password };
    timed(async move {
        let request = Request::post(&url("/api/auth/login"))
            .json(&body)
            .map_err(transport_error)?;
        let response = request.send().await.map_err(transport_error)?;
        decode(response).await
    })
    .await
}

// ========================
// Workspaces
// ========================

pub async fn list_workspaces(token: &str) -> ApiResult<Vec<Workspace>> {
    timed(async move {
        let response = authorize(Request::get(&url("/api/workspace")), Some(token))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    })
    .await
}

pub async fn get_workspace(token: &str, id: &str) -> ApiResult<Workspace> {
    let path = url(&format!("/api/workspace/{}", id));
    timed(async move {
        let response = authorize(Request::get(&path), Some(token))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    })
    .await
}

pub async fn create_workspace(token: &str, name: &str) -> ApiResult<Workspace> {
    let body = CreateWorkspaceBody { name };
    timed(async move {
        let request = authorize(Request::post(&url("/api/workspace")), Some(token))
            .json(&body)
            .map_err(transport_error)?;
        let response = request.send().await.map_err(transport_error)?;
        decode(response).await
    })
    .await
}

// ========================
// Videos
// ========================

pub async fn list_videos(token: &str, workspace_id: &str) -> ApiResult<Vec<Video>> {
    timed(async move {
        let response = authorize(
            Request::get(&url("/api/video")).query([("workspaceId", workspace_id)]),
            Some(token),
        )
        .send()
        .await
        .map_err(transport_error)?;
        decode::<VideoListResponse>(response).await.map(|r| r.videos)
    })
    .await
}

/// Fetch a video (with its comments) as an authenticated caller.
pub async fn get_video(token: &str, id: &str) -> ApiResult<Video> {
    let path = url(&format!("/api/video/{}", id));
    timed(async move {
        let response = authorize(Request::get(&path), Some(token))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    })
    .await
}

/// Fetch a public video through its share endpoint. No auth.
pub async fn get_shared_video(id: &str) -> ApiResult<Video> {
    let path = url(&format!("/api/video/share/{}", id));
    timed(async move {
        let response = Request::get(&path).send().await.map_err(transport_error)?;
        decode(response).await
    })
    .await
}

pub async fn upload_video(
    token: &str,
    workspace_id: &str,
    file: &web_sys::File,
) -> ApiResult<Video> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build the upload form".into()))?;
    form.append_with_blob("video", file)
        .map_err(|_| ApiError::Network("could not attach the video file".into()))?;
    form.append_with_str("workspaceId", workspace_id)
        .map_err(|_| ApiError::Network("could not attach the workspace id".into()))?;

    timed(async move {
        let request = authorize(Request::post(&url("/api/video/upload")), Some(token))
            .body(form)
            .map_err(transport_error)?;
        let response = request.send().await.map_err(transport_error)?;
        decode::<UploadResponse>(response).await.map(|r| r.video)
    })
    .await
}

/// Flip a video's public/private flag. The response body varies across
/// backend versions (full video vs bare id), so only the status matters.
pub async fn set_privacy(token: &str, id: &str, is_public: bool) -> ApiResult<()> {
    let path = url(&format!("/api/video/{}/privacy", id));
    let body = PrivacyBody { is_public };
    timed(async move {
        let request = authorize(Request::put(&path), Some(token))
            .json(&body)
            .map_err(transport_error)?;
        let response = request.send().await.map_err(transport_error)?;
        expect_ok(response).await
    })
    .await
}

// ========================
// Comments
// ========================

/// Post a comment. Returns the server's comment record when the body
/// decodes, so callers can prefer it over their locally-built copy.
pub async fn add_comment(
    token: Option<&str>,
    video_id: &str,
    comment: &NewComment<'_>,
) -> ApiResult<Option<Comment>> {
    let path = url(&format!("/api/video/{}/comments", video_id));
    let request = authorize(Request::post(&path), token)
        .json(comment)
        .map_err(transport_error)?;
    timed(async move {
        let response = request.send().await.map_err(transport_error)?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(response.json::<Comment>().await.ok())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        assert_eq!(
            url("/api/video/v1/privacy"),
            format!("{}/api/video/v1/privacy", API_BASE)
        );
    }

    #[test]
    fn new_comment_wire_shape() {
        let body = NewComment { name: "Alice", text: "nice cut", timestamp: 12.34 };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Alice", "text": "nice cut", "timestamp": 12.34})
        );
    }

    #[test]
    fn privacy_body_uses_camel_case() {
        let json = serde_json::to_value(PrivacyBody { is_public: true }).unwrap();
        assert_eq!(json, serde_json::json!({"isPublic": true}));
    }

    #[test]
    fn api_errors_render_for_inline_display() {
        let err = ApiError::Status { status: 401, message: "Invalid credentials".into() };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(ApiError::Timeout.to_string().contains("timed out"));
    }
}
