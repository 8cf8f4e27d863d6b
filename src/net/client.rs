//! Shared HTTP executor for every REST helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! All requests go through `execute`, which applies the API base URL, sends
//! cookies, negotiates JSON, and runs the response interceptor: any 401
//! drops the persisted session and sends the browser to the login route
//! (unless it is already there), and every failure is logged once here
//! before being handed back unchanged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::error::ApiError;
use crate::state::auth::STORAGE_KEY;
use crate::util::storage::{BrowserStorage, KeyValueStore};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP verbs used by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }
}

/// Map a response status to an error, or `None` for 2xx.
pub fn status_error(status: u16, body: String) -> Option<ApiError> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(ApiError::Status { status, body })
    }
}

/// Where the interceptor should send the browser for this failure, if anywhere.
pub fn redirect_target(err: &ApiError, base_path: &str) -> Option<String> {
    err.is_unauthorized().then(|| crate::config::login_path(base_path))
}

/// On a 401, forget the persisted user so the reloaded app starts signed
/// out, and return the login route unless `current_path` already is it.
pub fn handle_unauthorized(
    err: &ApiError,
    storage: &impl KeyValueStore,
    base_path: &str,
    current_path: Option<&str>,
) -> Option<String> {
    let target = redirect_target(err, base_path)?;
    storage.remove(STORAGE_KEY);
    let on_login = current_path.is_some_and(|path| path.trim_end_matches('/') == target.trim_end_matches('/'));
    (!on_login).then_some(target)
}

/// Response interceptor: log, clear the session and redirect on 401, and
/// pass the error through.
pub fn intercept(err: ApiError) -> ApiError {
    let current = crate::util::browser::current_path();
    let base_path = &crate::config::AppConfig::get().base_path;
    if let Some(target) = handle_unauthorized(&err, &BrowserStorage, base_path, current.as_deref()) {
        log::warn!("API client: unauthorized, redirecting to {target}");
        crate::util::browser::assign_location(&target);
    }
    log::error!("API client: {err}");
    err
}

/// Send a request and decode a JSON body.
#[cfg(feature = "csr")]
pub async fn send_json<B, T>(method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let resp = execute(method, path, body).await?;
    resp.json::<T>().await.map_err(|e| intercept(ApiError::Decode(e.to_string())))
}

/// Send a request whose response body is ignored.
#[cfg(feature = "csr")]
pub async fn send_no_content<B>(method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
{
    execute(method, path, body).await.map(|_| ())
}

/// Outside the browser there is no transport; every call is unavailable.
#[cfg(not(feature = "csr"))]
pub async fn send_json<B, T>(method: Method, path: &str, _body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    log::debug!("API client: {} {path} skipped outside the browser", method.as_str());
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "csr"))]
pub async fn send_no_content<B>(method: Method, path: &str, _body: Option<&B>) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
{
    log::debug!("API client: {} {path} skipped outside the browser", method.as_str());
    Err(ApiError::Unavailable)
}

#[cfg(feature = "csr")]
async fn execute<B>(method: Method, path: &str, body: Option<&B>) -> Result<gloo_net::http::Response, ApiError>
where
    B: Serialize + ?Sized,
{
    use gloo_net::http::RequestBuilder;

    let url = crate::config::endpoint(&crate::config::AppConfig::get().api_base_url, path);
    let builder = RequestBuilder::new(&url)
        .method(gloo_method(method))
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| intercept(ApiError::Network(e.to_string())))?;

    let resp = request
        .send()
        .await
        .map_err(|e| intercept(ApiError::Network(e.to_string())))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    match status_error(status, body) {
        Some(err) => Err(intercept(err)),
        None => Ok(resp),
    }
}

#[cfg(feature = "csr")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Patch => gloo_net::http::Method::PATCH,
    }
}
