//! Thin HTTP wrapper used by every page to talk to the inventory API.
//!
//! All helpers treat any non-2xx status as a failure. Callers decide what to
//! do with the error; the pages in this app only log it.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// `GET url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response)?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST url` with a JSON body; the response body is discarded
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response).map(|_| ())
}

/// `PUT url` with a JSON body; the response body is discarded
pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::put(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response).map(|_| ())
}

/// `DELETE url`
pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response).map(|_| ())
}
