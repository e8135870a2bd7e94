//! API utilities for frontend-backend communication
//!
//! Resolves the API root and builds request URLs.

/// Port the inventory API listens on when no explicit root is configured
pub const DEFAULT_API_PORT: u16 = 8080;

/// Get the base URL for API requests
///
/// The root can be pinned at build time through the `API_ROOT` environment
/// variable (e.g. `API_ROOT=https://api.example.com trunk build`). Otherwise it
/// is derived from the current window location, using [`DEFAULT_API_PORT`].
///
/// # Returns
/// - API base URL like "http://localhost:8080", without a trailing slash
/// - Empty string if neither is available
pub fn api_base() -> String {
    if let Some(root) = option_env!("API_ROOT") {
        return normalize_root(root);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Build a URL whose last segment is an identifier, percent-encoding it
pub fn api_url_with_id(path: &str, id: &str) -> String {
    api_url(&id_path(path, id))
}

fn id_path(path: &str, id: &str) -> String {
    format!("{}/{}", path.trim_end_matches('/'), urlencoding::encode(id))
}

fn normalize_root(root: &str) -> String {
    root.trim().trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
