use gloo_net::http::Request;
use gloo_net::Error as GlooError;
use serde::Serialize;
use crate::config;

/// Centralized API client that prefixes the backend URL and attaches the
/// stored bearer token when one exists.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
}

pub fn auth_token() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item("token").ok())
        .flatten()
}

pub fn store_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item("token", token);
    }
}

pub fn clear_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.remove_item("token");
    }
}

pub fn is_logged_in() -> bool {
    auth_token().is_some()
}

impl RequestWrapper {
    fn new(path: &str, method: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let mut request = match method {
            "POST" => Request::post(&full_url),
            "DELETE" => Request::delete(&full_url),
            _ => Request::get(&full_url),
        };

        if let Some(token) = auth_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        Self { request }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self.request.header("Content-Type", "application/json");
        self.request = self.request.body(body_string);
        Ok(self)
    }

    pub async fn send(self) -> Result<gloo_net::http::Response, GlooError> {
        self.request.send().await
    }
}

impl Api {
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }

    pub fn delete(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "DELETE")
    }
}
