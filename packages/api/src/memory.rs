use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Scripted in-memory transport for tests.
///
/// Responses are keyed by method and path; anything unscripted answers 404.
/// Every request is recorded so tests can assert on exactly what was sent.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    routes: Arc<Mutex<HashMap<(Method, String), ApiResponse>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(
                (method, path.to_string()),
                ApiResponse {
                    status,
                    body: body.to_string(),
                },
            );
        }
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Recorded requests as `"METHOD /path"` lines.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let scripted = self
            .routes
            .lock()
            .ok()
            .and_then(|routes| routes.get(&key).cloned());
        Ok(scripted.unwrap_or(ApiResponse {
            status: 404,
            body: r#"{"message":"Not found"}"#.to_string(),
        }))
    }
}
