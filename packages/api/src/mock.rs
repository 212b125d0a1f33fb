//! Scripted [`Transport`] for tests.

use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

struct Route {
    method: Method,
    suffix: String,
    response: Result<HttpResponse, ApiError>,
}

#[derive(Default)]
struct Inner {
    routes: Vec<Route>,
    requests: Vec<HttpRequest>,
}

/// Answers requests from a list of `(method, URL suffix)` routes and records
/// every request it sees. Unmatched requests get a 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: Method, suffix: &str, status: u16, body: &str) -> Self {
        self.route(
            method,
            suffix,
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    pub fn fail(self, method: Method, suffix: &str, error: ApiError) -> Self {
        self.route(method, suffix, Err(error))
    }

    fn route(self, method: Method, suffix: &str, response: Result<HttpResponse, ApiError>) -> Self {
        self.inner.lock().unwrap().routes.push(Route {
            method,
            suffix: suffix.to_string(),
            response,
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        let response = inner
            .routes
            .iter()
            .find(|r| r.method == request.method && request.url.ends_with(&r.suffix))
            .map(|r| r.response.clone())
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    body: r#"{"error": "no route"}"#.to_string(),
                })
            });
        inner.requests.push(request);
        response
    }
}
