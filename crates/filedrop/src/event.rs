//! Typed request/response envelope shared by every handler.
//!
//! [`ApiEvent`] is what a handler sees of an inbound API Gateway event: the
//! invocation's request ID, the raw body, query parameters and headers.
//! [`ApiResponse`] is the `{ statusCode, body }` pair it answers with.

use std::collections::HashMap;

use bytes::Bytes;
use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::{Body, Request, RequestExt, Response};
use serde::Serialize;

const APPLICATION_JSON: &str = "application/json";

/// An inbound request, decoupled from the Lambda event types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiEvent {
    /// Identifier of this invocation, unique per request.
    pub request_id: String,
    /// Raw body. Binary bodies arrive already base64-decoded.
    pub body: Bytes,
    pub query: HashMap<String, String>,
    /// Header names are stored lowercase.
    pub headers: HashMap<String, String>,
}

impl ApiEvent {
    /// Create an empty event with the given request ID.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            ..Default::default()
        }
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a query string parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Value of a query string parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Build an event from a Lambda HTTP request.
    ///
    /// The request ID is the Lambda invocation ID; outside of Lambda a random
    /// UUID stands in for it.
    pub fn from_request(request: &Request) -> Self {
        let request_id = request
            .lambda_context_ref()
            .map(|ctx| ctx.request_id.clone())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let query = request
            .query_string_parameters_ref()
            .map(|params| {
                params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        let headers = request
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        let body = match request.body() {
            Body::Empty => Bytes::new(),
            Body::Text(text) => Bytes::copy_from_slice(text.as_bytes()),
            Body::Binary(bytes) => Bytes::copy_from_slice(bytes),
        };

        Self {
            request_id,
            body,
            query,
            headers,
        }
    }
}

/// A `{ statusCode, body }` response with a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// Serialize `body` as JSON under the given status code.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status_code, body },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                Self {
                    status_code: 500,
                    body: serde_json::json!({ "message": e.to_string() }).to_string(),
                }
            }
        }
    }

    /// 200 with a JSON body.
    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::json(200, body)
    }

    /// Parse the body back into JSON.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }

    /// Convert into the Lambda HTTP response type.
    pub fn into_lambda(self) -> Result<Response<Body>, lambda_http::http::Error> {
        Response::builder()
            .status(self.status_code)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(Body::Text(self.body))
    }
}
