//! Descriptions of the HelpMap backend calls.
//!
//! Each wrapper builds an [`ApiCall`]: method, path, query and JSON body plus
//! the shape of the expected answer. Transport lives elsewhere (the web crate
//! uses `gloo-net`, the tester `reqwest`); both hand the raw body back to
//! [`ApiCall::decode_response`].
//!
//! The backend answers mutations with `{"success": true, "<field>": ...}`
//! and failures with `{"success": false, "error": "..."}`. Listing endpoints
//! return bare JSON.

mod calls;
pub mod types;

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use calls::{AuthApi, ForumApi, HelpRequestApi, MessageApi, ReviewApi, StatusApi};

/// Backend used when no override is compiled in.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("network error: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url_for(&self, request: &ApiRequest) -> String {
        request.url(&self.base_url)
    }
}

impl Default for ApiConfig {
    /// `HELPMAP_API_BASE` at compile time, else [`DEFAULT_API_BASE`].
    fn default() -> Self {
        Self::new(option_env!("HELPMAP_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

/// One HTTP request to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Absolute URL against `base`. Query values are ids and slugs and are
    /// written verbatim.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let mut url = format!("{}{}", base.trim_end_matches('/'), self.path);
        for (idx, (key, value)) in self.query.iter().enumerate() {
            url.push(if idx == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

/// Where the payload sits in a successful answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The whole body is the payload.
    Bare,
    /// The payload is one field of the success envelope.
    Field(&'static str),
}

/// A request together with the type of its decoded answer.
#[derive(Debug)]
pub struct ApiCall<T> {
    pub request: ApiRequest,
    pub shape: ResponseShape,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for ApiCall<T> {
    fn clone(&self) -> Self {
        Self {
            request: self.request.clone(),
            shape: self.shape,
            _payload: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> ApiCall<T> {
    #[must_use]
    pub const fn new(request: ApiRequest, shape: ResponseShape) -> Self {
        Self {
            request,
            shape,
            _payload: PhantomData,
        }
    }

    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for `success: false` answers and a
    /// decode or missing-field error when the body does not match.
    pub fn decode(&self, body: &str) -> Result<T, ApiError> {
        let value: Value = serde_json::from_str(body)?;
        if let Some(rejection) = rejection(&value) {
            return Err(rejection);
        }
        let payload = match self.shape {
            ResponseShape::Bare => value,
            ResponseShape::Field(key) => match value {
                Value::Object(mut map) => map.remove(key).ok_or(ApiError::MissingField(key))?,
                _ => return Err(ApiError::MissingField(key)),
            },
        };
        Ok(serde_json::from_value(payload)?)
    }

    /// Decode a response body received with HTTP `status`.
    ///
    /// A structured `error` wins over the status code so the backend's
    /// message reaches the user.
    ///
    /// # Errors
    ///
    /// As [`Self::decode`], plus [`ApiError::Status`] for unsuccessful codes
    /// without a structured error.
    pub fn decode_response(&self, status: u16, body: &str) -> Result<T, ApiError> {
        if (200..300).contains(&status) {
            return self.decode(body);
        }
        match serde_json::from_str::<Value>(body).ok().as_ref().and_then(rejection) {
            Some(rejection) => Err(rejection),
            None => Err(ApiError::Status(status)),
        }
    }
}

fn rejection(value: &Value) -> Option<ApiError> {
    if value.get("success").and_then(Value::as_bool) != Some(false) {
        return None;
    }
    let message = value
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or(GENERIC_FAILURE);
    Some(ApiError::Rejected(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::types::User;
    use super::*;

    #[test]
    fn url_joins_base_path_and_query() {
        let req = ApiRequest::new(Method::Get, "/api/reviews")
            .with_query("volunteer_id", 4)
            .with_query("page", "2");
        assert_eq!(
            req.url("http://localhost:5000/"),
            "http://localhost:5000/api/reviews?volunteer_id=4&page=2"
        );
    }

    #[test]
    fn rejection_carries_backend_error() {
        let call: ApiCall<User> =
            ApiCall::new(ApiRequest::new(Method::Post, "/api/login"), ResponseShape::Field("user"));
        let err = call
            .decode(r#"{"success": false, "error": "Invalid credentials"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn rejection_without_message_is_generic() {
        let call: ApiCall<Value> =
            ApiCall::new(ApiRequest::new(Method::Get, "/api/status"), ResponseShape::Bare);
        let err = call.decode(r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(msg) if msg == GENERIC_FAILURE));
    }

    #[test]
    fn missing_field_is_reported() {
        let call: ApiCall<User> =
            ApiCall::new(ApiRequest::new(Method::Post, "/api/login"), ResponseShape::Field("user"));
        let err = call.decode(r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("user")));
    }

    #[test]
    fn status_errors_prefer_structured_message() {
        let call: ApiCall<Value> =
            ApiCall::new(ApiRequest::new(Method::Post, "/api/register"), ResponseShape::Bare);
        let err = call
            .decode_response(409, r#"{"success": false, "error": "User already exists"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "User already exists");
        let err = call.decode_response(502, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Status(502)));
    }
}
