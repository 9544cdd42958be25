/*
    * The universal success/error response shape and its builder.
    * Handlers build an `ApiResponse`, chain overrides onto it and
    * return it directly (it implements `IntoResponse`).
*/

use axum::http::StatusCode;
use serde::Serialize;

use crate::headers::HeaderValues;

/// Status label carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

/// The serialized body: `{"status": ..., "message": ..., "data": ...}`.
/// `data` is omitted entirely on error responses.
#[derive(Serialize)]
pub struct Payload<'a, T: Serialize> {
    pub status: Status,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
}

#[derive(Debug, Clone)]
pub struct ApiResponse<T: Serialize> {
    pub status: Status,
    pub message: String,
    pub data: Option<T>,
    pub status_code: StatusCode,
    // Raw caller headers, in insertion order. Normalized at render time.
    pub headers: Vec<(String, HeaderValues)>,
}

/// Build a success response around `data` (status code 200 until overridden).
pub fn success<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse {
        status: Status::Success,
        message: String::new(),
        data: Some(data),
        status_code: StatusCode::OK,
        headers: Vec::new(),
    }
}

/// Build an error response carrying `message` (status code 400 until overridden).
pub fn fail(message: impl Into<String>) -> ApiResponse<()> {
    ApiResponse {
        status: Status::Error,
        message: message.into(),
        data: None,
        status_code: StatusCode::BAD_REQUEST,
        headers: Vec::new(),
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Attach one header. Accepts a single value or a sequence of values;
    /// sequences are joined with ", " during normalization.
    pub fn header(mut self, name: impl Into<String>, values: impl Into<HeaderValues>) -> Self {
        self.headers.push((name.into(), values.into()));
        self
    }

    pub fn headers<N, V>(mut self, headers: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<HeaderValues>,
    {
        self.headers
            .extend(headers.into_iter().map(|(n, v)| (n.into(), v.into())));
        self
    }

    /// The shaped body, before JSON encoding. Exposed so consumers can wrap
    /// or re-serialize the standard shape themselves.
    pub fn payload(&self) -> Payload<'_, T> {
        Payload {
            status: self.status,
            message: &self.message,
            data: self.data.as_ref(),
        }
    }
}
