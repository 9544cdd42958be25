/*
    * Turns an `ApiResponse` into something a framework can send:
    * - `render()` produces the normalized (status, headers, body) triple,
    *   absorbing JSON encoding failures into a fixed 500 response.
    * - `ResponseConstructor` is the seam to the actual response factory;
    *   `AxumConstructor` is the native adapter, `RawConstructor` hands the
    *   triple through untouched for non-axum callers.
*/

use axum::{
    body::Body,
    http::{
        header::{HeaderName, HeaderValue},
        Response, StatusCode,
    },
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use crate::headers::HeaderSet;
use crate::response::{ApiResponse, Status};

/// Body message substituted when the original payload cannot be encoded.
pub const ENCODING_FAILURE_MESSAGE: &str = "Failed to encode response payload";

/// The normalized response triple, ready for any response factory.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub status_code: StatusCode,
    pub headers: HeaderSet,
    pub body: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Normalize headers and encode the payload. Encoding failure never
    /// reaches the caller: the payload is discarded and replaced with a
    /// minimal error body, and the status code is forced to 500.
    pub fn render(&self) -> Rendered {
        let headers: HeaderSet = HeaderSet::normalize(&self.headers);

        match serde_json::to_string(&self.payload()) {
            Ok(body) => Rendered {
                status_code: self.status_code,
                headers,
                body,
            },
            Err(err) => {
                error!("Failed to encode response payload: {err}");

                let fallback = json!({
                    "status": Status::Error.as_str(),
                    "message": ENCODING_FAILURE_MESSAGE,
                });
                let body: String =
                    serde_json::to_string(&fallback).unwrap_or_else(|_| String::from("{}"));

                Rendered {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR,
                    headers,
                    body,
                }
            }
        }
    }

    /// Construct the final response through an explicit adapter.
    pub fn into_response_with<C: ResponseConstructor>(self, constructor: &C) -> C::Response {
        constructor.construct(self.render())
    }
}

/// The external "construct an HTTP response" collaborator, chosen at
/// composition time.
pub trait ResponseConstructor {
    type Response;

    fn construct(&self, rendered: Rendered) -> Self::Response;
}

/// Native adapter: builds an `axum` response from the rendered triple.
pub struct AxumConstructor;

impl ResponseConstructor for AxumConstructor {
    type Response = Response<Body>;

    fn construct(&self, rendered: Rendered) -> Response<Body> {
        let mut response: Response<Body> = Response::new(Body::from(rendered.body));
        *response.status_mut() = rendered.status_code;

        for (name, value) in rendered.headers.iter() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(header_name), Ok(header_value)) => {
                    response.headers_mut().append(header_name, header_value);
                }
                // Names/values with control bytes cannot go on the wire.
                _ => warn!("Dropping header not representable in HTTP: {name}"),
            }
        }

        response
    }
}

/// Generic adapter: passes the rendered triple through for callers that
/// construct responses outside axum.
pub struct RawConstructor;

impl ResponseConstructor for RawConstructor {
    type Response = Rendered;

    fn construct(&self, rendered: Rendered) -> Rendered {
        rendered
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        AxumConstructor.construct(self.render())
    }
}
