// Library root for standardized JSON API response construction over Axum

pub mod construct;
pub mod headers;
pub mod logging;
pub mod response;

pub use construct::{
    AxumConstructor, RawConstructor, Rendered, ResponseConstructor, ENCODING_FAILURE_MESSAGE,
};
pub use headers::{HeaderSet, HeaderValues};
pub use logging::init_tracing;
pub use response::{fail, success, ApiResponse, Payload, Status};
