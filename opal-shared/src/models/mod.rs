//! Wire models shared between the web client and the API.

pub mod auth;
pub mod errors;

pub use auth::{
    AuthState, ERROR_CODE_INVALID_EMAIL, ERROR_CODE_INVALID_PASSWORD, ErrorBody, LoginRequest,
    LoginResponse,
};
pub use errors::{FetchError, TransportError};
