use serde::{Deserialize, Serialize};

/// Server error code returned for a malformed or unknown email address.
pub const ERROR_CODE_INVALID_EMAIL: u32 = 1001;

/// Server error code returned for a wrong password.
pub const ERROR_CODE_INVALID_PASSWORD: u32 = 1002;

/// The access/refresh token pair held by the client.
///
/// Both fields are populated together from a single server response and
/// cleared together; the constructors here are the only places a pair is
/// assembled, so a half-populated state is never built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Short-lived credential attached to authenticated requests.
    pub access_token: Option<String>,
    /// Longer-lived credential used solely to obtain a new pair.
    pub refresh_token: Option<String>,
}

impl AuthState {
    /// Creates a fully-populated token pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
        }
    }

    /// Whether an access token is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether a refresh token is currently held.
    #[must_use]
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }
}

/// Body of `POST auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password, sent in the clear over the transport's TLS.
    pub password: String,
    /// Whether the session should outlive the browser session. The web
    /// client always sends `false`; tokens live in session storage.
    pub keeping_login: bool,
}

/// Successful body of `POST auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The issued token pair.
    pub token: AuthState,
    /// `Some(false)` when the credentials are valid but the account has not
    /// completed email verification. Absent for fully active accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Error payload the auth endpoints return alongside a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Machine-readable failure code; see the `ERROR_CODE_*` constants.
    #[serde(default)]
    pub error_code: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the empty default pair
    #[test]
    fn test_auth_state_default_is_empty() {
        let state = AuthState::default();
        assert_eq!(state.access_token, None);
        assert_eq!(state.refresh_token, None);
        assert!(!state.is_authenticated());
        assert!(!state.has_refresh_token());
    }

    /// Test that the constructor populates both credentials together
    #[test]
    fn test_auth_state_new_sets_both_tokens() {
        let state = AuthState::new("access", "refresh");
        assert_eq!(state.access_token.as_deref(), Some("access"));
        assert_eq!(state.refresh_token.as_deref(), Some("refresh"));
        assert!(state.is_authenticated());
        assert!(state.has_refresh_token());
    }

    /// Test camelCase wire names on the token pair
    #[test]
    fn test_auth_state_serializes_camel_case() {
        let state = AuthState::new("a", "r");
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"accessToken\":\"a\""));
        assert!(json.contains("\"refreshToken\":\"r\""));
    }

    /// Test the token pair round-trips through JSON
    #[test]
    fn test_auth_state_round_trip() {
        let state = AuthState::new("access", "refresh");
        let json = serde_json::to_string(&state).unwrap();
        let parsed: AuthState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    /// Test login request wire shape
    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            keeping_login: false,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\":\"user@example.com\""));
        assert!(json.contains("\"keepingLogin\":false"));
    }

    /// Test login response with the verified flag present
    #[test]
    fn test_login_response_with_verified_flag() {
        let json = r#"{"token":{"accessToken":"a","refreshToken":"r"},"verified":false}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, AuthState::new("a", "r"));
        assert_eq!(response.verified, Some(false));
    }

    /// Test login response without the verified flag
    #[test]
    fn test_login_response_without_verified_flag() {
        let json = r#"{"token":{"accessToken":"a","refreshToken":"r"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.verified, None);
    }

    /// Test error body parsing
    #[test]
    fn test_error_body_codes() {
        let body: ErrorBody = serde_json::from_str(r#"{"errorCode":1001}"#).unwrap();
        assert_eq!(body.error_code, Some(ERROR_CODE_INVALID_EMAIL));

        let body: ErrorBody = serde_json::from_str(r#"{"errorCode":1002}"#).unwrap();
        assert_eq!(body.error_code, Some(ERROR_CODE_INVALID_PASSWORD));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error_code, None);
    }
}
