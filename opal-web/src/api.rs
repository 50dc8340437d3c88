#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::models::session::{LoadingState, SessionStore};
use crate::storage::SessionPersistence;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use shared::models::{
    AuthState, ERROR_CODE_INVALID_EMAIL, ERROR_CODE_INVALID_PASSWORD, ErrorBody, FetchError,
    LoginRequest, LoginResponse,
};
use std::rc::Rc;
use yew::Callback;
use yewdux::Dispatch;

pub(crate) const MSG_CONNECTION_FAILED: &str = "Unable to reach the server.";
pub(crate) const MSG_UNVERIFIED_ACCOUNT: &str = "This account has not been verified yet.";
pub(crate) const MSG_INVALID_EMAIL: &str = "Invalid email address.";
pub(crate) const MSG_INVALID_PASSWORD: &str = "Invalid password.";
pub(crate) const MSG_LOGIN_FAILED: &str = "Sign-in failed.";
pub(crate) const MSG_LOGIN_REQUIRED: &str = "Please sign in to continue.";
pub(crate) const MSG_NOT_FOUND: &str = "The requested resource could not be found.";
pub(crate) const MSG_FORBIDDEN: &str = "You do not have permission to view this.";
pub(crate) const MSG_REQUEST_FAILED: &str = "The request could not be completed.";

/// Where the client asks the shell to send the user after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    /// The application root, for forced sign-in.
    Root,
    /// One step back in history, for a blocked or missing resource.
    Back,
}

/// Caller-supplied parts of an authenticated request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Request method; GET when unspecified.
    pub method: Method,
    /// Extra headers. A caller-supplied `Authorization` header is replaced
    /// by the injected bearer token whenever one is held.
    pub headers: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
}

/// Result of an authenticated fetch that reached a 2xx response.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchBody {
    /// Body parsed as JSON.
    Json(serde_json::Value),
    /// Raw response, kept when the body is not valid JSON.
    Raw(HttpResponse),
}

/// API client owning the session flow: login, silent refresh, authenticated
/// fetch, logout.
///
/// Constructed once by the application shell and handed to call sites
/// through context; nothing here is process-global. The session and loading
/// cells are yewdux dispatches, alerts and navigation are injected
/// callbacks, and the transport and persistence sit behind traits.
#[derive(Clone)]
pub struct AuthClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    persistence: Rc<dyn SessionPersistence>,
    session: Dispatch<SessionStore>,
    loading: Dispatch<LoadingState>,
    alerts: Callback<String>,
    navigation: Callback<NavigationRequest>,
}

impl PartialEq for AuthClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.transport, &other.transport)
            && Rc::ptr_eq(&self.persistence, &other.persistence)
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AuthClient {
    /// Create a new client against the given API base URL.
    pub fn new(
        base_url: &str,
        transport: Rc<dyn HttpTransport>,
        persistence: Rc<dyn SessionPersistence>,
        session: Dispatch<SessionStore>,
        loading: Dispatch<LoadingState>,
        alerts: Callback<String>,
        navigation: Callback<NavigationRequest>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            persistence,
            session,
            loading,
            alerts,
            navigation,
        }
    }

    /// Absolute URL for an API path, useful for callers of
    /// [`fetch_with_auth`](Self::fetch_with_auth).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Whether an access token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.tokens().is_authenticated()
    }

    /// Loads the persisted token pair into the session cell, if one exists.
    /// Called once at startup.
    pub fn hydrate(&self) {
        if let Some(tokens) = self.persistence.restore() {
            self.session.set(SessionStore { tokens });
        }
    }

    /// Clears the session: empty token pair in the cell, persisted key
    /// removed.
    pub fn logout(&self) {
        self.session.set(SessionStore::default());
        self.persistence.clear();
    }

    /// Authenticates with email/password credentials.
    ///
    /// Returns `true` when a token pair was stored. Every failure branch
    /// surfaces a user-facing message and returns `false`; the loading
    /// indicator is cleared on all paths.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _loading = self.begin_loading();
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            keeping_login: false,
        };
        let Ok(body) = serde_json::to_value(&credentials) else {
            return false;
        };
        let request = HttpRequest::post(self.endpoint("auth/login")).with_json(body);
        let Ok(response) = self.transport.execute(request).await else {
            self.alerts.emit(MSG_CONNECTION_FAILED.to_string());
            return false;
        };
        // The body is parsed before branching on the status; an unparseable
        // body counts as a connectivity failure on either branch.
        let Ok(data) = serde_json::from_str::<serde_json::Value>(&response.body) else {
            self.alerts.emit(MSG_CONNECTION_FAILED.to_string());
            return false;
        };
        if response.is_success() {
            let Ok(login) = serde_json::from_value::<LoginResponse>(data) else {
                self.alerts.emit(MSG_CONNECTION_FAILED.to_string());
                return false;
            };
            if login.verified == Some(false) {
                self.alerts.emit(MSG_UNVERIFIED_ACCOUNT.to_string());
                return false;
            }
            self.store_tokens(login.token);
            true
        } else {
            let error: ErrorBody = serde_json::from_value(data).unwrap_or_default();
            let message = match error.error_code {
                Some(ERROR_CODE_INVALID_EMAIL) => MSG_INVALID_EMAIL,
                Some(ERROR_CODE_INVALID_PASSWORD) => MSG_INVALID_PASSWORD,
                _ => MSG_LOGIN_FAILED,
            };
            self.alerts.emit(message.to_string());
            false
        }
    }

    /// Exchanges the held refresh token for a new pair.
    ///
    /// Single attempt. Fails fast without a network call when no refresh
    /// token is held, and never mutates the session on failure. Concurrent
    /// callers refresh independently; there is no shared in-flight guard.
    pub async fn refresh_session(&self) -> bool {
        let Some(refresh_token) = self.tokens().refresh_token else {
            return false;
        };
        let request = HttpRequest::post(self.endpoint("auth/refresh"))
            .with_header("Authorization", format!("Bearer {refresh_token}"));
        let Ok(response) = self.transport.execute(request).await else {
            return false;
        };
        if !response.is_success() {
            return false;
        }
        let Ok(tokens) = serde_json::from_str::<AuthState>(&response.body) else {
            return false;
        };
        self.store_tokens(tokens);
        true
    }

    /// Issues a request with the current bearer token, refreshing and
    /// retrying once on 401.
    ///
    /// Returns the parsed JSON body, the raw response when the body is not
    /// JSON, or `None` on any failure branch after it has been reported
    /// through the alert/navigation collaborators. The loading indicator is
    /// cleared on every path.
    pub async fn fetch_with_auth(&self, url: &str, options: RequestOptions) -> Option<FetchBody> {
        let _loading = self.begin_loading();
        let mut refreshed = false;
        loop {
            let request = self.authorized_request(url, &options);
            let response = match self.transport.execute(request).await {
                Ok(response) => response,
                Err(_) => {
                    self.alerts.emit(MSG_CONNECTION_FAILED.to_string());
                    return None;
                }
            };
            if response.is_success() {
                return Some(match serde_json::from_str(&response.body) {
                    Ok(value) => FetchBody::Json(value),
                    Err(_) => FetchBody::Raw(response),
                });
            }
            match FetchError::from_status(response.status) {
                FetchError::AuthExpired => {
                    // One refresh-and-retry cycle per call; a second 401 is
                    // handled like a failed refresh.
                    if !refreshed && self.refresh_session().await {
                        refreshed = true;
                        continue;
                    }
                    self.alerts.emit(MSG_LOGIN_REQUIRED.to_string());
                    self.navigation.emit(NavigationRequest::Root);
                }
                FetchError::NotFound => {
                    self.alerts.emit(MSG_NOT_FOUND.to_string());
                    self.navigation.emit(NavigationRequest::Back);
                }
                FetchError::Forbidden => {
                    self.alerts.emit(MSG_FORBIDDEN.to_string());
                    self.navigation.emit(NavigationRequest::Back);
                }
                FetchError::Http(_) | FetchError::Transport(_) => {
                    self.alerts.emit(MSG_REQUEST_FAILED.to_string());
                }
            }
            return None;
        }
    }

    fn tokens(&self) -> AuthState {
        self.session.get().tokens.clone()
    }

    /// Replaces the session wholesale, then persists the new pair.
    fn store_tokens(&self, tokens: AuthState) {
        self.session.set(SessionStore {
            tokens: tokens.clone(),
        });
        self.persistence.save(&tokens);
    }

    fn authorized_request(&self, url: &str, options: &RequestOptions) -> HttpRequest {
        let mut request = HttpRequest {
            method: options.method,
            url: url.to_string(),
            headers: options.headers.clone(),
            body: options.body.clone(),
        };
        if let Some(access_token) = self.tokens().access_token {
            // The injected header wins over a caller-supplied one.
            request
                .headers
                .retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {access_token}")));
        }
        request
    }

    fn begin_loading(&self) -> LoadingGuard {
        self.loading.set(LoadingState { active: true });
        LoadingGuard {
            loading: self.loading.clone(),
        }
    }
}

/// Clears the loading indicator when dropped, so every exit path of a
/// network-bearing call resets it.
struct LoadingGuard {
    loading: Dispatch<LoadingState>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loading.set(LoadingState { active: false });
    }
}
