//! # Session store
//!
//! [`SessionState`] is the single owner of the signed-in identity. It is plain
//! data with transition methods, so the UI can keep it in a signal and drive it
//! across an `await` in two halves ([`SessionState::begin`] before the request,
//! [`SessionState::finish`] after), while [`SessionStore`] drives the same
//! transitions sequentially for non-UI callers and tests.
//!
//! ## Lifecycle
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `restore` | Read the persisted session; malformed values are discarded and storage cleared. |
//! | `login` / `register` | Busy while the request runs; on success the session is replaced and persisted, on failure an error message is set and the previous session is kept. |
//! | `logout` | Clears memory and storage immediately, no request. |

use serde::Deserialize;
use store::session::{self, Restored, Session};
use store::SessionStorage;

use crate::client::BackendClient;
use crate::error::ApiError;
use crate::transport::{HttpResponse, Transport};

/// Identity fields returned by `/login` and `/register`.
///
/// Every field is optional: `/login` may omit the id and `/register` may
/// answer with nothing but a message.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Backends hand out numeric or string ids; both become strings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Text(s) => f.write_str(s),
            UserId::Number(n) => write!(f, "{n}"),
        }
    }
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AuthResponse {
    /// Decode a 2xx body. Anything unreadable counts as an empty answer.
    fn from_response(response: &HttpResponse) -> Self {
        if response.body.trim().is_empty() {
            return Self::default();
        }
        response.json().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable auth response: {e}");
            Self::default()
        })
    }

    /// Build the session, taking missing identity fields from what was
    /// submitted. Accounts are keyed by email, so it stands in for a missing id.
    pub fn into_session(self, username: Option<&str>, email: &str) -> Session {
        let email = filled(self.email).unwrap_or_else(|| email.trim().to_string());
        let username = filled(self.username)
            .or_else(|| username.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()))
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());
        let id = filled(self.user_id.map(|id| id.to_string())).unwrap_or_else(|| email.clone());
        Session {
            id,
            username,
            email,
            token: filled(self.token),
        }
    }
}

#[derive(serde::Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
}

/// `POST /login`
pub async fn login<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let response = client.post(&["login"], &LoginBody { email, password }).await?;
    Ok(AuthResponse::from_response(&response).into_session(None, email))
}

/// `POST /register`. The confirmation is always the password itself.
pub async fn register<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let body = RegisterBody {
        username,
        email,
        password,
        confirm_password: password,
    };
    let response = client.post(&["register"], &body).await?;
    Ok(AuthResponse::from_response(&response).into_session(Some(username), email))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    fn fallback(self) -> &'static str {
        match self {
            AuthAction::Login => "Login failed",
            AuthAction::Register => "Registration failed",
        }
    }
}

/// Signed-in identity plus loading and error status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
    restoring: bool,
    busy: bool,
    error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            restoring: true,
            busy: false,
            error: None,
        }
    }
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_authenticated)
    }

    /// Restoring from storage or waiting on the backend.
    pub fn is_loading(&self) -> bool {
        self.restoring || self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn restore(&mut self, storage: &impl SessionStorage, key: &str) {
        self.restoring = true;
        self.session = match session::restore(storage, key) {
            Restored::Valid(session) => Some(session),
            Restored::Empty | Restored::Discarded(_) => None,
        };
        self.restoring = false;
    }

    /// Mark a login/register request as in flight.
    pub fn begin(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Apply the outcome of a login/register request.
    pub fn finish(
        &mut self,
        action: AuthAction,
        outcome: Result<Session, ApiError>,
        storage: &impl SessionStorage,
        key: &str,
    ) {
        match outcome {
            Ok(new_session) => {
                session::persist(storage, key, &new_session);
                self.session = Some(new_session);
            }
            Err(e) => {
                tracing::error!("{action:?} failed: {e}");
                self.error = Some(
                    e.server_message()
                        .unwrap_or(action.fallback())
                        .to_string(),
                );
            }
        }
        self.busy = false;
    }

    pub fn logout(&mut self, storage: &impl SessionStorage, key: &str) {
        self.session = None;
        self.error = None;
        session::clear(storage, key);
    }
}

/// Sequential driver around [`SessionState`].
pub struct SessionStore<T, S> {
    client: BackendClient<T, S>,
    state: SessionState,
}

impl<T: Transport, S: SessionStorage> SessionStore<T, S> {
    pub fn new(client: BackendClient<T, S>) -> Self {
        Self {
            client,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn client(&self) -> &BackendClient<T, S> {
        &self.client
    }

    pub fn restore(&mut self) {
        self.state
            .restore(self.client.storage(), self.client.session_key());
    }

    pub async fn login(&mut self, email: &str, password: &str) {
        self.state.begin();
        let outcome = login(&self.client, email, password).await;
        self.state.finish(
            AuthAction::Login,
            outcome,
            self.client.storage(),
            self.client.session_key(),
        );
    }

    pub async fn register(&mut self, username: &str, email: &str, password: &str) {
        self.state.begin();
        let outcome = register(&self.client, username, email, password).await;
        self.state.finish(
            AuthAction::Register,
            outcome,
            self.client.storage(),
            self.client.session_key(),
        );
    }

    pub fn logout(&mut self) {
        self.state
            .logout(self.client.storage(), self.client.session_key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::transport::Method;
    use store::{MemoryStorage, PokedexConfig};

    const ASH: &str = r#"{"id":"1","username":"ash","email":"ash@kanto.org"}"#;

    fn store_with(mock: &MockTransport, storage: &MemoryStorage) -> SessionStore<MockTransport, MemoryStorage> {
        let client = BackendClient::new(mock.clone(), storage.clone(), &PokedexConfig::default());
        SessionStore::new(client)
    }

    #[test]
    fn test_starts_loading_until_restored() {
        let mut store = store_with(&MockTransport::new(), &MemoryStorage::new());
        assert!(store.state().is_loading());
        assert!(!store.state().is_authenticated());

        store.restore();
        assert!(!store.state().is_loading());
        assert!(store.state().session().is_none());
    }

    #[test]
    fn test_restore_valid_session() {
        let storage = MemoryStorage::with_item("user", ASH);
        let mut store = store_with(&MockTransport::new(), &storage);

        store.restore();
        assert!(store.state().is_authenticated());
        assert_eq!(store.state().session().unwrap().username, "ash");
    }

    #[test]
    fn test_restore_session_with_empty_field_is_not_authenticated() {
        let storage = MemoryStorage::with_item(
            "user",
            r#"{"id":"1","username":"","email":"ash@kanto.org"}"#,
        );
        let mut store = store_with(&MockTransport::new(), &storage);

        store.restore();
        assert!(!store.state().is_authenticated());
    }

    #[test]
    fn test_restore_corrupt_session_clears_storage() {
        for raw in ["not json", r#"{"id":"1","email":"a@b"}"#, r#"{"id":1,"username":"a","email":"b"}"#] {
            let storage = MemoryStorage::with_item("user", raw);
            let mut store = store_with(&MockTransport::new(), &storage);

            store.restore();
            assert!(!store.state().is_authenticated());
            assert!(store.state().error().is_none());
            assert!(storage.get_item("user").is_none());
        }
    }

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let mock = MockTransport::new().on(
            Method::Post,
            "/login",
            200,
            r#"{"message": "Login successful", "user_id": 42, "username": "misty", "email": "misty@cerulean.org", "token": "t0k"}"#,
        );
        let storage = MemoryStorage::new();
        let mut store = store_with(&mock, &storage);
        store.restore();

        store.login("misty@cerulean.org", "starmie").await;

        let state = store.state();
        assert!(state.is_authenticated());
        assert!(!state.is_loading());
        let session = state.session().unwrap();
        assert_eq!(session.id, "42");
        assert_eq!(session.token.as_deref(), Some("t0k"));

        let persisted = Session::decode(&storage.get_item("user").unwrap()).unwrap();
        assert_eq!(&persisted, session);

        let body: serde_json::Value =
            serde_json::from_str(mock.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "misty@cerulean.org", "password": "starmie"})
        );
    }

    #[tokio::test]
    async fn test_login_failure_keeps_previous_session() {
        let mock = MockTransport::new().on(
            Method::Post,
            "/login",
            401,
            r#"{"error": "Invalid credentials"}"#,
        );
        let storage = MemoryStorage::with_item("user", ASH);
        let mut store = store_with(&mock, &storage);
        store.restore();
        let before = store.state().session().cloned();

        store.login("ash@kanto.org", "wrong").await;

        let state = store.state();
        assert_eq!(state.error(), Some("Invalid credentials"));
        assert_eq!(state.session().cloned(), before);
        assert!(!state.is_busy());
        assert_eq!(storage.get_item("user").as_deref(), Some(ASH));
    }

    #[tokio::test]
    async fn test_login_failure_without_server_message_uses_fallback() {
        let mock = MockTransport::new().fail(
            Method::Post,
            "/login",
            ApiError::Transport("Network Error".to_string()),
        );
        let mut store = store_with(&mock, &MemoryStorage::new());
        store.restore();

        store.login("ash@kanto.org", "pikachu").await;
        assert_eq!(store.state().error(), Some("Login failed"));
        assert!(!store.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_clears_previous_error() {
        let mock = MockTransport::new()
            .on(Method::Post, "/login", 200, r#"{"user_id": "7", "username": "brock", "email": "brock@pewter.org"}"#);
        let mut store = store_with(&mock, &MemoryStorage::new());
        store.restore();
        store.state.error = Some("old".to_string());

        store.login("brock@pewter.org", "onix").await;
        assert!(store.state().error().is_none());
        assert_eq!(store.state().session().unwrap().id, "7");
    }

    #[tokio::test]
    async fn test_register_sends_confirmation() {
        let mock = MockTransport::new().on(
            Method::Post,
            "/register",
            201,
            r#"{"user_id": "9", "username": "gary", "email": "gary@pallet.org"}"#,
        );
        let storage = MemoryStorage::new();
        let mut store = store_with(&mock, &storage);
        store.restore();

        store.register("gary", "gary@pallet.org", "eevee123").await;

        assert!(store.state().is_authenticated());
        let body: serde_json::Value =
            serde_json::from_str(mock.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["confirm_password"], "eevee123");
        assert_eq!(body["username"], "gary");
        assert!(storage.get_item("user").is_some());
    }

    #[tokio::test]
    async fn test_register_failure_fallback() {
        let mock = MockTransport::new().on(Method::Post, "/register", 500, "");
        let mut store = store_with(&mock, &MemoryStorage::new());
        store.restore();

        store.register("gary", "gary@pallet.org", "eevee123").await;
        assert_eq!(store.state().error(), Some("Registration failed"));
    }

    #[tokio::test]
    async fn test_register_conflict_message() {
        let mock = MockTransport::new().on(
            Method::Post,
            "/register",
            409,
            r#"{"error": "Email already registered"}"#,
        );
        let mut store = store_with(&mock, &MemoryStorage::new());
        store.restore();

        store.register("gary", "gary@pallet.org", "eevee123").await;
        assert_eq!(store.state().error(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_register_message_only_signs_in() {
        let mock = MockTransport::new().on(
            Method::Post,
            "/register",
            201,
            r#"{"message": "User registered successfully"}"#,
        );
        let storage = MemoryStorage::new();
        let mut store = store_with(&mock, &storage);
        store.restore();

        store.register("ash", "ash@kanto.org", "pikachu1").await;

        let state = store.state();
        assert!(state.error().is_none());
        assert!(state.is_authenticated());
        let session = state.session().unwrap();
        assert_eq!(session.username, "ash");
        assert_eq!(session.email, "ash@kanto.org");
        assert_eq!(session.id, "ash@kanto.org");
        assert!(storage.get_item("user").is_some());
    }

    #[tokio::test]
    async fn test_login_without_user_id_signs_in() {
        let mock = MockTransport::new().on(
            Method::Post,
            "/login",
            200,
            r#"{"message": "Login successful", "username": "ash", "email": "ash@kanto.org"}"#,
        );
        let mut store = store_with(&mock, &MemoryStorage::new());
        store.restore();

        store.login("ash@kanto.org", "pikachu1").await;

        let state = store.state();
        assert!(state.error().is_none());
        assert!(state.is_authenticated());
        assert_eq!(state.session().unwrap().username, "ash");
        assert_eq!(state.session().unwrap().id, "ash@kanto.org");
    }

    #[tokio::test]
    async fn test_login_empty_body_uses_submitted_email() {
        let mock = MockTransport::new().on(Method::Post, "/login", 200, "");
        let mut store = store_with(&mock, &MemoryStorage::new());
        store.restore();

        store.login("misty@cerulean.org", "starmie").await;

        let session = store.state().session().unwrap();
        assert_eq!(session.email, "misty@cerulean.org");
        assert_eq!(session.username, "misty");
        assert!(session.token.is_none());
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let mock = MockTransport::new();
        let storage = MemoryStorage::with_item("user", ASH);
        let mut store = store_with(&mock, &storage);
        store.restore();
        assert!(store.state().is_authenticated());

        store.logout();
        assert!(!store.state().is_authenticated());
        assert!(storage.get_item("user").is_none());
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_busy_counts_as_loading() {
        let mut state = SessionState::default();
        state.restore(&MemoryStorage::new(), "user");
        assert!(!state.is_loading());

        state.begin();
        assert!(state.is_loading());
    }
}
