//! Unit and router tests for the Auth crate
//!
//! Router tests drive the real axum `Router` against an in-memory store.

#[cfg(test)]
mod support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use kernel::id::UserId;
    use platform::password::{Argon2Params, PasswordService};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::domain::entity::user::{NewUser, User};
    use crate::domain::repository::{InsertOutcome, UniqueField, UserRepository};
    use crate::domain::value_object::{email::Email, user_name::UserName};
    use crate::error::AuthResult;
    use crate::presentation::router::auth_router_generic;

    /// In-memory user store that counts every call
    #[derive(Clone, Default)]
    pub struct InMemoryUserStore {
        users: Arc<Mutex<Vec<User>>>,
        calls: Arc<AtomicUsize>,
        insert_conflict: Option<UniqueField>,
        delay: Option<Duration>,
    }

    impl InMemoryUserStore {
        /// Report this field as a duplicate on insert, as a unique index would
        pub fn with_insert_conflict(mut self, field: UniqueField) -> Self {
            self.insert_conflict = Some(field);
            self
        }

        /// Delay applied to every call
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn len(&self) -> usize {
            self.users.lock().unwrap().len()
        }

        pub fn seed(&self, user: User) {
            self.users.lock().unwrap().push(user);
        }

        pub fn stored(&self, user_name: &str) -> Option<User> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_name.as_str() == user_name)
                .cloned()
        }

        async fn enter(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
        }
    }

    impl UserRepository for InMemoryUserStore {
        async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
            self.enter().await;
            Ok(self.stored(user_name.as_str()))
        }

        async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
            self.enter().await;
            Ok(self.stored(user_name.as_str()).is_some())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            self.enter().await;
            Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
        }

        async fn insert(&self, user: &NewUser) -> AuthResult<InsertOutcome> {
            self.enter().await;
            if let Some(field) = self.insert_conflict {
                return Ok(InsertOutcome::Duplicate(field));
            }
            let mut users = self.users.lock().unwrap();
            let user_id = UserId::new(format!("{:024x}", users.len() + 1));
            users.push(user.clone().into_user(user_id.clone()));
            Ok(InsertOutcome::Inserted(user_id))
        }
    }

    /// Cheap Argon2 parameters so the suite stays fast
    pub fn fast_passwords() -> PasswordService {
        PasswordService::new(Argon2Params {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    pub fn router(store: InMemoryUserStore) -> Router {
        router_with_config(store, AuthConfig::default())
    }

    pub fn router_with_config(store: InMemoryUserStore, config: AuthConfig) -> Router {
        auth_router_generic(store, fast_passwords(), config)
    }

    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let content_type = body.map(|_| "application/json");
        send_with_content_type(app, method, uri, body, content_type).await
    }

    pub async fn send_with_content_type(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
        content_type: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn register(app: &Router, body: &str) -> (StatusCode, serde_json::Value) {
        send(app, Method::POST, "/user", Some(body)).await
    }

    pub async fn authenticate(app: &Router, body: &str) -> (StatusCode, serde_json::Value) {
        send(app, Method::POST, "/auth", Some(body)).await
    }
}

#[cfg(test)]
mod register_tests {
    use std::collections::HashSet;

    use axum::http::{Method, StatusCode};

    use super::support::*;
    use crate::domain::repository::UniqueField;

    const ALICE: &str = r#"{"username":"alice","email":"a@x.com","password":"p1"}"#;

    #[tokio::test]
    async fn test_register_returns_user_and_token() {
        let store = InMemoryUserStore::default();
        let app = router(store.clone());

        let (status, body) = register(&app, ALICE).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alice");
        assert_eq!(body["email"], "a@x.com");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body.get("password").is_none());

        let token = body["token"].as_str().unwrap();
        assert_eq!(token.len(), 25);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_register_stores_argon2_hash_not_password() {
        let store = InMemoryUserStore::default();
        let app = router(store.clone());

        register(&app, ALICE).await;

        let stored = store.stored("alice").unwrap();
        assert!(stored.password_hash.as_phc_string().starts_with("$argon2id$"));
        assert_ne!(stored.password_hash.as_phc_string(), "p1");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_embedded_conflict() {
        let store = InMemoryUserStore::default();
        let app = router(store.clone());
        register(&app, ALICE).await;

        let (status, body) = register(
            &app,
            r#"{"username":"alice","email":"other@x.com","password":"p2"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "message": "A user with this username already exists",
                "status": 409
            })
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_embedded_conflict() {
        let store = InMemoryUserStore::default();
        let app = router(store.clone());
        register(&app, ALICE).await;

        let (status, body) = register(
            &app,
            r#"{"username":"bob","email":"a@x.com","password":"p2"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "A user with this email already exists");
        assert_eq!(body["status"], 409);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_race_reports_conflict() {
        let store = InMemoryUserStore::default().with_insert_conflict(UniqueField::Email);
        let app = router(store.clone());

        let (status, body) = register(&app, ALICE).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], 409);
        assert_eq!(body["message"], "A user with this email already exists");
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_register_ignores_content_type() {
        for content_type in [None, Some("text/plain"), Some("application/x-www-form-urlencoded")] {
            let store = InMemoryUserStore::default();
            let app = router(store.clone());

            let (status, body) =
                send_with_content_type(&app, Method::POST, "/user", Some(ALICE), content_type)
                    .await;

            assert_eq!(status, StatusCode::OK, "content type: {content_type:?}");
            assert_eq!(body["username"], "alice");
            assert_eq!(store.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_tokens_are_unique_across_registrations() {
        let app = router(InMemoryUserStore::default());

        let mut tokens = HashSet::new();
        for i in 0..20 {
            let body = format!(
                r#"{{"username":"user{i}","email":"user{i}@x.com","password":"pw{i}"}}"#
            );
            let (status, response) = register(&app, &body).await;
            assert_eq!(status, StatusCode::OK);
            tokens.insert(response["token"].as_str().unwrap().to_string());
        }

        assert_eq!(tokens.len(), 20);
    }

    #[tokio::test]
    async fn test_invalid_bodies_rejected_before_store_access() {
        let bodies = [
            r#"{"username":"alice","email":"a@x.com"}"#,
            r#"{"username":"alice","password":"p1"}"#,
            r#"{"email":"a@x.com","password":"p1"}"#,
            r#"{"username":"","email":"a@x.com","password":"p1"}"#,
            r#"{"username":"alice","email":"","password":"p1"}"#,
            r#"{"username":"alice","email":"a@x.com","password":""}"#,
            r#"{"username":"alice","email":"a@x.com","password":null}"#,
            r#"{"username":"alice","email":"a@x.com","password":"p1","admin":true}"#,
            r#"not json"#,
            r#"[]"#,
        ];

        for body in bodies {
            let store = InMemoryUserStore::default();
            let app = router(store.clone());

            let (status, response) = register(&app, body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(
                response,
                serde_json::json!({"error": "Bad request", "status": 400})
            );
            assert_eq!(store.calls(), 0, "store touched for body: {body}");
        }
    }
}

#[cfg(test)]
mod authenticate_tests {
    use axum::http::{Method, StatusCode};

    use super::support::*;
    use crate::domain::entity::user::NewUser;
    use crate::domain::value_object::{
        email::Email, session_token::SessionToken, user_name::UserName,
    };
    use kernel::id::UserId;
    use platform::password::HashedPassword;

    const ALICE: &str = r#"{"username":"alice","email":"a@x.com","password":"p1"}"#;

    #[tokio::test]
    async fn test_register_then_authenticate_round_trip() {
        let app = router(InMemoryUserStore::default());

        let (_, registered) = register(&app, ALICE).await;
        let (status, body) =
            authenticate(&app, r#"{"username":"alice","password":"p1"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, registered);
    }

    #[tokio::test]
    async fn test_authenticate_is_idempotent() {
        let app = router(InMemoryUserStore::default());
        register(&app, ALICE).await;

        let login = r#"{"username":"alice","password":"p1"}"#;
        let (_, first) = authenticate(&app, login).await;
        let (_, second) = authenticate(&app, login).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_identical() {
        let app = router(InMemoryUserStore::default());
        register(&app, ALICE).await;

        let (wrong_status, wrong_body) =
            authenticate(&app, r#"{"username":"alice","password":"nope"}"#).await;
        let (unknown_status, unknown_body) =
            authenticate(&app, r#"{"username":"mallory","password":"p1"}"#).await;

        assert_eq!(wrong_status, StatusCode::FORBIDDEN);
        assert_eq!(
            wrong_body,
            serde_json::json!({"error": "Invalid credentials", "status": 403})
        );
        assert_eq!(unknown_status, wrong_status);
        assert_eq!(unknown_body, wrong_body);
    }

    #[tokio::test]
    async fn test_username_match_is_exact() {
        let app = router(InMemoryUserStore::default());
        register(&app, ALICE).await;

        let (status, _) = authenticate(&app, r#"{"username":"Alice","password":"p1"}"#).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_corrupt_hash_is_internal_error() {
        let store = InMemoryUserStore::default();
        store.seed(
            NewUser::new(
                UserName::new("alice").unwrap(),
                Email::new("a@x.com").unwrap(),
                HashedPassword::from_stored("not-a-phc-string"),
                SessionToken::from_stored("AbCdEfGhIjKlMnOpQrStUvWxY"),
            )
            .into_user(UserId::new("1")),
        );
        let app = router(store);

        let (status, body) =
            authenticate(&app, r#"{"username":"alice","password":"p1"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({"error": "Password verification failed", "status": 500})
        );
    }

    #[tokio::test]
    async fn test_invalid_bodies_rejected_before_store_access() {
        let bodies = [
            r#"{"username":"alice"}"#,
            r#"{"password":"p1"}"#,
            r#"{"username":"","password":"p1"}"#,
            r#"{"username":"alice","password":""}"#,
            r#"{"username":"alice","password":1}"#,
            r#"{"username":"alice","password":"p1","token":"x"}"#,
            r#"{"#,
        ];

        for body in bodies {
            let store = InMemoryUserStore::default();
            let app = router(store.clone());

            let (status, _) = authenticate(&app, body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(store.calls(), 0, "store touched for body: {body}");
        }
    }

    #[tokio::test]
    async fn test_authenticate_without_content_type() {
        let app = router(InMemoryUserStore::default());
        let (_, registered) = register(&app, ALICE).await;

        let (status, body) = send_with_content_type(
            &app,
            Method::POST,
            "/auth",
            Some(r#"{"username":"alice","password":"p1"}"#),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, registered);
    }

    #[tokio::test]
    async fn test_missing_body_rejected() {
        let store = InMemoryUserStore::default();
        let app = router(store.clone());

        let (status, body) = send(&app, Method::POST, "/auth", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(store.calls(), 0);
    }
}

#[cfg(test)]
mod deadline_tests {
    use std::time::Duration;

    use axum::http::StatusCode;

    use super::support::*;
    use crate::application::config::AuthConfig;

    #[tokio::test(start_paused = true)]
    async fn test_slow_store_times_out_as_internal_error() {
        let store = InMemoryUserStore::default().with_delay(Duration::from_secs(60));
        let app = router_with_config(store, AuthConfig::with_timeout(Duration::from_secs(1)));

        let (status, body) =
            authenticate(&app, r#"{"username":"alice","password":"p1"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({"error": "Request timed out", "status": 500})
        );
    }
}

#[cfg(test)]
mod user_stub_tests {
    use axum::http::{Method, StatusCode};

    use super::support::*;

    #[tokio::test]
    async fn test_existing_user_endpoint_not_implemented() {
        let app = router(InMemoryUserStore::default());

        for method in [Method::GET, Method::POST] {
            let (status, body) = send(&app, method, "/user/42", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(
                body,
                serde_json::json!({"error": "Not implemented yet", "status": 404})
            );
        }
    }

    #[tokio::test]
    async fn test_zero_user_id_is_bad_request() {
        let app = router(InMemoryUserStore::default());
        let (status, _) = send(&app, Method::GET, "/user/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_integer_user_id_is_not_found() {
        let app = router(InMemoryUserStore::default());

        for uri in ["/user/alice", "/user/1.5"] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "uri: {uri}");
            assert_eq!(
                body,
                serde_json::json!({"error": "Resource not found", "status": 404})
            );
        }
    }
}

#[cfg(test)]
mod error_tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use platform::deadline::DeadlineExceeded;

    use crate::error::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::InvalidRequest, StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredentials, StatusCode::FORBIDDEN),
            (AuthError::NotFound, StatusCode::NOT_FOUND),
            (AuthError::NotImplemented, StatusCode::NOT_FOUND),
            (
                AuthError::VerificationFailed("bad hash".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::HashingFailed("oom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Timeout(DeadlineExceeded {
                    operation: "user lookup",
                    limit: Duration::from_secs(1),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_internal_details_not_in_client_message() {
        let err = AuthError::Internal("pool exhausted at 10.0.0.3".into());
        assert_eq!(err.client_message(), "Internal server error");

        let err = AuthError::VerificationFailed("salt invalid".into());
        assert_eq!(err.client_message(), "Password verification failed");
    }
}
