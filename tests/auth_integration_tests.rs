use serde_json::json;
use taskdeck::api::backend::LOGIN_FAILED_MESSAGE;
use taskdeck::api::{AuthBackend, AuthError, RemoteAuth, SignupRequest};
use taskdeck::core::auth::{LoginCredentials, Session};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "jane@example.com".to_string(),
        password: "secret1".to_string(),
    }
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        username: "jane".to_string(),
        email: "jane@example.com".to_string(),
        password: "secret1".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        phone_number: "5551234".to_string(),
        date_of_birth: "1990-05-01T00:00:00.000Z".to_string(),
        gender: "female".to_string(),
    }
}

fn auth_for(server: &MockServer) -> RemoteAuth {
    RemoteAuth::new(Some(format!("{}/api", server.uri())))
}

// ============================================================================
// Sign In
// ============================================================================

#[tokio::test]
async fn test_signin_success_returns_token_and_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signin"))
        .and(body_json(json!({
            "username": "jane@example.com",
            "password": "secret1",
            "email": "jane@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc.def"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let grant = auth_for(&mock_server).sign_in(&credentials()).await.unwrap();

    assert_eq!(grant.token, "abc.def");
    assert_eq!(grant.user.email, "jane@example.com");
    assert_eq!(grant.user.name, "jane");
}

#[tokio::test]
async fn test_signin_unauthorized_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&mock_server)
        .await;

    let err = auth_for(&mock_server)
        .sign_in(&credentials())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AuthError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        }
    );
    assert_eq!(err.login_message(), LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_signin_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = auth_for(&mock_server)
        .sign_in(&credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_signin_missing_token_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": "jane"})))
        .mount(&mock_server)
        .await;

    let err = auth_for(&mock_server)
        .sign_in(&credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Start a server only to learn a free port, then shut it down
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let auth = RemoteAuth::new(Some(format!("{}/api", uri)));
    let err = auth.sign_in(&credentials()).await.unwrap_err();

    assert!(matches!(err, AuthError::Network(_)), "got {:?}", err);
    assert_eq!(err.login_message(), LOGIN_FAILED_MESSAGE);
}

// ============================================================================
// Sign Up
// ============================================================================

#[tokio::test]
async fn test_signup_sends_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signup"))
        .and(body_json(json!({
            "username": "jane",
            "email": "jane@example.com",
            "password": "secret1",
            "firstName": "Jane",
            "lastName": "Doe",
            "phoneNumber": "5551234",
            "dateOfBirth": "1990-05-01T00:00:00.000Z",
            "gender": "female"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = auth_for(&mock_server).sign_up(&signup_request()).await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_signup_server_error_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signup"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let err = auth_for(&mock_server)
        .sign_up(&signup_request())
        .await
        .unwrap_err();

    assert!(
        matches!(err, AuthError::Rejected { status: 500, .. }),
        "got {:?}",
        err
    );
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn test_session_login_against_remote_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .mount(&mock_server)
        .await;

    let auth = auth_for(&mock_server);
    let mut session = Session::new();
    let user = session.login(&auth, &credentials()).await.unwrap();

    assert_eq!(user.email, "jane@example.com");
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-1"));

    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn test_session_stays_anonymous_on_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/signin"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let auth = auth_for(&mock_server);
    let mut session = Session::new();
    let result = session.login(&auth, &credentials()).await;

    assert!(result.is_err());
    assert!(!session.is_authenticated());
}
