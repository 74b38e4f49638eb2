//! Integration tests for the API client: bearer-token injection and the
//! refresh-on-401 retry rule, against a mock HTTP server.

use mockito::Matcher;
use modalytics::app::{ApiClient, Config, SessionStore};
use modalytics::shared::error::ApiError;
use pretty_assertions::assert_eq;

fn client_for(server: &mockito::ServerGuard) -> (ApiClient, SessionStore) {
    let config = Config::with_base_url(format!("{}/api", server.url())).unwrap();
    let session = SessionStore::in_memory();
    let client = ApiClient::new(config, session.clone());
    (client, session)
}

fn auth_body(access: &str, refresh: &str) -> String {
    serde_json::json!({
        "user": {
            "id": 1,
            "username": "ana",
            "email": "ana@example.com",
            "first_name": "Ana",
            "last_name": "Ruiz"
        },
        "access": access,
        "refresh": refresh
    })
    .to_string()
}

const REGION_SALES_BODY: &str = r#"[
    {"region_name": "North", "total_sales": "12345.67", "order_count": 42},
    {"region_name": "South", "total_sales": "9876.50", "order_count": 31}
]"#;

#[test]
fn login_stores_session() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/auth/login/")
        .match_body(Matcher::Json(serde_json::json!({
            "username": "ana",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(auth_body("acc-1", "ref-1"))
        .create();

    let (client, session) = client_for(&server);
    let auth = client
        .login("ana".to_string(), "secret".to_string())
        .unwrap();

    mock.assert();
    assert_eq!(auth.user.username, "ana");
    assert!(session.is_logged_in());
    assert_eq!(session.access_token().as_deref(), Some("acc-1"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref-1"));
    assert_eq!(session.user().unwrap().first_name, "Ana");
}

#[test]
fn login_failure_surfaces_server_message() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/auth/login/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "invalid username or password"}"#)
        .create();

    let (client, session) = client_for(&server);
    let err = client
        .login("ana".to_string(), "wrong".to_string())
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Unauthorized {
            message: "invalid username or password".to_string()
        }
    );
    assert!(!session.is_logged_in());
}

#[test]
fn register_stores_session() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/auth/register/")
        .match_body(Matcher::Json(serde_json::json!({
            "username": "ana",
            "email": "ana@example.com",
            "password": "secret"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(auth_body("acc-1", "ref-1"))
        .create();

    let (client, session) = client_for(&server);
    client
        .register(
            "ana".to_string(),
            "ana@example.com".to_string(),
            "secret".to_string(),
        )
        .unwrap();

    assert!(session.is_logged_in());
}

#[test]
fn register_failure_surfaces_field_errors() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/auth/register/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"username": ["A user with that username already exists."]}"#)
        .create();

    let (client, _session) = client_for(&server);
    let err = client
        .register(
            "ana".to_string(),
            "ana@example.com".to_string(),
            "secret".to_string(),
        )
        .unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("already exists"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[test]
fn bearer_token_attached_to_requests() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/analysis/region-sales/")
        .match_header("authorization", "Bearer acc-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REGION_SALES_BODY)
        .create();

    let (client, session) = client_for(&server);
    session.set_authenticated(
        modalytics::app::User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        },
        "acc-1".to_string(),
        "ref-1".to_string(),
    );

    let rows = client.region_sales().unwrap();
    mock.assert();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].region_name, "North");
    assert_eq!(rows[0].total_sales, 12345.67);
    assert_eq!(rows[1].order_count, 31);
}

#[test]
fn refresh_on_401_retries_once_with_new_token() {
    let mut server = mockito::Server::new();

    let stale = server
        .mock("GET", "/api/analysis/region-sales/")
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Given token not valid for any token type"}"#)
        .expect(1)
        .create();

    let refresh = server
        .mock("POST", "/api/token/refresh/")
        .match_body(Matcher::Json(serde_json::json!({"refresh": "good"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access": "fresh"}"#)
        .expect(1)
        .create();

    let retried = server
        .mock("GET", "/api/analysis/region-sales/")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REGION_SALES_BODY)
        .expect(1)
        .create();

    let (client, session) = client_for(&server);
    session.set_authenticated(
        modalytics::app::User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        },
        "stale".to_string(),
        "good".to_string(),
    );

    let rows = client.region_sales().unwrap();

    stale.assert();
    refresh.assert();
    retried.assert();
    assert_eq!(rows.len(), 2);
    assert_eq!(session.access_token().as_deref(), Some("fresh"));
    // The refresh token survives a successful refresh
    assert_eq!(session.refresh_token().as_deref(), Some("good"));
}

#[test]
fn failed_refresh_clears_session_and_does_not_retry() {
    let mut server = mockito::Server::new();

    let data = server
        .mock("GET", "/api/forecast/price/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Given token not valid for any token type"}"#)
        .expect(1)
        .create();

    let refresh = server
        .mock("POST", "/api/token/refresh/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Token is invalid or expired"}"#)
        .expect(1)
        .create();

    let (client, session) = client_for(&server);
    session.set_authenticated(
        modalytics::app::User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        },
        "stale".to_string(),
        "expired".to_string(),
    );

    let err = client.price_forecast().unwrap_err();

    // Original request hit exactly once: no retry without a fresh token,
    // and the refresh endpoint is never itself retried.
    data.assert();
    refresh.assert();
    assert!(err.is_unauthorized());
    assert!(!session.is_logged_in());
    assert!(session.refresh_token().is_none());
}

#[test]
fn unauthenticated_request_sends_no_bearer_header() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/analysis/rating-distribution/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"rating_category": "good", "rating_count": 10, "percentage": 100.0}]"#)
        .create();

    let (client, _session) = client_for(&server);
    let rows = client.rating_distribution().unwrap();

    mock.assert();
    assert_eq!(rows[0].rating_category, "good");
}

#[test]
fn forecast_insufficient_history_message_passes_through() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/forecast/sales/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "not enough history for an accurate forecast"}"#)
        .create();

    let (client, _session) = client_for(&server);
    let err = client.sales_forecast().unwrap_err();

    assert_eq!(
        err.to_string(),
        "not enough history for an accurate forecast (HTTP 400)"
    );
}

#[test]
fn logout_clears_session_even_when_request_fails() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/auth/logout/")
        .with_status(500)
        .with_body("server on fire")
        .create();

    let (client, session) = client_for(&server);
    session.set_authenticated(
        modalytics::app::User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        },
        "acc".to_string(),
        "ref".to_string(),
    );

    let result = client.logout();
    assert!(result.is_err());
    assert!(!session.is_logged_in());
}

#[test]
fn sales_forecast_decodes_points() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/forecast/sales/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"date": "2026-09-01", "forecasted_sales": 812.4},
                {"date": "2026-09-02", "forecasted_sales": 799.1}
            ]"#,
        )
        .create();

    let (client, _session) = client_for(&server);
    let points = client.sales_forecast().unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(
        points[0].date,
        chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    );
    assert_eq!(points[1].forecasted_sales, 799.1);
}
