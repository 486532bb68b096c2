mod common;

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use common::{spawn_app, LEARNER_PASSWORD};

#[tokio::test]
async fn health_reports_connected_database() {
    let app = spawn_app().await;

    let res = app.get("/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["database"], "connected");

    let live = app.get("/health/live", None).await;
    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(live.body["status"], "healthy");
}

#[tokio::test]
async fn unknown_endpoint_returns_json_404_with_security_headers() {
    let app = spawn_app().await;

    let res = app.get("/api/does-not-exist", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["success"], false);
    assert_eq!(res.body["error"], "Endpoint not found");
    assert_eq!(res.headers["x-content-type-options"], "nosniff");
    assert_eq!(res.headers["x-frame-options"], "SAMEORIGIN");
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = spawn_app().await;

    for uri in ["/api/dashboard", "/api/modules", "/api/auth/me", "/api/admin"] {
        let res = app.get(uri, None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(res.body["success"], false);
    }

    let res = app.get("/api/modules", Some("not-a-token")).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_me_logout() {
    let app = spawn_app().await;

    let token = app.register("alice_w").await;
    let me = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["username"], "alice_w");
    assert_eq!(me.body["data"]["isAdmin"], false);
    assert!(me.body["data"].get("passwordHash").is_none());

    let login = app.login("alice_w", LEARNER_PASSWORD).await;
    assert_eq!(login.status, StatusCode::OK);
    assert!(login.headers.get(header::SET_COOKIE).is_some());
    let second = login.body["data"]["token"].as_str().unwrap().to_string();

    let logout = app
        .request(Method::POST, "/api/auth/logout", Some(&second), None)
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let after = app.get("/api/auth/me", Some(&second)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);

    // The first session is independent of the revoked one.
    let still = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(still.status, StatusCode::OK);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = spawn_app().await;
    app.register("bob_r").await;

    let res = app.login("bob_r", "WrongPassword1").await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["success"], false);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = spawn_app().await;
    app.register("carol").await;

    let res = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "username": "carol",
                "email": "another@example.com",
                "password": LEARNER_PASSWORD,
                "specialization": "IT",
                "yearLevel": "1st Year"
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn registration_validates_password_strength() {
    let app = spawn_app().await;

    let res = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "username": "dave",
                "email": "dave@example.com",
                "password": "short",
                "specialization": "IT",
                "yearLevel": "1st Year"
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn registration_accepts_form_bodies() {
    let app = spawn_app().await;

    let res = app
        .form(
            "/api/auth/register",
            None,
            &format!(
                "username=erin&email=erin%40example.com&password={LEARNER_PASSWORD}&specialization=IT&yearLevel=2nd+Year"
            ),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    assert_eq!(res.body["data"]["user"]["username"], "erin");
}

#[tokio::test]
async fn password_reset_flow() {
    let app = spawn_app().await;
    app.register("frank").await;

    let unknown = app
        .post(
            "/api/auth/forgot-password",
            None,
            json!({ "email": "nobody@example.com" }),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert!(unknown.body["data"].get("resetToken").is_none());

    let issued = app
        .post(
            "/api/auth/forgot-password",
            None,
            json!({ "email": "frank@example.com" }),
        )
        .await;
    assert_eq!(issued.status, StatusCode::OK);
    let reset_token = issued.body["data"]["resetToken"].as_str().unwrap().to_string();

    let mismatch = app
        .post(
            "/api/auth/reset-password",
            None,
            json!({
                "token": reset_token,
                "password": "BrandNewPass42",
                "confirmPassword": "Different42abc"
            }),
        )
        .await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);

    let reset = app
        .post(
            "/api/auth/reset-password",
            None,
            json!({
                "token": reset_token,
                "password": "BrandNewPass42",
                "confirmPassword": "BrandNewPass42"
            }),
        )
        .await;
    assert_eq!(reset.status, StatusCode::OK, "{}", reset.body);

    let reused = app
        .post(
            "/api/auth/reset-password",
            None,
            json!({
                "token": reset_token,
                "password": "AnotherPass42x",
                "confirmPassword": "AnotherPass42x"
            }),
        )
        .await;
    assert_eq!(reused.status, StatusCode::BAD_REQUEST);

    assert_eq!(
        app.login("frank", LEARNER_PASSWORD).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        app.login("frank", "BrandNewPass42").await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn profile_update_and_password_change() {
    let app = spawn_app().await;
    let token = app.register("grace").await;

    let res = app
        .request(
            Method::PUT,
            "/api/profile",
            Some(&token),
            Some(json!({ "fullName": "Grace Hopper", "isAdmin": true })),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);

    let profile = app.get("/api/profile", Some(&token)).await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["data"]["user"]["fullName"], "Grace Hopper");
    assert_eq!(profile.body["data"]["user"]["isAdmin"], false);

    let wrong = app
        .request(
            Method::PUT,
            "/api/profile/password",
            Some(&token),
            Some(json!({
                "currentPassword": "NotMyPassword1",
                "newPassword": "FreshPassword9",
                "confirmPassword": "FreshPassword9"
            })),
        )
        .await;
    assert!(wrong.status.is_client_error());

    let changed = app
        .request(
            Method::PUT,
            "/api/profile/password",
            Some(&token),
            Some(json!({
                "currentPassword": LEARNER_PASSWORD,
                "newPassword": "FreshPassword9",
                "confirmPassword": "FreshPassword9"
            })),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK, "{}", changed.body);
    assert_eq!(app.login("grace", "FreshPassword9").await.status, StatusCode::OK);
}
