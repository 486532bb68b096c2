mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{spawn_app, spawn_app_with, test_config, LEARNER_PASSWORD};

#[tokio::test]
async fn learners_cannot_reach_admin_routes() {
    let app = spawn_app().await;
    let token = app.register("plain_learner").await;

    for uri in ["/api/admin", "/api/admin/users", "/api/admin/analytics"] {
        let res = app.get(uri, Some(&token)).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn overview_counts_users_and_modules() {
    let app = spawn_app().await;
    app.register("counted").await;
    let admin = app.admin_token().await;

    let res = app.get("/api/admin", Some(&admin)).await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    let overview = &res.body["data"]["overview"];
    assert_eq!(overview["users"]["total"], 2);
    assert_eq!(overview["users"]["admins"], 1);
    assert_eq!(overview["modules"]["total"], 5);
    assert_eq!(overview["modules"]["withSimulations"], 4);

    let analytics = app.get("/api/admin/analytics", Some(&admin)).await;
    assert_eq!(analytics.status, StatusCode::OK, "{}", analytics.body);

    let settings = app.get("/api/admin/settings", Some(&admin)).await;
    assert_eq!(settings.status, StatusCode::OK);
    assert_eq!(settings.body["data"]["rules"]["knowledgeCheckPassingScore"], 80);
    assert_eq!(settings.body["data"]["allowAdminMaintenance"], false);
}

#[tokio::test]
async fn admin_manages_users_with_audit_trail() {
    let app = spawn_app().await;
    let admin = app.admin_token().await;

    let created = app
        .post(
            "/api/admin/users",
            Some(&admin),
            json!({
                "username": "staff_member",
                "email": "staff@example.com",
                "password": LEARNER_PASSWORD,
                "specialization": "Security",
                "yearLevel": "4th Year",
                "isAdmin": false
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);
    let user_id = created.body["data"]["id"].as_i64().unwrap();

    let listed = app
        .get("/api/admin/users?q=staff&role=learner", Some(&admin))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"]["total"], 1);
    assert_eq!(listed.body["data"]["users"][0]["username"], "staff_member");

    let promoted = app
        .request(
            Method::PUT,
            &format!("/api/admin/users/{user_id}"),
            Some(&admin),
            Some(json!({ "isAdmin": true, "fullName": "Staff Member" })),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK, "{}", promoted.body);
    assert_eq!(promoted.body["data"]["isAdmin"], true);

    let detail = app
        .get(&format!("/api/admin/users/{user_id}"), Some(&admin))
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["data"]["user"]["fullName"], "Staff Member");

    let deleted = app
        .request(
            Method::DELETE,
            &format!("/api/admin/users/{user_id}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .get(&format!("/api/admin/users/{user_id}"), Some(&admin))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let logs = app.get("/api/admin/audit-logs?limit=10", Some(&admin)).await;
    assert_eq!(logs.status, StatusCode::OK);
    let actions: Vec<&str> = logs.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|entry| entry["action"].as_str())
        .collect();
    for action in ["create_user", "update_user", "delete_user"] {
        assert!(actions.contains(&action), "missing {action} in {actions:?}");
    }
}

#[tokio::test]
async fn admin_cannot_delete_or_demote_themselves() {
    let app = spawn_app().await;
    let admin = app.admin_token().await;
    let me = app.get("/api/auth/me", Some(&admin)).await;
    let admin_id = me.body["data"]["id"].as_i64().unwrap();

    let res = app
        .request(
            Method::DELETE,
            &format!("/api/admin/users/{admin_id}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .request(
            Method::PUT,
            &format!("/api/admin/users/{admin_id}"),
            Some(&admin),
            Some(json!({ "isAdmin": false })),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_edits_module_content() {
    let app = spawn_app().await;
    let admin = app.admin_token().await;

    let modules = app.get("/api/admin/modules", Some(&admin)).await;
    assert_eq!(modules.status, StatusCode::OK, "{}", modules.body);

    let learner = app.register("reader").await;
    let module_id = app.module_id(&learner, 1).await;

    let res = app
        .request(
            Method::PUT,
            &format!("/api/admin/modules/{module_id}"),
            Some(&admin),
            Some(json!({ "description": "Updated overview" })),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    assert_eq!(res.body["data"]["description"], "Updated overview");

    let bad = app
        .request(
            Method::PUT,
            &format!("/api/admin/modules/{module_id}"),
            Some(&admin),
            Some(json!({ "simulationType": "tailgating" })),
        )
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn maintenance_requires_opt_in() {
    let app = spawn_app().await;
    let admin = app.admin_token().await;

    let res = app
        .request(Method::POST, "/api/admin/maintenance/seed", Some(&admin), None)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let mut config = test_config();
    config.allow_admin_maintenance = true;
    let enabled = spawn_app_with(config).await;
    let admin = enabled.admin_token().await;

    let res = enabled
        .request(
            Method::POST,
            "/api/admin/maintenance/cleanup-tokens",
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
}
