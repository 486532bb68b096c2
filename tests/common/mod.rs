#![allow(dead_code)]

use std::sync::Arc;

use awareness_backend::config::{AdminBootstrap, AuthConfig, Config, ProgramRules};
use awareness_backend::db::config::DbConfig;
use awareness_backend::db::DatabaseProxy;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "administrator";
pub const ADMIN_PASSWORD: &str = "AdminPassw0rd!";
pub const LEARNER_PASSWORD: &str = "LearnerPass123";

pub struct TestApp {
    pub router: Router,
    pub db: Arc<DatabaseProxy>,
    pub config: Arc<Config>,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        log_level: "warn".to_string(),
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            expires_in: "1h".to_string(),
            cookie_secure: false,
            bcrypt_cost: 4,
        },
        admin: AdminBootstrap {
            username: ADMIN_USERNAME.to_string(),
            email: "admin@awareness.test".to_string(),
            password: Some(ADMIN_PASSWORD.to_string()),
        },
        rules: ProgramRules::default(),
        allow_admin_maintenance: false,
        expose_reset_tokens: true,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("awareness.db").display());

    let proxy = DatabaseProxy::connect(DbConfig::for_url(url).unwrap())
        .await
        .unwrap();
    awareness_backend::bootstrap(&proxy, &config).await.unwrap();

    let db = Arc::new(proxy);
    let config = Arc::new(config);
    let router = awareness_backend::create_app_with(config.clone(), db.clone());

    TestApp {
        router,
        db,
        config,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn form(&self, uri: &str, token: Option<&str>, body: &str) -> TestResponse {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Registers a learner and returns the session token.
    pub async fn register(&self, username: &str) -> String {
        let res = self
            .post(
                "/api/auth/register",
                None,
                json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": LEARNER_PASSWORD,
                    "fullName": "Test Learner",
                    "specialization": "Computer Science",
                    "yearLevel": "3rd Year"
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "register: {}", res.body);
        res.body["data"]["token"].as_str().unwrap().to_string()
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/api/auth/login",
            None,
            json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn admin_token(&self) -> String {
        let res = self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await;
        assert_eq!(res.status, StatusCode::OK, "admin login: {}", res.body);
        res.body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Module id for a display order, read from the learning path.
    pub async fn module_id(&self, token: &str, order: i64) -> i64 {
        let res = self.get("/api/modules", Some(token)).await;
        assert_eq!(res.status, StatusCode::OK);
        res.body["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["displayOrder"] == order)
            .and_then(|entry| entry["id"].as_i64())
            .unwrap()
    }

    pub async fn knowledge_check_key(&self, question_id: i64) -> String {
        sqlx::query_scalar::<_, String>(
            r#"SELECT "correct_answer" FROM "knowledge_check_questions" WHERE "id" = ?"#,
        )
        .bind(question_id)
        .fetch_one(self.db.pool())
        .await
        .unwrap()
    }

    pub async fn final_question_key(&self, question_id: i64) -> String {
        sqlx::query_scalar::<_, String>(
            r#"SELECT "correct_answer" FROM "final_assessment_questions" WHERE "id" = ?"#,
        )
        .bind(question_id)
        .fetch_one(self.db.pool())
        .await
        .unwrap()
    }

    pub async fn user_id(&self, token: &str) -> i64 {
        let me = self.get("/api/auth/me", Some(token)).await;
        assert_eq!(me.status, StatusCode::OK, "me: {}", me.body);
        me.body["data"]["id"].as_i64().unwrap()
    }

    /// Sets the knowledge-check attempt counter on an existing progress row.
    pub async fn set_knowledge_check_attempts(
        &self,
        user_id: i64,
        module_id: i64,
        attempts: i64,
    ) {
        let updated = sqlx::query(
            r#"UPDATE "user_progress" SET "attempts" = ? WHERE "user_id" = ? AND "module_id" = ?"#,
        )
        .bind(attempts)
        .bind(user_id)
        .bind(module_id)
        .execute(self.db.pool())
        .await
        .unwrap();
        assert_eq!(updated.rows_affected(), 1);
    }

    /// Opens the module and passes its knowledge check with every answer correct.
    pub async fn pass_knowledge_check(&self, token: &str, module_id: i64) -> Value {
        let view = self.get(&format!("/api/modules/{module_id}"), Some(token)).await;
        assert_eq!(view.status, StatusCode::OK, "view: {}", view.body);

        let issued = self
            .get(&format!("/api/modules/{module_id}/assessment"), Some(token))
            .await;
        assert_eq!(issued.status, StatusCode::OK, "issue: {}", issued.body);

        let mut answers = serde_json::Map::new();
        for question in issued.body["data"]["questions"].as_array().unwrap() {
            let id = question["id"].as_i64().unwrap();
            answers.insert(id.to_string(), json!(self.knowledge_check_key(id).await));
        }

        let res = self
            .post(
                &format!("/api/modules/{module_id}/assessment"),
                Some(token),
                json!({ "answers": answers, "timeTaken": 120 }),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "submit: {}", res.body);
        res.body["data"].clone()
    }
}
