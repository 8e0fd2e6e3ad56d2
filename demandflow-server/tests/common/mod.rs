//! In-process harness: seeded temp database, full middleware stack, oneshot calls
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use demandflow_server::db::repository::user;
use demandflow_server::{Config, ServerState, routes, seed};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestApp {
    /// Seeded app with DEBUG off
    pub async fn new() -> Self {
        Self::build(false, true).await
    }

    /// Seeded app with DEBUG on
    pub async fn with_debug() -> Self {
        Self::build(true, true).await
    }

    /// Empty database (migrations only), DEBUG on
    pub async fn unseeded_debug() -> Self {
        Self::build(true, false).await
    }

    async fn build(debug: bool, seeded: bool) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::for_database(dir.path().join("test.db").to_string_lossy());
        config.debug = debug;

        let state = ServerState::initialize(&config).await.unwrap();
        if seeded {
            seed::run(&state.pool, &config).await.unwrap();
        }
        let app = routes::build_app(&state).with_state(state.clone());

        Self {
            app,
            state,
            _dir: dir,
        }
    }

    /// Bearer token for an existing account, minted directly
    pub async fn token_for(&self, username: &str) -> String {
        let account = user::find_by_username(&self.state.pool, username)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("no account {username}"));
        self.state
            .jwt_service
            .generate_token(account.id, &account.username, account.is_staff)
            .unwrap()
    }

    pub async fn admin(&self) -> String {
        self.token_for("admin").await
    }

    pub async fn viewer(&self) -> String {
        self.token_for("viewer").await
    }

    pub async fn send(
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
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn post_empty(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, token, None).await
    }

    /// Staff member id by name, via the settings page
    pub async fn staff_id(&self, name: &str) -> i64 {
        let admin = self.admin().await;
        let page = self.get("/settings/", Some(&admin)).await.json();
        page["data"]["staff"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["name"] == name)
            .and_then(|s| s["id"].as_i64())
            .unwrap_or_else(|| panic!("no staff member {name}"))
    }

    pub async fn role_id(&self, name: &str) -> i64 {
        let admin = self.admin().await;
        let page = self.get("/settings/", Some(&admin)).await.json();
        page["data"]["roles"]
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["name"] == name)
            .and_then(|r| r["id"].as_i64())
            .unwrap_or_else(|| panic!("no role {name}"))
    }

    /// File a demand as admin and return its id
    pub async fn create_demand(&self, body: Value) -> i64 {
        let admin = self.admin().await;
        let res = self.post("/add/", Some(&admin), body).await;
        assert_eq!(res.status, StatusCode::OK, "{}", res.text());
        res.json()["data"]["id"].as_i64().unwrap()
    }
}
