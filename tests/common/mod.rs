#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use aura_drive::config::{DatabaseConfig, EnvironmentConfig};
use aura_drive::database::DatabaseConnection;
use aura_drive::middleware::auth::encode_basic_credentials;
use aura_drive::services::UserDirectory;
use aura_drive::{create_app, AppState};

pub const MANAGER: (&str, &str) = ("admin", "Manager@2024");
pub const SALESMAN: (&str, &str) = ("john.smith", "JSmith@123");

/// Estado con base en memoria, sembrada, y bcrypt de coste mínimo
pub async fn test_state(seed: bool) -> AppState {
    let db_config = DatabaseConfig::in_memory();
    let db = DatabaseConnection::new(db_config.clone()).await.unwrap();
    if seed {
        db.seed_if_empty().await.unwrap();
    }
    let config = EnvironmentConfig {
        bcrypt_cost: 4,
        ..Default::default()
    };
    let users = UserDirectory::with_default_accounts(4).unwrap();
    AppState::new(db.pool().clone(), config, db_config, users)
}

pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        Self {
            router: create_app(test_state(true).await),
        }
    }

    pub async fn empty() -> Self {
        Self {
            router: create_app(test_state(false).await),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        credentials: Option<(&str, &str)>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some((username, password)) = credentials {
            builder = builder.header(header::AUTHORIZATION, encode_basic_credentials(username, password));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, headers, body }
    }

    pub async fn get(&self, uri: &str, credentials: (&str, &str)) -> TestResponse {
        self.request(Method::GET, uri, Some(credentials), None).await
    }

    pub async fn post(&self, uri: &str, credentials: (&str, &str), body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(credentials), Some(body)).await
    }

    pub async fn put(&self, uri: &str, credentials: (&str, &str), body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(credentials), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, credentials: (&str, &str), body: Value) -> TestResponse {
        self.request(Method::PATCH, uri, Some(credentials), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, credentials: (&str, &str)) -> TestResponse {
        self.request(Method::DELETE, uri, Some(credentials), None).await
    }
}
