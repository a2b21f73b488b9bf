#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

use dept_service::app::create_app;
use dept_service::config::Config;
use dept_service::services::signup::{AdminAccount, create_admin_account};
use dept_service::state::AppState;

pub const ADMIN_EMAIL: &str = "admin@dept.edu";
pub const ADMIN_PASSWORD: &str = "admin-pass";

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub config: Config,
}

pub fn test_config() -> Config {
    let upload_dir = std::env::temp_dir().join(format!("dept_service_test_{}", uuid::Uuid::new_v4()));
    Config {
        port: 0,
        swagger_enabled: false,
        log_level: "warn".to_string(),
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-with-enough-length".to_string(),
        jwt_expires_in: 3600,
        bcrypt_cost: 4,
        upload_dir: upload_dir.to_string_lossy().to_string(),
        max_upload_bytes: 1024 * 1024,
        cors_allowed_origins: "*".to_string(),
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        admin_name: "Test Admin".to_string(),
        admin_phone: "0000000000".to_string(),
        admin_signup_enabled: false,
        run_migrations: true,
        app_env: "test".to_string(),
    }
}

/// One in-memory database per test; a single pooled connection keeps it alive.
pub async fn spawn_app() -> Result<TestApp> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.context("connect sqlite")?;
    Migrator::up(&db, None).await.context("run migrations")?;

    let config = test_config();
    create_admin_account(
        &db,
        config.bcrypt_cost,
        AdminAccount {
            name: config.admin_name.clone(),
            email: ADMIN_EMAIL.to_string(),
            phone: config.admin_phone.clone(),
            password: ADMIN_PASSWORD.to_string(),
        },
    )
    .await?;

    let router = create_app(AppState::new(db.clone(), config.clone()))?;
    Ok(TestApp { router, db, config })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        Ok(TestResponse { status, headers, body })
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Result<TestResponse> {
        self.request("GET", uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Result<TestResponse> {
        self.request("POST", uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> Result<TestResponse> {
        self.request("PUT", uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Result<TestResponse> {
        self.request("DELETE", uri, token, None).await
    }

    /// Sends `body` verbatim with the given content type.
    pub async fn raw(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        content_type: &str,
        body: impl Into<Body>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(body.into())?).await
    }

    /// `multipart/form-data` with text `fields` and an optional `(field, file_name, bytes)` part.
    pub async fn multipart(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
    ) -> Result<TestResponse> {
        const BOUNDARY: &str = "dept-service-test-boundary";
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((name, file_name, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
        self.raw(method, uri, token, &content_type, body).await
    }

    /// Form-encoded login; returns the access token on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<TestResponse> {
        let form = format!("username={email}&password={password}");
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))?;
        self.send(request).await
    }

    pub async fn token_for(&self, email: &str, password: &str) -> Result<String> {
        let response = self.login(email, password).await?;
        anyhow::ensure!(
            response.status == StatusCode::OK,
            "login failed for {email}: {} {}",
            response.status,
            response.body
        );
        response.body["access_token"]
            .as_str()
            .map(str::to_string)
            .context("missing access_token")
    }

    pub async fn admin_token(&self) -> Result<String> {
        self.token_for(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Pre-approves a teacher, signs them up and logs in.
    /// Returns `(teacher_id, token)`.
    pub async fn teacher(&self, admin: &str, email: &str, registration: &str) -> Result<(String, String)> {
        let added = self
            .post(
                "/admin/add/teacher",
                Some(admin),
                serde_json::json!({
                    "registration_number": registration,
                    "email": email,
                    "name": "Dr. Test",
                    "department": "CSE"
                }),
            )
            .await?;
        anyhow::ensure!(added.status == StatusCode::CREATED, "add teacher: {}", added.body);
        let teacher_id = added.body["id"].as_str().context("teacher id")?.to_string();

        let signup = self
            .post(
                "/teacher/signup",
                None,
                serde_json::json!({
                    "email": email,
                    "registration_number": registration,
                    "password": "teacher-pass"
                }),
            )
            .await?;
        anyhow::ensure!(signup.status == StatusCode::CREATED, "teacher signup: {}", signup.body);

        let token = self.token_for(email, "teacher-pass").await?;
        Ok((teacher_id, token))
    }

    /// Pre-approves a student, signs them up and logs in.
    /// Returns `(student_id, token)`.
    pub async fn student(&self, admin: &str, email: &str, registration: &str) -> Result<(String, String)> {
        let added = self
            .post(
                "/admin/add/student",
                Some(admin),
                serde_json::json!({
                    "registration_number": registration,
                    "email": email,
                    "name": "Student",
                    "session": "2020-21",
                    "hall": "South",
                    "degree": "BSc",
                    "semester": "3"
                }),
            )
            .await?;
        anyhow::ensure!(added.status == StatusCode::CREATED, "add student: {}", added.body);
        let student_id = added.body["id"].as_str().context("student id")?.to_string();

        let signup = self
            .post(
                "/student/signup",
                None,
                serde_json::json!({
                    "email": email,
                    "registration_number": registration,
                    "password": "student-pass"
                }),
            )
            .await?;
        anyhow::ensure!(signup.status == StatusCode::CREATED, "student signup: {}", signup.body);

        let token = self.token_for(email, "student-pass").await?;
        Ok((student_id, token))
    }
}
