use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use lostfound_database::{Category, Database, DatabaseInfo, User};
use lostfound_models::v0::UserRole;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestHarness {
    pub db: Database,
    app: Router,
}

impl TestHarness {
    pub async fn new() -> TestHarness {
        dotenv::dotenv().ok();

        let db = DatabaseInfo::Test(format!("lostfound_delta_{}", ulid::Ulid::new()))
            .connect()
            .await
            .expect("Database connection failed.");

        db.drop_database().await;

        TestHarness {
            app: crate::app(db.clone()),
            db,
        }
    }

    pub async fn new_user(&self, role: UserRole) -> User {
        User::create(&self.db, format!("user_{}", ulid::Ulid::new()), role)
            .await
            .expect("`User`")
    }

    pub async fn new_category(&self, name: &str) -> Category {
        Category::create(&self.db, name.to_string(), None)
            .await
            .expect("`Category`")
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        user: Option<&User>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-session-token", user.token.to_string());
        }

        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("infallible router");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("readable body")
            .to_bytes();

        if bytes.is_empty() {
            (status, Value::Null)
        } else {
            (
                status,
                serde_json::from_slice(&bytes).expect("JSON response"),
            )
        }
    }

    pub async fn get(&self, uri: &str, user: Option<&User>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, user, None).await
    }

    pub async fn post(&self, uri: &str, user: Option<&User>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, user, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, user: Option<&User>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, user, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, user: Option<&User>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, user, None).await
    }
}
