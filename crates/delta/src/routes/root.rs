use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// # Service Information
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RootResponse {
    /// Greeting
    pub message: String,
    /// API version
    pub version: String,
}

/// Root response from service
#[utoipa::path(
    get,
    path = "/",
    tag = "Misc",
    responses(
        (status = 200, description = "Root response", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Lost & Found API".to_string(),
        version: CRATE_VERSION.to_string(),
    })
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn root_reports_version() {
        let harness = TestHarness::new().await;

        let (status, body) = harness.get("/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
