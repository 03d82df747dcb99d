use axum::{extract::State, Json};
use lostfound_config::config;
use lostfound_database::{
    matching::{run_matching, MatchingConfig},
    Database, Report, User,
};
use lostfound_models::v0;
use lostfound_result::Result;

use crate::util::json::Validate;

/// # Create Report
///
/// Submit a lost or found item and look for matching reports.
#[utoipa::path(
    post,
    path = "/reports",
    tag = "Reports",
    security(("User Token" = [])),
    request_body = v0::DataCreateReport,
    responses(
        (status = 200, description = "Created report and any matches found", body = v0::CreateReportResponse),
        (status = 400, description = "Invalid report or unknown category", body = lostfound_result::Error),
        (status = 401, description = "Missing or invalid session token", body = lostfound_result::Error)
    )
)]
pub async fn create(
    State(db): State<Database>,
    user: User,
    Validate(data): Validate<v0::DataCreateReport>,
) -> Result<Json<v0::CreateReportResponse>> {
    let report = Report::create(&db, data, &user).await?;

    let matching: MatchingConfig = config().await.matching.into();
    let matches = run_matching(&db, &report, &matching).await?;

    Ok(Json(v0::CreateReportResponse {
        report: report.into(),
        matches: matches.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use lostfound_models::v0::{self, ReportStatus, ReportType, UserRole};
    use serde_json::json;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn create_and_match() {
        let harness = TestHarness::new().await;
        let loser = harness.new_user(UserRole::Student).await;
        let finder = harness.new_user(UserRole::Staff).await;
        let category = harness.new_category("Electronics").await;

        let (status, body) = harness
            .post(
                "/reports",
                Some(&loser),
                json!({
                    "title": "Silver MacBook Air",
                    "description": "Silver macbook with stickers on the lid",
                    "category_id": category.id,
                    "type": "lost",
                    "location": "Lecture hall 3",
                    "date_lost_found": "2024-10-01"
                }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        let created: v0::CreateReportResponse = serde_json::from_value(body).unwrap();
        assert_eq!(created.report.report_type, ReportType::Lost);
        assert_eq!(created.report.status, ReportStatus::Pending);
        assert_eq!(created.report.reporter_id, loser.id);
        assert!(created.matches.is_empty());

        let (status, body) = harness
            .post(
                "/reports",
                Some(&finder),
                json!({
                    "title": "Found silver MacBook",
                    "description": "Macbook with stickers",
                    "category_id": category.id,
                    "type": "found",
                    "date_lost_found": "2024-10-02"
                }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        let created: v0::CreateReportResponse = serde_json::from_value(body).unwrap();
        assert_eq!(created.matches.len(), 1);

        let r#match = &created.matches[0];
        assert_eq!(r#match.found_report_id, created.report.id);
        assert!(r#match.confidence_score >= 0.6);
        assert_eq!(r#match.status, v0::MatchStatus::Pending);

        let (_, body) = harness.get("/notifications", Some(&loser)).await;
        let notifications: Vec<v0::Notification> = serde_json::from_value(body).unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].message,
            "Potential match found for your lost item: Found silver MacBook"
        );
    }

    #[tokio::test]
    async fn rejects_invalid_reports() {
        let harness = TestHarness::new().await;
        let user = harness.new_user(UserRole::Student).await;
        let category = harness.new_category("Keys").await;

        let (status, _) = harness
            .post(
                "/reports",
                None,
                json!({
                    "title": "Keys",
                    "category_id": category.id,
                    "type": "found",
                    "date_lost_found": "2024-10-01"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = harness
            .post(
                "/reports",
                Some(&user),
                json!({
                    "title": "",
                    "category_id": category.id,
                    "type": "found",
                    "date_lost_found": "2024-10-01"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "FailedValidation");

        let (status, body) = harness
            .post(
                "/reports",
                Some(&user),
                json!({
                    "title": "Keys",
                    "category_id": "not a category",
                    "type": "found",
                    "date_lost_found": "2024-10-01"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "UnknownCategory");
    }
}
