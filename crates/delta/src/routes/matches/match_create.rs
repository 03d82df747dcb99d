use axum::{extract::State, Json};
use lostfound_config::config;
use lostfound_database::{
    matching::{score, MatchingConfig},
    util::reference::Reference,
    Database, Match, User,
};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

use crate::util::json::Validate;

/// # Create Match
///
/// Manually pair a lost report with a found report.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "Matches",
    security(("User Token" = [])),
    request_body = v0::DataCreateMatch,
    responses(
        (status = 200, description = "Created match", body = v0::Match),
        (status = 400, description = "Malformed body or reports are not one lost and one found", body = lostfound_result::Error),
        (status = 403, description = "Not an admin", body = lostfound_result::Error)
    )
)]
pub async fn create(
    State(db): State<Database>,
    user: User,
    Validate(data): Validate<v0::DataCreateMatch>,
) -> Result<Json<v0::Match>> {
    if !user.privileged() {
        return Err(create_error!(NotPrivileged));
    }

    let lost = Reference::from_unchecked(&data.lost_report_id)
        .as_report(&db)
        .await?;
    let found = Reference::from_unchecked(&data.found_report_id)
        .as_report(&db)
        .await?;

    let matching: MatchingConfig = config().await.matching.into();
    let confidence = score(&lost, &found, &matching);

    Match::create(&db, &lost, &found, confidence)
        .await
        .map(Into::into)
        .map(Json)
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use lostfound_database::Report;
    use lostfound_models::v0::{self, ReportType, UserRole};
    use serde_json::json;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn admin_pairs_reports() {
        let harness = TestHarness::new().await;
        let student = harness.new_user(UserRole::Student).await;
        let admin = harness.new_user(UserRole::Admin).await;
        let category = harness.new_category("Glasses").await;

        let data = |title: &str, report_type: ReportType, day: u32| v0::DataCreateReport {
            title: title.to_string(),
            description: String::new(),
            category_id: category.id.to_string(),
            report_type,
            location: String::new(),
            date_lost_found: NaiveDate::from_ymd_opt(2024, 11, day).unwrap(),
        };

        let lost = Report::create(
            &harness.db,
            data("Reading glasses", ReportType::Lost, 1),
            &student,
        )
        .await
        .unwrap();
        let found = Report::create(
            &harness.db,
            data("Sunglasses case", ReportType::Found, 20),
            &student,
        )
        .await
        .unwrap();

        let body = json!({
            "lost_report_id": lost.id,
            "found_report_id": found.id
        });

        let (status, error) = harness.post("/matches", Some(&student), body.clone()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(error["type"], "NotPrivileged");

        let (status, body) = harness.post("/matches", Some(&admin), body).await;
        assert_eq!(status, StatusCode::OK);

        let r#match: v0::Match = serde_json::from_value(body).unwrap();
        assert_eq!(r#match.lost_report_id, lost.id);
        assert_eq!(r#match.found_report_id, found.id);
        assert_eq!(r#match.status, v0::MatchStatus::Pending);
        assert!((r#match.confidence_score - 0.6).abs() < 1e-9);

        let notifications = harness
            .db
            .fetch_notifications_by_user(&student.id)
            .await
            .unwrap();
        assert_eq!(notifications.len(), 2);

        for (lost_id, found_id) in [(&found.id, &lost.id), (&lost.id, &lost.id)] {
            let (status, body) = harness
                .post(
                    "/matches",
                    Some(&admin),
                    json!({
                        "lost_report_id": lost_id,
                        "found_report_id": found_id
                    }),
                )
                .await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["type"], "InvalidOperation");
        }
    }

    #[tokio::test]
    async fn malformed_body_is_tagged() {
        let harness = TestHarness::new().await;
        let admin = harness.new_user(UserRole::Admin).await;

        for body in [
            json!({ "lost_report_id": "only-one-side" }),
            json!({ "lost_report_id": 7, "found_report_id": true }),
            json!({ "lost_report_id": "", "found_report_id": "" }),
        ] {
            let (status, error) = harness.post("/matches", Some(&admin), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error["type"], "FailedValidation");
        }

        assert!(harness.db.fetch_matches().await.unwrap().is_empty());
    }
}
