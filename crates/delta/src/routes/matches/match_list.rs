use axum::{extract::State, Json};
use lostfound_database::{Database, User};
use lostfound_models::v0;
use lostfound_result::Result;

/// # List Matches
///
/// Admins see every match, other users see matches involving their reports.
#[utoipa::path(
    get,
    path = "/matches",
    tag = "Matches",
    security(("User Token" = [])),
    responses(
        (status = 200, description = "Visible matches, newest first", body = Vec<v0::Match>),
        (status = 401, description = "Missing or invalid session token", body = lostfound_result::Error)
    )
)]
pub async fn list(State(db): State<Database>, user: User) -> Result<Json<Vec<v0::Match>>> {
    let matches = if user.privileged() {
        db.fetch_matches().await?
    } else {
        let report_ids: Vec<String> = db
            .fetch_reports_by_user(&user.id)
            .await?
            .into_iter()
            .map(|report| report.id)
            .collect();

        if report_ids.is_empty() {
            vec![]
        } else {
            db.fetch_matches_by_reports(&report_ids).await?
        }
    };

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use lostfound_models::v0::{self, UserRole};

    use crate::{routes::matches::test_support::pending_match, util::test::TestHarness};

    #[tokio::test]
    async fn visibility() {
        let harness = TestHarness::new().await;
        let loser = harness.new_user(UserRole::Student).await;
        let finder = harness.new_user(UserRole::Staff).await;
        let bystander = harness.new_user(UserRole::Student).await;
        let admin = harness.new_user(UserRole::Admin).await;
        let category = harness.new_category("Wallets").await;

        let (_, _, r#match) = pending_match(&harness.db, &loser, &finder, &category).await;

        for user in [&loser, &finder, &admin] {
            let (status, body) = harness.get("/matches", Some(user)).await;
            assert_eq!(status, StatusCode::OK);

            let matches: Vec<v0::Match> = serde_json::from_value(body).unwrap();
            assert_eq!(matches.len(), 1);
            assert_eq!(matches[0].id, r#match.id);
        }

        let (status, body) = harness.get("/matches", Some(&bystander)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 0);

        let (status, _) = harness.get("/matches", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
