use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

/// # Reject Match
///
/// Decide that the reports describe different items.
#[utoipa::path(
    post,
    path = "/matches/{target}/reject",
    tag = "Matches",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Match Id")),
    responses(
        (status = 200, description = "Match rejected", body = v0::MatchStatusResponse),
        (status = 403, description = "Neither a reporter on this match nor an admin", body = lostfound_result::Error),
        (status = 404, description = "Unknown match", body = lostfound_result::Error),
        (status = 409, description = "Match already resolved", body = lostfound_result::Error)
    )
)]
pub async fn reject(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
) -> Result<Json<v0::MatchStatusResponse>> {
    let mut r#match = Reference::from_unchecked(&target).as_match(&db).await?;
    if !user.privileged() && !r#match.is_participant(&db, &user).await? {
        return Err(create_error!(NotPrivileged));
    }

    r#match.reject(&db).await?;

    Ok(Json(v0::MatchStatusResponse {
        status: r#match.status,
    }))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use lostfound_models::v0::{MatchStatus, ReportStatus, UserRole};
    use serde_json::json;

    use crate::{routes::matches::test_support::pending_match, util::test::TestHarness};

    #[tokio::test]
    async fn reject_leaves_reports_open() {
        let harness = TestHarness::new().await;
        let loser = harness.new_user(UserRole::Student).await;
        let finder = harness.new_user(UserRole::Student).await;
        let outsider = harness.new_user(UserRole::Student).await;
        let admin = harness.new_user(UserRole::Admin).await;
        let category = harness.new_category("Wallets").await;

        let (lost, _, r#match) = pending_match(&harness.db, &loser, &finder, &category).await;
        let uri = format!("/matches/{}/reject", r#match.id);

        let (status, body) = harness.post(&uri, Some(&outsider), json!({})).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["type"], "NotPrivileged");

        let (status, body) = harness.post(&uri, Some(&finder), json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "rejected");

        assert_eq!(
            harness.db.fetch_match(&r#match.id).await.unwrap().status,
            MatchStatus::Rejected
        );
        assert_eq!(
            harness.db.fetch_report(&lost.id).await.unwrap().status,
            ReportStatus::Pending
        );

        let (status, body) = harness
            .post(
                &format!("/matches/{}/confirm", r#match.id),
                Some(&admin),
                json!({}),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["type"], "AlreadyResolved");
    }
}
