use axum::{extract::State, Json};
use lostfound_database::{Database, User};
use lostfound_models::v0;
use lostfound_result::Result;

/// # Fetch Dashboard Statistics
///
/// Summarise your reports, matches and unread notifications.
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "Dashboard",
    security(("User Token" = [])),
    responses(
        (status = 200, description = "Your statistics", body = v0::DashboardStats),
        (status = 401, description = "Missing or invalid session token", body = lostfound_result::Error)
    )
)]
pub async fn stats(State(db): State<Database>, user: User) -> Result<Json<v0::DashboardStats>> {
    user.dashboard_stats(&db).await.map(Json)
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use lostfound_models::v0::{self, UserRole};
    use serde_json::json;

    use crate::{routes::matches::test_support::pending_match, util::test::TestHarness};

    #[tokio::test]
    async fn counts_own_activity() {
        let harness = TestHarness::new().await;
        let loser = harness.new_user(UserRole::Student).await;
        let finder = harness.new_user(UserRole::Staff).await;
        let category = harness.new_category("Wallets").await;

        let (status, body) = harness.get("/dashboard/stats", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["type"], "NotAuthenticated");

        let (_, _, r#match) = pending_match(&harness.db, &loser, &finder, &category).await;

        let (status, body) = harness.get("/dashboard/stats", Some(&loser)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::from_value::<v0::DashboardStats>(body).unwrap(),
            v0::DashboardStats {
                total_reports: 1,
                active_matches: 1,
                resolved_items: 0,
                notifications: 1,
            }
        );

        let (status, _) = harness
            .post(
                &format!("/matches/{}/confirm", r#match.id),
                Some(&finder),
                json!({}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = harness.get("/dashboard/stats", Some(&finder)).await;
        assert_eq!(body["active_matches"], 0);
        assert_eq!(body["resolved_items"], 1);
        assert_eq!(body["total_reports"], 1);
    }
}
