use axum::{extract::State, Json};
use lostfound_database::{Database, User};
use lostfound_models::v0;
use lostfound_result::Result;

/// # Fetch Notifications
///
/// List your notifications, newest first.
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "Notifications",
    security(("User Token" = [])),
    responses(
        (status = 200, description = "Your notifications", body = Vec<v0::Notification>),
        (status = 401, description = "Missing or invalid session token", body = lostfound_result::Error)
    )
)]
pub async fn list(
    State(db): State<Database>,
    user: User,
) -> Result<Json<Vec<v0::Notification>>> {
    let notifications = db.fetch_notifications_by_user(&user.id).await?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use lostfound_database::Notification;
    use lostfound_models::v0::{self, UserRole};

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn only_own_notifications() {
        let harness = TestHarness::new().await;
        let user = harness.new_user(UserRole::Student).await;
        let other = harness.new_user(UserRole::Student).await;

        for message in ["first", "second"] {
            Notification::create(&harness.db, user.id.to_string(), message.to_string(), None)
                .await
                .unwrap();
        }

        Notification::create(&harness.db, other.id.to_string(), "other".to_string(), None)
            .await
            .unwrap();

        let (status, body) = harness.get("/notifications", Some(&user)).await;
        assert_eq!(status, StatusCode::OK);

        let notifications: Vec<v0::Notification> = serde_json::from_value(body).unwrap();
        assert_eq!(notifications.len(), 2);
        assert!(notifications.iter().all(|n| n.user_id == user.id && !n.is_read));
        assert!(notifications[0].id > notifications[1].id);
    }
}
