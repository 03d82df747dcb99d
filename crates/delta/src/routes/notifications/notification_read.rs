use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_models::v0;
use lostfound_result::Result;

/// # Mark Notification As Read
#[utoipa::path(
    post,
    path = "/notifications/{target}/read",
    tag = "Notifications",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Notification Id")),
    responses(
        (status = 200, description = "Notification marked as read", body = v0::NotificationReadResponse),
        (status = 403, description = "Not the recipient", body = lostfound_result::Error),
        (status = 404, description = "Unknown notification", body = lostfound_result::Error)
    )
)]
pub async fn read(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
) -> Result<Json<v0::NotificationReadResponse>> {
    let mut notification = Reference::from_unchecked(&target)
        .as_notification(&db)
        .await?;

    notification.mark_read(&db, &user).await?;

    Ok(Json(v0::NotificationReadResponse {
        is_read: notification.is_read,
    }))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use lostfound_database::Notification;
    use lostfound_models::v0::UserRole;
    use serde_json::json;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn recipient_marks_read() {
        let harness = TestHarness::new().await;
        let user = harness.new_user(UserRole::Student).await;
        let admin = harness.new_user(UserRole::Admin).await;

        let notification = Notification::create(
            &harness.db,
            user.id.to_string(),
            "Your found item may match: Umbrella".to_string(),
            None,
        )
        .await
        .unwrap();

        let uri = format!("/notifications/{}/read", notification.id);

        let (status, body) = harness.post(&uri, Some(&admin), json!({})).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["type"], "NotOwner");

        let (status, body) = harness.post(&uri, Some(&user), json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_read"], true);

        assert!(
            harness
                .db
                .fetch_notification(&notification.id)
                .await
                .unwrap()
                .is_read
        );

        let (status, body) = harness
            .post("/notifications/missing/read", Some(&user), json!({}))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["type"], "UnknownNotification");
    }
}
