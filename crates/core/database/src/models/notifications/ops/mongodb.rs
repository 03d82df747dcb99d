use bson::Document;
use lostfound_result::Result;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::Notification;

use super::AbstractNotifications;

static COL: &str = "notifications";

#[async_trait]
impl AbstractNotifications for MongoDb {
    /// Insert a new notification into the database
    async fn insert_notification(&self, notification: &Notification) -> Result<()> {
        query!(self, insert_one, COL, notification).map(|_| ())
    }

    /// Fetch a notification by its id
    async fn fetch_notification(&self, id: &str) -> Result<Notification> {
        self.find_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("find_one", COL))?
            .ok_or_else(|| create_error!(UnknownNotification))
    }

    /// Fetch notifications for a user, newest first
    async fn fetch_notifications_by_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.find_with_options(
            COL,
            doc! {
                "user_id": user_id
            },
            FindOptions::builder()
                .sort(doc! {
                    "_id": -1_i32
                })
                .build(),
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Count unread notifications for a user
    async fn count_unread_notifications(&self, user_id: &str) -> Result<u64> {
        self.count_documents(
            COL,
            doc! {
                "user_id": user_id,
                "is_read": false
            },
        )
        .await
        .map_err(|_| create_database_error!("count_documents", COL))
    }

    /// Mark a notification as read
    async fn mark_notification_read(&self, id: &str) -> Result<()> {
        let result = self
            .update_one_by_id(
                COL,
                id,
                doc! {
                    "is_read": true
                },
            )
            .await
            .map_err(|_| create_database_error!("update_one", COL))?;

        if result.matched_count == 0 {
            return Err(create_error!(UnknownNotification));
        }

        Ok(())
    }

    /// Unset the related match on every notification referencing it
    async fn detach_notifications_from_match(&self, match_id: &str) -> Result<()> {
        self.col::<Document>(COL)
            .update_many(
                doc! {
                    "related_match_id": match_id
                },
                doc! {
                    "$unset": {
                        "related_match_id": 1_i32
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_many", COL))
    }
}
