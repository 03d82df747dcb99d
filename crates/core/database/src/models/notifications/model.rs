use iso8601_timestamp::Timestamp;
use lostfound_result::Result;

use crate::util::id::new_ulid;
use crate::{Database, User};

auto_derived!(
    /// Message delivered to a single user
    pub struct Notification {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the recipient
        pub user_id: String,
        /// Human-readable message
        pub message: String,
        /// Match this notification is about
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub related_match_id: Option<String>,
        /// Whether the recipient has read this notification
        #[serde(default)]
        pub is_read: bool,
        /// When this notification was created
        pub created_at: Timestamp,
    }
);

#[allow(clippy::disallowed_methods)]
impl Notification {
    /// Create a new unread notification
    pub async fn create(
        db: &Database,
        user_id: String,
        message: String,
        related_match_id: Option<String>,
    ) -> Result<Notification> {
        let notification = Notification {
            id: new_ulid(),
            user_id,
            message,
            related_match_id,
            is_read: false,
            created_at: Timestamp::now_utc(),
        };

        db.insert_notification(&notification).await?;
        Ok(notification)
    }

    /// Mark this notification as read on behalf of its recipient
    pub async fn mark_read(&mut self, db: &Database, user: &User) -> Result<()> {
        if self.user_id != user.id {
            return Err(create_error!(NotOwner));
        }

        if !self.is_read {
            db.mark_notification_read(&self.id).await?;
            self.is_read = true;
        }

        Ok(())
    }
}
