use lostfound_result::Result;

use crate::Notification;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractNotifications: Sync + Send {
    /// Insert a new notification into the database
    async fn insert_notification(&self, notification: &Notification) -> Result<()>;

    /// Fetch a notification by its id
    async fn fetch_notification(&self, id: &str) -> Result<Notification>;

    /// Fetch notifications for a user, newest first
    async fn fetch_notifications_by_user(&self, user_id: &str) -> Result<Vec<Notification>>;

    /// Count unread notifications for a user
    async fn count_unread_notifications(&self, user_id: &str) -> Result<u64>;

    /// Mark a notification as read
    async fn mark_notification_read(&self, id: &str) -> Result<()>;

    /// Unset the related match on every notification referencing it
    async fn detach_notifications_from_match(&self, match_id: &str) -> Result<()>;
}
