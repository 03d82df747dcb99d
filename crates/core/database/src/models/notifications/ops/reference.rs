use lostfound_result::Result;

use crate::Notification;
use crate::ReferenceDb;

use super::AbstractNotifications;

#[async_trait]
impl AbstractNotifications for ReferenceDb {
    /// Insert a new notification into the database
    async fn insert_notification(&self, notification: &Notification) -> Result<()> {
        let mut notifications = self.notifications.lock().await;
        if notifications.contains_key(&notification.id) {
            Err(create_database_error!("insert", "notification"))
        } else {
            notifications.insert(notification.id.to_string(), notification.clone());
            Ok(())
        }
    }

    /// Fetch a notification by its id
    async fn fetch_notification(&self, id: &str) -> Result<Notification> {
        let notifications = self.notifications.lock().await;
        notifications
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownNotification))
    }

    /// Fetch notifications for a user, newest first
    async fn fetch_notifications_by_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        let notifications = self.notifications.lock().await;
        let mut notifications: Vec<Notification> = notifications
            .values()
            .filter(|notification| notification.user_id == user_id)
            .cloned()
            .collect();

        notifications.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(notifications)
    }

    /// Count unread notifications for a user
    async fn count_unread_notifications(&self, user_id: &str) -> Result<u64> {
        let notifications = self.notifications.lock().await;
        Ok(notifications
            .values()
            .filter(|notification| notification.user_id == user_id && !notification.is_read)
            .count() as u64)
    }

    /// Mark a notification as read
    async fn mark_notification_read(&self, id: &str) -> Result<()> {
        let mut notifications = self.notifications.lock().await;
        if let Some(notification) = notifications.get_mut(id) {
            notification.is_read = true;
            Ok(())
        } else {
            Err(create_error!(UnknownNotification))
        }
    }

    /// Unset the related match on every notification referencing it
    async fn detach_notifications_from_match(&self, match_id: &str) -> Result<()> {
        let mut notifications = self.notifications.lock().await;
        for notification in notifications.values_mut() {
            if notification.related_match_id.as_deref() == Some(match_id) {
                notification.related_match_id = None;
            }
        }

        Ok(())
    }
}
