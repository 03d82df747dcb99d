use iso8601_timestamp::Timestamp;

auto_derived!(
    /// Message delivered to a single user
    pub struct Notification {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the recipient
        pub user_id: String,
        /// Human-readable message
        pub message: String,
        /// Match this notification is about
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub related_match_id: Option<String>,
        /// Whether the recipient has read this notification
        #[cfg_attr(feature = "serde", serde(default))]
        pub is_read: bool,
        /// When this notification was created
        #[cfg_attr(feature = "utoipa", schema(value_type = String))]
        pub created_at: Timestamp,
    }

    /// # Read Receipt
    pub struct NotificationReadResponse {
        /// Whether the notification is now read
        pub is_read: bool,
    }
);
