auto_derived!(
    /// # Dashboard Statistics
    ///
    /// Counts scoped to the requesting user.
    pub struct DashboardStats {
        /// Reports filed by the user
        pub total_reports: u64,
        /// Pending matches involving one of the user's reports
        pub active_matches: u64,
        /// Confirmed matches involving one of the user's reports
        pub resolved_items: u64,
        /// Unread notifications
        pub notifications: u64,
    }
);
