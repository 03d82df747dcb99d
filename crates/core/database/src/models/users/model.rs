use lostfound_models::v0::{DashboardStats, MatchStatus, UserRole};
use lostfound_result::Result;

use crate::util::id::new_ulid;
use crate::Database;

auto_derived!(
    /// User
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Username
        pub username: String,
        /// Role on campus
        #[serde(default)]
        pub role: UserRole,
        /// Session token presented in the `x-session-token` header
        pub token: String,
    }
);

#[allow(clippy::disallowed_methods)]
impl User {
    /// Create a new user
    ///
    /// Sessions are issued elsewhere, this only provisions a token to resolve.
    pub async fn create(db: &Database, username: String, role: UserRole) -> Result<User> {
        let user = User {
            id: new_ulid(),
            username,
            role,
            token: nanoid::nanoid!(64),
        };

        db.insert_user(&user).await?;
        Ok(user)
    }

    /// Whether this user may act on behalf of the lost & found office
    pub fn privileged(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Summarise this user's reports, matches and unread notifications
    pub async fn dashboard_stats(&self, db: &Database) -> Result<DashboardStats> {
        let report_ids: Vec<String> = db
            .fetch_reports_by_user(&self.id)
            .await?
            .into_iter()
            .map(|report| report.id)
            .collect();

        let matches = if report_ids.is_empty() {
            vec![]
        } else {
            db.fetch_matches_by_reports(&report_ids).await?
        };

        let count = |status: MatchStatus| {
            matches
                .iter()
                .filter(|r#match| r#match.status == status)
                .count() as u64
        };

        Ok(DashboardStats {
            total_reports: report_ids.len() as u64,
            active_matches: count(MatchStatus::Pending),
            resolved_items: count(MatchStatus::Confirmed),
            notifications: db.count_unread_notifications(&self.id).await?,
        })
    }
}
