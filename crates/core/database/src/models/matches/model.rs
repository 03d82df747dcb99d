use iso8601_timestamp::Timestamp;
use lostfound_models::v0::{MatchStatus, ReportStatus, ReportType};
use lostfound_result::Result;

use crate::util::id::new_ulid;
use crate::{Database, Notification, PartialReport, Report, User};

auto_derived_partial!(
    /// Potential correspondence between a lost and a found report
    pub struct Match {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the lost report
        pub lost_report_id: String,
        /// Id of the found report
        pub found_report_id: String,
        /// Heuristic confidence between 0 and 1
        pub confidence_score: f64,
        /// Resolution state
        pub status: MatchStatus,
        /// When this match was created
        pub created_at: Timestamp,
        /// When this match left the pending state
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub resolved_at: Option<Timestamp>,
    },
    "PartialMatch"
);

#[allow(clippy::disallowed_methods)]
impl Match {
    /// Create a new match and notify both reporters
    pub async fn create(
        db: &Database,
        lost: &Report,
        found: &Report,
        confidence_score: f64,
    ) -> Result<Match> {
        if lost.report_type != ReportType::Lost || found.report_type != ReportType::Found {
            return Err(create_error!(InvalidOperation));
        }

        let r#match = Match {
            id: new_ulid(),
            lost_report_id: lost.id.to_string(),
            found_report_id: found.id.to_string(),
            confidence_score: confidence_score.clamp(0.0, 1.0),
            status: MatchStatus::Pending,
            created_at: Timestamp::now_utc(),
            resolved_at: None,
        };

        db.insert_match(&r#match).await?;

        Notification::create(
            db,
            lost.reporter_id.to_string(),
            format!("Potential match found for your lost item: {}", found.title),
            Some(r#match.id.to_string()),
        )
        .await?;

        Notification::create(
            db,
            found.reporter_id.to_string(),
            format!("Your found item may match: {}", lost.title),
            Some(r#match.id.to_string()),
        )
        .await?;

        Ok(r#match)
    }

    /// Fetch the lost and found reports of this match
    pub async fn fetch_reports(&self, db: &Database) -> Result<(Report, Report)> {
        Ok((
            db.fetch_report(&self.lost_report_id).await?,
            db.fetch_report(&self.found_report_id).await?,
        ))
    }

    /// Whether the given user reported either side of this match
    pub async fn is_participant(&self, db: &Database, user: &User) -> Result<bool> {
        let (lost, found) = self.fetch_reports(db).await?;
        Ok(lost.reporter_id == user.id || found.reporter_id == user.id)
    }

    /// Confirm this match, both reports become matched
    pub async fn confirm(&mut self, db: &Database) -> Result<()> {
        self.resolve(db, MatchStatus::Confirmed).await?;

        for id in [&self.lost_report_id, &self.found_report_id] {
            db.update_report(
                id,
                &PartialReport {
                    status: Some(ReportStatus::Matched),
                    ..Default::default()
                },
            )
            .await?;
        }

        Ok(())
    }

    /// Reject this match
    pub async fn reject(&mut self, db: &Database) -> Result<()> {
        self.resolve(db, MatchStatus::Rejected).await
    }

    /// Move out of the pending state
    async fn resolve(&mut self, db: &Database, status: MatchStatus) -> Result<()> {
        if self.status != MatchStatus::Pending {
            return Err(create_error!(AlreadyResolved));
        }

        let partial = PartialMatch {
            status: Some(status),
            resolved_at: Some(Timestamp::now_utc()),
            ..Default::default()
        };

        db.update_match(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }
}
