use chrono::NaiveDate;
use iso8601_timestamp::Timestamp;
use lostfound_models::v0::{DataCreateReport, ReportStatus, ReportType};
use lostfound_result::Result;

use crate::util::id::new_ulid;
use crate::{Database, User};

auto_derived_partial!(
    /// Lost or found item report
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Short title of the item
        pub title: String,
        /// Free-text description of the item
        #[serde(default)]
        pub description: String,
        /// Id of the category this item belongs to
        pub category_id: String,
        /// Whether this item was lost or found
        #[serde(rename = "type")]
        pub report_type: ReportType,
        /// Current status
        pub status: ReportStatus,
        /// Id of the user who submitted the report
        pub reporter_id: String,
        /// Where the item was lost or found
        #[serde(default)]
        pub location: String,
        /// Date the item was lost or found
        pub date_lost_found: NaiveDate,
        /// When this report was submitted
        pub created_at: Timestamp,
    },
    "PartialReport"
);

/// Filter applied when listing reports
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    /// Only include lost or found reports
    pub report_type: Option<ReportType>,
    /// Only include reports in this category
    pub category_id: Option<String>,
    /// Only include reports with this status
    pub status: Option<ReportStatus>,
    /// Case-insensitive search over title, description and location
    pub search: Option<String>,
}

/// Constraints a report must satisfy to be considered for matching
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    /// Required report type
    pub report_type: ReportType,
    /// Required category
    pub category_id: String,
    /// Earliest date, inclusive
    pub date_from: NaiveDate,
    /// Latest date, inclusive
    pub date_to: NaiveDate,
    /// Accepted statuses
    pub statuses: Vec<ReportStatus>,
    /// Report to leave out
    pub exclude_id: String,
}

impl ReportQuery {
    /// Check whether a report passes this filter
    pub fn matches(&self, report: &Report) -> bool {
        if let Some(report_type) = self.report_type {
            if report.report_type != report_type {
                return false;
            }
        }

        if let Some(category_id) = &self.category_id {
            if &report.category_id != category_id {
                return false;
            }
        }

        if let Some(status) = self.status {
            if report.status != status {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let search = search.to_lowercase();
            return [&report.title, &report.description, &report.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&search));
        }

        true
    }
}

impl CandidateQuery {
    /// Check whether a report is a candidate
    pub fn matches(&self, report: &Report) -> bool {
        report.id != self.exclude_id
            && report.report_type == self.report_type
            && report.category_id == self.category_id
            && report.date_lost_found >= self.date_from
            && report.date_lost_found <= self.date_to
            && self.statuses.contains(&report.status)
    }
}

#[allow(clippy::disallowed_methods)]
impl Report {
    /// Create a new report
    ///
    /// Matching is not run here, the caller triggers it once the report is stored.
    pub async fn create(db: &Database, data: DataCreateReport, reporter: &User) -> Result<Report> {
        db.fetch_category(&data.category_id).await?;

        let report = Report {
            id: new_ulid(),
            title: data.title,
            description: data.description,
            category_id: data.category_id,
            report_type: data.report_type,
            status: ReportStatus::Pending,
            reporter_id: reporter.id.to_string(),
            location: data.location,
            date_lost_found: data.date_lost_found,
            created_at: Timestamp::now_utc(),
        };

        db.insert_report(&report).await?;
        Ok(report)
    }

    /// Whether the given user may edit or delete this report
    pub fn can_manage(&self, user: &User) -> bool {
        self.reporter_id == user.id || user.privileged()
    }

    /// Update this report
    pub async fn update(&mut self, db: &Database, partial: PartialReport) -> Result<()> {
        if let Some(category_id) = &partial.category_id {
            db.fetch_category(category_id).await?;
        }

        db.update_report(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Delete this report along with every match referencing it
    pub async fn delete(&self, db: &Database) -> Result<()> {
        for r#match in db.fetch_matches_by_reports(&[self.id.to_string()]).await? {
            db.detach_notifications_from_match(&r#match.id).await?;
            db.delete_match(&r#match.id).await?;
        }

        db.delete_report(&self.id).await
    }
}
