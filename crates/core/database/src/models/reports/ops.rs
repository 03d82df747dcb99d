use lostfound_result::Result;

use crate::{CandidateQuery, PartialReport, Report, ReportQuery};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report>;

    /// Fetch reports passing the given filter, newest first
    async fn fetch_reports(&self, query: &ReportQuery) -> Result<Vec<Report>>;

    /// Fetch reports owned by a user
    async fn fetch_reports_by_user(&self, user_id: &str) -> Result<Vec<Report>>;

    /// Fetch reports that may be matched against another report, oldest first
    async fn fetch_match_candidates(&self, query: &CandidateQuery) -> Result<Vec<Report>>;

    /// Update report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()>;

    /// Delete a report from the database
    async fn delete_report(&self, id: &str) -> Result<()>;
}
