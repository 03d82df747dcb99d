use lostfound_result::Result;

use crate::ReferenceDb;
use crate::{CandidateQuery, PartialReport, Report, ReportQuery};

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "report"))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownReport))
    }

    /// Fetch reports passing the given filter, newest first
    async fn fetch_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports
            .values()
            .filter(|report| query.matches(report))
            .cloned()
            .collect();

        reports.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(reports)
    }

    /// Fetch reports owned by a user
    async fn fetch_reports_by_user(&self, user_id: &str) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        Ok(reports
            .values()
            .filter(|report| report.reporter_id == user_id)
            .cloned()
            .collect())
    }

    /// Fetch reports that may be matched against another report, oldest first
    async fn fetch_match_candidates(&self, query: &CandidateQuery) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut candidates: Vec<Report> = reports
            .values()
            .filter(|report| query.matches(report))
            .cloned()
            .collect();

        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(candidates)
    }

    /// Update report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if let Some(report) = reports.get_mut(id) {
            report.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(UnknownReport))
        }
    }

    /// Delete a report from the database
    async fn delete_report(&self, id: &str) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownReport))
        }
    }
}
