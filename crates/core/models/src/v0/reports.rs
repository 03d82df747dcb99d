use chrono::NaiveDate;
use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

use super::Match;

auto_derived!(
    /// Whether an item was lost or found
    #[derive(Copy, Eq, Hash)]
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum ReportType {
        /// Someone lost this item
        Lost,
        /// Someone found this item
        Found,
    }

    /// Lifecycle of a report
    #[derive(Copy, Eq, Hash)]
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum ReportStatus {
        /// Waiting for a counterpart
        Pending,
        /// A match involving this report was confirmed
        Matched,
        /// Item has been returned to its owner
        Claimed,
        /// Item was never collected
        Unclaimed,
    }

    /// Lost or found item report
    pub struct Report {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Short title of the item
        pub title: String,
        /// Free-text description of the item
        pub description: String,
        /// Id of the category this item belongs to
        pub category_id: String,
        /// Whether this item was lost or found
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub report_type: ReportType,
        /// Current status
        pub status: ReportStatus,
        /// Id of the user who submitted the report
        pub reporter_id: String,
        /// Where the item was lost or found
        pub location: String,
        /// Date the item was lost or found
        #[cfg_attr(feature = "utoipa", schema(value_type = String))]
        pub date_lost_found: NaiveDate,
        /// When this report was submitted
        #[cfg_attr(feature = "utoipa", schema(value_type = String))]
        pub created_at: Timestamp,
    }

    /// # Report Data
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateReport {
        /// Short title of the item
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 255)))]
        pub title: String,
        /// Free-text description of the item
        #[cfg_attr(feature = "validator", validate(length(max = 5000)))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub description: String,
        /// Id of the category this item belongs to
        pub category_id: String,
        /// Whether this item was lost or found
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub report_type: ReportType,
        /// Where the item was lost or found
        #[cfg_attr(feature = "validator", validate(length(max = 1000)))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub location: String,
        /// Date the item was lost or found
        #[cfg_attr(feature = "utoipa", schema(value_type = String))]
        pub date_lost_found: NaiveDate,
    }

    /// # Report Edit
    #[derive(Default)]
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataEditReport {
        /// Short title of the item
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 255)))]
        pub title: Option<String>,
        /// Free-text description of the item
        #[cfg_attr(feature = "validator", validate(length(max = 5000)))]
        pub description: Option<String>,
        /// Id of the category this item belongs to
        pub category_id: Option<String>,
        /// Where the item was lost or found
        #[cfg_attr(feature = "validator", validate(length(max = 1000)))]
        pub location: Option<String>,
        /// Date the item was lost or found
        #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
        pub date_lost_found: Option<NaiveDate>,
        /// Current status
        pub status: Option<ReportStatus>,
    }

    /// # Query Parameters
    #[derive(Default)]
    #[cfg_attr(feature = "utoipa", derive(utoipa::IntoParams))]
    #[cfg_attr(feature = "utoipa", into_params(parameter_in = Query))]
    pub struct OptionsQueryReports {
        /// Only include lost or found reports
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub report_type: Option<ReportType>,
        /// Only include reports in this category
        pub category: Option<String>,
        /// Only include reports with this status
        pub status: Option<ReportStatus>,
        /// Search title, description and location
        pub q: Option<String>,
    }

    /// # Created Report
    pub struct CreateReportResponse {
        /// Report that was created
        pub report: Report,
        /// Matches found for this report
        pub matches: Vec<Match>,
    }
);

impl ReportType {
    /// Get the type a matching report must have
    pub fn opposite(self) -> ReportType {
        match self {
            ReportType::Lost => ReportType::Found,
            ReportType::Found => ReportType::Lost,
        }
    }
}

impl ReportStatus {
    /// Statuses a report may be matched from
    pub const OPEN: [ReportStatus; 2] = [ReportStatus::Pending, ReportStatus::Unclaimed];
}

#[cfg(test)]
mod tests {
    use super::{ReportStatus, ReportType};

    #[test]
    fn opposite_type() {
        assert_eq!(ReportType::Lost.opposite(), ReportType::Found);
        assert_eq!(ReportType::Found.opposite(), ReportType::Lost);
    }

    #[test]
    fn open_statuses() {
        assert!(ReportStatus::OPEN.contains(&ReportStatus::Pending));
        assert!(ReportStatus::OPEN.contains(&ReportStatus::Unclaimed));
        assert!(!ReportStatus::OPEN.contains(&ReportStatus::Matched));
        assert!(!ReportStatus::OPEN.contains(&ReportStatus::Claimed));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReportType::Found).unwrap(),
            "\"found\""
        );
        assert_eq!(
            serde_json::from_str::<ReportStatus>("\"unclaimed\"").unwrap(),
            ReportStatus::Unclaimed
        );
    }
}
