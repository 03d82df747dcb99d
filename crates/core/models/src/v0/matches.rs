use iso8601_timestamp::Timestamp;

use super::Report;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Resolution state of a match
    #[derive(Copy, Eq, Hash)]
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum MatchStatus {
        /// Waiting for a reporter or admin decision
        Pending,
        /// Both reports describe the same item
        Confirmed,
        /// The reports are unrelated
        Rejected,
    }

    /// Potential correspondence between a lost and a found report
    pub struct Match {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
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
        #[cfg_attr(feature = "utoipa", schema(value_type = String))]
        pub created_at: Timestamp,
        /// When this match left the pending state
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
        pub resolved_at: Option<Timestamp>,
    }

    /// Match with both reports included
    pub struct MatchDetail {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Lost report
        pub lost_report: Report,
        /// Found report
        pub found_report: Report,
        /// Heuristic confidence between 0 and 1
        pub confidence_score: f64,
        /// Resolution state
        pub status: MatchStatus,
        /// When this match was created
        #[cfg_attr(feature = "utoipa", schema(value_type = String))]
        pub created_at: Timestamp,
        /// When this match left the pending state
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
        pub resolved_at: Option<Timestamp>,
    }

    /// # Match Data
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateMatch {
        /// Id of the lost report
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub lost_report_id: String,
        /// Id of the found report
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub found_report_id: String,
    }

    /// # Match Resolution
    pub struct MatchStatusResponse {
        /// New status of the match
        pub status: MatchStatus,
    }
);
