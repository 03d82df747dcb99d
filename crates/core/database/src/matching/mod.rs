//! Heuristic pairing of lost and found reports
use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use lostfound_models::v0::{ReportStatus, ReportType};
use lostfound_result::Result;

use crate::{CandidateQuery, Database, Match, Report};

mod tokens;

pub use tokens::*;

/// Contribution of each signal to the confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingWeights {
    /// Weight given to both reports sharing a category
    pub category: f64,
    /// Weight given to keyword overlap
    pub keyword: f64,
    /// Flat bonus when the dates are at most three days apart
    pub date_boost: f64,
}

/// Tunable parameters of the matching engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingConfig {
    /// Minimum confidence required to record a match
    pub threshold: f64,
    /// Maximum distance in days between the dates of two reports
    pub date_window_days: i64,
    pub weights: MatchingWeights,
}

impl Default for MatchingWeights {
    fn default() -> Self {
        MatchingWeights {
            category: 0.6,
            keyword: 0.4,
            date_boost: 0.05,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        MatchingConfig {
            threshold: 0.35,
            date_window_days: 14,
            weights: Default::default(),
        }
    }
}

impl From<lostfound_config::Matching> for MatchingConfig {
    fn from(value: lostfound_config::Matching) -> Self {
        MatchingConfig {
            threshold: value.threshold,
            date_window_days: value.date_window_days,
            weights: MatchingWeights {
                category: value.weights.category,
                keyword: value.weights.keyword,
                date_boost: value.weights.date_boost,
            },
        }
    }
}

/// Days within which the date boost applies
const DATE_BOOST_DAYS: i64 = 3;

/// Individual signals that make up a confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub category_match: f64,
    pub keyword_overlap: f64,
    pub date_diff: i64,
    pub date_boost: f64,
    pub confidence: f64,
}

impl Score {
    fn compute(
        a: &Report,
        a_tokens: &HashSet<String>,
        b: &Report,
        config: &MatchingConfig,
    ) -> Score {
        let category_match = if a.category_id == b.category_id {
            1.0
        } else {
            0.0
        };

        let keyword_overlap = overlap(a_tokens, &report_tokens(b));
        let date_diff = a
            .date_lost_found
            .signed_duration_since(b.date_lost_found)
            .num_days()
            .abs();

        let date_boost = if date_diff <= DATE_BOOST_DAYS {
            config.weights.date_boost
        } else {
            0.0
        };

        let confidence = (config.weights.category * category_match
            + config.weights.keyword * keyword_overlap
            + date_boost)
            .clamp(0.0, 1.0);

        Score {
            category_match,
            keyword_overlap,
            date_diff,
            date_boost,
            confidence,
        }
    }
}

/// Tokens describing a report
pub fn report_tokens(report: &Report) -> HashSet<String> {
    tokenize(format!("{} {}", report.title, report.description).as_str())
}

/// Confidence that two reports describe the same item
pub fn score(a: &Report, b: &Report, config: &MatchingConfig) -> f64 {
    Score::compute(a, &report_tokens(a), b, config).confidence
}

/// Order two reports into their lost and found slots
pub fn assign_slots<'a>(a: &'a Report, b: &'a Report) -> Result<(&'a Report, &'a Report)> {
    match (a.report_type, b.report_type) {
        (ReportType::Lost, ReportType::Found) => Ok((a, b)),
        (ReportType::Found, ReportType::Lost) => Ok((b, a)),
        _ => Err(create_error!(InvalidOperation)),
    }
}

/// Find, score and record matches for a newly created report
///
/// Candidates are visited in ascending id order and every one at or above
/// the threshold becomes a pending match with a notification to each reporter.
pub async fn run_matching(
    db: &Database,
    report: &Report,
    config: &MatchingConfig,
) -> Result<Vec<Match>> {
    let window = Days::new(config.date_window_days.max(0) as u64);
    let query = CandidateQuery {
        report_type: report.report_type.opposite(),
        category_id: report.category_id.to_string(),
        date_from: report
            .date_lost_found
            .checked_sub_days(window)
            .unwrap_or(NaiveDate::MIN),
        date_to: report
            .date_lost_found
            .checked_add_days(window)
            .unwrap_or(NaiveDate::MAX),
        statuses: ReportStatus::OPEN.to_vec(),
        exclude_id: report.id.to_string(),
    };

    let candidates = db.fetch_match_candidates(&query).await?;
    let tokens = report_tokens(report);

    let mut matches = vec![];
    for candidate in candidates {
        let score = Score::compute(report, &tokens, &candidate, config);
        debug!(
            "Scored {} against {}: {score:?}",
            report.id, candidate.id
        );

        if score.confidence < config.threshold {
            continue;
        }

        let (lost, found) = assign_slots(report, &candidate)?;
        let r#match = Match::create(db, lost, found, score.confidence).await?;
        info!(
            "Matched lost report {} with found report {} ({:.2})",
            lost.id, found.id, r#match.confidence_score
        );

        matches.push(r#match);
    }

    Ok(matches)
}
