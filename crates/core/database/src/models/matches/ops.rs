use lostfound_result::Result;

use crate::{Match, PartialMatch};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractMatches: Sync + Send {
    /// Insert a new match into the database
    async fn insert_match(&self, r#match: &Match) -> Result<()>;

    /// Fetch a match by its id
    async fn fetch_match(&self, id: &str) -> Result<Match>;

    /// Fetch all matches, newest first
    async fn fetch_matches(&self) -> Result<Vec<Match>>;

    /// Fetch matches referencing any of the given reports, newest first
    async fn fetch_matches_by_reports(&self, report_ids: &[String]) -> Result<Vec<Match>>;

    /// Update match with new information
    async fn update_match(&self, id: &str, partial: &PartialMatch) -> Result<()>;

    /// Delete a match from the database
    async fn delete_match(&self, id: &str) -> Result<()>;
}
