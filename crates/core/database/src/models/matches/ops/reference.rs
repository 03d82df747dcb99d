use lostfound_result::Result;

use crate::ReferenceDb;
use crate::{Match, PartialMatch};

use super::AbstractMatches;

/// Sort matches newest first
fn newest_first(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| b.id.cmp(&a.id));
    matches
}

#[async_trait]
impl AbstractMatches for ReferenceDb {
    /// Insert a new match into the database
    async fn insert_match(&self, r#match: &Match) -> Result<()> {
        let mut matches = self.matches.lock().await;
        if matches.contains_key(&r#match.id) {
            Err(create_database_error!("insert", "match"))
        } else {
            matches.insert(r#match.id.to_string(), r#match.clone());
            Ok(())
        }
    }

    /// Fetch a match by its id
    async fn fetch_match(&self, id: &str) -> Result<Match> {
        let matches = self.matches.lock().await;
        matches
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownMatch))
    }

    /// Fetch all matches, newest first
    async fn fetch_matches(&self) -> Result<Vec<Match>> {
        let matches = self.matches.lock().await;
        Ok(newest_first(matches.values().cloned().collect()))
    }

    /// Fetch matches referencing any of the given reports, newest first
    async fn fetch_matches_by_reports(&self, report_ids: &[String]) -> Result<Vec<Match>> {
        let matches = self.matches.lock().await;
        Ok(newest_first(
            matches
                .values()
                .filter(|r#match| {
                    report_ids.contains(&r#match.lost_report_id)
                        || report_ids.contains(&r#match.found_report_id)
                })
                .cloned()
                .collect(),
        ))
    }

    /// Update match with new information
    async fn update_match(&self, id: &str, partial: &PartialMatch) -> Result<()> {
        let mut matches = self.matches.lock().await;
        if let Some(r#match) = matches.get_mut(id) {
            r#match.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(UnknownMatch))
        }
    }

    /// Delete a match from the database
    async fn delete_match(&self, id: &str) -> Result<()> {
        let mut matches = self.matches.lock().await;
        if matches.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownMatch))
        }
    }
}
