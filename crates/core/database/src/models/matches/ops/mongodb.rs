use lostfound_result::Result;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::{Match, PartialMatch};

use super::AbstractMatches;

static COL: &str = "matches";

/// Sort matches newest first
fn newest_first() -> FindOptions {
    FindOptions::builder()
        .sort(doc! {
            "_id": -1_i32
        })
        .build()
}

#[async_trait]
impl AbstractMatches for MongoDb {
    /// Insert a new match into the database
    async fn insert_match(&self, r#match: &Match) -> Result<()> {
        query!(self, insert_one, COL, r#match).map(|_| ())
    }

    /// Fetch a match by its id
    async fn fetch_match(&self, id: &str) -> Result<Match> {
        self.find_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("find_one", COL))?
            .ok_or_else(|| create_error!(UnknownMatch))
    }

    /// Fetch all matches, newest first
    async fn fetch_matches(&self) -> Result<Vec<Match>> {
        self.find_with_options(COL, doc! {}, newest_first())
            .await
            .map_err(|_| create_database_error!("find", COL))
    }

    /// Fetch matches referencing any of the given reports, newest first
    async fn fetch_matches_by_reports(&self, report_ids: &[String]) -> Result<Vec<Match>> {
        self.find_with_options(
            COL,
            doc! {
                "$or": [
                    {
                        "lost_report_id": {
                            "$in": report_ids.to_vec()
                        }
                    },
                    {
                        "found_report_id": {
                            "$in": report_ids.to_vec()
                        }
                    }
                ]
            },
            newest_first(),
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Update match with new information
    async fn update_match(&self, id: &str, partial: &PartialMatch) -> Result<()> {
        let result = self
            .update_one_by_id(COL, id, partial)
            .await
            .map_err(|_| create_database_error!("update_one", COL))?;

        if result.matched_count == 0 {
            return Err(create_error!(UnknownMatch));
        }

        Ok(())
    }

    /// Delete a match from the database
    async fn delete_match(&self, id: &str) -> Result<()> {
        let result = self
            .delete_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("delete_one", COL))?;

        if result.deleted_count == 0 {
            return Err(create_error!(UnknownMatch));
        }

        Ok(())
    }
}
