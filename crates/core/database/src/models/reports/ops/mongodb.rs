use bson::{Bson, Document};
use lostfound_result::Result;
use mongodb::options::FindOptions;
use serde::Serialize;

use crate::MongoDb;
use crate::{CandidateQuery, PartialReport, Report, ReportQuery};

use super::AbstractReports;

static COL: &str = "reports";

/// Serialise an enum or date into its stored representation
fn to_bson<T: Serialize>(value: &T) -> Result<Bson> {
    bson::to_bson(value).map_err(|_| create_database_error!("serialise", COL))
}

impl ReportQuery {
    /// Build a MongoDB filter from this query
    fn to_document(&self) -> Result<Document> {
        let mut filter = doc! {};

        if let Some(report_type) = &self.report_type {
            filter.insert("type", to_bson(report_type)?);
        }

        if let Some(category_id) = &self.category_id {
            filter.insert("category_id", category_id.clone());
        }

        if let Some(status) = &self.status {
            filter.insert("status", to_bson(status)?);
        }

        if let Some(search) = &self.search {
            let pattern = regex::escape(search);
            let clauses: Vec<Document> = ["title", "description", "location"]
                .iter()
                .map(|field| {
                    let mut clause = Document::new();
                    clause.insert(
                        *field,
                        doc! {
                            "$regex": pattern.clone(),
                            "$options": "i"
                        },
                    );
                    clause
                })
                .collect();

            filter.insert("$or", clauses);
        }

        Ok(filter)
    }
}

impl CandidateQuery {
    /// Build a MongoDB filter from this query
    fn to_document(&self) -> Result<Document> {
        Ok(doc! {
            "_id": {
                "$ne": self.exclude_id.clone()
            },
            "type": to_bson(&self.report_type)?,
            "category_id": self.category_id.clone(),
            "date_lost_found": {
                "$gte": to_bson(&self.date_from)?,
                "$lte": to_bson(&self.date_to)?
            },
            "status": {
                "$in": to_bson(&self.statuses)?
            }
        })
    }
}

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        query!(self, insert_one, COL, report).map(|_| ())
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        self.find_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("find_one", COL))?
            .ok_or_else(|| create_error!(UnknownReport))
    }

    /// Fetch reports passing the given filter, newest first
    async fn fetch_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        self.find_with_options(
            COL,
            query.to_document()?,
            FindOptions::builder()
                .sort(doc! {
                    "_id": -1_i32
                })
                .build(),
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Fetch reports owned by a user
    async fn fetch_reports_by_user(&self, user_id: &str) -> Result<Vec<Report>> {
        self.find(
            COL,
            doc! {
                "reporter_id": user_id
            },
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Fetch reports that may be matched against another report, oldest first
    async fn fetch_match_candidates(&self, query: &CandidateQuery) -> Result<Vec<Report>> {
        self.find_with_options(
            COL,
            query.to_document()?,
            FindOptions::builder()
                .sort(doc! {
                    "_id": 1_i32
                })
                .build(),
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Update report with new information
    async fn update_report(&self, id: &str, partial: &PartialReport) -> Result<()> {
        let result = self
            .update_one_by_id(COL, id, partial)
            .await
            .map_err(|_| create_database_error!("update_one", COL))?;

        if result.matched_count == 0 {
            return Err(create_error!(UnknownReport));
        }

        Ok(())
    }

    /// Delete a report from the database
    async fn delete_report(&self, id: &str) -> Result<()> {
        let result = self
            .delete_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("delete_one", COL))?;

        if result.deleted_count == 0 {
            return Err(create_error!(UnknownReport));
        }

        Ok(())
    }
}
