use lostfound_result::Result;

use crate::{Category, Database, Match, Notification, Report};

/// Reference to some object in the database
pub struct Reference<'a> {
    /// Id of object
    pub id: &'a str,
}

impl<'a> Reference<'a> {
    /// Create a Ref from an unchecked string
    pub fn from_unchecked(id: &'a str) -> Reference<'a> {
        Reference { id }
    }

    /// Fetch category from Ref
    pub async fn as_category(&self, db: &Database) -> Result<Category> {
        db.fetch_category(self.id).await
    }

    /// Fetch report from Ref
    pub async fn as_report(&self, db: &Database) -> Result<Report> {
        db.fetch_report(self.id).await
    }

    /// Fetch match from Ref
    pub async fn as_match(&self, db: &Database) -> Result<Match> {
        db.fetch_match(self.id).await
    }

    /// Fetch notification from Ref
    pub async fn as_notification(&self, db: &Database) -> Result<Notification> {
        db.fetch_notification(self.id).await
    }
}
