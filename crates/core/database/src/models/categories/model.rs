use iso8601_timestamp::Timestamp;
use lostfound_result::Result;

use crate::util::id::new_ulid;
use crate::{Database, ReportQuery};

auto_derived_partial!(
    /// Item category
    pub struct Category {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Display name
        pub name: String,
        /// Id of the user who created this category
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub created_by: Option<String>,
        /// When this category was created
        pub created_at: Timestamp,
    },
    "PartialCategory"
);

/// Trim a category name, rejecting names with nothing left
fn clean_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(create_error!(FailedValidation {
            error: "name: must not be blank".to_string()
        }));
    }

    Ok(name.to_string())
}

#[allow(clippy::disallowed_methods)]
impl Category {
    /// Create a new category, names are unique ignoring case
    pub async fn create(
        db: &Database,
        name: String,
        created_by: Option<String>,
    ) -> Result<Category> {
        let name = clean_name(&name)?;
        if db.fetch_category_by_name(&name).await?.is_some() {
            return Err(create_error!(CategoryExists));
        }

        let category = Category {
            id: new_ulid(),
            name,
            created_by,
            created_at: Timestamp::now_utc(),
        };

        db.insert_category(&category).await?;
        Ok(category)
    }

    /// Rename this category
    pub async fn rename(&mut self, db: &Database, name: String) -> Result<()> {
        let name = clean_name(&name)?;
        if let Some(existing) = db.fetch_category_by_name(&name).await? {
            if existing.id != self.id {
                return Err(create_error!(CategoryExists));
            }
        }

        let partial = PartialCategory {
            name: Some(name),
            ..Default::default()
        };

        db.update_category(&self.id, &partial).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Delete this category, refused while any report still files under it
    pub async fn delete(&self, db: &Database) -> Result<()> {
        let reports = db
            .fetch_reports(&ReportQuery {
                category_id: Some(self.id.to_string()),
                ..Default::default()
            })
            .await?;

        if !reports.is_empty() {
            return Err(create_error!(CategoryInUse));
        }

        db.delete_category(&self.id).await
    }
}
