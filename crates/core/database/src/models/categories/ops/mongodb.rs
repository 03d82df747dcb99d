use lostfound_result::Result;
use mongodb::options::{Collation, CollationStrength, FindOneOptions, FindOptions};

use crate::{Category, PartialCategory};
use crate::MongoDb;

use super::AbstractCategories;

static COL: &str = "categories";

/// Case-insensitive comparison
fn collation() -> Collation {
    Collation::builder()
        .locale("en")
        .strength(CollationStrength::Secondary)
        .build()
}

#[async_trait]
impl AbstractCategories for MongoDb {
    /// Insert a new category into the database
    async fn insert_category(&self, category: &Category) -> Result<()> {
        query!(self, insert_one, COL, category).map(|_| ())
    }

    /// Fetch a category by its id
    async fn fetch_category(&self, id: &str) -> Result<Category> {
        self.find_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("find_one", COL))?
            .ok_or_else(|| create_error!(UnknownCategory))
    }

    /// Fetch a category by its name, ignoring case
    async fn fetch_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.find_one_with_options(
            COL,
            doc! {
                "name": name
            },
            FindOneOptions::builder().collation(collation()).build(),
        )
        .await
        .map_err(|_| create_database_error!("find_one", COL))
    }

    /// Fetch all categories ordered by name
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.find_with_options(
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! {
                    "name": 1_i32
                })
                .build(),
        )
        .await
        .map_err(|_| create_database_error!("find", COL))
    }

    /// Update category with new information
    async fn update_category(&self, id: &str, partial: &PartialCategory) -> Result<()> {
        let result = self
            .update_one_by_id(COL, id, partial)
            .await
            .map_err(|_| create_database_error!("update_one", COL))?;

        if result.matched_count == 0 {
            return Err(create_error!(UnknownCategory));
        }

        Ok(())
    }

    /// Delete a category from the database
    async fn delete_category(&self, id: &str) -> Result<()> {
        let result = self
            .delete_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("delete_one", COL))?;

        if result.deleted_count == 0 {
            return Err(create_error!(UnknownCategory));
        }

        Ok(())
    }
}
