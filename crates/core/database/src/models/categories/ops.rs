use lostfound_result::Result;

use crate::{Category, PartialCategory};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractCategories: Sync + Send {
    /// Insert a new category into the database
    async fn insert_category(&self, category: &Category) -> Result<()>;

    /// Fetch a category by its id
    async fn fetch_category(&self, id: &str) -> Result<Category>;

    /// Fetch a category by its name, ignoring case
    async fn fetch_category_by_name(&self, name: &str) -> Result<Option<Category>>;

    /// Fetch all categories ordered by name
    async fn fetch_categories(&self) -> Result<Vec<Category>>;

    /// Update category with new information
    async fn update_category(&self, id: &str, partial: &PartialCategory) -> Result<()>;

    /// Delete a category from the database
    async fn delete_category(&self, id: &str) -> Result<()>;
}
