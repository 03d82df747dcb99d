use lostfound_result::Result;

use crate::{Category, PartialCategory};
use crate::ReferenceDb;

use super::AbstractCategories;

#[async_trait]
impl AbstractCategories for ReferenceDb {
    /// Insert a new category into the database
    async fn insert_category(&self, category: &Category) -> Result<()> {
        let mut categories = self.categories.lock().await;
        if categories.contains_key(&category.id) {
            Err(create_database_error!("insert", "category"))
        } else {
            categories.insert(category.id.to_string(), category.clone());
            Ok(())
        }
    }

    /// Fetch a category by its id
    async fn fetch_category(&self, id: &str) -> Result<Category> {
        let categories = self.categories.lock().await;
        categories
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownCategory))
    }

    /// Fetch a category by its name, ignoring case
    async fn fetch_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let categories = self.categories.lock().await;
        Ok(categories
            .values()
            .find(|category| category.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Fetch all categories ordered by name
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let categories = self.categories.lock().await;
        let mut categories: Vec<Category> = categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Update category with new information
    async fn update_category(&self, id: &str, partial: &PartialCategory) -> Result<()> {
        let mut categories = self.categories.lock().await;
        if let Some(category) = categories.get_mut(id) {
            category.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(UnknownCategory))
        }
    }

    /// Delete a category from the database
    async fn delete_category(&self, id: &str) -> Result<()> {
        let mut categories = self.categories.lock().await;
        if categories.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownCategory))
        }
    }
}
