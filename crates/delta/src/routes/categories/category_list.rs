use axum::{extract::State, Json};
use lostfound_database::Database;
use lostfound_models::v0;
use lostfound_result::Result;

/// # Fetch Categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Categories ordered by name", body = Vec<v0::Category>)
    )
)]
pub async fn list(State(db): State<Database>) -> Result<Json<Vec<v0::Category>>> {
    let categories = db.fetch_categories().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
