use axum::{extract::State, Json};
use lostfound_database::{Category, Database, User};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

use crate::util::json::Validate;

/// # Create Category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    security(("User Token" = [])),
    request_body = v0::DataCreateCategory,
    responses(
        (status = 200, description = "Created category", body = v0::Category),
        (status = 400, description = "Blank or overlong name", body = lostfound_result::Error),
        (status = 403, description = "Not an admin", body = lostfound_result::Error),
        (status = 409, description = "Category name already taken", body = lostfound_result::Error)
    )
)]
pub async fn create(
    State(db): State<Database>,
    user: User,
    Validate(data): Validate<v0::DataCreateCategory>,
) -> Result<Json<v0::Category>> {
    if !user.privileged() {
        return Err(create_error!(NotPrivileged));
    }

    Category::create(&db, data.name, Some(user.id))
        .await
        .map(Into::into)
        .map(Json)
}
