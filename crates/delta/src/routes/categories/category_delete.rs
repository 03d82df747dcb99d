use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_result::{create_error, Result};

/// # Delete Category
///
/// Categories still holding reports cannot be deleted.
#[utoipa::path(
    delete,
    path = "/categories/{target}",
    tag = "Categories",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Category Id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Unknown category", body = lostfound_result::Error),
        (status = 403, description = "Not an admin", body = lostfound_result::Error),
        (status = 409, description = "Reports still use this category", body = lostfound_result::Error)
    )
)]
pub async fn delete(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
) -> Result<StatusCode> {
    if !user.privileged() {
        return Err(create_error!(NotPrivileged));
    }

    let category = Reference::from_unchecked(&target).as_category(&db).await?;
    category.delete(&db).await?;
    Ok(StatusCode::NO_CONTENT)
}
