use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

use crate::util::json::Validate;

/// # Edit Category
#[utoipa::path(
    patch,
    path = "/categories/{target}",
    tag = "Categories",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Category Id")),
    request_body = v0::DataEditCategory,
    responses(
        (status = 200, description = "Renamed category", body = v0::Category),
        (status = 400, description = "Blank name or unknown category", body = lostfound_result::Error),
        (status = 403, description = "Not an admin", body = lostfound_result::Error),
        (status = 409, description = "Category name already taken", body = lostfound_result::Error)
    )
)]
pub async fn edit(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
    Validate(data): Validate<v0::DataEditCategory>,
) -> Result<Json<v0::Category>> {
    if !user.privileged() {
        return Err(create_error!(NotPrivileged));
    }

    let mut category = Reference::from_unchecked(&target).as_category(&db).await?;
    category.rename(&db, data.name).await?;
    Ok(Json(category.into()))
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use lostfound_models::v0::UserRole;
    use serde_json::json;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn admins_rename_categories() {
        let harness = TestHarness::new().await;
        let student = harness.new_user(UserRole::Student).await;
        let admin = harness.new_user(UserRole::Admin).await;
        let phones = harness.new_category("Phones").await;
        harness.new_category("Laptops").await;

        let uri = format!("/categories/{}", phones.id);

        let (status, body) = harness
            .patch(&uri, Some(&student), json!({ "name": "Mobiles" }))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["type"], "NotPrivileged");

        let (status, body) = harness
            .patch(&uri, Some(&admin), json!({ "name": "  Mobiles " }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Mobiles");
        assert_eq!(body["_id"], phones.id.as_str());

        let (status, body) = harness
            .patch(&uri, Some(&admin), json!({ "name": "laptops" }))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["type"], "CategoryExists");

        let (status, body) = harness
            .patch(&uri, Some(&admin), json!({ "name": "   " }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "FailedValidation");

        let (status, body) = harness
            .patch("/categories/missing", Some(&admin), json!({ "name": "Hats" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "UnknownCategory");

        assert_eq!(
            harness.db.fetch_category(&phones.id).await.unwrap().name,
            "Mobiles"
        );
    }
}
