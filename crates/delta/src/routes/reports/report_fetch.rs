use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database};
use lostfound_models::v0;
use lostfound_result::Result;

/// # Fetch Report
#[utoipa::path(
    get,
    path = "/reports/{target}",
    tag = "Reports",
    params(("target" = String, Path, description = "Report Id")),
    responses(
        (status = 200, description = "Report", body = v0::Report),
        (status = 404, description = "Unknown report", body = lostfound_result::Error)
    )
)]
pub async fn fetch(
    State(db): State<Database>,
    Path(target): Path<String>,
) -> Result<Json<v0::Report>> {
    Reference::from_unchecked(&target)
        .as_report(&db)
        .await
        .map(Into::into)
        .map(Json)
}
