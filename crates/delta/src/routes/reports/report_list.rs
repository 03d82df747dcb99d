use axum::{
    extract::{Query, State},
    Json,
};
use lostfound_database::Database;
use lostfound_models::v0;
use lostfound_result::Result;

/// # Query Reports
///
/// List reports newest first, optionally filtered.
#[utoipa::path(
    get,
    path = "/reports",
    tag = "Reports",
    params(v0::OptionsQueryReports),
    responses(
        (status = 200, description = "Reports passing the filter", body = Vec<v0::Report>)
    )
)]
pub async fn list(
    State(db): State<Database>,
    Query(options): Query<v0::OptionsQueryReports>,
) -> Result<Json<Vec<v0::Report>>> {
    let reports = db.fetch_reports(&options.into()).await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}
