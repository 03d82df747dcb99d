use std::net::SocketAddr;

use axum::Router;
use lostfound_config::config;
use lostfound_database::{Database, DatabaseInfo};
use tokio::net::TcpListener;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

#[macro_use]
extern crate log;

pub mod routes;
pub mod util;

struct TokenAddon;

impl Modify for TokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "User Token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                "X-Session-Token".to_string(),
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&TokenAddon),
    paths(
        routes::root::root,
        routes::reports::report_list::list,
        routes::reports::report_create::create,
        routes::reports::report_fetch::fetch,
        routes::reports::report_edit::edit,
        routes::reports::report_delete::delete,
        routes::reports::report_matches::matches,
        routes::matches::match_list::list,
        routes::matches::match_create::create,
        routes::matches::match_fetch::fetch,
        routes::matches::match_confirm::confirm,
        routes::matches::match_reject::reject,
        routes::notifications::notification_list::list,
        routes::notifications::notification_read::read,
        routes::categories::category_list::list,
        routes::categories::category_create::create,
        routes::categories::category_edit::edit,
        routes::categories::category_delete::delete,
        routes::dashboard::dashboard_stats::stats,
    ),
    tags(
        (name = "Misc", description = "Service information."),
        (name = "Reports", description = "Lost and found item reports."),
        (name = "Matches", description = "Potential pairings of lost and found reports."),
        (name = "Notifications", description = "Messages for the current user."),
        (name = "Categories", description = "Item categories."),
        (name = "Dashboard", description = "Summary of your own activity.")
    ),
    components(
        schemas(
            lostfound_result::Error,
            lostfound_result::ErrorType,
            lostfound_models::v0::Report,
            lostfound_models::v0::ReportType,
            lostfound_models::v0::ReportStatus,
            lostfound_models::v0::DataCreateReport,
            lostfound_models::v0::DataEditReport,
            lostfound_models::v0::CreateReportResponse,
            lostfound_models::v0::Match,
            lostfound_models::v0::MatchStatus,
            lostfound_models::v0::MatchDetail,
            lostfound_models::v0::DataCreateMatch,
            lostfound_models::v0::MatchStatusResponse,
            lostfound_models::v0::Notification,
            lostfound_models::v0::NotificationReadResponse,
            lostfound_models::v0::Category,
            lostfound_models::v0::DataCreateCategory,
            lostfound_models::v0::DataEditCategory,
            lostfound_models::v0::DashboardStats,
            routes::root::RootResponse,
        )
    ),
)]
pub struct ApiDoc;

/// Build the API router on top of a database
pub fn app(db: Database) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(routes::router())
        .with_state(db)
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    lostfound_config::configure!(api);

    let config = config().await;
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Unable to connect to database");

    // Configure TCP listener and bind
    let address: SocketAddr = config
        .api
        .listen
        .parse()
        .expect("Invalid listen address");

    info!("Listening on {address}");
    info!("Play around with the API: {}/scalar", config.hosts.api);

    let listener = TcpListener::bind(&address).await?;
    axum::serve(listener, app(db).into_make_service()).await
}
