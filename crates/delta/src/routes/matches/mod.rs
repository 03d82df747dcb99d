use axum::{
    routing::{get, post},
    Router,
};
use lostfound_database::Database;

pub mod match_confirm;
pub mod match_create;
pub mod match_fetch;
pub mod match_list;
pub mod match_reject;

pub fn router() -> Router<Database> {
    Router::new()
        .route("/", post(match_create::create).get(match_list::list))
        .route("/:target", get(match_fetch::fetch))
        .route("/:target/confirm", post(match_confirm::confirm))
        .route("/:target/reject", post(match_reject::reject))
}
