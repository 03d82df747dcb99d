use axum::{
    routing::{get, post},
    Router,
};
use lostfound_database::Database;

pub mod notification_list;
pub mod notification_read;

pub fn router() -> Router<Database> {
    Router::new()
        .route("/", get(notification_list::list))
        .route("/:target/read", post(notification_read::read))
}
