use axum::{
    routing::{delete, get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::draft::{reset_draft, show_draft, store_draft};

pub fn build_booking_draft_routers() -> Router<AppRegistry> {
    let draft_routers = Router::new()
        .route("/", get(show_draft))
        .route("/", put(store_draft))
        .route("/", delete(reset_draft));

    Router::new().nest("/booking-draft", draft_routers)
}
