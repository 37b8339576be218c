use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    booking::{quote_booking, submit_booking},
    feedback::post_feedback,
    tool::{delete_tool, register_tool, show_tool, show_tool_list, update_tool},
};

pub fn build_tool_routers() -> Router<AppRegistry> {
    let tool_routers = Router::new()
        .route("/", post(register_tool))
        .route("/", get(show_tool_list))
        .route("/:tool_id", get(show_tool))
        .route("/:tool_id", put(update_tool))
        .route("/:tool_id", delete(delete_tool))
        .route("/:tool_id/quote", post(quote_booking))
        .route("/:tool_id/bookings", post(submit_booking))
        .route("/:tool_id/feedbacks", post(post_feedback));

    Router::new().nest("/tools", tool_routers)
}
