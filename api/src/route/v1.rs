use axum::Router;
use registry::AppRegistry;

use super::{
    booking_draft::build_booking_draft_routers, health::build_health_check_routers,
    tool::build_tool_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_tool_routers())
        .merge(build_booking_draft_routers());
    Router::new().nest("/api/v1", router)
}
