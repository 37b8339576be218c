use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use kernel::booking::form::validate_range;
use kernel::model::id::ToolId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::ClientKey,
    model::booking::{BookingConfirmationResponse, BookingFormRequest, QuoteRequest, QuoteResponse},
};

/// Advisory availability check plus price for display. A 409 names the
/// conflicting interval; a 200 reserves nothing.
pub async fn quote_booking(
    Path(tool_id): Path<ToolId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<QuoteRequest>,
) -> AppResult<Json<QuoteResponse>> {
    let range =
        validate_range(&req.start_date, &req.end_date).map_err(AppError::ValidationFailed)?;

    registry
        .booking_flow()
        .quote(tool_id, range)
        .await
        .map(QuoteResponse::from)
        .map(Json)
}

pub async fn submit_booking(
    client: ClientKey,
    Path(tool_id): Path<ToolId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<BookingFormRequest>,
) -> AppResult<impl IntoResponse> {
    registry
        .booking_flow()
        .submit(client.as_str(), tool_id, req.into())
        .await
        .map(|confirmation| {
            (
                StatusCode::CREATED,
                Json(BookingConfirmationResponse::from(confirmation)),
            )
        })
}
