use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::{event::SubmitBooking, BookingConfirmation};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Forward a validated booking to the backend, which performs the
    /// authoritative conflict check. A rejection here is an expected
    /// outcome, not a defect.
    async fn submit(&self, event: SubmitBooking) -> AppResult<BookingConfirmation>;
}
