use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::booking::{event::SubmitBooking, BookingConfirmation};
use kernel::repository::booking::BookingRepository;
use shared::error::AppResult;

use crate::backend::BackendClient;

#[derive(new)]
pub struct BookingRepositoryImpl {
    client: Arc<BackendClient>,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn submit(&self, event: SubmitBooking) -> AppResult<BookingConfirmation> {
        self.client.submit_booking(event).await
    }
}
