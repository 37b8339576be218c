use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::backend::BackendClient;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    client: Arc<BackendClient>,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_backend(&self) -> bool {
        self.client.ping().await
    }
}
