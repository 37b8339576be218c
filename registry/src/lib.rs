use std::sync::Arc;

use adapter::backend::BackendClient;
use adapter::redis::RedisClient;
use adapter::repository::{
    booking::BookingRepositoryImpl, draft::DraftRepositoryImpl, feedback::FeedbackRepositoryImpl,
    health::HealthCheckRepositoryImpl, tool::ToolRepositoryImpl,
};
use kernel::booking::flow::BookingFlow;
use kernel::repository::{
    booking::BookingRepository, draft::DraftRepository, feedback::FeedbackRepository,
    health::HealthCheckRepository, tool::ToolRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    tool_repository: Arc<dyn ToolRepository>,
    feedback_repository: Arc<dyn FeedbackRepository>,
    draft_repository: Arc<dyn DraftRepository>,
    booking_flow: Arc<BookingFlow>,
}

impl AppRegistry {
    pub fn new(
        backend: Arc<BackendClient>,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(backend.clone()));
        let tool_repository: Arc<dyn ToolRepository> =
            Arc::new(ToolRepositoryImpl::new(backend.clone()));
        let booking_repository: Arc<dyn BookingRepository> =
            Arc::new(BookingRepositoryImpl::new(backend.clone()));
        let feedback_repository = Arc::new(FeedbackRepositoryImpl::new(backend.clone()));
        let draft_repository: Arc<dyn DraftRepository> = Arc::new(DraftRepositoryImpl::new(
            redis_client.clone(),
            app_config.draft.ttl,
        ));
        let booking_flow = Arc::new(BookingFlow::new(
            tool_repository.clone(),
            booking_repository,
            draft_repository.clone(),
        ));
        Self {
            health_check_repository,
            tool_repository,
            feedback_repository,
            draft_repository,
            booking_flow,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn tool_repository(&self) -> Arc<dyn ToolRepository> {
        self.tool_repository.clone()
    }

    pub fn feedback_repository(&self) -> Arc<dyn FeedbackRepository> {
        self.feedback_repository.clone()
    }

    pub fn draft_repository(&self) -> Arc<dyn DraftRepository> {
        self.draft_repository.clone()
    }

    pub fn booking_flow(&self) -> Arc<BookingFlow> {
        self.booking_flow.clone()
    }
}
