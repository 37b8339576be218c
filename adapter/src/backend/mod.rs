use std::time::Duration;

use anyhow::{Context, Result};
use kernel::model::{
    booking::{event::SubmitBooking, BookingConfirmation},
    feedback::event::CreateFeedback,
    id::{FeedbackId, ToolId},
    tool::{
        event::{CreateTool, UpdateTool},
        PaginatedToolList, Tool, ToolListOptions,
    },
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shared::{
    config::BackendConfig,
    error::{AppError, AppResult},
};

use self::model::{
    booking::{BackendErrorBody, BookingConfirmationPayload, BookingRequestPayload},
    feedback::{CreateFeedbackPayload, FeedbackCreatedPayload},
    tool::{CreateToolPayload, ToolCreatedPayload, ToolListPayload, ToolPayload, UpdateToolPayload},
};

pub mod model;

/// Typed client for the authoritative ToolNext backend. All upstream
/// payloads are decoded into explicit types at this boundary; whatever does
/// not decode is rejected here and never reaches the handlers.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build the backend HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_tool(&self, tool_id: ToolId) -> AppResult<Option<Tool>> {
        let response = self
            .http
            .get(self.url(&format!("/tools/{tool_id}")))
            .send()
            .await
            .map_err(AppError::UpstreamUnreachable)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload: ToolPayload = decode(ensure_success(response).await?).await?;
        payload.try_into().map(Some)
    }

    pub async fn list_tools(&self, options: &ToolListOptions) -> AppResult<PaginatedToolList> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", options.page.to_string()),
            ("perPage", options.per_page.to_string()),
        ];
        if let Some(search) = &options.search {
            query.push(("search", search.clone()));
        }
        if !options.categories.is_empty() {
            let categories = options
                .categories
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            query.push(("categories", categories));
        }

        let response = self
            .http
            .get(self.url("/tools"))
            .query(&query)
            .send()
            .await
            .map_err(AppError::UpstreamUnreachable)?;
        let payload: ToolListPayload = decode(ensure_success(response).await?).await?;
        payload.try_into()
    }

    pub async fn create_tool(&self, event: CreateTool) -> AppResult<ToolId> {
        let response = self
            .http
            .post(self.url("/tools"))
            .json(&CreateToolPayload::from(event))
            .send()
            .await
            .map_err(AppError::UpstreamUnreachable)?;
        let payload: ToolCreatedPayload = decode(ensure_success(response).await?).await?;
        Ok(payload.id)
    }

    pub async fn update_tool(&self, event: UpdateTool) -> AppResult<()> {
        let tool_id = event.tool_id;
        let response = self
            .http
            .put(self.url(&format!("/tools/{tool_id}")))
            .json(&UpdateToolPayload::from(event))
            .send()
            .await
            .map_err(AppError::UpstreamUnreachable)?;
        ensure_success(response).await.map(|_| ())
    }

    pub async fn delete_tool(&self, tool_id: ToolId) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/tools/{tool_id}")))
            .send()
            .await
            .map_err(AppError::UpstreamUnreachable)?;
        ensure_success(response).await.map(|_| ())
    }

    pub async fn submit_booking(&self, event: SubmitBooking) -> AppResult<BookingConfirmation> {
        let SubmitBooking { tool_id, booking } = event;
        let response = self
            .http
            .post(self.url(&format!("/bookings/{tool_id}")))
            .json(&BookingRequestPayload::from(booking))
            .send()
            .await
            .map_err(AppError::UpstreamUnreachable)?;
        let payload: BookingConfirmationPayload = decode(ensure_success(response).await?).await?;
        payload.try_into()
    }

    pub async fn create_feedback(&self, event: CreateFeedback) -> AppResult<FeedbackId> {
        let tool_id = event.tool_id;
        let response = self
            .http
            .post(self.url(&format!("/tools/{tool_id}/feedbacks")))
            .json(&CreateFeedbackPayload::from(event))
            .send()
            .await
            .map_err(AppError::UpstreamUnreachable)?;
        let payload: FeedbackCreatedPayload = decode(ensure_success(response).await?).await?;
        Ok(payload.id)
    }

    pub async fn ping(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn ensure_success(response: reqwest::Response) -> AppResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    Err(reject(response).await)
}

/// Turn an upstream refusal into the matching app error, preferring the
/// backend's structured `{error, response?}` body over a generic message.
async fn reject(response: reqwest::Response) -> AppError {
    let status = response.status();
    let message = match response.json::<BackendErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => "the ToolNext backend rejected the request".to_string(),
    };
    if status == StatusCode::NOT_FOUND {
        return AppError::EntityNotFound(message);
    }
    AppError::UpstreamRejected {
        status: status.as_u16(),
        message,
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(AppError::UpstreamUnreachable)?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::MalformedUpstreamPayload(e.to_string()))
}
