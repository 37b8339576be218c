use kernel::model::{booking::BookingDraft, id::ToolId};
use serde::{Deserialize, Serialize};

use crate::model::booking::BookingFormRequest;

/// Drafts are stored as-is: a half-filled, invalid form is still worth
/// keeping for the user's next visit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDraftRequest {
    pub tool_id: ToolId,
    pub form: BookingFormRequest,
}

impl From<StoreDraftRequest> for BookingDraft {
    fn from(value: StoreDraftRequest) -> Self {
        let StoreDraftRequest { tool_id, form } = value;
        BookingDraft {
            tool_id,
            form: form.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub tool_id: ToolId,
    pub form: BookingFormRequest,
}

impl From<BookingDraft> for DraftResponse {
    fn from(value: BookingDraft) -> Self {
        let BookingDraft { tool_id, form } = value;
        Self {
            tool_id,
            form: form.into(),
        }
    }
}
