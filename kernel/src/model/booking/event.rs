use derive_new::new;

use crate::model::{booking::ValidatedBooking, id::ToolId};

#[derive(Debug, new)]
pub struct SubmitBooking {
    pub tool_id: ToolId,
    pub booking: ValidatedBooking,
}
