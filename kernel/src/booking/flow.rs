use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use shared::error::{AppError, AppResult};

use crate::{
    booking::{
        availability::{check_availability, Availability},
        form::validate_form,
        pricing::Quote,
    },
    model::{
        booking::{event::SubmitBooking, BookingConfirmation, BookingForm},
        date_range::DateRange,
        id::ToolId,
        tool::Tool,
    },
    repository::{booking::BookingRepository, draft::DraftRepository, tool::ToolRepository},
};

/// States of one booking submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowState {
    Idle,
    Validating,
    CheckingAvailability,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowState::Idle => "idle",
            FlowState::Validating => "validating",
            FlowState::CheckingAvailability => "checking-availability",
            FlowState::Submitting => "submitting",
            FlowState::Succeeded => "succeeded",
            FlowState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Drives a booking from raw form to backend confirmation:
/// `Idle -> Validating -> CheckingAvailability -> Submitting -> Succeeded`,
/// bailing out to `Idle`/`Failed` along the way.
///
/// The persisted draft is cleared only after the backend confirms; every
/// rejection (field errors, advisory conflict, upstream refusal, network
/// failure) leaves it in place so the user can retry with their input intact.
pub struct BookingFlow {
    tools: Arc<dyn ToolRepository>,
    bookings: Arc<dyn BookingRepository>,
    drafts: Arc<dyn DraftRepository>,
    // client keys with a submission currently in flight
    in_flight: Mutex<HashSet<String>>,
}

impl BookingFlow {
    pub fn new(
        tools: Arc<dyn ToolRepository>,
        bookings: Arc<dyn BookingRepository>,
        drafts: Arc<dyn DraftRepository>,
    ) -> Self {
        Self {
            tools,
            bookings,
            drafts,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub async fn submit(
        &self,
        client_key: &str,
        tool_id: ToolId,
        form: BookingForm,
    ) -> AppResult<BookingConfirmation> {
        let mut state = FlowState::Idle;

        transition(&mut state, FlowState::Validating);
        let booking = match validate_form(&form) {
            Ok(booking) => booking,
            Err(errors) => {
                // field errors are resolved locally; nothing goes out
                transition(&mut state, FlowState::Idle);
                return Err(AppError::ValidationFailed(errors));
            }
        };

        transition(&mut state, FlowState::CheckingAvailability);
        let tool = self.fetch_tool(tool_id).await?;
        if let Availability::Conflict(conflict) = check_availability(booking.range, &tool.booked_dates)
        {
            transition(&mut state, FlowState::Failed);
            return Err(AppError::BookingConflict {
                start: conflict.start(),
                end: conflict.end(),
            });
        }

        transition(&mut state, FlowState::Submitting);
        let _guard = self.mark_in_flight(client_key)?;
        let confirmation = match self.bookings.submit(SubmitBooking::new(tool_id, booking)).await {
            Ok(confirmation) => confirmation,
            Err(e) => {
                // the backend may still refuse a range the advisory check
                // cleared (another renter won the race); the draft survives
                // so the form values are preserved for a retry
                transition(&mut state, FlowState::Failed);
                return Err(e);
            }
        };

        if let Err(e) = self.drafts.clear(client_key).await {
            tracing::warn!(error = %e, "booking confirmed but draft cleanup failed");
        }
        transition(&mut state, FlowState::Succeeded);
        Ok(confirmation)
    }

    /// Advisory availability check plus derived price for display.
    pub async fn quote(&self, tool_id: ToolId, range: DateRange) -> AppResult<Quote> {
        let tool = self.fetch_tool(tool_id).await?;
        match check_availability(range, &tool.booked_dates) {
            Availability::Conflict(conflict) => Err(AppError::BookingConflict {
                start: conflict.start(),
                end: conflict.end(),
            }),
            Availability::Clear => Ok(Quote::for_range(range, tool.price_per_day)),
        }
    }

    async fn fetch_tool(&self, tool_id: ToolId) -> AppResult<Tool> {
        self.tools
            .find_by_id(tool_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("tool {tool_id} was not found")))
    }

    fn mark_in_flight(&self, client_key: &str) -> AppResult<InFlightGuard<'_>> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(client_key.to_string()) {
            return Err(AppError::SubmissionInFlight);
        }
        Ok(InFlightGuard {
            flow: self,
            client_key: client_key.to_string(),
        })
    }
}

struct InFlightGuard<'a> {
    flow: &'a BookingFlow,
    client_key: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flow
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.client_key);
    }
}

fn transition(state: &mut FlowState, next: FlowState) {
    tracing::debug!(from = %*state, to = %next, "booking flow transition");
    *state = next;
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::model::{
        booking::BookingDraft,
        id::{BookingId, OwnerId},
        tool::{
            event::{CreateTool, DeleteTool, UpdateTool},
            Category, PaginatedToolList, ToolListOptions, ToolOwner,
        },
    };

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    fn sample_tool(id: ToolId, booked_dates: Vec<DateRange>) -> Tool {
        Tool {
            id,
            name: "Cordless hammer drill".into(),
            price_per_day: 200,
            booked_dates,
            owner: ToolOwner {
                owner_id: OwnerId::new(),
                owner_name: "Mykola".into(),
            },
            description: "18V, two batteries included".into(),
            specifications: "18V / 60Nm / 2.0Ah".into(),
            rental_terms: "returned clean and charged".into(),
            images: vec!["drill.jpg".into()],
            rating: 4.6,
            category: Category::PowerTools,
        }
    }

    fn valid_form() -> BookingForm {
        BookingForm {
            first_name: "Olena".into(),
            last_name: "Kovalenko".into(),
            phone: "+380501234567".into(),
            start_date: "2024-06-10".into(),
            end_date: "2024-06-13".into(),
            delivery_city: "Kyiv".into(),
            delivery_branch: "Branch 12".into(),
        }
    }

    struct StubToolRepository {
        tool_id: ToolId,
        booked_dates: Vec<DateRange>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ToolRepository for StubToolRepository {
        async fn find_all(&self, _options: ToolListOptions) -> AppResult<PaginatedToolList> {
            unimplemented!("not exercised by flow tests")
        }

        async fn find_by_id(&self, tool_id: ToolId) -> AppResult<Option<Tool>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if tool_id == self.tool_id {
                Ok(Some(sample_tool(tool_id, self.booked_dates.clone())))
            } else {
                Ok(None)
            }
        }

        async fn create(&self, _event: CreateTool) -> AppResult<ToolId> {
            unimplemented!("not exercised by flow tests")
        }

        async fn update(&self, _event: UpdateTool) -> AppResult<()> {
            unimplemented!("not exercised by flow tests")
        }

        async fn delete(&self, _event: DeleteTool) -> AppResult<()> {
            unimplemented!("not exercised by flow tests")
        }
    }

    enum SubmitBehaviour {
        Accept,
        RejectConflict,
        NetworkFailure,
        /// Signal `entered` on arrival, then hold until `release`.
        Hold,
    }

    struct StubBookingRepository {
        behaviour: SubmitBehaviour,
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    impl StubBookingRepository {
        fn new(behaviour: SubmitBehaviour) -> Self {
            Self {
                behaviour,
                calls: AtomicUsize::new(0),
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl BookingRepository for StubBookingRepository {
        async fn submit(&self, event: SubmitBooking) -> AppResult<BookingConfirmation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behaviour {
                SubmitBehaviour::RejectConflict => Err(AppError::UpstreamRejected {
                    status: 409,
                    message: "range already booked".into(),
                }),
                SubmitBehaviour::NetworkFailure => {
                    Err(AppError::MalformedUpstreamPayload("not json".into()))
                }
                SubmitBehaviour::Hold => {
                    self.entered.notify_one();
                    self.release.notified().await;
                    Ok(confirmation_for(event))
                }
                SubmitBehaviour::Accept => Ok(confirmation_for(event)),
            }
        }
    }

    fn confirmation_for(event: SubmitBooking) -> BookingConfirmation {
        let range = event.booking.range;
        BookingConfirmation {
            booking_id: BookingId::new(),
            tool_id: event.tool_id,
            range,
            total: Quote::for_range(range, 200).total,
        }
    }

    #[derive(Default)]
    struct StubDraftRepository {
        cleared: AtomicUsize,
    }

    #[async_trait]
    impl DraftRepository for StubDraftRepository {
        async fn store(&self, _client_key: &str, _draft: &BookingDraft) -> AppResult<()> {
            Ok(())
        }

        async fn load(&self, _client_key: &str) -> AppResult<Option<BookingDraft>> {
            Ok(None)
        }

        async fn clear(&self, _client_key: &str) -> AppResult<()> {
            self.cleared.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Fixture {
        flow: BookingFlow,
        tools: Arc<StubToolRepository>,
        bookings: Arc<StubBookingRepository>,
        drafts: Arc<StubDraftRepository>,
        tool_id: ToolId,
    }

    fn fixture(booked_dates: Vec<DateRange>, behaviour: SubmitBehaviour) -> Fixture {
        let tool_id = ToolId::new();
        let tools = Arc::new(StubToolRepository {
            tool_id,
            booked_dates,
            calls: AtomicUsize::new(0),
        });
        let bookings = Arc::new(StubBookingRepository::new(behaviour));
        let drafts = Arc::new(StubDraftRepository::default());
        let flow = BookingFlow::new(tools.clone(), bookings.clone(), drafts.clone());
        Fixture {
            flow,
            tools,
            bookings,
            drafts,
            tool_id,
        }
    }

    #[tokio::test]
    async fn accepted_submission_confirms_and_clears_the_draft() {
        let f = fixture(vec![], SubmitBehaviour::Accept);

        let confirmation = f
            .flow
            .submit("client-1", f.tool_id, valid_form())
            .await
            .unwrap();

        assert_eq!(confirmation.tool_id, f.tool_id);
        assert_eq!(confirmation.total, 600);
        assert_eq!(f.bookings.calls.load(Ordering::SeqCst), 1);
        assert_eq!(f.drafts.cleared.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn field_errors_never_reach_the_network() {
        let f = fixture(vec![], SubmitBehaviour::Accept);
        let form = BookingForm {
            first_name: "A".into(),
            ..valid_form()
        };

        let err = f.flow.submit("client-1", f.tool_id, form).await.unwrap_err();

        let AppError::ValidationFailed(errors) = err else {
            panic!("expected field errors");
        };
        assert!(errors.contains("firstName"));
        assert_eq!(f.tools.calls.load(Ordering::SeqCst), 0);
        assert_eq!(f.bookings.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn advisory_conflict_blocks_before_submission() {
        let f = fixture(
            vec![range("2024-06-12", "2024-06-15")],
            SubmitBehaviour::Accept,
        );

        let err = f
            .flow
            .submit("client-1", f.tool_id, valid_form())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::BookingConflict { start, end }
                if start == "2024-06-12".parse().unwrap() && end == "2024-06-15".parse().unwrap()
        ));
        assert_eq!(f.bookings.calls.load(Ordering::SeqCst), 0);
        assert_eq!(f.drafts.cleared.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_rejection_preserves_the_draft() {
        // the advisory check passed, another renter won the race upstream
        let f = fixture(vec![], SubmitBehaviour::RejectConflict);

        let err = f
            .flow
            .submit("client-1", f.tool_id, valid_form())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UpstreamRejected { status: 409, .. }));
        assert_eq!(f.bookings.calls.load(Ordering::SeqCst), 1);
        assert_eq!(f.drafts.cleared.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn network_failure_preserves_the_draft() {
        let f = fixture(vec![], SubmitBehaviour::NetworkFailure);

        let err = f
            .flow
            .submit("client-1", f.tool_id, valid_form())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MalformedUpstreamPayload(_)));
        assert_eq!(f.drafts.cleared.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let f = fixture(vec![], SubmitBehaviour::Accept);

        let err = f
            .flow
            .submit("client-1", ToolId::new(), valid_form())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn concurrent_submission_for_the_same_client_is_rejected() {
        let f = fixture(vec![], SubmitBehaviour::Hold);
        let flow = Arc::new(f.flow);

        let first = {
            let flow = flow.clone();
            let tool_id = f.tool_id;
            tokio::spawn(async move { flow.submit("client-1", tool_id, valid_form()).await })
        };
        // wait until the first submission holds the in-flight slot
        f.bookings.entered.notified().await;

        let err = flow
            .submit("client-1", f.tool_id, valid_form())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SubmissionInFlight));

        f.bookings.release.notify_one();
        let confirmation = first.await.unwrap().unwrap();
        assert_eq!(confirmation.tool_id, f.tool_id);

        // the slot frees once the first submission completes
        f.bookings.release.notify_one();
        let second = flow.submit("client-1", f.tool_id, valid_form()).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn quote_prices_a_clear_range() {
        let f = fixture(vec![], SubmitBehaviour::Accept);

        let quote = f
            .flow
            .quote(f.tool_id, range("2024-06-10", "2024-06-13"))
            .await
            .unwrap();

        assert_eq!(quote.days, 3);
        assert_eq!(quote.total, 600);
    }

    #[tokio::test]
    async fn quote_surfaces_the_conflicting_interval() {
        let f = fixture(
            vec![range("2024-06-12", "2024-06-15")],
            SubmitBehaviour::Accept,
        );

        let err = f
            .flow
            .quote(f.tool_id, range("2024-06-10", "2024-06-12"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::BookingConflict { start, .. } if start == "2024-06-12".parse().unwrap()
        ));
    }
}
