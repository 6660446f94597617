//! Events on the microsite

mod types;

use tunematch_gateway::{ApiResponse, HttpMethod};

use crate::backend::{find_by_id, record_path, Backend};
use crate::fixtures;

pub use types::*;

const EVENTS_PATH: &str = "/api/v1/events";

/// Provider for events and event registration
#[derive(Debug, Clone)]
pub struct EventsApi {
    backend: Backend,
}

impl EventsApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn get_events(&self) -> ApiResponse<Vec<Event>> {
        if self.backend.is_mock() {
            return ApiResponse::ok(fixtures::events());
        }
        self.backend.fetch_list(EVENTS_PATH, normalize_event).await
    }

    /// A single event, `data: None` when the id is unknown
    pub async fn get_event_by_id(&self, id: &str) -> ApiResponse<Event> {
        if self.backend.is_mock() {
            return ApiResponse::from_option(find_by_id(fixtures::events(), id, |e| &e.id));
        }
        self.backend
            .fetch_record(EVENTS_PATH, id, normalize_event)
            .await
    }

    /// Register the signed-in user; returns the event with its new attendee list
    pub async fn register_for_event(&self, id: &str) -> ApiResponse<Event> {
        if self.backend.is_mock() {
            let event = find_by_id(fixtures::events(), id, |e| &e.id).map(|mut event| {
                if !event.is_attending(fixtures::CURRENT_USER_ID) {
                    event.attendees.push(fixtures::CURRENT_USER_ID.to_string());
                }
                event
            });
            return ApiResponse::from_option(event);
        }
        self.registration(HttpMethod::POST, id).await
    }

    /// Withdraw the signed-in user's registration
    pub async fn unregister_from_event(&self, id: &str) -> ApiResponse<Event> {
        if self.backend.is_mock() {
            let event = find_by_id(fixtures::events(), id, |e| &e.id).map(|mut event| {
                event.attendees.retain(|a| a != fixtures::CURRENT_USER_ID);
                event
            });
            return ApiResponse::from_option(event);
        }
        self.registration(HttpMethod::DELETE, id).await
    }

    async fn registration(&self, method: HttpMethod, id: &str) -> ApiResponse<Event> {
        let path = match record_path(EVENTS_PATH, id, "/register") {
            Ok(path) => path,
            Err(err) => return ApiResponse::err(err),
        };
        self.backend
            .gateway()
            .request::<Option<EventDto>, ()>(method, &path, None)
            .await
            .flatten()
            .map(normalize_event)
    }
}
