//! Event view-model and its backend wire shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

/// Kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Concert,
    Festival,
    Club,
    Meetup,
    Workshop,
    Other,
}

impl EventCategory {
    /// Lenient parse; anything unrecognized is `Other`
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "concert" | "gig" | "live" => EventCategory::Concert,
            "festival" => EventCategory::Festival,
            "club" | "party" | "clubnight" => EventCategory::Club,
            "meetup" | "meet-up" => EventCategory::Meetup,
            "workshop" => EventCategory::Workshop,
            _ => EventCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Concert => "concert",
            EventCategory::Festival => "festival",
            EventCategory::Club => "club",
            EventCategory::Meetup => "meetup",
            EventCategory::Workshop => "workshop",
            EventCategory::Other => "other",
        }
    }
}

/// An event on the microsite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: Option<DateTime<Utc>>,
    pub venue: String,
    pub location: String,
    pub category: EventCategory,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub attendees: Vec<String>,
    pub max_attendees: Option<u32>,
    pub tags: Vec<String>,
}

impl Event {
    pub fn is_attending(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|id| id == user_id)
    }

    /// Whether another attendee still fits
    pub fn has_capacity(&self) -> bool {
        self.max_attendees
            .map_or(true, |max| self.attendees.len() < max as usize)
    }
}

/// Event record as the backend sends it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "starts_at", alias = "startsAt")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "image_url", alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "wire::id_list", alias = "attendee_ids")]
    pub attendees: Vec<String>,
    #[serde(default, alias = "maxAttendees", alias = "capacity")]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Map a backend event record onto the view-model
pub fn normalize_event(dto: EventDto) -> Event {
    Event {
        id: dto.id,
        title: dto.title.unwrap_or_default(),
        description: dto.description.unwrap_or_default(),
        date: dto.date,
        venue: dto.venue.unwrap_or_default(),
        location: dto.location.unwrap_or_default(),
        category: dto
            .category
            .as_deref()
            .map_or(EventCategory::Other, EventCategory::from_wire),
        image: dto.image,
        price: dto.price,
        attendees: dto.attendees,
        max_attendees: dto.max_attendees,
        tags: dto.tags.unwrap_or_default(),
    }
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: Some(event.title.clone()),
            description: Some(event.description.clone()),
            date: event.date,
            venue: Some(event.venue.clone()),
            location: Some(event.location.clone()),
            category: Some(event.category.as_str().to_string()),
            image: event.image.clone(),
            price: event.price,
            attendees: event.attendees.clone(),
            max_attendees: event.max_attendees,
            tags: Some(event.tags.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_category_is_other() {
        let dto: EventDto =
            serde_json::from_value(json!({ "id": 3, "category": "silent-disco" })).unwrap();
        let event = normalize_event(dto);
        assert_eq!(event.category, EventCategory::Other);
        assert!(event.attendees.is_empty());
        assert_eq!(event.title, "");
    }

    #[test]
    fn test_attendee_ids_accept_numbers() {
        let dto: EventDto = serde_json::from_value(json!({
            "id": "9",
            "name": "Warehouse Night",
            "category": "Party",
            "attendee_ids": [1, 2, "3"],
            "capacity": 3,
            "startsAt": "2025-03-01T21:00:00Z"
        }))
        .unwrap();
        let event = normalize_event(dto);

        assert_eq!(event.title, "Warehouse Night");
        assert_eq!(event.category, EventCategory::Club);
        assert_eq!(event.attendees, vec!["1", "2", "3"]);
        assert!(!event.has_capacity());
        assert!(event.is_attending("2"));
        assert!(event.date.is_some());
    }

    #[test]
    fn test_normalize_is_idempotent_through_wire_shape() {
        let dto: EventDto = serde_json::from_value(json!({
            "id": "1",
            "title": "Open Air",
            "category": "festival",
            "price": 39.5,
            "attendees": ["1"],
            "tags": ["outdoor"]
        }))
        .unwrap();
        let once = normalize_event(dto);
        let wire = serde_json::to_value(EventDto::from(&once)).unwrap();
        let twice = normalize_event(serde_json::from_value(wire).unwrap());
        assert_eq!(once, twice);
    }
}
