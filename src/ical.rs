use icalendar::{Calendar, Component, Event, EventLike};

use crate::models::{Booking, SessionType};

/// Renders a set of bookings as an iCal feed so the weekly schedule can be
/// subscribed to from a phone calendar.
#[derive(Clone, Default)]
pub struct ICalExporter {
    calendar_name: String,
}

impl ICalExporter {
    pub fn new(calendar_name: String) -> Self {
        Self { calendar_name }
    }

    pub fn generate(&self, bookings: &[Booking]) -> Vec<u8> {
        if bookings.is_empty() {
            return Vec::new();
        }

        let mut calendar = Calendar::new();
        calendar.name(&self.calendar_name);

        for booking in bookings {
            let summary = match booking.session_type {
                SessionType::Training => "Training",
                SessionType::Match => "Match",
                SessionType::Fitness => "Fitness",
                SessionType::Other => "Session",
            };

            let mut event = Event::new();
            event.summary(&format!("{} on {}", summary, booking.pitch.name()));
            event.starts(booking.date.and_time(booking.start_time));
            event.ends(booking.date.and_time(booking.end_time));
            event.location(booking.pitch.name());
            if !booking.notes.is_empty() {
                event.description(&booking.notes);
            }
            event.uid(&format!("{}-pitch-booking", booking.id));
            calendar.push(event);
        }

        calendar.to_string().into_bytes()
    }
}
