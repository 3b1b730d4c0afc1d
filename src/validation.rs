use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::models::{Booking, BookingDraft, Pitch, SessionType};

/// Why a candidate booking was turned down. The messages are shown to the
/// user verbatim, so they read as UI copy rather than log-speak.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingRejection {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("End time must be after start time")]
    EndNotAfterStart,
    #[error("Booking date cannot be in the past")]
    DateInPast,
    #[error("This time slot overlaps with an existing booking for this pitch")]
    Overlap,
}

/// A draft that has passed every check. Id and coach assignment happen in the
/// store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pitch: Pitch,
    pub session_type: SessionType,
    pub notes: String,
}

/// Checks a candidate booking against the current snapshot. Checks run in
/// order and the first failure wins:
///
/// 1. date, start time, end time and pitch must all be present;
/// 2. the start time must be strictly before the end time;
/// 3. the date must be strictly after `now` (the date at midnight is compared
///    against the full current instant, so same-day bookings are rejected);
/// 4. the `[start, end)` interval must not overlap any existing booking on
///    the same date and pitch. Back-to-back bookings are fine.
///
/// Pure: no clock reads, no mutation, same verdict for the same inputs.
pub fn validate_booking(
    draft: &BookingDraft,
    existing: &[Booking],
    now: NaiveDateTime,
) -> Result<ValidBooking, BookingRejection> {
    let (Some(date), Some(start_time), Some(end_time), Some(pitch)) =
        (draft.date, draft.start_time, draft.end_time, draft.pitch)
    else {
        return Err(BookingRejection::MissingFields);
    };

    if start_time >= end_time {
        return Err(BookingRejection::EndNotAfterStart);
    }

    if date.and_time(NaiveTime::MIN) <= now {
        return Err(BookingRejection::DateInPast);
    }

    let conflict = existing.iter().any(|booking| {
        booking.date == date
            && booking.pitch == pitch
            && start_time < booking.end_time
            && booking.start_time < end_time
    });
    if conflict {
        return Err(BookingRejection::Overlap);
    }

    Ok(ValidBooking {
        date,
        start_time,
        end_time,
        pitch,
        session_type: draft.session_type,
        notes: draft.notes.clone(),
    })
}
