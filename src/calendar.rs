use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Booking, DaySlot, Pitch};

/// Monday on or before the given date (ISO week, week starts Monday).
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(reference.weekday().num_days_from_monday() as i64)
}

pub fn previous_week(reference: NaiveDate) -> NaiveDate {
    reference - Duration::weeks(1)
}

pub fn next_week(reference: NaiveDate) -> NaiveDate {
    reference + Duration::weeks(1)
}

/// Partitions bookings into the 7-day window containing `reference`.
///
/// Always returns exactly 7 slots, Monday through Sunday in ascending order.
/// Bookings outside the window or not matching the pitch filter (`None`
/// means all pitches) are dropped; within a day, bookings keep the order
/// they had in the input. Days without bookings get an empty list.
pub fn build_week(reference: NaiveDate, bookings: &[Booking], pitch: Option<Pitch>) -> Vec<DaySlot> {
    let start = week_start(reference);
    let end = start + Duration::days(6);

    let mut days: Vec<DaySlot> = (0..7)
        .map(|i| DaySlot {
            date: start + Duration::days(i),
            bookings: Vec::new(),
        })
        .collect();

    for booking in bookings {
        if booking.date < start || booking.date > end {
            continue;
        }
        if pitch.is_some_and(|p| p != booking.pitch) {
            continue;
        }
        let offset = (booking.date - start).num_days() as usize;
        days[offset].bookings.push(booking.clone());
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionType;
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(day: &str, start: &str, pitch: Pitch) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            date: date(day),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap() + Duration::hours(1),
            pitch,
            session_type: SessionType::Training,
            notes: String::new(),
            coach_id: 1,
        }
    }

    #[test]
    fn week_starts_on_monday() {
        // 2026-09-02 is a Wednesday; the week runs 08-31 to 09-06.
        assert_eq!(week_start(date("2026-09-02")), date("2026-08-31"));
        assert_eq!(week_start(date("2026-08-31")), date("2026-08-31"));
        assert_eq!(week_start(date("2026-09-06")), date("2026-08-31"));
    }

    #[test]
    fn always_seven_days_even_with_no_bookings() {
        let week = build_week(date("2026-09-02"), &[], None);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date("2026-08-31"));
        assert_eq!(week[6].date, date("2026-09-06"));
        assert!(week.iter().all(|slot| slot.bookings.is_empty()));
    }

    #[test]
    fn groups_bookings_under_their_day() {
        let bookings = [
            booking("2026-08-31", "17:00", Pitch::Pitch1),
            booking("2026-09-02", "10:00", Pitch::Pitch2),
            booking("2026-09-02", "12:00", Pitch::Pitch1),
        ];
        let week = build_week(date("2026-09-02"), &bookings, None);
        assert_eq!(week[0].bookings.len(), 1);
        assert_eq!(week[2].bookings.len(), 2);
        // Insertion order is preserved within a day.
        assert_eq!(week[2].bookings[0].pitch, Pitch::Pitch2);
        assert_eq!(week[2].bookings[1].pitch, Pitch::Pitch1);
    }

    #[test]
    fn excludes_bookings_outside_the_window() {
        // Reference is a Wednesday; one booking on the Monday before the
        // window, one on the Monday after it.
        let before = booking("2026-08-24", "17:00", Pitch::Pitch1);
        let after = booking("2026-09-07", "17:00", Pitch::Pitch1);
        let bookings = [before.clone(), after.clone()];

        let current = build_week(date("2026-09-02"), &bookings, None);
        assert!(current.iter().all(|slot| slot.bookings.is_empty()));

        let last = build_week(previous_week(date("2026-09-02")), &bookings, None);
        assert_eq!(last[0].bookings, vec![before]);

        let next = build_week(next_week(date("2026-09-02")), &bookings, None);
        assert_eq!(next[0].bookings, vec![after]);
    }

    #[test]
    fn pitch_filter_keeps_only_matching_bookings() {
        let bookings = [
            booking("2026-09-01", "17:00", Pitch::Pitch1),
            booking("2026-09-01", "18:00", Pitch::Pitch2),
        ];
        let filtered = build_week(date("2026-09-02"), &bookings, Some(Pitch::Pitch2));
        assert_eq!(filtered[1].bookings.len(), 1);
        assert_eq!(filtered[1].bookings[0].pitch, Pitch::Pitch2);
    }

    #[test]
    fn per_pitch_windows_partition_the_unfiltered_window() {
        let bookings = [
            booking("2026-08-31", "09:00", Pitch::Pitch1),
            booking("2026-09-01", "17:00", Pitch::Pitch2),
            booking("2026-09-01", "18:00", Pitch::Pitch1),
            booking("2026-09-06", "11:00", Pitch::Pitch2),
        ];
        let all = build_week(date("2026-09-02"), &bookings, None);
        let by_pitch: Vec<Vec<DaySlot>> = Pitch::ALL
            .iter()
            .map(|p| build_week(date("2026-09-02"), &bookings, Some(*p)))
            .collect();

        for (i, slot) in all.iter().enumerate() {
            let combined: usize = by_pitch.iter().map(|w| w[i].bookings.len()).sum();
            assert_eq!(slot.bookings.len(), combined);
            for b in &slot.bookings {
                assert!(by_pitch.iter().any(|w| w[i].bookings.contains(b)));
            }
        }
    }

    #[test]
    fn builder_is_idempotent() {
        let bookings = [booking("2026-09-01", "17:00", Pitch::Pitch1)];
        let first = build_week(date("2026-09-02"), &bookings, None);
        let second = build_week(date("2026-09-02"), &bookings, None);
        assert_eq!(first, second);
    }
}
