use std::path::Path;
use std::sync::RwLock;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::{Booking, User};
use crate::validation::ValidBooking;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory booking collection, seeded from a JSON file. The core never
/// sees this type: handlers take a snapshot, run the pure functions over it,
/// and only on an accepted verdict come back here to append.
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingStore {
    pub fn new(seed: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(seed),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        let bookings: Vec<Booking> = serde_json::from_str(&raw)?;
        info!("Loaded {} seed bookings", bookings.len());
        Ok(Self::new(bookings))
    }

    /// Owned copy of the current collection, immutable for the caller.
    pub fn snapshot(&self) -> Vec<Booking> {
        self.bookings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Persists an accepted booking, assigning its id and owner.
    pub fn add(&self, valid: ValidBooking, coach_id: u32) -> Booking {
        let booking = Booking {
            id: Uuid::new_v4(),
            date: valid.date,
            start_time: valid.start_time,
            end_time: valid.end_time,
            pitch: valid.pitch,
            session_type: valid.session_type,
            notes: valid.notes,
            coach_id,
        };
        self.bookings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(booking.clone());
        booking
    }
}

/// Read-only user list from the seed file. Users are created externally;
/// this service only looks them up.
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        let users: Vec<User> = serde_json::from_str(&raw)?;
        info!("Loaded {} seed users", users.len());
        Ok(Self::new(users))
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pitch, Role, SessionType};
    use chrono::{NaiveDate, NaiveTime};

    fn valid() -> ValidBooking {
        ValidBooking {
            date: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            start_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            pitch: Pitch::Pitch1,
            session_type: SessionType::Training,
            notes: "friendly".to_string(),
        }
    }

    #[test]
    fn add_assigns_id_and_coach() {
        let store = BookingStore::new(Vec::new());
        let created = store.add(valid(), 3);
        assert_eq!(created.coach_id, 3);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0], created);

        let second = store.add(valid(), 3);
        assert_ne!(second.id, created.id);
    }

    #[test]
    fn snapshot_is_detached_from_the_store() {
        let store = BookingStore::new(Vec::new());
        let before = store.snapshot();
        store.add(valid(), 1);
        assert!(before.is_empty());
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn authenticate_needs_both_username_and_password() {
        let directory = UserDirectory::new(vec![User {
            id: 1,
            username: "coach".to_string(),
            password: "pass123".to_string(),
            name: "Sam Kerr".to_string(),
            role: Role::Coach,
        }]);
        assert!(directory.authenticate("coach", "pass123").is_some());
        assert!(directory.authenticate("coach", "wrong").is_none());
        assert!(directory.authenticate("nobody", "pass123").is_none());
    }
}
