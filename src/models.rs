use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Times travel over the wire as 24-hour `HH:MM` strings so their lexical
/// order matches their chronological order.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }

    pub mod option {
        use super::FORMAT;
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            let raw = Option::<String>::deserialize(deserializer)?;
            match raw.as_deref() {
                None | Some("") => Ok(None),
                Some(s) => NaiveTime::parse_from_str(s, FORMAT)
                    .map(Some)
                    .map_err(D::Error::custom),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Pitch {
    #[serde(rename = "Pitch 1")]
    Pitch1,
    #[serde(rename = "Pitch 2")]
    Pitch2,
}

impl Pitch {
    pub const ALL: [Pitch; 2] = [Pitch::Pitch1, Pitch::Pitch2];

    pub fn name(self) -> &'static str {
        match self {
            Pitch::Pitch1 => "Pitch 1",
            Pitch::Pitch2 => "Pitch 2",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SessionType {
    #[default]
    Training,
    Match,
    Fitness,
    Other,
}

/// One scheduled use of a pitch. `[start_time, end_time)` is half-open, so a
/// booking ending at 18:00 does not conflict with one starting at 18:00.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    #[schema(value_type = String, format = "date", example = "2026-09-07")]
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "17:00")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "18:30")]
    pub end_time: NaiveTime,
    pub pitch: Pitch,
    pub session_type: SessionType,
    #[serde(default)]
    pub notes: String,
    pub coach_id: u32,
}

/// A candidate booking as submitted by the client. The required fields are
/// optional here so that an incomplete form is a validation verdict rather
/// than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[schema(value_type = Option<String>, format = "date", example = "2026-09-07")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hhmm::option")]
    #[schema(value_type = Option<String>, example = "17:00")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm::option")]
    #[schema(value_type = Option<String>, example = "18:30")]
    pub end_time: Option<NaiveTime>,
    pub pitch: Option<Pitch>,
    #[serde(default)]
    pub session_type: SessionType,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Coach,
    Player,
}

/// Seed-file shape; the password never leaves the server.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// The client-visible view of a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub id: u32,
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// One calendar day in the weekly view, possibly with no bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DaySlot {
    #[schema(value_type = String, format = "date", example = "2026-09-07")]
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
}
