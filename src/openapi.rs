use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::{LoginRequest, LoginResponse, WeekView};
use crate::models::{Booking, BookingDraft, DaySlot, Pitch, Role, SessionType, UserInfo};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .build(),
            ),
        );
        components.add_security_scheme(
            "query_token",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new("token"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::login,
        crate::handlers::get_week,
        crate::handlers::get_week_ical,
        crate::handlers::create_booking
    ),
    components(schemas(
        Booking,
        BookingDraft,
        DaySlot,
        Pitch,
        SessionType,
        Role,
        UserInfo,
        LoginRequest,
        LoginResponse,
        WeekView
    )),
    tags(
        (name = "auth", description = "Login and session tokens"),
        (name = "bookings", description = "Weekly calendar and booking operations")
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;
