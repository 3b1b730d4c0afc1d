pub mod auth;
pub mod calendar;
pub mod error;
pub mod handlers;
pub mod ical;
pub mod models;
pub mod openapi;
pub mod settings;
pub mod store;
pub mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{create_booking, get_week, get_week_ical, healthz_live, healthz_ready, login, root};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::Sessions;
use crate::ical::ICalExporter;
use crate::openapi::ApiDoc;
use crate::settings::Settings;
use crate::store::{BookingStore, UserDirectory};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<BookingStore>,
    pub users: Arc<UserDirectory>,
    pub sessions: Arc<Sessions>,
    pub exporter: Arc<ICalExporter>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let store = match BookingStore::from_file(&settings.bookings_seed) {
        Ok(store) => store,
        Err(err) => {
            warn!("No booking seed loaded ({err}); starting with an empty schedule");
            BookingStore::new(Vec::new())
        }
    };
    let users = UserDirectory::from_file(&settings.users_seed)?;

    let state = AppState {
        settings: settings.clone(),
        store: Arc::new(store),
        users: Arc::new(users),
        sessions: Arc::new(Sessions::new()),
        exporter: Arc::new(ICalExporter::new(settings.calendar_name.clone())),
    };

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting Pitch Booking API on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/auth/login", post(login))
        .route("/bookings/week", get(get_week))
        .route("/bookings/week.ical", get(get_week_ical))
        .route("/bookings", post(create_booking))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}
