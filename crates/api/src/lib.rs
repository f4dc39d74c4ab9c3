pub mod error;
pub mod extractors;
pub mod routes;
pub mod seed;
pub mod state;
pub mod ws;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let student_routes = Router::new()
        .route("/", get(routes::student::list))
        .route("/", post(routes::student::create))
        .route("/{student_id}", get(routes::student::get))
        .route("/{student_id}", put(routes::student::update))
        .route("/{student_id}", delete(routes::student::delete));

    let room_routes = Router::new()
        .route("/", get(routes::room::list))
        .route("/", post(routes::room::create))
        .route("/vacate", post(routes::room::vacate))
        .route("/{room_id}", get(routes::room::get))
        .route("/{room_id}", put(routes::room::update))
        .route("/{room_id}", delete(routes::room::delete))
        .route("/{room_id}/allocate", post(routes::room::allocate));

    let complaint_routes = Router::new()
        .route("/", get(routes::complaint::list))
        .route("/", post(routes::complaint::file))
        .route(
            "/{complaint_id}/status",
            put(routes::complaint::update_status),
        );

    let leave_routes = Router::new()
        .route("/", get(routes::leave::list))
        .route("/", post(routes::leave::submit))
        .route("/statistics", get(routes::leave::statistics))
        .route("/export", post(routes::leave::export))
        .route("/{leave_id}/recommend", post(routes::leave::recommend))
        .route("/{leave_id}/approve", post(routes::leave::approve))
        .route("/{leave_id}/reject", post(routes::leave::reject));

    let fee_routes = Router::new()
        .route("/", get(routes::fee::list))
        .route("/", post(routes::fee::create))
        .route("/mark-overdue", post(routes::fee::mark_overdue))
        .route("/{fee_id}/payment", post(routes::fee::record_payment));

    let staff_routes = Router::new()
        .route("/", get(routes::staff::list))
        .route("/", post(routes::staff::create))
        .route("/{staff_id}", put(routes::staff::update))
        .route("/{staff_id}", delete(routes::staff::delete));

    let health_record_routes = Router::new()
        .route(
            "/student/{student_id}",
            get(routes::health_record::get_for_student),
        )
        .route("/student/{student_id}", put(routes::health_record::upsert));

    let food_routes = Router::new()
        .route("/", get(routes::food_feedback::list))
        .route("/", post(routes::food_feedback::submit))
        .route("/summary", get(routes::food_feedback::summary));

    let notification_routes = Router::new()
        .route("/", get(routes::notification::list))
        .route("/announce", post(routes::notification::announce))
        .route(
            "/{notification_id}/read",
            put(routes::notification::mark_read),
        )
        .route("/{notification_id}", delete(routes::notification::dismiss));

    let api = Router::new()
        .nest("/student", student_routes)
        .nest("/room", room_routes)
        .nest("/complaint", complaint_routes)
        .nest("/leave", leave_routes)
        .nest("/fee", fee_routes)
        .nest("/staff", staff_routes)
        .nest("/health-record", health_record_routes)
        .nest("/food-feedback", food_routes)
        .nest("/notification", notification_routes);

    let health = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .merge(health)
        .route("/ws", get(ws::handler::ws_upgrade))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
