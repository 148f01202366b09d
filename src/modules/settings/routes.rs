use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_event_settings, current_event_settings, delete_event_settings, list_event_settings,
    update_event_settings,
};
use crate::app_state::AppState;

pub fn event_settings_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_event_settings).post(create_event_settings))
        .route("/current", get(current_event_settings))
        .route(
            "/:id",
            put(update_event_settings).delete(delete_event_settings),
        )
}
