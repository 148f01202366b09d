use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    delete_participant, get_participant, list_participants, register_participant,
    update_participant,
};
use crate::app_state::AppState;

pub fn participant_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register_participant).get(list_participants))
        .route(
            "/:id",
            get(get_participant)
                .put(update_participant)
                .delete(delete_participant),
        )
}
