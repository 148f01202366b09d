use axum::{routing::get, Router};

use super::handlers::{create_jamaat, create_region, list_jamaats, list_regions};
use crate::app_state::AppState;

pub fn region_routes() -> Router<AppState> {
    Router::new().route("/", get(list_regions).post(create_region))
}

pub fn jamaat_routes() -> Router<AppState> {
    Router::new().route("/", get(list_jamaats).post(create_jamaat))
}
