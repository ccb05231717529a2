use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod notify;
pub mod repo;

pub fn router() -> Router<AppState> {
    handlers::booking_routes()
}
