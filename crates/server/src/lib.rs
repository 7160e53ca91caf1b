//! In-memory stand-in for the remote expense API.
//!
//! It serves the same routes the client consumes (`/users`, `/expenses`,
//! `/expenses/{id}`) so the client can be exercised end to end without the
//! hosted service. Nothing is persisted.

use axum::{Json, http::StatusCode, response::IntoResponse};

use api_types::ErrorBody;
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};
pub use store::Store;

mod expenses;
mod server;
mod store;
mod users;

pub enum ServerError {
    NotFound(String),
    Generic(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::NotFound(id) => (StatusCode::NOT_FOUND, format!("\"{id}\" not found")),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
