//! User lookup endpoint

use api_types::user::{User, UserQuery};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::server::ServerState;

/// Handle `GET /users?username=…`; an unknown name yields an empty list.
pub async fn find(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> Json<Vec<User>> {
    let store = state.store.read().await;
    Json(store.users_named(&query.username))
}
