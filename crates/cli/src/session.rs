//! Login state: the id of the signed-in user, kept in the `userId` slot.

use engine::sanitize;

use crate::{
    client::ExpenseStore,
    error::{AppError, Result},
    local_state::{KeyValueStore, USER_ID_KEY},
};

/// Checks the credentials against `GET /users` and stores the user id.
///
/// The API has no auth endpoint; the first user with a matching name is
/// compared in plain text.
pub async fn login<A, K>(api: &A, kv: &K, username: &str, password: &str) -> Result<String>
where
    A: ExpenseStore,
    K: KeyValueStore,
{
    let username = username.trim();
    sanitize::validate_credentials(username, password)?;

    let users = api.users_named(username).await?;
    let user = match users.into_iter().next() {
        Some(user) if user.password == password => user,
        _ => {
            tracing::info!(username, "login rejected");
            return Err(AppError::InvalidCredentials);
        }
    };

    kv.set(USER_ID_KEY, user.id.clone()).await?;
    tracing::info!(username, user_id = %user.id, "logged in");
    Ok(user.id)
}

pub async fn logout<K: KeyValueStore>(kv: &K) -> Result<()> {
    kv.remove(USER_ID_KEY).await?;
    Ok(())
}

pub async fn current_user<K: KeyValueStore>(kv: &K) -> Result<Option<String>> {
    Ok(kv.get(USER_ID_KEY).await?.filter(|id| !id.is_empty()))
}

pub async fn require_user<K: KeyValueStore>(kv: &K) -> Result<String> {
    current_user(kv).await?.ok_or(AppError::NotLoggedIn)
}
