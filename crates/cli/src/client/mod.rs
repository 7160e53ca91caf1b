//! HTTP client for the remote expense API.

use std::future::Future;

use api_types::{
    ErrorBody,
    expense::{Expense, ExpenseNew},
    user::{User, UserQuery},
};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base_url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// The remote expense collection plus the user lookup used at login.
///
/// Every call either reaches the API or fails with an [`ApiError`]; nothing is
/// cached.
pub trait ExpenseStore {
    fn list(&self) -> impl Future<Output = Result<Vec<Expense>, ApiError>> + Send;

    fn create(
        &self,
        expense: &ExpenseNew,
    ) -> impl Future<Output = Result<Expense, ApiError>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<Expense, ApiError>> + Send;

    /// Deletes a record and returns it as it was.
    fn delete(&self, id: &str) -> impl Future<Output = Result<Expense, ApiError>> + Send;

    fn users_named(&self, username: &str)
    -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        Ok(Self {
            base_url: base_url.to_string(),
            http: reqwest::Client::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<T>().await?);
        }

        let message = match res.json::<ErrorBody>().await {
            Ok(err) => err.error,
            Err(_) => "server error".to_string(),
        };
        Err(ApiError::Server { status, message })
    }
}

/// Keeps every entry that reads as an expense record; anything else in the
/// collection is logged and skipped.
fn decode_records(records: Vec<serde_json::Value>) -> Vec<Expense> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Expense>(record) {
            Ok(expense) => Some(expense),
            Err(err) => {
                tracing::warn!("skipping unreadable expense record: {err}");
                None
            }
        })
        .collect()
}

impl ExpenseStore for ApiClient {
    async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        let res = self.http.get(self.url("/expenses")).send().await?;
        let records: Vec<serde_json::Value> = Self::read_json(res).await?;
        Ok(decode_records(records))
    }

    async fn create(&self, expense: &ExpenseNew) -> Result<Expense, ApiError> {
        let res = self
            .http
            .post(self.url("/expenses"))
            .json(expense)
            .send()
            .await?;
        Self::read_json(res).await
    }

    async fn get(&self, id: &str) -> Result<Expense, ApiError> {
        let res = self
            .http
            .get(self.url(&format!("/expenses/{id}")))
            .send()
            .await?;
        Self::read_json(res).await
    }

    async fn delete(&self, id: &str) -> Result<Expense, ApiError> {
        let res = self
            .http
            .delete(self.url(&format!("/expenses/{id}")))
            .send()
            .await?;
        Self::read_json(res).await
    }

    async fn users_named(&self, username: &str) -> Result<Vec<User>, ApiError> {
        let res = self
            .http
            .get(self.url("/users"))
            .query(&UserQuery {
                username: username.to_string(),
            })
            .send()
            .await?;
        Self::read_json(res).await
    }
}
