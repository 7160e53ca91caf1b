//! Command-line client for Expensa.
//!
//! Talks to the expense API through [`client::ApiClient`], keeps the session
//! and the monthly budget in a local [`local_state::FileStore`], and checks
//! the budget after commands that touch spending.

pub mod app;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod local_state;
pub mod monitor;
pub mod notify;
pub mod session;

mod prompt;

pub use app::App;
pub use error::{AppError, Result};
