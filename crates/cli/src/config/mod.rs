use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::{
    commands::Command,
    error::{AppError, Result},
    local_state,
};

const DEFAULT_CONFIG_PATH: &str = "config/cli.toml";

/// Where budget alerts go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    Terminal,
    Log,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub username: String,
    pub state_path: String,
    pub timezone: String,
    pub notifications: bool,
    pub notifier: NotifierKind,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            username: String::new(),
            state_path: local_state::DEFAULT_STATE_PATH.to_string(),
            timezone: "UTC".to_string(),
            notifications: true,
            notifier: NotifierKind::Terminal,
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expensa_cli", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3000).
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Override the state file path.
    #[arg(long, global = true)]
    state_path: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long, global = true)]
    timezone: Option<String>,
    /// Log alerts instead of printing them.
    #[arg(long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

impl AppConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))
    }
}

pub fn load() -> Result<(AppConfig, Command)> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("EXPENSA_CLI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(state_path) = args.state_path {
        settings.state_path = state_path;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if args.quiet {
        settings.notifier = NotifierKind::Log;
    }

    Ok((settings, args.command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::BudgetCommand;

    #[test]
    fn global_flags_follow_the_subcommand() {
        let args = Args::try_parse_from([
            "expensa_cli",
            "budget",
            "set",
            "1000",
            "--timezone",
            "Africa/Kigali",
        ])
        .unwrap();
        assert_eq!(args.timezone.as_deref(), Some("Africa/Kigali"));
        assert_eq!(
            args.command,
            Command::Budget(BudgetCommand::Set {
                amount: "1000".to_string()
            })
        );
    }

    #[test]
    fn delete_accepts_daily_flag() {
        let args = Args::try_parse_from(["expensa_cli", "delete", "abc", "--daily"]).unwrap();
        assert_eq!(
            args.command,
            Command::Delete {
                id: "abc".to_string(),
                daily: true
            }
        );
    }

    #[test]
    fn daily_date_is_parsed() {
        let args = Args::try_parse_from(["expensa_cli", "daily", "--date", "2025-06-15"]).unwrap();
        let Command::Daily { date } = args.command else {
            panic!("expected daily");
        };
        assert_eq!(date.unwrap().to_string(), "2025-06-15");
    }

    #[test]
    fn defaults_point_at_local_server() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.state_path, local_state::DEFAULT_STATE_PATH);
        assert!(config.notifications);
        assert_eq!(config.tz().unwrap(), Tz::UTC);
    }

    #[test]
    fn unknown_timezone_is_reported() {
        let config = AppConfig {
            timezone: "Mars/Olympus".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.tz(), Err(AppError::InvalidTimezone(_))));
    }
}
