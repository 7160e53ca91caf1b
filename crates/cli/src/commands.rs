use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Sign in; the password is asked for interactively.
    Login {
        /// Email address (falls back to the configured username).
        username: Option<String>,
    },
    Logout,
    /// List all expenses, optionally filtered.
    List {
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Record a new expense.
    Add {
        description: String,
        amount: String,
        #[arg(long, short, default_value = "")]
        category: String,
    },
    Show {
        id: String,
    },
    Delete {
        id: String,
        /// Deleting from the day view; alerts carry the daily context.
        #[arg(long)]
        daily: bool,
    },
    /// Expenses of one day (default: today).
    Daily {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    Dashboard,
    #[command(subcommand)]
    Budget(BudgetCommand),
    /// Run the budget check on its own.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum BudgetCommand {
    /// Replace the budget for the current month.
    Set { amount: String },
    Show,
}
