//! Command handlers.
//!
//! Each handler writes its human-readable result to `out` and, where the
//! command can change spending or shows it, finishes with a budget check.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use engine::{
    Budget, Expense, ExpenseInput, Money, Period,
    alert::CURRENCY_LABEL,
    category, expense, sanitize, search, spending,
};

use crate::{
    client::ExpenseStore,
    commands::{BudgetCommand, Command},
    error::{AppError, Result},
    local_state::{self, KeyValueStore},
    monitor::{self, CONTEXT_ALL, CONTEXT_CREATE_EXPENSE, CONTEXT_DAILY, CONTEXT_GENERAL},
    notify::Notifier,
    prompt, session,
};

pub struct App<A, K, N> {
    api: A,
    kv: K,
    notifier: N,
    timezone: Tz,
    default_username: String,
}

impl<A, K, N> App<A, K, N>
where
    A: ExpenseStore,
    K: KeyValueStore,
    N: Notifier,
{
    pub fn new(api: A, kv: K, notifier: N, timezone: Tz) -> Self {
        Self {
            api,
            kv,
            notifier,
            timezone,
            default_username: String::new(),
        }
    }

    pub fn with_default_username(mut self, username: impl Into<String>) -> Self {
        self.default_username = username.into();
        self
    }

    pub async fn run(
        &self,
        command: Command,
        now: DateTime<Utc>,
        out: &mut impl Write,
    ) -> Result<()> {
        if !matches!(command, Command::Login { .. }) {
            session::require_user(&self.kv).await?;
        }

        match command {
            Command::Login { username } => {
                let username = username.unwrap_or_else(|| self.default_username.clone());
                sanitize::validate_username(&username)?;
                let password = prompt::read_password("Password: ")?;
                self.login(&username, &password, out).await
            }
            Command::Logout => self.logout(out).await,
            Command::List { search } => self.list(search.as_deref().unwrap_or(""), out).await,
            Command::Add {
                description,
                amount,
                category,
            } => self.add(&description, &amount, &category, now, out).await,
            Command::Show { id } => self.show(&id, out).await,
            Command::Delete { id, daily } => {
                let context = if daily { CONTEXT_DAILY } else { CONTEXT_ALL };
                self.delete(&id, context, now, out).await
            }
            Command::Daily { date } => self.daily(date, now, out).await,
            Command::Dashboard => self.dashboard(now, out).await,
            Command::Budget(BudgetCommand::Set { amount }) => {
                self.set_budget(&amount, now, out).await
            }
            Command::Budget(BudgetCommand::Show) => self.show_budget(now, out).await,
            Command::Check => self.check(now).await,
        }
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
        out: &mut impl Write,
    ) -> Result<()> {
        session::login(&self.api, &self.kv, username, password).await?;
        writeln!(out, "Logged in as {}.", username.trim())?;
        Ok(())
    }

    pub async fn logout(&self, out: &mut impl Write) -> Result<()> {
        session::logout(&self.kv).await?;
        writeln!(out, "Logged out.")?;
        Ok(())
    }

    pub async fn list(&self, query: &str, out: &mut impl Write) -> Result<()> {
        let expenses = self.api.list().await?;
        let matching = search::filter(&expenses, query);
        if matching.is_empty() {
            writeln!(out, "No expenses found.")?;
            return Ok(());
        }
        for expense in matching {
            self.write_row(out, expense)?;
        }
        Ok(())
    }

    pub async fn add(
        &self,
        description: &str,
        amount: &str,
        category: &str,
        now: DateTime<Utc>,
        out: &mut impl Write,
    ) -> Result<()> {
        let request = ExpenseInput::parse(description, amount, category)?.into_request(&now);
        let created = self.api.create(&request).await?;
        tracing::info!(id = %created.id, "expense created");
        writeln!(out, "Added expense {}.", created.id)?;

        self.check_budget(CONTEXT_CREATE_EXPENSE, &now).await;
        Ok(())
    }

    pub async fn show(&self, id: &str, out: &mut impl Write) -> Result<()> {
        let expense = self.api.get(id).await?;
        writeln!(out, "Id:          {}", expense.id)?;
        writeln!(
            out,
            "Description: {}",
            expense.description.as_deref().unwrap_or_default()
        )?;
        writeln!(
            out,
            "Amount:      {CURRENCY_LABEL} {}",
            expense::coerce_amount(&expense)
        )?;
        writeln!(out, "Category:    {}", category::category_name(&expense))?;
        writeln!(out, "Date:        {}", self.date_of(&expense))?;
        Ok(())
    }

    pub async fn delete(
        &self,
        id: &str,
        context: &str,
        now: DateTime<Utc>,
        out: &mut impl Write,
    ) -> Result<()> {
        let removed = self.api.delete(id).await?;
        tracing::info!(id = %removed.id, "expense deleted");
        writeln!(out, "Deleted expense {}.", removed.id)?;

        self.check_budget(context, &now).await;
        Ok(())
    }

    pub async fn daily(
        &self,
        date: Option<NaiveDate>,
        now: DateTime<Utc>,
        out: &mut impl Write,
    ) -> Result<()> {
        let date = date.unwrap_or_else(|| now.with_timezone(&self.timezone).date_naive());
        let expenses = self.api.list().await?;
        let today = spending::on_date(&expenses, date, &self.timezone);

        if today.is_empty() {
            writeln!(out, "No expenses on {date}.")?;
        } else {
            for expense in &today {
                self.write_row(out, expense)?;
            }
            let total: Money = today.iter().map(|e| expense::coerce_amount(e)).sum();
            writeln!(out, "Total for {date}: {CURRENCY_LABEL} {total}")?;
        }

        self.check_budget(CONTEXT_DAILY, &now).await;
        Ok(())
    }

    pub async fn dashboard(&self, now: DateTime<Utc>, out: &mut impl Write) -> Result<()> {
        let period = Period::current(&now);
        let expenses = self.api.list().await?;
        let spend = spending::monthly_spending(&expenses, &period);

        writeln!(out, "Spending for {period}: {CURRENCY_LABEL} {spend}")?;
        for total in category::breakdown(spending::in_period(&expenses, &period)) {
            writeln!(out, "  {:<20} {CURRENCY_LABEL} {}", total.name, total.total)?;
        }

        match self.active_budget(&now).await {
            Some(budget) => {
                let pct = spending::percentage(spend, budget.amount).unwrap_or_default();
                writeln!(out, "Budget: {CURRENCY_LABEL} {} ({pct:.1}% used)", budget.amount)?;
            }
            None => writeln!(out, "No budget set for {period}.")?,
        }

        self.check_budget(CONTEXT_GENERAL, &now).await;
        Ok(())
    }

    pub async fn set_budget(
        &self,
        amount: &str,
        now: DateTime<Utc>,
        out: &mut impl Write,
    ) -> Result<()> {
        let amount = sanitize::sanitize_number(amount).ok_or_else(|| {
            AppError::from(engine::EngineError::Validation(
                "Enter a valid positive amount".to_string(),
            ))
        })?;
        let budget = Budget::for_current_period(amount, &now)?;
        local_state::save_budget(&self.kv, &budget).await?;
        tracing::info!(amount = %budget.amount, period = %budget.period, "budget saved");
        writeln!(
            out,
            "Budget set to {CURRENCY_LABEL} {} for {}.",
            budget.amount, budget.period
        )?;

        self.check_budget(CONTEXT_GENERAL, &now).await;
        Ok(())
    }

    pub async fn show_budget(&self, now: DateTime<Utc>, out: &mut impl Write) -> Result<()> {
        match self.active_budget(&now).await {
            Some(budget) => writeln!(
                out,
                "Budget for {}: {CURRENCY_LABEL} {}",
                budget.period, budget.amount
            )?,
            None => writeln!(out, "No budget set for {}.", Period::current(&now))?,
        }
        Ok(())
    }

    pub async fn check(&self, now: DateTime<Utc>) -> Result<()> {
        self.check_budget(CONTEXT_GENERAL, &now).await;
        Ok(())
    }

    async fn check_budget(&self, context: &str, now: &DateTime<Utc>) {
        monitor::evaluate_and_notify(context, now, &self.kv, &self.api, &self.notifier).await;
    }

    async fn active_budget(&self, now: &DateTime<Utc>) -> Option<Budget> {
        match local_state::load_budget(&self.kv).await {
            Ok(budget) => budget.and_then(|budget| budget.active(now)),
            Err(err) => {
                tracing::error!("failed to read budget: {err}");
                None
            }
        }
    }

    fn date_of(&self, expense: &Expense) -> String {
        expense::created_at(expense)
            .map(|at| at.with_timezone(&self.timezone).format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    fn write_row(&self, out: &mut impl Write, expense: &Expense) -> Result<()> {
        writeln!(
            out,
            "{}  {}  {:<24} {:<14} {CURRENCY_LABEL} {}",
            expense.id,
            self.date_of(expense),
            expense.description.as_deref().unwrap_or_default(),
            category::category_name(expense),
            expense::coerce_amount(expense)
        )?;
        Ok(())
    }
}
