//! In-memory records behind the stand-in API.

use api_types::{
    expense::{Expense, ExpenseNew, RawAmount},
    user::User,
};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    expenses: Vec<Expense>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user and returns its generated id.
    pub fn add_user(&mut self, username: &str, password: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.users.push(User {
            id: id.clone(),
            username: username.to_string(),
            password: password.to_string(),
        });
        id
    }

    pub fn users_named(&self, username: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| user.username == username)
            .cloned()
            .collect()
    }

    /// Stores a record as-is, including malformed ones.
    pub fn insert_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn create_expense(&mut self, payload: ExpenseNew) -> Expense {
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            description: Some(payload.description),
            amount: Some(RawAmount::Number(payload.amount)),
            category: Some(payload.category),
            created_at: Some(payload.created_at),
        };
        self.expenses.push(expense.clone());
        expense
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn remove_expense(&mut self, id: &str) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        Some(self.expenses.remove(index))
    }
}
