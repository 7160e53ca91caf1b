//! Free-text search over description and category.

use api_types::expense::Expense;

use crate::sanitize::sanitize_search_query;

/// `true` when the normalized `"{description} {category}"` contains the
/// normalized query. An empty query matches everything.
#[must_use]
pub fn matches(expense: &Expense, query: &str) -> bool {
    let query = sanitize_search_query(query);
    if query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {}",
        expense.description.as_deref().unwrap_or_default(),
        expense.category.as_deref().unwrap_or_default()
    );
    sanitize_search_query(&haystack).contains(&query)
}

/// Filters `expenses` by `query`, keeping order.
pub fn filter<'a>(expenses: &'a [Expense], query: &str) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| matches(e, query)).collect()
}
