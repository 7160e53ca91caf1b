//! Per-category totals for the dashboard.

use std::collections::HashMap;

use api_types::expense::Expense;
use serde::Serialize;

use crate::{Money, expense::coerce_amount, sanitize};

/// Sentinel for a blank or missing category.
pub const UNDEFINED_CATEGORY: &str = "Undefined";

/// Bucket that collects everything past the top categories.
pub const OTHERS_CATEGORY: &str = "Others";

/// How many categories are shown before folding into [`OTHERS_CATEGORY`].
pub const TOP_CATEGORIES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Money,
}

/// The category an expense is reported under.
#[must_use]
pub fn category_name(expense: &Expense) -> &str {
    match expense.category.as_deref() {
        Some(category) if sanitize::is_non_empty(category) => category,
        _ => UNDEFINED_CATEGORY,
    }
}

/// Totals per category, largest first, keeping the top
/// [`TOP_CATEGORIES`] and summing the rest under [`OTHERS_CATEGORY`].
///
/// Ties keep the order in which categories first appear.
pub fn breakdown<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let name = category_name(expense);
        let amount = coerce_amount(expense);
        match index.get(name) {
            Some(&i) => totals[i].total = totals[i].total.saturating_add(amount),
            None => {
                index.insert(name, totals.len());
                totals.push(CategoryTotal {
                    name: name.to_string(),
                    total: amount,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    if totals.len() <= TOP_CATEGORIES {
        return totals;
    }

    let rest: Money = totals.drain(TOP_CATEGORIES..).map(|c| c.total).sum();
    match totals.iter_mut().find(|c| c.name == OTHERS_CATEGORY) {
        Some(others) => others.total = others.total.saturating_add(rest),
        None => totals.push(CategoryTotal {
            name: OTHERS_CATEGORY.to_string(),
            total: rest,
        }),
    }
    totals
}

#[cfg(test)]
mod tests {
    use api_types::expense::RawAmount;

    use super::*;

    fn expense(category: Option<&str>, amount: f64) -> Expense {
        Expense {
            id: "x".to_string(),
            description: None,
            amount: Some(RawAmount::Number(amount)),
            category: category.map(str::to_string),
            created_at: None,
        }
    }

    fn names(totals: &[CategoryTotal]) -> Vec<&str> {
        totals.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn blank_and_missing_categories_share_the_sentinel() {
        let expenses = [
            expense(None, 10.0),
            expense(Some(""), 5.0),
            expense(Some("   "), 5.0),
            expense(Some("Food"), 30.0),
        ];
        let totals = breakdown(&expenses);
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    name: "Food".to_string(),
                    total: Money::from_major(30),
                },
                CategoryTotal {
                    name: UNDEFINED_CATEGORY.to_string(),
                    total: Money::from_major(20),
                },
            ]
        );
    }

    #[test]
    fn folds_tail_into_others() {
        let expenses = [
            expense(Some("A"), 70.0),
            expense(Some("B"), 60.0),
            expense(Some("C"), 50.0),
            expense(Some("D"), 40.0),
            expense(Some("E"), 30.0),
            expense(Some("F"), 20.0),
            expense(Some("G"), 10.0),
        ];
        let totals = breakdown(&expenses);
        assert_eq!(names(&totals), ["A", "B", "C", "D", "E", "Others"]);
        assert_eq!(totals[5].total, Money::from_major(30));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let expenses = [
            expense(Some("Rent"), 10.0),
            expense(Some("Food"), 10.0),
            expense(Some("Rent"), 0.0),
        ];
        assert_eq!(names(&breakdown(&expenses)), ["Rent", "Food"]);
    }
}
