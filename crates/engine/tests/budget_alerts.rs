use chrono::{DateTime, TimeZone, Utc};

use engine::{
    AlertKind, Budget, Expense, Money, Period, RawAmount, alert, category, spending,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 18, 9, 30, 0).unwrap()
}

fn expense(id: &str, amount: f64, category: Option<&str>, created_at: &str) -> Expense {
    Expense {
        id: id.to_string(),
        description: Some(format!("expense {id}")),
        amount: Some(RawAmount::Number(amount)),
        category: category.map(str::to_string),
        created_at: Some(created_at.to_string()),
    }
}

/// Runs the evaluator and classifier the way the client does.
fn check(budget_blob: Option<&str>, expenses: &[Expense]) -> Option<engine::Alert> {
    let budget = Budget::from_json(budget_blob?).ok()?.active(&now())?;
    let spend = spending::monthly_spending(expenses, &budget.period);
    alert::classify(&budget, spend, "General")
}

#[test]
fn warning_at_ninety_percent() {
    let expenses = [
        expense("1", 600.0, Some("Food"), "2025-06-02T10:00:00.000Z"),
        expense("2", 300.0, None, "2025-06-10T10:00:00.000Z"),
        expense("3", 5000.0, Some("Rent"), "2025-05-02T10:00:00.000Z"),
    ];
    let alert = check(Some(r#"{"amount":1000,"period":"2025-06"}"#), &expenses).unwrap();

    assert_eq!(alert.kind(), AlertKind::Warning);
    assert!(alert.body.contains("90.0%"));
    assert!(alert.body.contains("RWF 900"));
    assert!(alert.body.contains("RWF 1000"));
}

#[test]
fn exceeded_reports_overage() {
    let expenses = [expense("1", 1500.0, None, "2025-06-02T10:00:00.000Z")];
    let alert = check(Some(r#"{"amount":1000,"period":"2025-06"}"#), &expenses).unwrap();

    assert_eq!(alert.kind(), AlertKind::Exceeded);
    assert!(alert.body.contains("by RWF 500"));
}

#[test]
fn silent_without_budget_or_for_stale_budget() {
    let expenses = [expense("1", 5000.0, None, "2025-06-02T10:00:00.000Z")];

    assert_eq!(check(None, &expenses), None);
    assert_eq!(
        check(Some(r#"{"amount":1000,"period":"2025-05"}"#), &expenses),
        None
    );
    assert_eq!(check(Some("not json"), &expenses), None);
}

#[test]
fn silent_for_zero_budget_and_low_spend() {
    let expenses = [expense("1", 500.0, None, "2025-06-02T10:00:00.000Z")];

    assert_eq!(check(Some(r#"{"amount":0,"period":"2025-06"}"#), &expenses), None);
    assert_eq!(
        check(Some(r#"{"amount":1000,"period":"2025-06"}"#), &expenses),
        None
    );
}

#[test]
fn repeated_checks_produce_identical_alerts() {
    let expenses = [expense("1", 1200.0, None, "2025-06-02T10:00:00.000Z")];
    let blob = Some(r#"{"amount":1000,"period":"2025-06"}"#);

    assert_eq!(check(blob, &expenses), check(blob, &expenses));
}

#[test]
fn dashboard_figures_for_current_period() {
    let expenses = [
        expense("1", 600.0, Some("Food"), "2025-06-02T10:00:00.000Z"),
        expense("2", 300.0, Some(" "), "2025-06-10T10:00:00.000Z"),
        expense("3", 5000.0, Some("Rent"), "2025-05-02T10:00:00.000Z"),
    ];
    let period = Period::current(&now());
    let totals = category::breakdown(spending::in_period(&expenses, &period));

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].name, "Food");
    assert_eq!(totals[1].name, category::UNDEFINED_CATEGORY);
    assert_eq!(
        spending::monthly_spending(&expenses, &period),
        Money::from_major(900)
    );
}

#[test]
fn foreign_records_do_not_hide_valid_spend() {
    let snapshot = r#"[
        {"id": "1", "amount": 500, "createdAt": "2025-06-02T10:00:00.000Z"},
        {"id": 2, "amount": true, "createdAt": "2025-06-03T10:00:00.000Z"},
        {"id": "3", "amount": {"value": 900}, "createdAt": "2025-06-03T10:00:00.000Z"},
        {"id": "4", "amount": 400, "createdAt": 1748822400000},
        {"id": "5", "amount": "-5", "createdAt": "2025-06-04T10:00:00.000Z"},
        {"id": "6", "amount": "12 items", "createdAt": "2025-06-04T10:00:00.000Z"},
        {"id": "7", "amount": "450", "createdAt": "2025-06-05T10:00:00.000Z"}
    ]"#;
    let expenses: Vec<Expense> = serde_json::from_str(snapshot).unwrap();
    assert_eq!(expenses.len(), 7);

    let june = Period::new(2025, 6).unwrap();
    assert_eq!(
        spending::monthly_spending(&expenses, &june),
        Money::from_major(950)
    );

    let alert = check(Some(r#"{"amount":1000,"period":"2025-06"}"#), &expenses).unwrap();
    assert_eq!(alert.kind(), AlertKind::Warning);
    assert!(alert.body.contains("95.0%"));
}
