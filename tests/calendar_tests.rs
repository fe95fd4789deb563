use chrono::NaiveDate;
use subscription_core::currency::{CurrencyCode, RateTable};
use subscription_core::domain::{BillingCycle, DateWindow, Subscription};
use subscription_core::projection::{aggregate_range, is_occurrence_on, next_payment_date};
use subscription_core::services::CalendarService;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_subscriptions() -> Vec<Subscription> {
    vec![
        Subscription::new(
            "Streaming",
            1490.0,
            CurrencyCode::new("JPY"),
            BillingCycle::Monthly,
            "Entertainment",
            date(2023, 11, 10),
        ),
        Subscription::new(
            "Cloud storage",
            9.99,
            CurrencyCode::new("USD"),
            BillingCycle::Monthly,
            "Work",
            date(2024, 1, 31),
        ),
        Subscription::new(
            "Domain",
            12.0,
            CurrencyCode::new("USD"),
            BillingCycle::Annually,
            "Work",
            date(2023, 4, 22),
        ),
        Subscription::new(
            "Gym insurance",
            30000.0,
            CurrencyCode::new("JPY"),
            BillingCycle::SemiAnnually,
            "Health",
            date(2023, 10, 5),
        ),
    ]
}

fn rates() -> RateTable {
    let mut table = RateTable::default();
    table.insert(CurrencyCode::new("USD"), 150.0);
    table.insert(CurrencyCode::new("EUR"), 160.0);
    table
}

#[test]
fn april_report_places_every_occurrence() {
    let subscriptions = sample_subscriptions();
    let report = CalendarService::month_report(
        2024,
        4,
        &subscriptions,
        &rates(),
        date(2024, 4, 1),
    )
    .expect("valid month");

    let grid = &report.summary.per_date;
    // Streaming on the 10th, cloud storage clamped to the 30th, domain
    // anniversary on the 22nd, gym insurance on the 5th (Oct 2023 + 6).
    assert_eq!(grid[&date(2024, 4, 10)].total, 1490.0);
    assert_eq!(grid[&date(2024, 4, 30)].total, 9.99 * 150.0);
    assert_eq!(grid[&date(2024, 4, 22)].total, 12.0 * 150.0);
    assert_eq!(grid[&date(2024, 4, 5)].total, 30000.0);
    assert_eq!(grid.len(), 4);

    assert_eq!(report.upcoming.len(), subscriptions.len());
    assert_eq!(report.upcoming[0].due_on, date(2024, 4, 10));
    let mut sorted = report.upcoming.clone();
    sorted.sort_by_key(|payment| payment.due_on);
    assert_eq!(sorted, report.upcoming);
}

#[test]
fn quarter_aggregation_totals_are_additive_across_maps() {
    let subscriptions = sample_subscriptions();
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 3, 31)).unwrap();
    let summary = aggregate_range(window, &subscriptions, &rates());

    let per_category_total: f64 = summary.per_category.values().sum();
    assert!((per_category_total - summary.grand_total()).abs() < 1e-9);

    let per_item_total: f64 = summary
        .per_date
        .values()
        .flat_map(|day| day.items.iter().map(|item| item.converted))
        .sum();
    assert!((per_item_total - summary.grand_total()).abs() < 1e-9);
}

#[test]
fn every_projected_day_satisfies_the_predicate() {
    let subscriptions = sample_subscriptions();
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 6, 30)).unwrap();
    let summary = aggregate_range(window, &subscriptions, &rates());

    for (day, breakdown) in &summary.per_date {
        for item in &breakdown.items {
            let subscription = subscriptions
                .iter()
                .find(|s| s.id == item.subscription_id)
                .expect("item refers to an input subscription");
            assert!(is_occurrence_on(*day, subscription));
        }
    }
}

#[test]
fn next_payment_dates_are_occurrences_of_their_subscription() {
    // Daily is checked separately: its calculator answers tomorrow, which is
    // an occurrence by definition once started.
    let subscriptions = sample_subscriptions();
    for subscription in &subscriptions {
        for offset in [0i64, 17, 113, 364] {
            let reference = date(2024, 1, 1) + chrono::Duration::days(offset);
            let due = next_payment_date(reference, subscription);
            assert!(
                is_occurrence_on(due, subscription),
                "{} due {} from {} is not an occurrence",
                subscription.name,
                due,
                reference
            );
        }
    }
}

#[test]
fn month_report_with_no_subscriptions_is_empty() {
    let report =
        CalendarService::month_report(2024, 7, &[], &RateTable::default(), date(2024, 7, 1))
            .expect("valid month");
    assert!(report.summary.per_date.is_empty());
    assert!(report.summary.per_category.is_empty());
    assert!(report.upcoming.is_empty());
}
