//! End-to-end scenarios over the cycle engine: realistic cards, fixed
//! dates, and the properties the rest of the stack leans on.

use chrono::NaiveDate;
use payclose_core::{
    BillingProfile, BusinessCardMatcher, CyclePhase, EventKind, Severity, aggregate_stats,
    build_strategy, list_events, next_occurrence,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Early-February card two days from closing with a balance outstanding.
#[test]
fn test_grace_card_two_days_from_closing() {
    let card = BillingProfile::new("cc-1", "Everyday", "Chase")
        .with_balance(1200.0)
        .with_credit_limit(5000.0)
        .with_closing_day(5)
        .with_due_day(15);
    let matcher = BusinessCardMatcher::default();

    let s = build_strategy(&card, d(2026, 2, 3), &matcher).unwrap();

    assert_eq!(s.next_closing_date, d(2026, 2, 5));
    assert_eq!(s.days_until_closing, 2);
    assert_eq!(s.next_due_date, d(2026, 2, 15));
    assert_eq!(s.days_until_due, 12);
    assert_eq!(s.current_phase, CyclePhase::Grace);

    // Only the 2-5 day optimization window applies.
    assert_eq!(s.recommendations.len(), 1);
    assert_eq!(s.recommendations[0].severity, Severity::Optimal);
}

/// A closing day equal to today never reports a zero-day countdown.
#[test]
fn test_closing_today_rolls_a_full_month() {
    let card = BillingProfile::new("cc-1", "Everyday", "Chase")
        .with_balance(100.0)
        .with_closing_day(5)
        .with_due_day(15);
    let matcher = BusinessCardMatcher::default();

    let s = build_strategy(&card, d(2026, 2, 5), &matcher).unwrap();

    assert_eq!(s.next_closing_date, d(2026, 3, 5));
    assert_eq!(s.days_until_closing, 28);
}

/// Day 30 in February lands on the month's last day, not March 2.
#[test]
fn test_day_30_in_february_clamps() {
    assert_eq!(next_occurrence(30, d(2026, 2, 10)), d(2026, 2, 28));
    assert_eq!(next_occurrence(30, d(2028, 2, 10)), d(2028, 2, 29));
}

/// Business card with a clean balance, evaluated outside grace.
#[test]
fn test_business_card_zero_balance_billing_phase() {
    let card = BillingProfile::new("cc-2", "Chase Ink Business", "Chase")
        .with_balance(0.0)
        .with_credit_limit(10000.0)
        .with_closing_day(5)
        .with_due_day(15);
    let matcher = BusinessCardMatcher::default();

    let s = build_strategy(&card, d(2026, 2, 5), &matcher).unwrap();

    assert_eq!(s.current_phase, CyclePhase::Billing);
    let biz = s.business_strategy.expect("business strategy");
    assert!(biz.can_use_freely);
    assert_eq!(biz.max_financing_days, 60);

    assert!(
        s.recommendations
            .iter()
            .any(|r| r.severity == Severity::Optimal)
    );
    assert!(
        s.recommendations
            .iter()
            .any(|r| r.severity == Severity::Info)
    );
}

#[test]
fn test_strategy_absent_without_both_days() {
    let matcher = BusinessCardMatcher::default();
    let today = d(2026, 2, 3);

    let only_closing = BillingProfile::new("cc-1", "A", "Chase")
        .with_balance(9999.0)
        .with_closing_day(5);
    let only_due = BillingProfile::new("cc-2", "B", "Chase").with_due_day(15);
    let neither = BillingProfile::new("cc-3", "C", "Chase");

    assert!(build_strategy(&only_closing, today, &matcher).is_none());
    assert!(build_strategy(&only_due, today, &matcher).is_none());
    assert!(build_strategy(&neither, today, &matcher).is_none());
}

#[test]
fn test_next_occurrence_strictly_future_all_days() {
    let todays = [
        d(2026, 1, 1),
        d(2026, 1, 31),
        d(2026, 2, 14),
        d(2026, 2, 28),
        d(2028, 2, 29),
        d(2026, 12, 31),
    ];
    for today in todays {
        for day in 1..=31 {
            assert!(next_occurrence(day, today) > today);
        }
    }
}

#[test]
fn test_event_feed_sorted_and_counted() {
    let today = d(2026, 2, 1);
    let cards = vec![
        BillingProfile::new("a", "A", "Chase")
            .with_closing_day(3)
            .with_due_day(13),
        BillingProfile::new("b", "B", "Amex")
            .with_closing_day(25)
            .with_due_day(1),
        BillingProfile::new("c", "C", "Citi"),
    ];

    let events = list_events(&cards, today);
    assert_eq!(events.len(), 4);
    for pair in events.windows(2) {
        assert!(pair[0].days_until <= pair[1].days_until);
    }
    // Card b's due day falls on today and rolls to March.
    let b_payment = events
        .iter()
        .find(|e| e.card_id == "b" && e.kind == EventKind::Payment)
        .unwrap();
    assert_eq!(b_payment.date, d(2026, 3, 1));

    let stats = aggregate_stats(&cards, &events);
    assert_eq!(stats.total_cards, 3);
    assert_eq!(stats.configured_cards, 2);
    assert!((stats.configuration_rate - 66.66).abs() < 1.0);

    // Urgent: closing Feb 3 (2 days). Upcoming adds nothing else within
    // a week of Feb 1 except that same event.
    assert_eq!(stats.urgent_events, 1);
    assert_eq!(stats.upcoming_events, 1);
}

#[test]
fn test_no_cards_means_zero_rate_not_a_crash() {
    let stats = aggregate_stats(&[], &[]);
    assert_eq!(stats.configuration_rate, 0.0);
    assert_eq!(stats.total_events, 0);
}

/// Wire shape stays lowercase for the enum tags the frontend matches on.
#[test]
fn test_serialized_tags_are_lowercase() {
    let today = d(2026, 2, 1);
    let cards = vec![
        BillingProfile::new("a", "A", "Chase")
            .with_closing_day(3)
            .with_due_day(13),
    ];
    let events = list_events(&cards, today);
    let json = serde_json::to_string(&events).unwrap();
    assert!(json.contains("\"closing\""));
    assert!(json.contains("\"payment\""));

    let matcher = BusinessCardMatcher::default();
    let strategy = build_strategy(&cards[0], today, &matcher).unwrap();
    let json = serde_json::to_string(&strategy).unwrap();
    assert!(json.contains("\"grace\"") || json.contains("\"billing\""));
}
