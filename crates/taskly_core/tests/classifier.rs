use chrono::{Days, NaiveDate};
use taskly_core::{classify, classify_raw, DueDate, GroupKey, ValidationError, ACTIVE_GROUP_ORDER};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn due(raw: &str) -> Option<DueDate> {
    Some(DueDate::parse(raw).unwrap())
}

#[test]
fn classifies_every_bucket_from_a_monday() {
    // 2024-06-10 is a Monday.
    let today = ymd(2024, 6, 10);

    assert_eq!(classify(None, today), GroupKey::NoDate);
    assert_eq!(classify(due("2024-06-09"), today), GroupKey::Overdue);
    assert_eq!(classify(due("2023-12-31"), today), GroupKey::Overdue);
    assert_eq!(classify(due("2024-06-10"), today), GroupKey::Today);
    assert_eq!(classify(due("2024-06-11"), today), GroupKey::ThisWeek);
    assert_eq!(classify(due("2024-06-16"), today), GroupKey::ThisWeek);
    assert_eq!(classify(due("2024-06-17"), today), GroupKey::NextWeek);
    assert_eq!(classify(due("2024-06-23"), today), GroupKey::NextWeek);
    assert_eq!(classify(due("2024-06-24"), today), GroupKey::ThisMonth);
    assert_eq!(classify(due("2024-06-30"), today), GroupKey::ThisMonth);
    assert_eq!(classify(due("2024-07-01"), today), GroupKey::NextMonth);
    assert_eq!(classify(due("2024-07-31"), today), GroupKey::NextMonth);
    assert_eq!(classify(due("2024-08-01"), today), GroupKey::ThisYear);
    assert_eq!(classify(due("2024-12-31"), today), GroupKey::ThisYear);
    assert_eq!(classify(due("2025-01-01"), today), GroupKey::Later);
}

#[test]
fn sunday_reference_rolls_monday_into_next_week() {
    // 2024-06-16 is a Sunday: the current ISO week ends today.
    let today = ymd(2024, 6, 16);

    assert_eq!(classify(due("2024-06-17"), today), GroupKey::NextWeek);
    assert_eq!(classify(due("2024-06-23"), today), GroupKey::NextWeek);
    assert_eq!(classify(due("2024-06-24"), today), GroupKey::ThisMonth);
}

#[test]
fn eight_days_out_is_never_this_week() {
    let today = ymd(2024, 6, 12);
    let eight_days = today.checked_add_days(Days::new(8)).unwrap();

    assert_eq!(
        classify(Some(DueDate::from(eight_days)), today),
        GroupKey::NextWeek
    );
}

#[test]
fn next_week_takes_precedence_over_month_boundary() {
    // Friday 2024-06-28; next ISO week is 2024-07-01..07.
    let today = ymd(2024, 6, 28);

    assert_eq!(classify(due("2024-06-30"), today), GroupKey::ThisWeek);
    assert_eq!(classify(due("2024-07-01"), today), GroupKey::NextWeek);
    assert_eq!(classify(due("2024-07-08"), today), GroupKey::NextMonth);
}

#[test]
fn weeks_and_months_cross_year_boundary_by_calendar() {
    // Monday 2024-12-30 belongs to ISO week 2025-W01.
    let today = ymd(2024, 12, 30);

    assert_eq!(classify(due("2025-01-02"), today), GroupKey::ThisWeek);
    assert_eq!(classify(due("2025-01-06"), today), GroupKey::NextWeek);
    assert_eq!(classify(due("2025-01-20"), today), GroupKey::NextMonth);
    assert_eq!(classify(due("2025-02-01"), today), GroupKey::Later);
}

#[test]
fn every_date_maps_to_one_ordered_bucket() {
    for reference in [ymd(2024, 1, 1), ymd(2024, 2, 29), ymd(2024, 6, 28), ymd(2024, 12, 30)] {
        let mut previous_rank = 0;
        let start = reference.checked_sub_days(Days::new(400)).unwrap();
        for offset in 0..1200 {
            let date = start.checked_add_days(Days::new(offset)).unwrap();
            let key = classify(Some(DueDate::from(date)), reference);

            assert_ne!(key, GroupKey::Completed);
            assert_ne!(key, GroupKey::NoDate);
            let rank = ACTIVE_GROUP_ORDER
                .iter()
                .position(|candidate| *candidate == key)
                .expect("key is an active bucket");
            assert!(
                rank >= previous_rank,
                "{date} classified {key} after a later bucket (reference {reference})"
            );
            previous_rank = rank;
        }
    }
}

#[test]
fn raw_classification_rejects_malformed_dates() {
    let today = ymd(2024, 6, 10);

    assert_eq!(classify_raw(None, today).unwrap(), GroupKey::NoDate);
    assert_eq!(
        classify_raw(Some("2024-06-10"), today).unwrap(),
        GroupKey::Today
    );
    assert_eq!(
        classify_raw(Some("06/10/2024"), today).unwrap_err(),
        ValidationError::InvalidDate("06/10/2024".to_string())
    );
}

#[test]
fn every_key_has_label_and_style() {
    assert_eq!(GroupKey::Today.label(), "Due Today");
    assert_eq!(GroupKey::NextMonth.label(), "Due Next Month");
    assert_eq!(GroupKey::Completed.label(), "Completed");
    for key in ACTIVE_GROUP_ORDER {
        let style = key.style();
        assert!(!style.label.is_empty());
        assert!(style.text_color.starts_with("text-"));
        assert!(style.dot_color.starts_with("bg-"));
    }
    assert_eq!(
        serde_json::to_value(GroupKey::ThisWeek).unwrap(),
        serde_json::json!("this-week")
    );
}
