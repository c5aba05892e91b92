use chrono::{Duration, NaiveDate};
use roster_tool::duty::{DutyDay, duty_on};
use roster_tool::Roster;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn first_entry_is_always_a_work_day() {
    for start in [d(2024, 6, 1), d(2024, 12, 15), d(2025, 2, 27), d(2024, 6, 30)] {
        let roster = Roster::for_month(start).unwrap();
        let entries = roster.entries().unwrap();
        assert_eq!(entries[0].date, start);
        assert_eq!(entries[0].duty, DutyDay::Work, "start {start}");
    }
}

#[test]
fn entries_cover_every_day_with_no_gaps() {
    let roster = Roster::for_month(d(2024, 6, 1)).unwrap();
    let entries = roster.entries().unwrap();

    assert_eq!(entries.len(), 30);
    assert_eq!(entries.last().unwrap().date, d(2024, 6, 30));
    for pair in entries.windows(2) {
        assert_eq!(
            pair[1].date - pair[0].date,
            Duration::days(1),
            "gap between {} and {}",
            pair[0].date,
            pair[1].date
        );
    }
}

#[test]
fn labels_follow_the_work_rest_rest_cycle() {
    let roster = Roster::for_month(d(2024, 6, 1)).unwrap();
    let entries = roster.entries().unwrap();

    for (idx, entry) in entries.iter().enumerate() {
        let expected = if idx % 3 == 0 {
            DutyDay::Work
        } else {
            DutyDay::Rest
        };
        assert_eq!(entry.duty, expected, "position {idx} ({})", entry.date);
    }
}

#[test]
fn june_example_matches_expected_rows() {
    let roster = Roster::for_month(d(2024, 6, 1)).unwrap();
    let entries = roster.entries().unwrap();

    assert_eq!(entries.len(), 30);
    assert_eq!((entries[0].date, entries[0].duty), (d(2024, 6, 1), DutyDay::Work));
    assert_eq!((entries[1].date, entries[1].duty), (d(2024, 6, 2), DutyDay::Rest));
    assert_eq!((entries[2].date, entries[2].duty), (d(2024, 6, 3), DutyDay::Rest));
    assert_eq!((entries[3].date, entries[3].duty), (d(2024, 6, 4), DutyDay::Work));
    // Position 30 sits at cycle offset 29; 29 mod 3 = 2, a rest day.
    assert_eq!((entries[29].date, entries[29].duty), (d(2024, 6, 30), DutyDay::Rest));
}

#[test]
fn short_month_truncates_the_final_cycle() {
    let roster = Roster::for_month(d(2025, 2, 27)).unwrap();
    let entries = roster.entries().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].date, entries[0].duty), (d(2025, 2, 27), DutyDay::Work));
    assert_eq!((entries[1].date, entries[1].duty), (d(2025, 2, 28), DutyDay::Rest));
}

#[test]
fn december_start_never_rolls_into_january() {
    let roster = Roster::for_month(d(2024, 12, 15)).unwrap();
    let entries = roster.entries().unwrap();

    assert_eq!(entries.len(), 17);
    assert_eq!(entries.last().unwrap().date, d(2024, 12, 31));
}

#[test]
fn start_on_the_last_day_yields_a_single_work_entry() {
    let roster = Roster::for_month(d(2024, 6, 30)).unwrap();
    let entries = roster.entries().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].duty, DutyDay::Work);
}

#[test]
fn duty_on_follows_the_three_day_cycle() {
    let anchor = d(2024, 6, 1);
    assert_eq!(duty_on(anchor, anchor), DutyDay::Work);
    assert_eq!(duty_on(anchor, d(2024, 6, 2)), DutyDay::Rest);
    assert_eq!(duty_on(anchor, d(2024, 6, 3)), DutyDay::Rest);
    assert_eq!(duty_on(anchor, d(2024, 6, 4)), DutyDay::Work);
    // The cycle keeps running past the generated month.
    assert_eq!(duty_on(anchor, d(2024, 7, 1)), DutyDay::Work);
}

#[test]
fn duty_on_before_the_anchor_is_rest() {
    let anchor = d(2024, 6, 10);
    assert_eq!(duty_on(anchor, d(2024, 6, 9)), DutyDay::Rest);
    assert_eq!(duty_on(anchor, d(2024, 5, 1)), DutyDay::Rest);
}

#[test]
fn summary_counts_work_and_rest_days() {
    let roster = Roster::for_month(d(2024, 6, 1)).unwrap();
    let summary = roster.summary().unwrap();

    assert_eq!(summary.total_days, 30);
    assert_eq!(summary.work_days, 10);
    assert_eq!(summary.rest_days, 20);
    assert_eq!(summary.start_date, d(2024, 6, 1));
    assert_eq!(summary.end_date, d(2024, 6, 30));

    let line = summary.to_cli_summary();
    assert!(line.contains("days=30"), "summary line: {line}");
    assert!(line.contains("work=10"), "summary line: {line}");
    assert!(line.contains("rest=20"), "summary line: {line}");
}
