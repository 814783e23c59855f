use cool_asserts::assert_matches;

use super::{
    display_bounds, hhmm_to_hours, parse_hhmm, parse_week_schedule, DayWindow, OpenHours,
};

fn open(day: &str, start: &str, end: &str) -> DayWindow {
    DayWindow {
        day: day.to_string(),
        closed: false,
        start: Some(start.to_string()),
        end: Some(end.to_string()),
    }
}

#[test]
fn garbage_input_parses_to_an_empty_schedule() {
    assert_eq!(parse_week_schedule(None), Vec::new());
    assert_eq!(parse_week_schedule(Some("not json")), Vec::new());
    assert_eq!(parse_week_schedule(Some("{}")), Vec::new());
    assert_eq!(parse_week_schedule(Some("null")), Vec::new());
    assert_eq!(parse_week_schedule(Some("")), Vec::new());
    assert_eq!(parse_week_schedule(Some("42")), Vec::new());
}

#[test]
fn valid_entries_survive_wrong_shaped_neighbours() {
    let raw = r#"[
        {"day": "Monday", "start": "08:00", "end": "16:00"},
        42,
        {"closed": true},
        {"day": "Friday"}
    ]"#;
    let days = parse_week_schedule(Some(raw));
    assert_eq!(
        days,
        vec![
            open("Monday", "08:00", "16:00"),
            DayWindow {
                day: "Friday".to_string(),
                closed: false,
                start: None,
                end: None,
            },
        ]
    );
}

#[test]
fn closed_wins_over_stray_times() {
    let raw = r#"[{"day": "Wednesday", "closed": true, "start": "09:00", "end": "17:00"}]"#;
    let days = parse_week_schedule(Some(raw));
    assert_matches!(
        days.as_slice(),
        [DayWindow {
            day,
            closed: true,
            start: None,
            end: None,
        }] => assert_eq!(day, "Wednesday")
    );
}

#[test]
fn days_keep_their_input_order() {
    let raw = r#"[
        {"day": "Friday", "start": "08:00", "end": "12:00"},
        {"day": "Monday", "closed": true}
    ]"#;
    let days = parse_week_schedule(Some(raw));
    assert_eq!(days[0].day, "Friday");
    assert_eq!(days[1].day, "Monday");
}

#[test]
fn hhmm_parses_within_the_day() {
    assert_eq!(parse_hhmm("00:00"), Some(0));
    assert_eq!(parse_hhmm("08:30"), Some(510));
    assert_eq!(parse_hhmm("8:05"), Some(485));
    assert_eq!(parse_hhmm(" 23:59 "), Some(1439));
    assert_eq!(parse_hhmm("24:00"), Some(1440));
}

#[test]
fn hhmm_rejects_everything_else() {
    assert_eq!(parse_hhmm("24:01"), None);
    assert_eq!(parse_hhmm("25:00"), None);
    assert_eq!(parse_hhmm("12:60"), None);
    assert_eq!(parse_hhmm("-1:00"), None);
    assert_eq!(parse_hhmm("noon"), None);
    assert_eq!(parse_hhmm("12"), None);
    assert_eq!(parse_hhmm(""), None);
}

#[test]
fn hours_are_fractional() {
    assert_eq!(hhmm_to_hours("09:30"), Some(9.5));
    assert_eq!(hhmm_to_hours("00:00"), Some(0.0));
    assert_eq!(hhmm_to_hours("24:00"), Some(24.0));
}

#[test]
fn bounds_span_the_open_days() {
    let days = vec![
        open("Monday", "08:00", "16:00"),
        open("Tuesday", "10:00", "20:00"),
        DayWindow {
            day: "Wednesday".to_string(),
            closed: true,
            start: None,
            end: None,
        },
    ];
    assert_eq!(
        display_bounds(&days),
        OpenHours {
            start_hour: 8.0,
            end_hour: 20.0,
        }
    );
}

#[test]
fn bounds_fall_back_when_nothing_contributes() {
    assert_eq!(
        display_bounds(&[]),
        OpenHours {
            start_hour: 8.0,
            end_hour: 18.0,
        }
    );

    let all_closed = vec![DayWindow {
        day: "Monday".to_string(),
        closed: true,
        start: None,
        end: None,
    }];
    assert_eq!(
        display_bounds(&all_closed),
        OpenHours {
            start_hour: 8.0,
            end_hour: 18.0,
        }
    );

    let unparseable = vec![open("Monday", "late", "later")];
    assert_eq!(
        display_bounds(&unparseable),
        OpenHours {
            start_hour: 8.0,
            end_hour: 18.0,
        }
    );
}

#[test]
fn one_sided_schedules_only_borrow_the_missing_side() {
    let days = vec![DayWindow {
        day: "Monday".to_string(),
        closed: false,
        start: Some("06:00".to_string()),
        end: None,
    }];
    assert_eq!(
        display_bounds(&days),
        OpenHours {
            start_hour: 6.0,
            end_hour: 18.0,
        }
    );
}
