use super::*;
use astropic::FixedClock;
use time::macros::{date, datetime};

const TODAY: Date = date!(2024 - 03 - 01);

#[test]
fn accepted_date_input_issues_fetch() {
    let (mut selection, _) = DateSelection::start();
    let outcome = read_date_input(&mut selection, "2001-09-11", TODAY);
    let DateInput::Fetch(ticket) = outcome else {
        panic!("expected a fetch, got {outcome:?}");
    };
    assert_eq!(ticket.date().to_string(), "2001-09-11");
    assert_eq!(selection.date(), ticket.date());
    assert!(selection.state().is_loading());
}

#[test]
fn rejected_date_input_reverts_to_kept_date() {
    let (mut selection, _) = DateSelection::start();
    let DateInput::Fetch(kept) = read_date_input(&mut selection, "2010-05-05", TODAY) else {
        panic!("valid date rejected");
    };
    for raw in ["1995-06-15", "2024-03-02", "+1995-06-16", "garbage"] {
        assert_eq!(read_date_input(&mut selection, raw, TODAY), DateInput::Revert(kept.date()), "{raw}");
    }
    assert_eq!(selection.date(), kept.date());
    assert!(selection.on_fetch_settled(kept, Err(FetchError::RemoteRejected(500))));
}

#[test]
fn unreachable_message_mentions_connection() {
    let msg = failure_message(&FetchError::Unreachable("dns".to_owned()));
    assert!(msg.contains("connection"));
}

#[test]
fn rate_limit_has_dedicated_message() {
    let msg = failure_message(&FetchError::RemoteRejected(429));
    assert!(msg.contains("rate limiting"));
}

#[test]
fn other_rejections_show_status() {
    assert_eq!(
        failure_message(&FetchError::RemoteRejected(500)),
        "NASA couldn't provide this picture (HTTP 500)."
    );
}

#[test]
fn malformed_response_message_does_not_leak_parser_detail() {
    let msg = failure_message(&FetchError::MalformedResponse("missing field `url` at line 1".to_owned()));
    assert!(!msg.contains("missing field"));
}

#[test]
fn max_selectable_is_today_in_clock_offset() {
    let clock = FixedClock(datetime!(2024-03-01 08:00 UTC));
    assert_eq!(max_selectable(&clock), "2024-03-01");
}

#[test]
fn max_selectable_never_precedes_archive() {
    let clock = FixedClock(datetime!(1990-01-01 00:00 UTC));
    assert_eq!(max_selectable(&clock), "1995-06-16");
}
