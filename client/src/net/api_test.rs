use super::*;

#[test]
fn timeout_millis_converts_seconds() {
    assert_eq!(timeout_millis(Duration::from_secs(10)), 10_000);
}

#[test]
fn timeout_millis_saturates() {
    assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
}

#[test]
fn timeout_message_names_deadline() {
    assert_eq!(timeout_message(Duration::from_secs(10)), "no response within 10s");
}

#[test]
fn deadline_expiry_while_body_stalls_is_unreachable() {
    let stalled_body = std::future::pending::<Result<(u16, String), FetchError>>();
    let result = block_on_ready(with_deadline(stalled_body, std::future::ready(()), Duration::from_secs(10)));
    assert_eq!(result, Err(FetchError::Unreachable("no response within 10s".to_owned())));
}

#[test]
fn completed_exchange_beats_pending_deadline() {
    let exchange = std::future::ready(Ok((200_u16, "{}".to_owned())));
    let result = block_on_ready(with_deadline(exchange, std::future::pending(), Duration::from_secs(10)));
    assert_eq!(result, Ok((200, "{}".to_owned())));
}

#[test]
fn transport_error_passes_through_deadline() {
    let failed = std::future::ready(Err::<(u16, String), _>(FetchError::Unreachable("reset".to_owned())));
    let result = block_on_ready(with_deadline(failed, std::future::pending(), Duration::from_secs(10)));
    assert_eq!(result, Err(FetchError::Unreachable("reset".to_owned())));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_fetch_reports_unreachable() {
    let source = GlooSource::new(ApodConfig::default());
    let result = block_on_ready(source.fetch(CalendarDate::archive_start()));
    assert!(matches!(result, Err(FetchError::Unreachable(_))));
}

/// Drive a future whose inner futures are all immediately ready or pending forever.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
