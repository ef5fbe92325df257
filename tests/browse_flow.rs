//! End-to-end browsing session against a scripted remote source.
//!
//! The fake source answers with raw `(status, body)` pairs and runs them
//! through `parse_response`, the same path the browser HTTP client takes.

use std::cell::RefCell;
use std::collections::HashMap;

use astropic::share::share_message;
use astropic::{
    ApodRecord, ApodSource, CalendarDate, DateSelection, FetchError, FetchState, FixedClock, LinkOpener, MemoryStore,
    ShareChannel, Theme, download, fetch_ticket, load_theme, parse_response, share_via, toggle_theme,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::datetime;

const FIRST_LIGHT: &str =
    r#"{"title":"First Light","url":"https://x/img.jpg","explanation":"...","date":"1995-06-16"}"#;

/// Remote source scripted per ISO date; unscripted dates answer 404.
#[derive(Default)]
struct ScriptedRemote {
    responses: HashMap<String, (u16, String)>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedRemote {
    fn with(mut self, date: &str, status: u16, body: &str) -> Self {
        self.responses.insert(date.to_owned(), (status, body.to_owned()));
        self
    }
}

#[async_trait::async_trait(?Send)]
impl ApodSource for ScriptedRemote {
    async fn fetch(&self, date: CalendarDate) -> Result<ApodRecord, FetchError> {
        let iso = date.to_string();
        self.requests.borrow_mut().push(iso.clone());
        let (status, body) = self
            .responses
            .get(&iso)
            .cloned()
            .unwrap_or((404, String::new()));
        parse_response(status, &body, date)
    }
}

#[derive(Default)]
struct Tabs(Vec<String>);

impl LinkOpener for Tabs {
    fn open(&mut self, url: &str) {
        self.0.push(url.to_owned());
    }
}

#[tokio::test]
async fn first_light_loads_and_download_is_a_no_op() {
    let remote = ScriptedRemote::default().with("1995-06-16", 200, FIRST_LIGHT);
    let (mut selection, ticket) = DateSelection::start();
    assert!(selection.state().is_loading());

    let settlement = fetch_ticket(&remote, ticket).await;
    assert!(selection.apply(settlement));

    let record = selection.state().record().cloned().expect("loaded");
    assert_eq!(record.title, "First Light");
    assert_eq!(record.hd_url, None);

    let mut tabs = Tabs::default();
    assert!(!download(&record, &mut tabs));
    assert!(tabs.0.is_empty());

    share_via(ShareChannel::X, &record, &mut tabs);
    assert_eq!(tabs.0.len(), 1);
    assert!(tabs.0[0].starts_with("https://x.com/intent/tweet?text="));
    assert!(share_message(&record).contains("First Light"));
}

#[tokio::test]
async fn rate_limited_first_day_fails_with_status() {
    let remote = ScriptedRemote::default().with("1995-06-16", 429, r#"{"error":{"code":"OVER_RATE_LIMIT"}}"#);
    let (mut selection, ticket) = DateSelection::start();

    assert!(selection.apply(fetch_ticket(&remote, ticket).await));
    assert_eq!(selection.state(), &FetchState::Failed(FetchError::RemoteRejected(429)));
}

#[tokio::test]
async fn every_fetch_is_issued_even_for_repeated_dates() {
    let remote = ScriptedRemote::default().with("1995-06-16", 200, FIRST_LIGHT);
    let (mut selection, first) = DateSelection::start();
    selection.apply(fetch_ticket(&remote, first).await);

    let again = selection.set_date(CalendarDate::archive_start());
    assert!(selection.state().is_loading());
    selection.apply(fetch_ticket(&remote, again).await);

    assert_eq!(remote.requests.borrow().as_slice(), ["1995-06-16", "1995-06-16"]);
    assert!(selection.state().record().is_some());
}

#[tokio::test]
async fn random_dates_always_settle() {
    let clock = FixedClock(datetime!(2024-03-01 18:00 UTC));
    let mut rng = StdRng::seed_from_u64(2024);
    let remote = ScriptedRemote::default();
    let mut selection = DateSelection::new();

    for _ in 0..50 {
        let ticket = selection.request_random_date(&clock, &mut rng);
        assert!(selection.apply(fetch_ticket(&remote, ticket).await));
        assert!(!selection.state().is_loading());
    }
    assert_eq!(remote.requests.borrow().len(), 50);
}

#[test]
fn theme_preference_survives_restart() {
    let mut storage = MemoryStore::default();

    let theme = load_theme(&storage);
    assert_eq!(theme, Theme::Light);
    let theme = toggle_theme(&mut storage, theme);

    assert_eq!(load_theme(&storage), theme);
    assert_eq!(load_theme(&storage), Theme::Dark);
}
