use super::*;
use crate::date::CalendarDate;
use crate::record::MediaType;

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.opened.push(url.to_owned());
    }
}

fn first_light(hd_url: Option<&str>) -> ApodRecord {
    ApodRecord {
        title: "First Light".to_owned(),
        explanation: "...".to_owned(),
        url: "https://x/img.jpg".to_owned(),
        hd_url: hd_url.map(str::to_owned),
        media_type: MediaType::Image,
        date: CalendarDate::archive_start(),
        copyright: None,
    }
}

#[test]
fn share_message_has_prefix_title_and_url() {
    assert_eq!(
        share_message(&first_light(None)),
        "See this APOD! First Light 🌌🚀 https://x/img.jpg"
    );
}

#[test]
fn x_share_url_uses_tweet_intent_with_encoded_text() {
    let url = share_url(ShareChannel::X, &first_light(None));
    let text = url
        .strip_prefix("https://x.com/intent/tweet?text=")
        .expect("x template prefix");
    assert!(text.starts_with("See%20this%20APOD%21%20First%20Light%20"), "{text}");
    assert!(text.ends_with("https%3A%2F%2Fx%2Fimg.jpg"), "{text}");
    assert_eq!(
        urlencoding::decode(text).expect("utf-8"),
        share_message(&first_light(None))
    );
}

#[test]
fn whatsapp_share_url_uses_send_endpoint() {
    let url = share_url(ShareChannel::WhatsApp, &first_light(None));
    let text = url
        .strip_prefix("https://api.whatsapp.com/send?text=")
        .expect("whatsapp template prefix");
    assert!(!text.contains(' '));
    assert!(!text.contains('&'));
}

#[test]
fn share_via_opens_exactly_one_link() {
    let mut opener = RecordingOpener::default();
    share_via(ShareChannel::WhatsApp, &first_light(None), &mut opener);
    assert_eq!(opener.opened.len(), 1);
    assert!(opener.opened[0].starts_with("https://api.whatsapp.com/send?text="));
}

#[test]
fn download_opens_hd_url_when_present() {
    let mut opener = RecordingOpener::default();
    assert!(download(&first_light(Some("https://x/hd.jpg")), &mut opener));
    assert_eq!(opener.opened, vec!["https://x/hd.jpg".to_owned()]);
}

#[test]
fn download_without_hd_url_is_a_no_op() {
    let mut opener = RecordingOpener::default();
    assert!(!download(&first_light(None), &mut opener));
    assert!(opener.opened.is_empty());
}

#[test]
fn channel_labels_match_buttons() {
    assert_eq!(ShareChannel::X.label(), "X");
    assert_eq!(ShareChannel::WhatsApp.label(), "WhatsApp");
}
