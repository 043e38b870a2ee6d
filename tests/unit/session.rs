use super::*;
use crate::render::compositor::CompositorOpts;

fn img(v: u8) -> CompositedImage {
    CompositedImage::from_raw(1, vec![v, v, v, 255]).unwrap()
}

#[test]
fn tickets_increase_monotonically() {
    let slot = OutputSlot::new();
    assert_eq!(slot.latest_ticket(), None);
    let a = slot.next_ticket();
    let b = slot.next_ticket();
    assert!(b > a);
    assert_eq!(slot.latest_ticket(), Some(b));
}

#[test]
fn stale_result_never_overwrites_newer_one() {
    let slot = OutputSlot::new();
    let old = slot.next_ticket();
    let new = slot.next_ticket();

    assert!(slot.publish(new, img(2)));
    assert!(!slot.publish(old, img(1)));
    assert_eq!(slot.current(), Some(img(2)));
    assert_eq!(slot.published_ticket(), Some(new));
}

#[test]
fn result_arriving_after_a_newer_request_started_is_dropped() {
    let slot = OutputSlot::new();
    let first = slot.next_ticket();
    let _second = slot.next_ticket();
    assert!(!slot.publish(first, img(1)));
    assert_eq!(slot.current(), None);
}

#[test]
fn same_ticket_publishes_once() {
    let slot = OutputSlot::new();
    let t = slot.next_ticket();
    assert!(slot.publish(t, img(1)));
    assert!(!slot.publish(t, img(9)));
    assert_eq!(slot.current(), Some(img(1)));
}

#[test]
fn session_render_publishes_latest() {
    let session = RenderSession::new(
        Compositor::new(CompositorOpts::default().with_working_resolution(200)).unwrap(),
    );
    let stale = session.begin();
    let r = session
        .render(&EncodingRequest::new("second"), None)
        .unwrap();
    assert!(r.published);

    let late = session
        .render_with_ticket(stale, &EncodingRequest::new("first"), None)
        .unwrap();
    assert!(!late.published);
    assert_eq!(session.current(), Some(r.outcome.image));
}

#[test]
fn concurrent_renders_keep_the_newest_ticket() {
    let session = RenderSession::new(
        Compositor::new(CompositorOpts::default().with_working_resolution(120)).unwrap(),
    );
    let tickets: Vec<_> = (0..4).map(|_| session.begin()).collect();
    let newest = *tickets.last().unwrap();

    let handles: Vec<_> = tickets
        .into_iter()
        .rev()
        .enumerate()
        .map(|(i, t)| {
            let s = session.clone();
            std::thread::spawn(move || {
                s.render_with_ticket(t, &EncodingRequest::new(format!("payload {i}")), None)
                    .unwrap()
                    .published
            })
        })
        .collect();
    let published: usize = handles
        .into_iter()
        .map(|h| usize::from(h.join().unwrap()))
        .sum();

    assert_eq!(published, 1);
    assert_eq!(session.slot().published_ticket(), Some(newest));
}
