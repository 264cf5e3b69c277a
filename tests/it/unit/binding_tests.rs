//! Unit tests for event source binding and subscription lifecycle.

use crate::helpers::{RecordingSource, new_journal};
use interactor_style::{Channel, EventData, EventSource, HeadlessInteractor, InteractorStyle};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_bind_subscribes_every_channel_once() {
    let source = HeadlessInteractor::new();
    let style = InteractorStyle::new();

    style.bind(Some(source.clone()));

    assert!(style.has_source());
    assert_eq!(style.subscription_count(), Channel::COUNT);
    assert_eq!(source.subscription_count(), Channel::COUNT);
    for channel in Channel::ALL {
        assert_eq!(source.subscription_count_for(channel), 1, "{}", channel);
    }
}

#[test]
fn test_subscriptions_follow_channel_order() {
    let journal = new_journal();
    let source = RecordingSource::new("a", journal.clone());
    let style = InteractorStyle::new();

    style.bind(Some(source.clone()));

    let expected: Vec<String> = Channel::ALL
        .iter()
        .map(|c| format!("a:subscribe:{}", c))
        .collect();
    assert_eq!(*journal.borrow(), expected);
}

#[test]
fn test_rebind_releases_old_before_subscribing_new() {
    let journal = new_journal();
    let a = RecordingSource::new("a", journal.clone());
    let b = RecordingSource::new("b", journal.clone());
    let style = InteractorStyle::new();

    style.bind(Some(a.clone()));
    journal.borrow_mut().clear();
    style.bind(Some(b.clone()));

    let entries = journal.borrow().clone();
    let last_release = entries
        .iter()
        .rposition(|e| e.starts_with("a:release:"))
        .expect("old source was released");
    let first_subscribe = entries
        .iter()
        .position(|e| e.starts_with("b:subscribe:"))
        .expect("new source was subscribed");

    assert!(last_release < first_subscribe);
    assert_eq!(
        entries.iter().filter(|e| e.starts_with("a:release:")).count(),
        Channel::COUNT
    );
    assert_eq!(a.live_subscriptions(), 0);
    assert_eq!(b.live_subscriptions(), Channel::COUNT);
    assert_eq!(style.subscription_count(), Channel::COUNT);
}

#[test]
fn test_release_happens_in_acquisition_order() {
    let journal = new_journal();
    let source = RecordingSource::new("a", journal.clone());
    let style = InteractorStyle::new();

    style.bind(Some(source.clone()));
    journal.borrow_mut().clear();
    style.unbind();

    let expected: Vec<String> = Channel::ALL
        .iter()
        .map(|c| format!("a:release:{}", c))
        .collect();
    assert_eq!(*journal.borrow(), expected);
}

#[test]
fn test_bind_none_detaches() {
    let source = HeadlessInteractor::new();
    let style = InteractorStyle::new();

    style.bind(Some(source.clone()));
    style.bind(None);

    assert!(!style.has_source());
    assert_eq!(style.subscription_count(), 0);
    assert_eq!(source.subscription_count(), 0);
}

#[test]
fn test_bind_same_source_is_noop() {
    let journal = new_journal();
    let source = RecordingSource::new("a", journal.clone());
    let style = InteractorStyle::new();

    style.bind(Some(source.clone()));
    let entries_after_first = journal.borrow().len();
    style.bind(Some(source.clone()));

    assert_eq!(journal.borrow().len(), entries_after_first);
    assert_eq!(source.live_subscriptions(), Channel::COUNT);
}

#[test]
fn test_bind_none_when_unbound_is_noop() {
    let style = InteractorStyle::new();
    style.bind(None);
    assert_eq!(style.subscription_count(), 0);
}

#[test]
fn test_dispatch_invokes_installed_handler() {
    let source = HeadlessInteractor::new();
    let style = InteractorStyle::new();
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    style.set_handler(Channel::MouseMove, move |_, data| {
        assert_eq!(data.position.x, 5.0);
        c.set(c.get() + 1);
    });

    style.bind(Some(source.clone()));
    source.mouse_move(5.0, 7.0);
    source.mouse_move(5.0, 9.0);

    assert_eq!(calls.get(), 2);
}

#[test]
fn test_missing_handler_is_silent() {
    let source = HeadlessInteractor::new();
    let style = InteractorStyle::new();
    style.bind(Some(source.clone()));

    assert!(!style.has_handler(Channel::Pinch));
    source.emit(Channel::Pinch, EventData::at(1.0, 1.0));
    source.emit(Channel::Move3D, EventData::default());
    assert_eq!(source.render_count(), 0);
}

#[test]
fn test_char_handler_is_built_in() {
    let style = InteractorStyle::new();
    assert!(style.has_handler(Channel::Char));
    assert!(!style.has_handler(Channel::KeyPress));
}

#[test]
fn test_unbound_source_stops_dispatch() {
    let source = HeadlessInteractor::new();
    let style = InteractorStyle::new();
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    style.set_handler(Channel::Timer, move |_, _| c.set(c.get() + 1));

    style.bind(Some(source.clone()));
    source.emit(Channel::Timer, EventData::default());
    style.unbind();
    source.emit(Channel::Timer, EventData::default());

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_drop_releases_subscriptions() {
    let source = HeadlessInteractor::new();
    {
        let style = InteractorStyle::new();
        style.bind(Some(source.clone()));
        assert_eq!(source.subscription_count(), Channel::COUNT);
    }
    assert_eq!(source.subscription_count(), 0);
}

#[test]
fn test_two_styles_share_one_source() {
    let source = HeadlessInteractor::new();
    let first = InteractorStyle::new();
    let second = InteractorStyle::new();

    first.bind(Some(source.clone()));
    second.bind(Some(source.clone()));
    assert_eq!(source.subscription_count(), 2 * Channel::COUNT);

    first.unbind();
    assert_eq!(source.subscription_count(), Channel::COUNT);
    assert!(second.has_source());
}

#[test]
fn test_source_trait_object_identity() {
    let source = HeadlessInteractor::new();
    let as_trait: Rc<dyn EventSource> = source.clone();
    let style = InteractorStyle::new();

    style.bind(Some(source.clone()));
    style.bind(Some(as_trait));

    // Same allocation through a different pointer type is still the same source
    assert_eq!(source.subscription_count(), Channel::COUNT);
}
