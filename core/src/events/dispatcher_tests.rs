//! Dispatcher contract tests: ordering, fire counts, locks, failure isolation.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Channel, Dispatcher, ListenerCallback};

fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> ListenerCallback {
    let log = Rc::clone(log);
    Box::new(move || {
        log.borrow_mut().push(tag);
        Ok(())
    })
}

#[test]
fn listeners_fire_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    dispatcher.add(Channel::Load, recorder(&log, "first"), -1);
    dispatcher.add(Channel::Load, recorder(&log, "second"), -1);

    dispatcher.fire(Channel::Load);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn counted_listener_expires_after_its_notifications() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    dispatcher.add(Channel::Load, recorder(&log, "twice"), 2);

    dispatcher.fire(Channel::Load);
    dispatcher.fire(Channel::Load);
    dispatcher.fire(Channel::Load);
    assert_eq!(*log.borrow(), vec!["twice", "twice"]);
}

#[test]
fn count_zero_listener_fires_once_before_pruning() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    dispatcher.add(Channel::Load, recorder(&log, "once"), 0);

    dispatcher.fire(Channel::Load);
    dispatcher.fire(Channel::Load);
    assert_eq!(*log.borrow(), vec!["once"]);
}

#[test]
fn locked_channel_drops_notifications() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    dispatcher.add(Channel::Load, recorder(&log, "load"), -1);

    dispatcher.lock(Channel::Load);
    dispatcher.fire(Channel::Load);
    assert!(log.borrow().is_empty(), "locked fire must not be queued");

    dispatcher.unlock(Channel::Load);
    dispatcher.fire(Channel::Load);
    assert_eq!(*log.borrow(), vec!["load"]);
}

#[test]
fn failing_listener_does_not_abort_the_pass() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    dispatcher.add(Channel::Load, Box::new(|| Err("host callback broke".into())), -1);
    dispatcher.add(Channel::Load, recorder(&log, "survivor"), -1);

    dispatcher.fire(Channel::Load);
    dispatcher.fire(Channel::Load);
    assert_eq!(*log.borrow(), vec!["survivor", "survivor"]);
}

#[test]
fn removal_by_token() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    let id = dispatcher.add(Channel::Update, recorder(&log, "gone"), -1);
    dispatcher.add(Channel::Update, recorder(&log, "kept"), -1);

    assert!(dispatcher.remove(Channel::Update, id));
    assert!(!dispatcher.remove(Channel::Update, id));

    dispatcher.fire(Channel::Update);
    assert_eq!(*log.borrow(), vec!["kept"]);
}

#[test]
fn channels_are_independent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    dispatcher.add(Channel::Update, recorder(&log, "update"), -1);

    dispatcher.lock(Channel::Load);
    dispatcher.fire(Channel::Update);
    assert_eq!(*log.borrow(), vec!["update"]);
}
