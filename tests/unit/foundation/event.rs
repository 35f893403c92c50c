use super::*;

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&'static str) -> Box<dyn Fn(&u32)>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let make = {
        let log = Rc::clone(&log);
        move |tag: &'static str| -> Box<dyn Fn(&u32)> {
            let log = Rc::clone(&log);
            Box::new(move |v: &u32| log.borrow_mut().push(format!("{tag}:{v}")))
        }
    };
    (log, make)
}

#[test]
fn listeners_run_in_registration_order() {
    let event = Event::<u32>::new();
    let (log, make) = recorder();
    event.add_event_listener(make("a"));
    event.add_event_listener(make("b"));

    event.raise_event(&7);
    assert_eq!(*log.borrow(), vec!["a:7", "b:7"]);
    assert_eq!(event.number_of_listeners(), 2);
}

#[test]
fn removed_listener_is_not_called() {
    let event = Event::<u32>::new();
    let (log, make) = recorder();
    let a = event.add_event_listener(make("a"));
    event.add_event_listener(make("b"));

    assert!(event.remove_event_listener(a));
    assert!(!event.remove_event_listener(a));
    event.raise_event(&1);
    assert_eq!(*log.borrow(), vec!["b:1"]);
}

#[test]
fn dropping_subscription_detaches_listener() {
    let event = Event::<u32>::new();
    let (log, make) = recorder();
    let sub = event.subscribe(make("s"));
    event.raise_event(&1);
    drop(sub);
    event.raise_event(&2);

    assert_eq!(*log.borrow(), vec!["s:1"]);
    assert_eq!(event.number_of_listeners(), 0);
}

#[test]
fn explicit_unsubscribe_detaches_listener() {
    let event = Event::<u32>::new();
    let (log, make) = recorder();
    let sub = event.subscribe(make("s"));
    sub.unsubscribe();
    event.raise_event(&3);
    assert!(log.borrow().is_empty());
}

#[test]
fn subscription_outliving_event_is_harmless() {
    let (_log, make) = recorder();
    let sub = {
        let event = Event::<u32>::new();
        event.subscribe(make("s"))
    };
    drop(sub);
}

#[test]
fn listener_removed_during_raise_is_skipped() {
    let event = Rc::new(Event::<u32>::new());
    let (log, make) = recorder();
    let victim = Rc::new(Cell::new(None));

    {
        let event_weak = Rc::downgrade(&event);
        let victim = Rc::clone(&victim);
        event.add_event_listener(move |_| {
            if let (Some(event), Some(id)) = (event_weak.upgrade(), victim.get()) {
                event.remove_event_listener(id);
            }
        });
    }
    victim.set(Some(event.add_event_listener(make("victim"))));

    event.raise_event(&1);
    assert!(log.borrow().is_empty());
    assert_eq!(event.number_of_listeners(), 1);
}

#[test]
fn listener_added_during_raise_waits_for_next_raise() {
    let event = Rc::new(Event::<u32>::new());
    let (log, make) = recorder();
    let added = Rc::new(Cell::new(false));

    {
        let event_weak = Rc::downgrade(&event);
        let added = Rc::clone(&added);
        event.add_event_listener(move |_| {
            if added.replace(true) {
                return;
            }
            if let Some(event) = event_weak.upgrade() {
                event.add_event_listener(make("late"));
            }
        });
    }

    event.raise_event(&1);
    assert!(log.borrow().is_empty());
    event.raise_event(&2);
    assert_eq!(*log.borrow(), vec!["late:2"]);
}
