use super::*;
use crate::clock::manual::ManualClock;

fn drain(clock: &mut ManualClock) -> Vec<ClockEvent> {
    std::iter::from_fn(|| clock.poll()).collect()
}

#[test]
fn ticks_report_elapsed_since_start() {
    let mut clock = ManualClock::new(10.0);
    clock.advance(5.0);
    let h = clock.start();
    assert!(drain(&mut clock).is_empty());

    clock.advance(0.0);
    assert_eq!(
        drain(&mut clock),
        vec![ClockEvent::Tick {
            handle: h,
            elapsed_ms: 0.0
        }]
    );

    clock.step();
    clock.step();
    // frames coalesce: one pending tick per subscription
    assert_eq!(
        drain(&mut clock),
        vec![ClockEvent::Tick {
            handle: h,
            elapsed_ms: 20.0
        }]
    );
}

#[test]
fn cancel_suppresses_pending_tick() {
    let mut clock = ManualClock::default();
    let h = clock.start();
    clock.step();
    clock.cancel(h);
    assert!(drain(&mut clock).is_empty());
    clock.step();
    assert!(drain(&mut clock).is_empty());
}

#[test]
fn stale_handle_never_aliases_new_subscription() {
    let mut clock = ManualClock::default();
    let old = clock.start();
    clock.cancel(old);
    let new = clock.start();
    assert_ne!(old, new);
    clock.step();
    match drain(&mut clock).as_slice() {
        [ClockEvent::Tick { handle, .. }] => assert_eq!(*handle, new),
        other => panic!("unexpected events: {other:?}"),
    }
}

#[test]
fn timeouts_fire_once_at_deadline_before_ticks() {
    let mut clock = ManualClock::default();
    let t = clock.set_timeout(100.0);
    let h = clock.start();

    clock.advance(99.0);
    assert_eq!(
        drain(&mut clock),
        vec![ClockEvent::Tick {
            handle: h,
            elapsed_ms: 99.0
        }]
    );

    clock.advance(1.0);
    assert_eq!(
        drain(&mut clock),
        vec![
            ClockEvent::Timeout { handle: t },
            ClockEvent::Tick {
                handle: h,
                elapsed_ms: 100.0
            },
        ]
    );

    clock.advance(500.0);
    clock.cancel(h);
    assert!(drain(&mut clock).is_empty());
}

#[test]
fn timeouts_are_delivered_in_deadline_order() {
    let mut clock = ManualClock::default();
    let late = clock.set_timeout(30.0);
    let early = clock.set_timeout(10.0);
    clock.advance(50.0);
    assert_eq!(
        drain(&mut clock),
        vec![
            ClockEvent::Timeout { handle: early },
            ClockEvent::Timeout { handle: late },
        ]
    );
}

#[test]
fn cleared_timeout_never_fires() {
    let mut clock = ManualClock::default();
    let t = clock.set_timeout(10.0);
    clock.clear_timeout(t);
    clock.advance(1000.0);
    assert!(drain(&mut clock).is_empty());
}

#[test]
fn zero_and_negative_delays_fire_immediately() {
    let mut clock = ManualClock::default();
    let a = clock.set_timeout(0.0);
    let b = clock.set_timeout(-5.0);
    let events = drain(&mut clock);
    assert_eq!(events.len(), 2);
    assert!(events.contains(&ClockEvent::Timeout { handle: a }));
    assert!(events.contains(&ClockEvent::Timeout { handle: b }));
}
