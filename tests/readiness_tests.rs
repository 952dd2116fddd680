use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use turntable::*;

const INTERVAL: Duration = Duration::from_millis(10);

fn counting_probe(ready_on: usize) -> (ReadinessProbe, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let probe: ReadinessProbe = Box::new(move || {
        let call = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if call < ready_on {
            Err(TurntableError::ProbeFailed(format!("not built (sample {call})")))
        } else {
            Ok(true)
        }
    });
    (probe, calls)
}

fn wait_for_worker_exit(calls: &Arc<AtomicUsize>) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Arc::strong_count(calls) > 1 {
        assert!(Instant::now() < deadline, "sampling thread never stopped");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn failing_probe_keeps_polling_until_ready() {
    let (probe, calls) = counting_probe(5);
    let mut poller = ReadinessPoller::start(probe, INTERVAL);

    let event = poller
        .wait_ready(Duration::from_secs(5))
        .expect("poller should become ready");

    assert_eq!(event.samples, 5);
    assert!(event.elapsed >= INTERVAL * 4, "fired too early: {:?}", event.elapsed);
    assert_eq!(poller.state(), ReadinessState::Ready);

    wait_for_worker_exit(&calls);
    thread::sleep(INTERVAL * 3);
    assert_eq!(calls.load(Ordering::SeqCst), 5);
    assert!(poller.take_ready().is_none());
}

#[test]
fn cancel_after_ready_changes_nothing() {
    let (probe, _calls) = counting_probe(1);
    let mut poller = ReadinessPoller::start(probe, INTERVAL);
    assert!(poller.wait_ready(Duration::from_secs(5)).is_some());

    poller.cancel();
    poller.cancel();

    assert_eq!(poller.state(), ReadinessState::Ready);
    assert_eq!(poller.samples(), 1);
    assert!(poller.take_ready().is_none());
}

#[test]
fn cancel_before_ready_stops_sampling() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut poller = ReadinessPoller::start(
        Box::new(move || -> turntable::Result<bool> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }),
        INTERVAL,
    );
    thread::sleep(INTERVAL * 3);

    poller.cancel();
    poller.cancel();
    wait_for_worker_exit(&calls);
    let sampled = calls.load(Ordering::SeqCst);
    thread::sleep(INTERVAL * 3);

    assert_eq!(calls.load(Ordering::SeqCst), sampled);
    assert_eq!(poller.state(), ReadinessState::Cancelled);
    assert!(poller.take_ready().is_none());
}

#[test]
fn cancel_wakes_a_long_sleep() {
    let (probe, calls) = counting_probe(1);
    let poller = ReadinessPoller::start(probe, Duration::from_secs(60));

    poller.cancel();

    wait_for_worker_exit(&calls);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn dropping_the_poller_cancels_it() {
    let (probe, calls) = counting_probe(usize::MAX);
    let poller = ReadinessPoller::start(probe, Duration::from_secs(60));

    drop(poller);

    wait_for_worker_exit(&calls);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn ready_event_is_taken_once() {
    let (probe, _calls) = counting_probe(1);
    let mut poller = ReadinessPoller::start(probe, INTERVAL);

    let deadline = Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(event) = poller.take_ready() {
            break event;
        }
        assert!(Instant::now() < deadline, "ready event never arrived");
        thread::sleep(Duration::from_millis(1));
    };

    assert_eq!(event.samples, 1);
    assert!(poller.take_ready().is_none());
    assert!(poller.wait_ready(INTERVAL).is_none());
}

#[test]
fn panicking_probe_keeps_polling_until_ready() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut poller = ReadinessPoller::start(
        Box::new(move || -> turntable::Result<bool> {
            let call = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if call < 3 {
                panic!("light probe accessed before construction");
            }
            Ok(true)
        }),
        INTERVAL,
    );

    let event = poller
        .wait_ready(Duration::from_secs(5))
        .expect("poller should survive probe panics");

    assert_eq!(event.samples, 3);
    assert_eq!(poller.state(), ReadinessState::Ready);
    wait_for_worker_exit(&calls);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
