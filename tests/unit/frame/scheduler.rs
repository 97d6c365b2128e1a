use super::*;
use std::cell::RefCell;

#[test]
fn runs_tasks_until_done() {
    let mut sched = FrameScheduler::new();
    let calls = Rc::new(Cell::new(0u32));
    let c = Rc::clone(&calls);
    let handle = sched.spawn(move |_| {
        c.set(c.get() + 1);
        if c.get() == 3 {
            TaskStatus::Done
        } else {
            TaskStatus::Continue
        }
    });

    for i in 0..5 {
        sched.tick(f64::from(i) / 60.0);
    }
    assert_eq!(calls.get(), 3);
    assert_eq!(handle.state(), TaskState::Finished);
    assert!(sched.is_idle());
}

#[test]
fn cancel_stops_future_callbacks() {
    let mut sched = FrameScheduler::new();
    let calls = Rc::new(Cell::new(0u32));
    let c = Rc::clone(&calls);
    let handle = sched.spawn(move |_| {
        c.set(c.get() + 1);
        TaskStatus::Continue
    });

    sched.tick(0.0);
    sched.tick(0.016);
    handle.cancel();
    assert_eq!(handle.state(), TaskState::Cancelled);
    sched.tick(0.032);
    sched.tick(0.048);
    assert_eq!(calls.get(), 2);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn cancel_from_earlier_task_takes_effect_same_frame() {
    let mut sched = FrameScheduler::new();
    let victim_calls = Rc::new(Cell::new(0u32));
    let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));

    let s = Rc::clone(&slot);
    sched.spawn(move |_| {
        if let Some(h) = s.borrow().as_ref() {
            h.cancel();
        }
        TaskStatus::Done
    });
    let v = Rc::clone(&victim_calls);
    let victim = sched.spawn(move |_| {
        v.set(v.get() + 1);
        TaskStatus::Continue
    });
    *slot.borrow_mut() = Some(victim.clone());

    assert_eq!(sched.tick(0.0), 1);
    assert_eq!(victim_calls.get(), 0);
    assert_eq!(victim.state(), TaskState::Cancelled);
}

#[test]
fn cancel_after_finish_is_noop() {
    let mut sched = FrameScheduler::new();
    let handle = sched.spawn(|_| TaskStatus::Done);
    sched.tick(0.0);
    handle.cancel();
    assert_eq!(handle.state(), TaskState::Finished);
}

#[test]
fn delta_tracks_previous_tick() {
    let mut sched = FrameScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    sched.spawn(move |t| {
        s.borrow_mut().push(t.delta);
        TaskStatus::Continue
    });
    sched.tick(1.0);
    sched.tick(1.5);
    assert_eq!(*seen.borrow(), vec![0.0, 0.5]);
}

#[test]
fn dropping_handle_does_not_cancel() {
    let mut sched = FrameScheduler::new();
    drop(sched.spawn(|_| TaskStatus::Continue));
    assert_eq!(sched.tick(0.0), 1);
    assert_eq!(sched.pending(), 1);
}
