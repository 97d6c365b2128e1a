use super::*;
use crate::frame::scheduler::TaskState;

#[test]
fn tween_hits_endpoints() {
    let tw = Tween {
        from: 0.0,
        to: 56.0,
        duration: 2.0,
        ease: Ease::EaseOut,
    };
    assert_eq!(tw.sample(0.0), 0.0);
    assert_eq!(tw.sample(2.0), 56.0);
    assert_eq!(tw.sample(5.0), 56.0);
    assert!(tw.sample(1.0) > 28.0);
}

#[test]
fn animate_reaches_target_after_duration() {
    let mut sched = FrameScheduler::new();
    let v = MotionValue::new(0.0);
    let handle = animate(&mut sched, &v, 56.0, 2.0, Ease::EaseOut);

    let mut now = 10.0;
    let mut last = v.get();
    while handle.is_running() {
        sched.tick(now);
        assert!(v.get() >= last, "ease-out never moves backwards");
        last = v.get();
        now += 1.0 / 60.0;
        assert!(now < 20.0, "animation must finish");
    }
    assert_eq!(v.get(), 56.0);
    assert_eq!(handle.state(), TaskState::Finished);
}

#[test]
fn cancel_leaves_last_sample() {
    let mut sched = FrameScheduler::new();
    let v = MotionValue::new(0.0);
    let handle = animate(&mut sched, &v, 100.0, 2.0, Ease::Linear);
    sched.tick(0.0);
    sched.tick(1.0);
    assert_eq!(v.get(), 50.0);
    handle.cancel();
    sched.tick(1.5);
    assert_eq!(v.get(), 50.0);
}

#[test]
fn zero_duration_sets_immediately() {
    let mut sched = FrameScheduler::new();
    let v = MotionValue::new(3.0);
    let handle = animate(&mut sched, &v, 9.0, 0.0, Ease::Linear);
    assert_eq!(v.get(), 9.0);
    assert_eq!(handle.state(), TaskState::Finished);
    assert!(sched.is_idle());
}

#[test]
fn animates_from_current_value() {
    let mut sched = FrameScheduler::new();
    let v = MotionValue::new(40.0);
    animate(&mut sched, &v, 0.0, 1.0, Ease::Linear);
    sched.tick(0.0);
    assert_eq!(v.get(), 40.0);
    sched.tick(0.5);
    assert_eq!(v.get(), 20.0);
}

#[test]
fn motion_value_versions_only_on_change() {
    let v = MotionValue::new(1.0);
    let shared = v.clone();
    v.set(1.0);
    assert_eq!(shared.version(), 0);
    v.set(2.0);
    assert_eq!(shared.version(), 1);
    assert_eq!(shared.get(), 2.0);
}
