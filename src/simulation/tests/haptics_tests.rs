use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct RecordingPlatform {
    unsupported: bool,
    broken: bool,
    calls: RefCell<Vec<Vibration>>,
}

impl VibrationPlatform for RecordingPlatform {
    fn is_supported(&self) -> bool {
        !self.unsupported
    }

    fn vibrate(&self, vibration: &Vibration) -> Result<(), String> {
        if self.broken {
            return Err("vibrate threw".to_string());
        }
        self.calls.borrow_mut().push(vibration.clone());
        Ok(())
    }
}

struct Settings(Option<&'static str>);

impl SettingsStore for Settings {
    fn get(&self, key: &str) -> Option<String> {
        assert_eq!(key, INTENSITY_KEY);
        self.0.map(str::to_string)
    }
}

#[derive(Default)]
struct ScriptedLoader {
    loaded: bool,
    in_flight: bool,
    refuse_start: bool,
    began: usize,
    /// Handed out by `take_outcome` once a load has begun
    outcome: Option<Result<(), String>>,
}

impl HelperLoader for ScriptedLoader {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn load_in_flight(&self) -> bool {
        self.in_flight
    }

    fn begin_load(&mut self) -> Result<(), String> {
        if self.refuse_start {
            return Err("no <head>".to_string());
        }
        self.began += 1;
        Ok(())
    }

    fn take_outcome(&mut self) -> Option<Result<(), String>> {
        if self.began == 0 {
            return None;
        }
        self.outcome.take()
    }
}

type Haptics = HapticFeedback<RecordingPlatform, Settings, ScriptedLoader>;

fn haptics(intensity: Option<&'static str>) -> Haptics {
    HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(intensity),
        ScriptedLoader::default(),
    )
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce(&Haptics) + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move |_: &Haptics| c.set(c.get() + 1))
}

fn calls(h: &Haptics) -> Vec<Vibration> {
    h.platform().calls.borrow().clone()
}

#[test]
fn zero_intensity_never_reaches_the_platform() {
    let h = haptics(Some("0"));
    assert!(!h.vibrate_pattern(Pattern::Error));
    assert!(!h.vibrate(&Vibration::Pulse(15)));
    assert!(calls(&h).is_empty());
}

#[test]
fn full_intensity_sends_base_duration() {
    let h = haptics(Some("100"));
    assert!(h.vibrate(&Vibration::Pulse(15)));
    assert!(h.vibrate(&Vibration::Pulse(500)));
    assert_eq!(calls(&h), vec![Vibration::Pulse(15), Vibration::Pulse(100)]);
}

#[test]
fn missing_or_garbage_intensity_behaves_like_fifty() {
    let reference = haptics(Some("50"));
    reference.vibrate_pattern(Pattern::Score);
    let expected = calls(&reference);
    assert_eq!(expected, vec![Vibration::Sequence(vec![25, 5, 25])]);

    for raw in [None, Some("abc"), Some("")] {
        let h = haptics(raw);
        h.vibrate_pattern(Pattern::Score);
        assert_eq!(calls(&h), expected, "setting {raw:?}");
    }
}

#[test]
fn unsupported_platform_is_a_silent_no_op() {
    let h = HapticFeedback::new(
        RecordingPlatform { unsupported: true, ..Default::default() },
        Settings(Some("100")),
        ScriptedLoader::default(),
    );
    assert!(!h.vibrate_pattern(Pattern::Button));
    assert!(calls(&h).is_empty());
}

#[test]
fn platform_errors_are_swallowed() {
    let h = HapticFeedback::new(
        RecordingPlatform { broken: true, ..Default::default() },
        Settings(Some("100")),
        ScriptedLoader::default(),
    );
    assert!(!h.vibrate_pattern(Pattern::Explosion));
}

#[test]
fn already_loaded_runs_callback_immediately() {
    let h = HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(None),
        ScriptedLoader { loaded: true, ..Default::default() },
    );
    let (count, cb) = counter();
    h.ensure_available(0.0, cb);
    assert_eq!(count.get(), 1);
    assert_eq!(h.state(), LoadState::Ready);

    h.fire_due(10_000.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn missing_capability_runs_callback_immediately() {
    let h = HapticFeedback::new(
        RecordingPlatform { unsupported: true, ..Default::default() },
        Settings(None),
        ScriptedLoader::default(),
    );
    let (count, cb) = counter();
    h.ensure_available(0.0, cb);
    assert_eq!(count.get(), 1);
    assert_eq!(h.state(), LoadState::Unavailable);
    assert_eq!(h.loader.borrow().began, 0);
}

#[test]
fn foreign_load_in_flight_waits_one_hundred_ms() {
    let h = HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(None),
        ScriptedLoader { in_flight: true, ..Default::default() },
    );
    let (count, cb) = counter();
    h.ensure_available(1000.0, cb);
    assert_eq!(count.get(), 0);
    assert_eq!(h.state(), LoadState::Loading);

    h.fire_due(1099.0);
    assert_eq!(count.get(), 0);
    h.fire_due(1100.0);
    assert_eq!(count.get(), 1);
    h.fire_due(5000.0);
    assert_eq!(count.get(), 1);
    assert_eq!(h.loader.borrow().began, 0);
}

#[test]
fn successful_load_settles_before_callback() {
    let h = haptics(None);
    let (count, cb) = counter();
    h.ensure_available(0.0, cb);
    assert_eq!(h.loader.borrow().began, 1);
    assert_eq!(h.state(), LoadState::Loading);

    h.finish_load(200.0, Ok(()));
    h.fire_due(249.0);
    assert_eq!(count.get(), 0);
    h.fire_due(250.0);
    assert_eq!(count.get(), 1);
    assert!(h.is_ready());

    h.fire_due(1000.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn failed_load_still_runs_callback_once() {
    let h = haptics(None);
    let (count, cb) = counter();
    h.ensure_available(0.0, cb);
    h.finish_load(30.0, Err("404".to_string()));
    assert_eq!(count.get(), 1);
    assert_eq!(h.state(), LoadState::Unavailable);

    // A late duplicate outcome changes nothing
    h.finish_load(40.0, Ok(()));
    h.fire_due(1000.0);
    assert_eq!(count.get(), 1);
    assert_eq!(h.state(), LoadState::Unavailable);
}

#[test]
fn load_that_cannot_start_degrades_immediately() {
    let h = HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(None),
        ScriptedLoader { refuse_start: true, ..Default::default() },
    );
    let (count, cb) = counter();
    h.ensure_available(0.0, cb);
    assert_eq!(count.get(), 1);
    assert_eq!(h.state(), LoadState::Unavailable);
}

#[test]
fn loader_outcome_is_polled_each_frame() {
    let h = HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(None),
        ScriptedLoader { outcome: Some(Ok(())), ..Default::default() },
    );
    let (count, cb) = counter();
    h.ensure_available(0.0, cb);

    h.fire_due(16.0);
    assert_eq!(count.get(), 0);
    h.fire_due(66.0);
    assert_eq!(count.get(), 1);
    assert!(h.is_ready());
}

#[test]
fn queued_callbacks_flush_together_exactly_once() {
    let h = haptics(None);
    let (first, cb1) = counter();
    let (second, cb2) = counter();
    h.ensure_available(0.0, cb1);
    h.ensure_available(5.0, cb2);
    assert_eq!(h.waiting(), 2);
    assert_eq!(h.loader.borrow().began, 1);

    h.finish_load(10.0, Ok(()));
    h.fire_due(60.0);
    assert_eq!((first.get(), second.get()), (1, 1));
    assert_eq!(h.waiting(), 0);
}

#[test]
fn ready_callback_can_vibrate_menu_pattern() {
    let h = HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(Some("50")),
        ScriptedLoader { loaded: true, ..Default::default() },
    );
    h.ensure_available(0.0, |h: &Haptics| {
        if h.is_ready() {
            h.vibrate_pattern(Pattern::Menu);
        }
    });
    assert_eq!(calls(&h), vec![Vibration::Pulse(5)]);
}

#[test]
fn callbacks_may_call_back_into_the_same_instance() {
    let h = HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(Some("100")),
        ScriptedLoader { outcome: Some(Ok(())), ..Default::default() },
    );
    let (nested, nested_cb) = counter();
    h.ensure_available(0.0, move |h: &Haptics| {
        h.vibrate_pattern(Pattern::Menu);
        // Ready by now, so this runs inline during the flush
        h.ensure_available(60.0, nested_cb);
    });

    h.fire_due(10.0);
    h.fire_due(60.0);
    assert_eq!(nested.get(), 1);
    assert_eq!(calls(&h), vec![Vibration::Pulse(10)]);
    assert_eq!(h.waiting(), 0);
}

#[test]
fn callback_queued_during_a_flush_waits_for_the_next_round() {
    let h = HapticFeedback::new(
        RecordingPlatform::default(),
        Settings(None),
        ScriptedLoader { in_flight: true, ..Default::default() },
    );
    let (inner, inner_cb) = counter();
    h.ensure_available(0.0, move |h: &Haptics| {
        // Helper still missing: state is back to Unloaded here
        h.ensure_available(100.0, inner_cb);
    });
    h.fire_due(100.0);

    assert_eq!(h.state(), LoadState::Loading);
    assert_eq!(h.waiting(), 1);
    assert_eq!(inner.get(), 0);
}
