//! HapticFeedback - scaled vibration with a lazily loaded helper
//!
//! Vibration is strictly optional: every failure path ends in a silent no-op
//! and every `ensure_available` callback runs exactly once, whatever happens
//! to the helper load.

use std::cell::{Cell, RefCell};

use crate::core::{console, TimerQueue};

use super::patterns::{parse_intensity, Pattern, Vibration};

/// Settings key holding the 0..=100 intensity
pub const INTENSITY_KEY: &str = "vibration";

/// Wait applied when someone else is already loading the helper
const IN_FLIGHT_WAIT_MS: f64 = 100.0;

/// Settle time between a successful load and flushing callbacks
const SETTLE_MS: f64 = 50.0;

/// Device vibration primitive.
pub trait VibrationPlatform {
    fn is_supported(&self) -> bool;

    fn vibrate(&self, vibration: &Vibration) -> Result<(), String>;
}

/// Read-only view of persisted user settings.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Loads the vibration helper resource on demand.
pub trait HelperLoader {
    /// The helper is already present.
    fn is_loaded(&self) -> bool;

    /// A load was started elsewhere and has not been observed to finish.
    fn load_in_flight(&self) -> bool;

    /// Start loading. An `Err` means the load could not even begin.
    fn begin_load(&mut self) -> Result<(), String>;

    /// Outcome of the load started by `begin_load`, reported once.
    fn take_outcome(&mut self) -> Option<Result<(), String>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Ready,
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HapticEvent {
    /// Foreign load wait is over, flush regardless of outcome
    InFlightElapsed,
    /// Our load succeeded and has settled
    Settled,
}

pub type ReadyCallback<P, S, L> = Box<dyn FnOnce(&HapticFeedback<P, S, L>)>;

/// Every method takes `&self`: ready callbacks receive the same instance and
/// may call back into it, including `ensure_available`.
pub struct HapticFeedback<P, S, L> {
    platform: P,
    settings: S,
    loader: RefCell<L>,
    state: Cell<LoadState>,
    /// True while `state == Loading` because of our own `begin_load`
    own_load: Cell<bool>,
    waiting: RefCell<Vec<ReadyCallback<P, S, L>>>,
    timers: RefCell<TimerQueue<HapticEvent>>,
}

impl<P, S, L> HapticFeedback<P, S, L>
where
    P: VibrationPlatform,
    S: SettingsStore,
    L: HelperLoader,
{
    pub fn new(platform: P, settings: S, loader: L) -> Self {
        Self {
            platform,
            settings,
            loader: RefCell::new(loader),
            state: Cell::new(LoadState::Unloaded),
            own_load: Cell::new(false),
            waiting: RefCell::new(Vec::new()),
            timers: RefCell::new(TimerQueue::new()),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    pub fn is_ready(&self) -> bool {
        self.state.get() == LoadState::Ready
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Callbacks still waiting for the helper.
    pub fn waiting(&self) -> usize {
        self.waiting.borrow().len()
    }

    /// Current intensity, read fresh from settings on every call.
    pub fn intensity(&self) -> u32 {
        parse_intensity(self.settings.get(INTENSITY_KEY).as_deref())
    }

    /// Scale and send a vibration. Returns true if the platform accepted it.
    pub fn vibrate(&self, vibration: &Vibration) -> bool {
        if !self.platform.is_supported() {
            return false;
        }
        let intensity = self.intensity();
        if intensity == 0 {
            return false;
        }
        match self.platform.vibrate(&vibration.scaled(intensity)) {
            Ok(()) => true,
            Err(e) => {
                console::debug(&format!("Vibration not supported: {e}"));
                false
            }
        }
    }

    pub fn vibrate_pattern(&self, pattern: Pattern) -> bool {
        self.vibrate(&pattern.vibration())
    }

    /// Run `callback` once the helper is usable, or once it is clear it
    /// never will be. Runs synchronously when the answer is already known.
    pub fn ensure_available<F>(&self, now_ms: f64, callback: F)
    where
        F: FnOnce(&HapticFeedback<P, S, L>) + 'static,
    {
        match self.state.get() {
            LoadState::Ready | LoadState::Unavailable => callback(self),
            LoadState::Loading => self.waiting.borrow_mut().push(Box::new(callback)),
            LoadState::Unloaded => {
                if !self.platform.is_supported() {
                    self.state.set(LoadState::Unavailable);
                    callback(self);
                    return;
                }
                if self.loader.borrow().is_loaded() {
                    self.state.set(LoadState::Ready);
                    callback(self);
                    return;
                }

                self.waiting.borrow_mut().push(Box::new(callback));
                if self.loader.borrow().load_in_flight() {
                    self.state.set(LoadState::Loading);
                    self.own_load.set(false);
                    self.timers
                        .borrow_mut()
                        .schedule(now_ms, IN_FLIGHT_WAIT_MS, HapticEvent::InFlightElapsed);
                    return;
                }

                let started = self.loader.borrow_mut().begin_load();
                match started {
                    Ok(()) => {
                        self.state.set(LoadState::Loading);
                        self.own_load.set(true);
                    }
                    Err(e) => self.fail_load(&e),
                }
            }
        }
    }

    /// Report the outcome of our own helper load.
    pub fn finish_load(&self, now_ms: f64, result: Result<(), String>) {
        if self.state.get() != LoadState::Loading || !self.own_load.get() {
            console::debug("Ignoring helper load outcome outside of a load");
            return;
        }
        self.own_load.set(false);
        match result {
            Ok(()) => self
                .timers
                .borrow_mut()
                .schedule(now_ms, SETTLE_MS, HapticEvent::Settled),
            Err(e) => self.fail_load(&e),
        }
    }

    /// Drive pending loads and timers. Call once per frame.
    pub fn fire_due(&self, now_ms: f64) {
        if self.state.get() == LoadState::Loading && self.own_load.get() {
            let outcome = self.loader.borrow_mut().take_outcome();
            if let Some(outcome) = outcome {
                self.finish_load(now_ms, outcome);
            }
        }

        loop {
            let Some(event) = self.timers.borrow_mut().pop_due(now_ms) else {
                break;
            };
            match event {
                HapticEvent::Settled => {
                    self.state.set(LoadState::Ready);
                    self.flush();
                }
                HapticEvent::InFlightElapsed => {
                    if self.state.get() != LoadState::Loading || self.own_load.get() {
                        continue;
                    }
                    // Re-probe on the next request if it still is not there
                    let loaded = self.loader.borrow().is_loaded();
                    self.state.set(if loaded {
                        LoadState::Ready
                    } else {
                        LoadState::Unloaded
                    });
                    self.flush();
                }
            }
        }
    }

    fn fail_load(&self, err: &str) {
        console::info(&format!("Vibration helper failed to load: {err}"));
        self.state.set(LoadState::Unavailable);
        self.flush();
    }

    /// Callbacks run with no borrow held.
    fn flush(&self) {
        let waiting = std::mem::take(&mut *self.waiting.borrow_mut());
        for callback in waiting {
            callback(self);
        }
    }
}

#[cfg(test)]
#[path = "../tests/haptics_tests.rs"]
mod tests;
