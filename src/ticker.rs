//! Cancellable one-second ticker.

use gloo_timers::callback::Interval;
use log::debug;

/// Something that can start a repeating callback. Dropping the returned
/// handle must cancel it.
pub trait Schedule {
    type Handle;

    fn start(&mut self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser intervals via `gloo-timers`; dropping an [`Interval`] clears it.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalSchedule;

impl Schedule for IntervalSchedule {
    type Handle = Interval;

    fn start(&mut self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, on_tick)
    }
}

/// Holds at most one live handle. Replacing or taking the handle is the
/// cancellation.
pub struct Ticker<S: Schedule = IntervalSchedule> {
    schedule: S,
    handle: Option<S::Handle>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::with_schedule(IntervalSchedule)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schedule> Ticker<S> {
    pub fn with_schedule(schedule: S) -> Self {
        Self {
            schedule,
            handle: None,
        }
    }

    /// Cancels any running handle, then starts a new one with a fresh phase.
    pub fn restart<F>(&mut self, period_ms: u32, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        debug!("Starting ticker every {}ms", period_ms);
        self.handle = Some(self.schedule.start(period_ms, Box::new(on_tick)));
    }

    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            debug!("Ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
