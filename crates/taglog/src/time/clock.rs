use std::cell::Cell;
use std::time::Instant;

use state::InitCell;

/// Source of millisecond timestamps.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch.
    fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

static EPOCH: InitCell<Instant> = InitCell::new();

/// Monotonic wall-clock-independent time, in whole milliseconds since the
/// first use of any `MonotonicClock` in the process.
#[derive(Debug, Default, Copy, Clone)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_millis(&self) -> i64 {
        let epoch = EPOCH.get_or_init(Instant::now);
        let elapsed = Instant::now().saturating_duration_since(*epoch);
        i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}
