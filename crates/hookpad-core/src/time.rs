//! Clock abstraction so latency measurement and result timestamps are
//! injectable rather than read from ambient system time.
//!
//! Production code uses [`RealClock`]; tests inject [`TestClock`] for
//! deterministic timestamps.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant, SystemTime},
};

/// Time source for duration measurements and timestamps.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current instant for duration measurements.
    fn now(&self) -> Instant;

    /// Current system time for timestamps.
    fn now_system(&self) -> SystemTime;
}

/// Production clock backed by system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealClock;

impl RealClock {
    /// Creates a new real clock instance.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for RealClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn now_system(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Controllable clock for deterministic tests.
///
/// Both time readings advance together from a fixed starting point; time
/// only moves when [`TestClock::advance`] is called.
#[derive(Debug, Clone)]
pub struct TestClock {
    offset_ns: Arc<AtomicU64>,
    base_instant: Instant,
    base_system: SystemTime,
}

impl TestClock {
    /// Creates a test clock starting at the current system time.
    pub fn new() -> Self {
        Self::with_start_time(SystemTime::now())
    }

    /// Creates a test clock starting at a specific system time.
    pub fn with_start_time(start: SystemTime) -> Self {
        Self {
            offset_ns: Arc::new(AtomicU64::new(0)),
            base_instant: Instant::now(),
            base_system: start,
        }
    }

    /// Advances the clock by the specified duration.
    pub fn advance(&self, duration: Duration) {
        let duration_ns =
            u64::try_from(duration.as_nanos().min(u128::from(u64::MAX))).unwrap_or(u64::MAX);
        self.offset_ns.fetch_add(duration_ns, Ordering::AcqRel);
    }

    /// Returns elapsed time since clock creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.offset_ns.load(Ordering::Acquire))
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }

    fn now_system(&self) -> SystemTime {
        self.base_system + self.elapsed()
    }
}
