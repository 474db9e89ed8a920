//! Time sources for refund and start-time checks.
//!
//! Every time-dependent rule reads "now" through a [`Clock`] so tests can pin
//! the instant and exercise refund boundaries deterministically.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// A source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always returns the same instant until moved.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use courtside::{Clock, FixedClock};
///
/// let start = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
/// let clock = FixedClock::new(start);
/// assert_eq!(clock.now(), start);
///
/// clock.advance(Duration::hours(3));
/// assert_eq!(clock.now(), start + Duration::hours(3));
/// ```
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock pinned at `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut guard = self.instant.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
