//! Injectable source of "now".
//!
//! Checkup computations never read the wall clock directly; they take a
//! [`Clock`] so tests and the report binary can pin the evaluation instant.

use chrono::{DateTime, FixedOffset, Local};
use std::sync::Arc;

pub trait Clock {
    /// Current instant, carrying the offset that "today" is judged in.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the system's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_frozen() {
        let instant = DateTime::parse_from_rfc3339("2024-01-01T08:30:00+02:00").unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_clock_through_trait_objects() {
        let instant = DateTime::parse_from_rfc3339("2024-06-30T23:59:59Z").unwrap();
        let boxed: Box<dyn Clock> = Box::new(FixedClock::new(instant));
        let shared: Arc<dyn Clock> = Arc::new(FixedClock::new(instant));
        assert_eq!(boxed.now(), instant);
        assert_eq!((&shared).now(), instant);
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
