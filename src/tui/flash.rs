//! Timed visual feedback
//!
//! A `Flash` carries a value for a fixed duration after it is created. The
//! event loop drops expired flashes on each tick; nothing ever waits on one.

use std::time::{Duration, Instant};

/// A value that is visible until its duration elapses
#[derive(Debug, Clone)]
pub struct Flash<T> {
    value: T,
    started: Instant,
    duration: Duration,
}

impl<T> Flash<T> {
    pub fn new(value: T, duration: Duration) -> Self {
        Self {
            value,
            started: Instant::now(),
            duration,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_expired(&self) -> bool {
        self.started.elapsed() >= self.duration
    }
}

/// Drop the flash in `slot` once it has expired
pub fn expire<T>(slot: &mut Option<Flash<T>>) {
    if slot.as_ref().is_some_and(Flash::is_expired) {
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn zero_duration_expires_immediately() {
        let flash = Flash::new('x', Duration::ZERO);
        assert!(flash.is_expired());
        assert_eq!(*flash.value(), 'x');
    }

    #[test]
    fn expires_after_duration() {
        let flash = Flash::new((), Duration::from_millis(30));
        assert!(!flash.is_expired());
        thread::sleep(Duration::from_millis(40));
        assert!(flash.is_expired());
    }

    #[test]
    fn expire_clears_only_expired_slots() {
        let mut live = Some(Flash::new(1, Duration::from_secs(60)));
        expire(&mut live);
        assert!(live.is_some());

        let mut dead = Some(Flash::new(2, Duration::ZERO));
        expire(&mut dead);
        assert!(dead.is_none());

        let mut empty: Option<Flash<i32>> = None;
        expire(&mut empty);
        assert!(empty.is_none());
    }
}
