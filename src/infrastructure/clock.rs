//! Wall-clock adapter

use std::time::Instant;

use crate::application::ports::Clock;

/// Clock backed by the monotonic system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
