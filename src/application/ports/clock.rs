//! Clock port interface

use std::time::Instant;

/// Source of the current time, used for cache expiry
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
