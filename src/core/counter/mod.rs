use std::ffi::c_int;

use tracing::instrument;

use crate::core::result::CounterError;

/// An accumulating integer whose storage is owned by the caller.
///
/// The layout is fixed: one C `int`, nothing else, so C code can declare the
/// same struct and hand a pointer to it across the boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub count: c_int,
}

impl Counter {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    pub const fn count(&self) -> c_int {
        self.count
    }

    #[instrument(name = "init_counter", level = "debug")]
    pub fn init(&mut self) {
        self.count = 0;
        tracing::debug!("Counter initialized to: {}", self.count);
    }

    /// Adds one and returns the new value.
    ///
    /// Fails with [`CounterError::Overflow`] once `count` is `c_int::MAX`; the
    /// value is left untouched in that case.
    #[instrument(name = "increment_counter", level = "debug")]
    pub fn increment(&mut self) -> Result<c_int, CounterError> {
        let Some(next) = self.count.checked_add(1) else {
            tracing::warn!("Counter increment rejected at: {}", self.count);
            return Err(CounterError::Overflow { count: self.count });
        };
        self.count = next;
        tracing::debug!("Counter incremented to: {}", self.count);
        Ok(next)
    }
}
