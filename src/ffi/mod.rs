//! Entry points for C callers.
//!
//! Both functions keep their Rust names in the symbol table and return a
//! [`ResultCode`] encoded as a C `int`. Neither allocates nor panics.

use std::ffi::c_int;

use crate::core::counter::Counter;
use crate::core::result::{CounterError, ResultCode};

/// Sets `counter->count` to 0.
///
/// Returns `FOO_NULL_REFERENCE` if `counter` is null, `FOO_OK` otherwise.
/// The storage does not need to hold a valid value beforehand.
///
/// # Safety
///
/// A non-null `counter` must be aligned and valid for writes of a
/// [`Counter`] for the duration of the call, and must not be accessed
/// concurrently.
#[no_mangle]
pub unsafe extern "C" fn foo_init(counter: *mut Counter) -> c_int {
    let result = non_null(counter).map(|counter| {
        // SAFETY: the caller guarantees aligned storage valid for writes.
        // `write` never reads the old, possibly uninitialized, value.
        unsafe { counter.write(Counter::new()) };
        tracing::debug!("Counter initialized at: {:p}", counter);
    });
    ResultCode::from(result).code()
}

/// Adds one to `counter->count`.
///
/// Returns `FOO_NULL_REFERENCE` if `counter` is null and `FOO_OVERFLOW` if the
/// count is already `INT_MAX`, leaving it unchanged.
///
/// # Safety
///
/// A non-null `counter` must be aligned, valid for reads and writes, and
/// previously initialized by [`foo_init`]. It must not be accessed
/// concurrently.
#[no_mangle]
pub unsafe extern "C" fn foo_increment(counter: *mut Counter) -> c_int {
    let result = non_null(counter).and_then(|counter| {
        // SAFETY: the caller guarantees a live, initialized, unaliased Counter.
        let counter = unsafe { &mut *counter };
        counter.increment()
    });
    ResultCode::from(result).code()
}

fn non_null(counter: *mut Counter) -> Result<*mut Counter, CounterError> {
    if counter.is_null() {
        tracing::warn!("Rejected null counter pointer");
        return Err(CounterError::NullReference);
    }
    Ok(counter)
}
