//! A counter exposed to C callers.
//!
//! The caller owns the storage for a [`Counter`]; this crate only initializes
//! and mutates it. Every operation reports its outcome as a [`ResultCode`].

pub mod core;
pub mod ffi;


pub use crate::core::counter::Counter;
pub use crate::core::result::{CounterError, ResultCode, UnknownResultCode};
pub use crate::ffi::{foo_increment, foo_init};
