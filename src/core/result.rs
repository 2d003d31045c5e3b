use std::ffi::c_int;

use thiserror::Error;

/// Outcome of every call that crosses the C boundary.
///
/// The discriminants are part of the ABI and mirror `foo_res_t` in
/// `include/foo.h`. New variants may be appended; existing values never change.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    Ok = 0,
    NullReference = 1,
    Overflow = 2,
}

impl ResultCode {
    pub const fn code(self) -> c_int {
        self as c_int
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, ResultCode::Ok)
    }

    pub fn into_result(self) -> Result<(), CounterError> {
        match self {
            ResultCode::Ok => Ok(()),
            ResultCode::NullReference => Err(CounterError::NullReference),
            ResultCode::Overflow => Err(CounterError::Overflow { count: c_int::MAX }),
        }
    }
}

impl From<ResultCode> for c_int {
    fn from(code: ResultCode) -> Self {
        code.code()
    }
}

impl TryFrom<c_int> for ResultCode {
    type Error = UnknownResultCode;

    fn try_from(code: c_int) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ResultCode::Ok),
            1 => Ok(ResultCode::NullReference),
            2 => Ok(ResultCode::Overflow),
            other => Err(UnknownResultCode(other)),
        }
    }
}

impl From<CounterError> for ResultCode {
    fn from(err: CounterError) -> Self {
        match err {
            CounterError::NullReference => ResultCode::NullReference,
            CounterError::Overflow { .. } => ResultCode::Overflow,
        }
    }
}

impl<T> From<Result<T, CounterError>> for ResultCode {
    fn from(result: Result<T, CounterError>) -> Self {
        match result {
            Ok(_) => ResultCode::Ok,
            Err(err) => err.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("counter pointer is null")]
    NullReference,
    #[error("counter is already at its maximum value {count}")]
    Overflow { count: c_int },
}

/// A raw code returned across the boundary that no [`ResultCode`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown result code {0}")]
pub struct UnknownResultCode(pub c_int);
