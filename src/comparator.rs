use std::cmp::Ordering;

use crate::error::{Error, InvocationError, Result};

/// Integer verdict reported when an accessor could not be invoked.
pub const INVOCATION_FAILED: i32 = -2;

pub trait Comparator {
    type Item: ?Sized;

    fn compare(&self, left: &Self::Item, right: &Self::Item) -> Result<Verdict>;

    fn name(&self) -> &str;

    /// Three-way ordering for sorting. `Verdict::Different` sorts `left` first and
    /// invocation failures become errors.
    fn ordering(&self, left: &Self::Item, right: &Self::Item) -> Result<Ordering> {
        self.compare(left, right)?.into_ordering()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorFailure {
    pub method: String,
    pub error: InvocationError,
}

impl From<AccessorFailure> for Error {
    fn from(failure: AccessorFailure) -> Self {
        Error::AccessorInvocation {
            method: failure.method,
            source: failure.error,
        }
    }
}

/// Outcome of comparing two instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Either every accessor agreed (`Equal`) or a naturally ordered value decided.
    Ordered(Ordering),

    /// Values differ but have no natural ordering, so there is no direction.
    Different,

    /// At least one accessor could not be invoked. Never empty.
    InvocationFailed(Vec<AccessorFailure>),
}

impl Verdict {
    pub const EQUAL: Verdict = Verdict::Ordered(Ordering::Equal);

    pub fn is_equal(&self) -> bool {
        *self == Self::EQUAL
    }

    pub fn failures(&self) -> &[AccessorFailure] {
        match self {
            Verdict::InvocationFailed(failures) => failures,
            _ => &[],
        }
    }

    /// `-1`, `0` or `1` for ordered verdicts, `-1` for `Different` and
    /// [`INVOCATION_FAILED`] for failures.
    pub fn as_i32(&self) -> i32 {
        match self {
            Verdict::Ordered(ordering) => *ordering as i32,
            Verdict::Different => -1,
            Verdict::InvocationFailed(_) => INVOCATION_FAILED,
        }
    }

    pub fn into_ordering(self) -> Result<Ordering> {
        match self {
            Verdict::Ordered(ordering) => Ok(ordering),
            Verdict::Different => Ok(Ordering::Less),
            Verdict::InvocationFailed(failures) => failures
                .into_iter()
                .next()
                .map_or(Ok(Ordering::Less), |failure| Err(failure.into())),
        }
    }
}

impl From<Ordering> for Verdict {
    fn from(ordering: Ordering) -> Self {
        Verdict::Ordered(ordering)
    }
}
