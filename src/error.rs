#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Expected interface but got class: {0}")]
    NotAnInterface(String),

    #[error("Expected interface {0} to contain some methods")]
    NoAccessors(String),

    #[error("Expected interface {interface} to contain non-parameters methods only, but found: {signature}")]
    ParameterizedAccessor { interface: String, signature: String },

    #[error("Expected class {expected} but got {actual}")]
    InvalidOperand { expected: String, actual: String },

    #[error("Expected {actual} to provide the natural ordering of {interface}")]
    NotOrderable { interface: String, actual: String },

    #[error("{0} cannot order elements that differ only in values without a natural ordering")]
    Unordered(String),

    #[error("Accessor {method} failed: {source}")]
    AccessorInvocation {
        method: String,
        #[source]
        source: InvocationError,
    },
}

impl Error {
    /// Whether the error was raised while building a comparator.
    pub fn is_invalid_construction(&self) -> bool {
        matches!(
            self,
            Error::NotAnInterface(_) | Error::NoAccessors(_) | Error::ParameterizedAccessor { .. }
        )
    }
}

/// Raised by an instance when one of its accessors cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("access denied")]
    AccessDenied,

    #[error("method not implemented")]
    Unsupported,

    #[error("{0}")]
    Raised(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::{Error, InvocationError};

    #[test]
    fn construction_errors_are_classified() {
        assert!(Error::NotAnInterface("SomeClass".into()).is_invalid_construction());
        assert!(Error::NoAccessors("Empty".into()).is_invalid_construction());
        assert!(!Error::InvalidOperand {
            expected: "Named".into(),
            actual: "Other".into(),
        }
        .is_invalid_construction());
    }

    #[test]
    fn invocation_error_is_the_source() {
        let err = Error::AccessorInvocation {
            method: "String name()".into(),
            source: InvocationError::Raised("boom".into()),
        };

        assert_eq!(err.to_string(), "Accessor String name() failed: boom");
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("boom"));
    }
}
