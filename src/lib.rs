//! Orders instances of an interface by what their accessors return, for sorted
//! assertions over implementations that have no comparator of their own.

pub mod assertions;
pub mod comparator;
pub mod comparators;
pub mod descriptor;
pub mod error;
pub mod object;
pub mod options;
pub mod record;
pub mod value;

pub use comparator::{AccessorFailure, Comparator, Verdict, INVOCATION_FAILED};
pub use comparators::InterfaceComparator;
pub use descriptor::{MethodSignature, TypeDescriptor, TypeKind};
pub use error::{Error, InvocationError, Result};
pub use object::{Object, Orderable};
pub use options::{AccessorOrder, FailurePolicy, Options};
pub use record::Record;
pub use value::Value;

#[cfg(test)]
#[ctor::ctor]
fn init() {
    color_backtrace::install();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_target(true)
        .with_file(true)
        .with_level(true)
        .without_time()
        .with_thread_ids(true)
        .with_test_writer()
        .init();
}
