use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::{
    comparator::{AccessorFailure, Comparator, Verdict},
    descriptor::{MethodSignature, TypeDescriptor},
    error::{Error, InvocationError, Result},
    object::Object,
    options::{AccessorOrder, FailurePolicy, Options},
    value::Value,
};

const COMPARE_TO: &str = "compareTo";

/// Orders instances of an interface by the values its accessors return.
///
/// Every accessor is evaluated on both operands. The verdict of the last accessor that
/// reports a difference decides the result. Interfaces that extend the natural-ordering
/// contract are compared through it instead.
#[derive(Debug, Clone)]
pub struct InterfaceComparator {
    interface: Arc<TypeDescriptor>,
    accessors: Vec<MethodSignature>,
    options: Options,
    name: String,
}

impl InterfaceComparator {
    pub fn new(interface: Arc<TypeDescriptor>) -> Result<Self> {
        Self::with_options(interface, Options::default())
    }

    pub fn with_options(interface: Arc<TypeDescriptor>, options: Options) -> Result<Self> {
        if !interface.is_interface() {
            return Err(Error::NotAnInterface(interface.name().to_owned()));
        }

        let mut accessors = interface.methods();
        if accessors.is_empty() {
            return Err(Error::NoAccessors(interface.name().to_owned()));
        }
        if let Some(method) = accessors.iter().find(|m| !m.is_accessor()) {
            return Err(Error::ParameterizedAccessor {
                interface: interface.name().to_owned(),
                signature: method.to_string(),
            });
        }

        if options.accessor_order == AccessorOrder::Name {
            accessors.sort_by(|a, b| {
                a.name()
                    .cmp(b.name())
                    .then_with(|| a.params().cmp(b.params()))
            });
        }

        debug!(
            interface = %interface,
            orderable = interface.is_orderable(),
            accessors = %accessors.iter().join(", "),
            "interface comparator created"
        );

        let name = format!("InterfaceComparator<{}>", interface.name());
        Ok(Self {
            interface,
            accessors,
            options,
            name,
        })
    }

    pub fn interface(&self) -> &Arc<TypeDescriptor> {
        &self.interface
    }

    pub fn accessors(&self) -> &[MethodSignature] {
        &self.accessors
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn check_operand(&self, operand: &dyn Object) -> Result<()> {
        if self.interface.is_assignable_from(operand.descriptor()) {
            Ok(())
        } else {
            Err(Error::InvalidOperand {
                expected: self.interface.name().to_owned(),
                actual: operand.descriptor().name().to_owned(),
            })
        }
    }

    fn compare_naturally(&self, left: &dyn Object, right: &dyn Object) -> Result<Verdict> {
        let orderable = left.as_orderable().ok_or_else(|| Error::NotOrderable {
            interface: self.interface.name().to_owned(),
            actual: left.descriptor().name().to_owned(),
        })?;

        match orderable.compare_to(right) {
            Ok(ordering) => Ok(ordering.into()),
            Err(error) => {
                let mut failures = Vec::new();
                self.on_failure(COMPARE_TO, error, &mut failures)?;
                Ok(Verdict::InvocationFailed(failures))
            }
        }
    }

    fn compare_accessors(&self, left: &dyn Object, right: &dyn Object) -> Result<Verdict> {
        let mut verdict = Verdict::EQUAL;
        let mut failures = Vec::new();

        for method in &self.accessors {
            match compare_accessor(left, right, method) {
                Ok(current) => {
                    trace!(method = %method, verdict = current.as_i32(), "accessor compared");
                    if !current.is_equal() {
                        verdict = current;
                    }
                }
                Err(error) => self.on_failure(&method.to_string(), error, &mut failures)?,
            }
        }

        if failures.is_empty() {
            Ok(verdict)
        } else {
            Ok(Verdict::InvocationFailed(failures))
        }
    }

    /// Under `Abort` the failure becomes the error of the whole comparison, under
    /// `Degrade` it is logged and recorded.
    fn on_failure(
        &self,
        method: &str,
        error: InvocationError,
        failures: &mut Vec<AccessorFailure>,
    ) -> Result<()> {
        match self.options.failure_policy {
            FailurePolicy::Abort => Err(Error::AccessorInvocation {
                method: method.to_owned(),
                source: error,
            }),
            FailurePolicy::Degrade => {
                warn!(interface = %self.interface, method, %error, "accessor invocation failed");
                failures.push(AccessorFailure {
                    method: method.to_owned(),
                    error,
                });
                Ok(())
            }
        }
    }
}

fn compare_accessor(
    left: &dyn Object,
    right: &dyn Object,
    method: &MethodSignature,
) -> std::result::Result<Verdict, InvocationError> {
    let r1 = left.invoke(method)?;
    let r2 = right.invoke(method)?;
    Ok(compare_values(&r1, &r2))
}

fn compare_values(r1: &Value, r2: &Value) -> Verdict {
    if r1.is_null() && r2.is_null() {
        return Verdict::EQUAL;
    }
    if r1.is_orderable() && r2.is_orderable() {
        if let Some(ordering) = r1.natural_cmp(r2) {
            return ordering.into();
        }
    }
    if r1 == r2 {
        Verdict::EQUAL
    } else {
        Verdict::Different
    }
}

impl Comparator for InterfaceComparator {
    type Item = dyn Object;

    fn compare(&self, left: &Self::Item, right: &Self::Item) -> Result<Verdict> {
        self.check_operand(left)?;
        self.check_operand(right)?;

        if self.interface.is_orderable() {
            return self.compare_naturally(left, right);
        }
        self.compare_accessors(left, right)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
