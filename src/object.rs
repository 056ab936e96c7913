use std::cmp::Ordering;

use crate::{
    descriptor::{MethodSignature, TypeDescriptor},
    error::InvocationError,
    value::Value,
};

/// An instance whose accessors can be invoked by signature.
pub trait Object {
    /// The concrete runtime type of the instance.
    fn descriptor(&self) -> &TypeDescriptor;

    fn invoke(&self, method: &MethodSignature) -> Result<Value, InvocationError>;

    /// Probes for the natural-ordering capability.
    fn as_orderable(&self) -> Option<&dyn Orderable> {
        None
    }
}

/// The natural-ordering contract: three-way comparison against another instance.
pub trait Orderable {
    fn compare_to(&self, other: &dyn Object) -> Result<Ordering, InvocationError>;
}

impl<T> Object for &T
where
    T: Object + ?Sized,
{
    fn descriptor(&self) -> &TypeDescriptor {
        (**self).descriptor()
    }

    fn invoke(&self, method: &MethodSignature) -> Result<Value, InvocationError> {
        (**self).invoke(method)
    }

    fn as_orderable(&self) -> Option<&dyn Orderable> {
        (**self).as_orderable()
    }
}

impl<T> Object for Box<T>
where
    T: Object + ?Sized,
{
    fn descriptor(&self) -> &TypeDescriptor {
        (**self).descriptor()
    }

    fn invoke(&self, method: &MethodSignature) -> Result<Value, InvocationError> {
        (**self).invoke(method)
    }

    fn as_orderable(&self) -> Option<&dyn Orderable> {
        (**self).as_orderable()
    }
}
