use std::{cmp::Ordering, fmt, sync::Arc};

use itertools::Itertools;

use crate::{
    descriptor::{MethodSignature, TypeDescriptor},
    error::InvocationError,
    object::{Object, Orderable},
    value::Value,
};

type AccessorFn = Box<dyn Fn() -> Result<Value, InvocationError> + Send + Sync>;
type OrderFn = Box<dyn Fn(&Record, &dyn Object) -> Result<Ordering, InvocationError> + Send + Sync>;

/// An instance assembled from closures, standing in for an ad hoc implementation of an
/// interface.
pub struct Record {
    descriptor: Arc<TypeDescriptor>,
    accessors: Vec<(String, AccessorFn)>,
    order: Option<OrderFn>,
}

impl Record {
    /// Starts an anonymous class implementing `interface`.
    pub fn implementing(interface: &Arc<TypeDescriptor>) -> RecordBuilder {
        let class = TypeDescriptor::class(format!("<anonymous {}>", interface.name()))
            .implements(interface)
            .build();
        RecordBuilder::new(class)
    }

    /// Starts an instance of an already described class.
    pub fn of_class(class: &Arc<TypeDescriptor>) -> RecordBuilder {
        RecordBuilder::new(Arc::clone(class))
    }

    /// Invokes the accessor registered under `name`.
    pub fn get(&self, name: &str) -> Result<Value, InvocationError> {
        self.accessors
            .iter()
            .find(|(n, _)| n == name)
            .map_or(Err(InvocationError::Unsupported), |(_, f)| f())
    }
}

impl Object for Record {
    fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    fn invoke(&self, method: &MethodSignature) -> Result<Value, InvocationError> {
        if !method.is_accessor() {
            return Err(InvocationError::Unsupported);
        }
        self.get(method.name())
    }

    fn as_orderable(&self) -> Option<&dyn Orderable> {
        self.order.as_ref().map(|_| self as &dyn Orderable)
    }
}

impl Orderable for Record {
    fn compare_to(&self, other: &dyn Object) -> Result<Ordering, InvocationError> {
        match &self.order {
            Some(order) => order(self, other),
            None => Err(InvocationError::Unsupported),
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("class", &self.descriptor.name())
            .field("accessors", &self.accessors.iter().map(|(n, _)| n).join(", "))
            .field("orderable", &self.order.is_some())
            .finish()
    }
}

pub struct RecordBuilder {
    descriptor: Arc<TypeDescriptor>,
    accessors: Vec<(String, AccessorFn)>,
    order: Option<OrderFn>,
}

impl RecordBuilder {
    fn new(descriptor: Arc<TypeDescriptor>) -> Self {
        Self {
            descriptor,
            accessors: Vec::new(),
            order: None,
        }
    }

    /// Registers an accessor that always returns `value`.
    pub fn returns(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.accessor(name, move || Ok(value.clone()))
    }

    /// Registers a fallible accessor. A later registration under the same name wins.
    pub fn accessor<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Result<Value, InvocationError> + Send + Sync + 'static,
    {
        let name = name.into();
        self.accessors.retain(|(n, _)| *n != name);
        self.accessors.push((name, Box::new(f)));
        self
    }

    /// Gives the record a natural ordering.
    pub fn order_by<F>(mut self, f: F) -> Self
    where
        F: Fn(&Record, &dyn Object) -> Result<Ordering, InvocationError> + Send + Sync + 'static,
    {
        self.order = Some(Box::new(f));
        self
    }

    pub fn build(self) -> Record {
        Record {
            descriptor: self.descriptor,
            accessors: self.accessors,
            order: self.order,
        }
    }
}
