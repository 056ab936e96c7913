use std::{any::Any, cmp::Ordering, fmt, sync::Arc};

/// A user value that only supports value equality.
pub trait OpaqueValue: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn OpaqueValue) -> bool;

    fn value_type_name(&self) -> &'static str;
}

impl<T> OpaqueValue for T
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn OpaqueValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A user value with a natural ordering. Values of different concrete types are incomparable.
pub trait OrderedValue: OpaqueValue {
    fn dyn_cmp(&self, other: &dyn OrderedValue) -> Option<Ordering>;
}

impl<T> OrderedValue for T
where
    T: Ord + fmt::Debug + Send + Sync + 'static,
{
    fn dyn_cmp(&self, other: &dyn OrderedValue) -> Option<Ordering> {
        other.as_any().downcast_ref::<T>().map(|other| self.cmp(other))
    }
}

/// Result of invoking an accessor.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
    Ordered(Arc<dyn OrderedValue>),
    Opaque(Arc<dyn OpaqueValue>),
}

impl Value {
    pub fn ordered<T>(value: T) -> Self
    where
        T: Ord + fmt::Debug + Send + Sync + 'static,
    {
        Value::Ordered(Arc::new(value))
    }

    pub fn opaque<T>(value: T) -> Self
    where
        T: PartialEq + fmt::Debug + Send + Sync + 'static,
    {
        Value::Opaque(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_orderable(&self) -> bool {
        !matches!(self, Value::Null | Value::Opaque(_))
    }

    /// Three-way comparison, defined only for two orderable values of the same kind.
    pub fn natural_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => Some(a.total_cmp(b)),
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Ordered(a), Value::Ordered(b)) => (**a).dyn_cmp(&**b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "String",
            Value::Ordered(v) => v.value_type_name(),
            Value::Opaque(v) => v.value_type_name(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => (**a).dyn_eq(&**b),
            (Value::Ordered(a), Value::Ordered(b)) => {
                (**a).dyn_cmp(&**b) == Some(Ordering::Equal)
            }
            _ => self.natural_cmp(other) == Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{:?}", v),
            Value::Str(v) => write!(f, "{:?}", v),
            Value::Ordered(v) => write!(f, "{:?}", v),
            Value::Opaque(v) => write!(f, "{:?}", v),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
