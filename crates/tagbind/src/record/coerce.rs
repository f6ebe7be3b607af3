//! Coercion of dynamic input values into typed field storage.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use super::Slot;
use crate::CoercionError;
use crate::types::{Kind, Value};

/// Conversion from a candidate input [`Value`] into a typed field value.
///
/// Strings are parsed according to the target kind, so values harvested from
/// environment variables or command-line arguments bind to numeric and boolean
/// fields.
pub trait FromValue: Sized {
    /// Semantic kind of the target type.
    const KIND: Kind;

    /// Convert `value`, failing when it has no sensible reading as `Self`.
    fn from_value(value: Value) -> Result<Self, CoercionError>;
}

fn mismatch(expected: Kind, found: &Value) -> CoercionError {
    CoercionError::Mismatch {
        expected,
        found: found.type_name(),
    }
}

/// Permissive boolean parsing: `true`, `yes` and `1` (any case) are true,
/// everything else is false.
pub fn parse_bool(input: &str) -> bool {
    matches!(
        input.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    )
}

impl FromValue for String {
    const KIND: Kind = Kind::String;

    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::String(s) => Ok(s),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            other => Err(mismatch(Kind::String, &other)),
        }
    }
}

impl FromValue for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(s) => Ok(parse_bool(&s)),
            Value::Int(n) => Ok(n != 0),
            other => Err(mismatch(Kind::Bool, &other)),
        }
    }
}

macro_rules! int_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const KIND: Kind = Kind::Int;

                fn from_value(value: Value) -> Result<Self, CoercionError> {
                    let n = match value {
                        Value::Int(n) => n,
                        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
                            CoercionError::Parse {
                                expected: Kind::Int,
                                input: s.clone(),
                            }
                        })?,
                        other => return Err(mismatch(Kind::Int, &other)),
                    };
                    <$ty>::try_from(n).map_err(|_| CoercionError::OutOfRange {
                        value: n,
                        target: stringify!($ty),
                    })
                }
            }
        )*
    };
}

int_from_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const KIND: Kind = Kind::Float;

                fn from_value(value: Value) -> Result<Self, CoercionError> {
                    match value {
                        Value::Float(f) => Ok(f as $ty),
                        Value::Int(n) => Ok(n as $ty),
                        Value::String(s) => s.trim().parse::<$ty>().map_err(|_| {
                            CoercionError::Parse {
                                expected: Kind::Float,
                                input: s.clone(),
                            }
                        }),
                        other => Err(mismatch(Kind::Float, &other)),
                    }
                }
            }
        )*
    };
}

float_from_value!(f32, f64);

impl FromValue for Value {
    const KIND: Kind = Kind::Any;

    fn from_value(value: Value) -> Result<Self, CoercionError> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    const KIND: Kind = Kind::Slice;

    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            Value::Null => Ok(Vec::new()),
            Value::String(s) if s.is_empty() => Ok(Vec::new()),
            other @ Value::Map(_) => Err(mismatch(Kind::Slice, &other)),
            scalar => Ok(vec![T::from_value(scalar)?]),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    const KIND: Kind = Kind::Map;

    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| Ok((k, T::from_value(v)?)))
                .collect(),
            Value::Null => Ok(BTreeMap::new()),
            other => Err(mismatch(Kind::Map, &other)),
        }
    }
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    const KIND: Kind = Kind::Map;

    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| Ok((k, T::from_value(v)?)))
                .collect(),
            Value::Null => Ok(HashMap::new()),
            other => Err(mismatch(Kind::Map, &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const KIND: Kind = T::KIND;

    fn from_value(value: Value) -> Result<Self, CoercionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

macro_rules! scalar_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Slot for $ty {
                fn kind(&self) -> Kind {
                    <$ty as FromValue>::KIND
                }

                fn is_zero(&self) -> bool {
                    *self == <$ty>::default()
                }

                fn value(&self) -> Value {
                    Value::from(self.clone())
                }

                fn set(&mut self, value: Value) -> Result<(), CoercionError> {
                    trace!(target_type = stringify!($ty), %value, "coercing scalar");
                    *self = <$ty as FromValue>::from_value(value)?;
                    Ok(())
                }
            }
        )*
    };
}

scalar_slot!(
    String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

impl Slot for Value {
    fn kind(&self) -> Kind {
        Kind::Any
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }

    fn value(&self) -> Value {
        self.clone()
    }

    fn set(&mut self, value: Value) -> Result<(), CoercionError> {
        *self = value;
        Ok(())
    }
}

impl<T: FromValue + Clone + Into<Value>> Slot for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn value(&self) -> Value {
        Value::from(self.clone())
    }

    fn set(&mut self, value: Value) -> Result<(), CoercionError> {
        *self = Vec::from_value(value)?;
        Ok(())
    }
}

impl<T: FromValue + Clone + Into<Value>> Slot for Option<T> {
    fn kind(&self) -> Kind {
        T::KIND
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn value(&self) -> Value {
        Value::from(self.clone())
    }

    fn set(&mut self, value: Value) -> Result<(), CoercionError> {
        *self = Option::from_value(value)?;
        Ok(())
    }
}

impl<T: FromValue + Clone + Into<Value>> Slot for BTreeMap<String, T> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn value(&self) -> Value {
        Value::from(self.clone())
    }

    fn set(&mut self, value: Value) -> Result<(), CoercionError> {
        *self = BTreeMap::from_value(value)?;
        Ok(())
    }
}

impl<T: FromValue + Clone + Into<Value>> Slot for HashMap<String, T> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn value(&self) -> Value {
        Value::from(self.clone())
    }

    fn set(&mut self, value: Value) -> Result<(), CoercionError> {
        *self = HashMap::from_value(value)?;
        Ok(())
    }
}
