use std::path::PathBuf;

use crate::error::ConversionError;
use crate::model::Value;
use crate::prelude::ArgEnum;

/// Behaviour to convert a provider [`Value`] into a concrete type.
///
/// The conversions are explicit; each type enumerates the value kinds it accepts.
///
/// ### Example
/// ```
/// # use switchyard_builder as switchyard;
/// use switchyard::{FromValue, Value};
///
/// assert_eq!(i64::from_value(&Value::Text("911".to_string())).unwrap(), 911);
/// assert_eq!(String::from_value(&Value::Flag(true)).unwrap(), "true");
/// assert!(bool::from_value(&Value::Text("maybe".to_string())).is_err());
/// ```
pub trait FromValue: Sized {
    /// Convert the value, or explain why it is not convertible.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.to_string())
    }
}

impl FromValue for PathBuf {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Text(text) => Ok(PathBuf::from(text)),
            _ => Err(ConversionError::new(value, "PathBuf")),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Flag(flag) => Ok(*flag),
            Value::Integer(number) => Ok(*number != 0),
            Value::Decimal(number) => Ok(*number != 0.0),
            Value::Text(text) => {
                parse_bool(text).ok_or_else(|| ConversionError::new(value, "bool"))
            }
            Value::Member { .. } => Err(ConversionError::new(value, "bool")),
        }
    }
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

macro_rules! integer_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    let type_name = stringify!($t);
                    let error = || ConversionError::new(value, type_name);
                    match value {
                        Value::Integer(number) => <$t>::try_from(*number).map_err(|_| error()),
                        Value::Decimal(number) => {
                            let rounded = number.round_ties_even();
                            if rounded.is_finite() {
                                // Every in-range value of the target fits in an i128 exactly.
                                <$t>::try_from(rounded as i128).map_err(|_| error())
                            } else {
                                Err(error())
                            }
                        }
                        Value::Flag(flag) => Ok(<$t>::from(*flag)),
                        Value::Text(text) => text.trim().parse::<$t>().map_err(|_| error()),
                        Value::Member { ordinal, .. } => <$t>::try_from(*ordinal).map_err(|_| error()),
                    }
                }
            }
        )*
    };
}

integer_from_value!(i64, i32, u32, u64, usize);

macro_rules! decimal_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    match value {
                        Value::Integer(number) => Ok(*number as $t),
                        Value::Decimal(number) => Ok(*number as $t),
                        Value::Flag(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
                        Value::Text(text) => text
                            .trim()
                            .parse::<$t>()
                            .map_err(|_| ConversionError::new(value, stringify!($t))),
                        Value::Member { .. } => Err(ConversionError::new(value, stringify!($t))),
                    }
                }
            }
        )*
    };
}

decimal_from_value!(f64, f32);

/// Convert a value into the enum `E`.
///
/// Used by `#[derive(ArgEnum)]` to implement [`FromValue`]; members resolve by name and integers by ordinal.
pub fn member_from_value<E: ArgEnum>(value: &Value) -> Result<E, ConversionError> {
    let type_name = std::any::type_name::<E>();
    let member = match value {
        Value::Member { name, .. } => E::from_name(name),
        Value::Text(text) => E::from_name(text),
        Value::Integer(number) => usize::try_from(*number).ok().and_then(E::from_ordinal),
        Value::Decimal(_) | Value::Flag(_) => None,
    };
    member.ok_or_else(|| ConversionError::new(value, type_name))
}
