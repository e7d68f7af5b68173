//! Scalar values and the element types that produce them.

use std::fmt;

use num_bigint::BigInt;

use crate::values::Values;

/// The kind of element a sequence holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    BigInt,
    Text,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::BigInt => "bigint",
            ValueKind::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single element of a sequence.
///
/// The `Display` implementation is the generic rendering used when no
/// explicit format is configured: integers in decimal, floats in their
/// shortest round-trip form (`2.0` renders as `2`), text verbatim. Floats
/// with a decimal exponent outside `[-4, 21)` switch to scientific notation
/// with a signed two-digit exponent (`1e-05`, `1.5e+21`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    BigInt(BigInt),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_big_int(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write_generic_float(f, *v),
            Value::BigInt(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

fn write_generic_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "+Inf" } else { "-Inf" });
    }
    // Shortest round-trip digits, e.g. "1.5e21" or "1e-5".
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{v}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..21).contains(&exp) {
        write!(f, "{v}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::BigInt(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// A payload type that can be stored in a sequence.
pub trait Element: Sized + Into<Value> {
    const KIND: ValueKind;

    /// Packs owned elements into typed storage.
    fn into_values(items: Vec<Self>) -> Values;
}

impl Element for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_values(items: Vec<Self>) -> Values {
        Values::Int(items)
    }
}

impl Element for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_values(items: Vec<Self>) -> Values {
        Values::Float(items)
    }
}

impl Element for BigInt {
    const KIND: ValueKind = ValueKind::BigInt;

    fn into_values(items: Vec<Self>) -> Values {
        Values::BigInt(items)
    }
}

impl Element for String {
    const KIND: ValueKind = ValueKind::Text;

    fn into_values(items: Vec<Self>) -> Values {
        Values::Text(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_display() {
        assert_eq!(Value::Int(-42).to_string(), "-42");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(1.01).to_string(), "1.01");
        assert_eq!(
            Value::from(BigInt::from(10).pow(20)).to_string(),
            "100000000000000000000"
        );
        assert_eq!(Value::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_generic_float_exponent_form() {
        assert_eq!(Value::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Value::Float(1e-5).to_string(), "1e-05");
        assert_eq!(Value::Float(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(Value::Float(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Float(1e21).to_string(), "1e+21");
        assert_eq!(Value::Float(1.5e300).to_string(), "1.5e+300");
        assert_eq!(Value::Float(1e-300).to_string(), "1e-300");
        assert_eq!(Value::Float(0.0).to_string(), "0");
        assert_eq!(Value::Float(-0.0).to_string(), "-0");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "+Inf");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Inf");
    }

    #[test]
    fn test_accessors() {
        let v = Value::from(7i64);
        assert_eq!(v.kind(), ValueKind::Int);
        assert_eq!(v.as_i64(), Some(7));
        assert_eq!(v.as_f64(), None);
        assert_eq!(Value::from(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::from("x").as_text(), Some("x"));
        assert_eq!(
            Value::from(BigInt::from(3)).as_big_int(),
            Some(&BigInt::from(3))
        );
    }

    #[test]
    fn test_element_kinds() {
        assert_eq!(i64::KIND, ValueKind::Int);
        assert_eq!(f64::KIND, ValueKind::Float);
        assert_eq!(BigInt::KIND, ValueKind::BigInt);
        assert_eq!(String::KIND, ValueKind::Text);
        assert_eq!(ValueKind::BigInt.to_string(), "bigint");
    }
}
