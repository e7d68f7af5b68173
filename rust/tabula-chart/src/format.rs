//! Printf-style format specs for chart cells.
//!
//! A spec is literal text around exactly one directive,
//! `%[flags][width][.precision]verb`:
//!
//! - flags: `-` left-justify, `+` always print a sign, `0` zero-pad
//! - verbs: `v` generic, `d` decimal integer, `f` fixed point, `e` scientific,
//!   `x` lowercase hex, `s` string (precision truncates)
//!
//! `%%` is a literal percent sign.

use std::{fmt, str::FromStr};

use tabula_common::{Result, error::Error};
use tabula_sequence::Value;

const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Generic,
    Decimal,
    Fixed,
    Exponent,
    Hex,
    Str,
}

impl Verb {
    fn from_char(c: char) -> Option<Verb> {
        match c {
            'v' => Some(Verb::Generic),
            'd' => Some(Verb::Decimal),
            'f' | 'F' => Some(Verb::Fixed),
            'e' => Some(Verb::Exponent),
            'x' => Some(Verb::Hex),
            's' => Some(Verb::Str),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    left: bool,
    plus: bool,
    zero: bool,
}

/// A parsed cell format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    source: String,
    prefix: String,
    suffix: String,
    verb: Verb,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
}

impl FormatSpec {
    /// The `%v` spec: every value in its generic rendering.
    pub fn generic() -> FormatSpec {
        FormatSpec {
            source: "%v".to_string(),
            prefix: String::new(),
            suffix: String::new(),
            verb: Verb::Generic,
            flags: Flags::default(),
            width: None,
            precision: None,
        }
    }

    /// `%.{digits}f`: fixed point with `digits` fraction digits.
    pub fn fixed(digits: usize) -> FormatSpec {
        FormatSpec {
            source: format!("%.{digits}f"),
            verb: Verb::Fixed,
            precision: Some(digits),
            ..FormatSpec::generic()
        }
    }

    /// Parses a format string.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if the string does not contain exactly one directive,
    /// or the directive is malformed.
    pub fn parse(spec: &str) -> Result<FormatSpec> {
        let invalid = |message: &str| Error::invalid_format(spec, message);

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut directive = None;
        let mut chars = spec.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                if directive.is_some() {
                    suffix.push(c);
                } else {
                    prefix.push(c);
                }
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                if directive.is_some() {
                    suffix.push('%');
                } else {
                    prefix.push('%');
                }
                continue;
            }
            if directive.is_some() {
                return Err(invalid("more than one directive"));
            }

            let mut flags = Flags::default();
            while let Some(&c) = chars.peek() {
                match c {
                    '-' => flags.left = true,
                    '+' => flags.plus = true,
                    '0' => flags.zero = true,
                    _ => break,
                }
                chars.next();
            }
            let width = take_number(&mut chars);
            let precision = if chars.peek() == Some(&'.') {
                chars.next();
                Some(take_number(&mut chars).unwrap_or(0))
            } else {
                None
            };
            let verb = match chars.next() {
                Some(c) => Verb::from_char(c)
                    .ok_or_else(|| invalid(&format!("unknown verb '{c}'")))?,
                None => return Err(invalid("incomplete directive")),
            };
            directive = Some((verb, flags, width, precision));
        }

        let Some((verb, flags, width, precision)) = directive else {
            return Err(invalid("missing directive"));
        };
        Ok(FormatSpec {
            source: spec.to_string(),
            prefix,
            suffix,
            verb,
            flags,
            width,
            precision,
        })
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders `value` according to this spec.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if the verb does not apply to the kind of `value`.
    pub fn format(&self, value: &Value) -> Result<String> {
        let body = self.body(value)?;
        let numeric = !matches!(value, Value::Text(_));
        let body = if self.flags.plus && numeric && !body.starts_with('-') {
            format!("+{body}")
        } else {
            body
        };
        let padded = self.pad(body, numeric);
        Ok(format!("{}{padded}{}", self.prefix, self.suffix))
    }

    fn body(&self, value: &Value) -> Result<String> {
        let precision = self.precision;
        let body = match (self.verb, value) {
            (Verb::Generic, v) => v.to_string(),
            (Verb::Str, Value::Text(s)) => match precision {
                Some(p) => s.chars().take(p).collect(),
                None => s.clone(),
            },
            (Verb::Str, v) => v.to_string(),
            (Verb::Decimal, Value::Int(v)) => v.to_string(),
            (Verb::Decimal, Value::BigInt(v)) => v.to_string(),
            (Verb::Fixed, Value::Int(v)) => fixed(*v as f64, precision),
            (Verb::Fixed, Value::Float(v)) => fixed(*v, precision),
            (Verb::Exponent, Value::Int(v)) => exponent(*v as f64, precision),
            (Verb::Exponent, Value::Float(v)) => exponent(*v, precision),
            (Verb::Hex, Value::Int(v)) if *v < 0 => format!("-{:x}", v.unsigned_abs()),
            (Verb::Hex, Value::Int(v)) => format!("{v:x}"),
            (Verb::Hex, Value::BigInt(v)) => format!("{v:x}"),
            (verb, v) => {
                return Err(Error::invalid_format(
                    &self.source,
                    format!("{verb:?} cannot format {} value {v}", v.kind()),
                ));
            }
        };
        Ok(body)
    }

    fn pad(&self, body: String, numeric: bool) -> String {
        let len = body.chars().count();
        let Some(width) = self.width.filter(|&w| w > len) else {
            return body;
        };
        let fill = width - len;
        if self.flags.left {
            format!("{body}{}", " ".repeat(fill))
        } else if self.flags.zero && numeric {
            let sign_len = usize::from(body.starts_with(['-', '+']));
            let (sign, digits) = body.split_at(sign_len);
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else {
            format!("{}{body}", " ".repeat(fill))
        }
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec::generic()
    }
}

impl FromStr for FormatSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<FormatSpec> {
        FormatSpec::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut number = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        number = Some(number.unwrap_or(0usize).saturating_mul(10) + digit as usize);
    }
    number
}

fn fixed(v: f64, precision: Option<usize>) -> String {
    format!("{:.*}", precision.unwrap_or(DEFAULT_PRECISION), v)
}

/// Scientific notation with a signed, at least two digit exponent
/// (`1.500000e+03`).
fn exponent(v: f64, precision: Option<usize>) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let text = format!("{:.*e}", precision.unwrap_or(DEFAULT_PRECISION), v);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        None => text,
    }
}
