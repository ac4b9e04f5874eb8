//! Argument schemas and the validation routine shared by every endpoint.
//!
//! Each endpoint declares a static [`ParamSpec`]: a list of required and a
//! list of optional [`Param`]s. A param is constrained either to a primitive
//! [`ParamType`] or to a closed set of string values. Call arguments are a
//! dynamic [`Arguments`] map checked against that spec by [`validate`] before
//! anything is sent.
//!
//! ```rust
//! use bitcointrade_api_client::validation::{Arguments, Param, ParamSpec};
//!
//! static SPEC: ParamSpec = ParamSpec::new(
//!     &[Param::one_of("type", &["buy", "sell"]), Param::float("amount")],
//!     &[Param::integer("page_size")],
//! );
//!
//! let args = Arguments::new().with("type", "buy").with("amount", 0.5);
//! assert!(SPEC.validate(&args).is_ok());
//!
//! let args = Arguments::new().with("type", "hold").with("amount", 0.5);
//! assert!(SPEC.validate(&args).is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::BitcoinTradeError;

/// Primitive type a parameter value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Text value
    String,
    /// Whole number
    Integer,
    /// Floating-point number
    Float,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::String => write!(f, "string"),
            ParamType::Integer => write!(f, "integer"),
            ParamType::Float => write!(f, "float"),
        }
    }
}

/// Constraint attached to a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must have exactly this type.
    Type(ParamType),
    /// The value must be one of these strings.
    OneOf(&'static [&'static str]),
}

/// A named, constrained parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Name as sent on the wire.
    pub name: &'static str,
    /// What the value must satisfy.
    pub constraint: Constraint,
}

impl Param {
    /// A string-typed parameter.
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            constraint: Constraint::Type(ParamType::String),
        }
    }

    /// An integer-typed parameter.
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            constraint: Constraint::Type(ParamType::Integer),
        }
    }

    /// A float-typed parameter.
    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            constraint: Constraint::Type(ParamType::Float),
        }
    }

    /// A parameter restricted to an enumerated set of strings.
    pub const fn one_of(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            name,
            constraint: Constraint::OneOf(allowed),
        }
    }

    fn check(&self, value: &ParamValue) -> Result<(), BitcoinTradeError> {
        match self.constraint {
            Constraint::Type(expected) => {
                if let ParamValue::Float(x) = value {
                    // serde_json writes NaN and infinities as `null`.
                    if !x.is_finite() && expected == ParamType::Float {
                        return Err(BitcoinTradeError::NonFiniteFloat {
                            name: self.name.to_string(),
                            value: *x,
                        });
                    }
                }
                if value.param_type() == Some(expected) {
                    Ok(())
                } else {
                    Err(BitcoinTradeError::InvalidType {
                        name: self.name.to_string(),
                        expected,
                        actual: value.clone(),
                    })
                }
            }
            Constraint::OneOf(allowed) => match value {
                ParamValue::Str(s) if allowed.contains(&s.as_str()) => Ok(()),
                _ => Err(BitcoinTradeError::InvalidValue {
                    name: self.name.to_string(),
                    value: value.clone(),
                    allowed: allowed.to_vec(),
                }),
            },
        }
    }
}

/// Required and optional parameters of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameters that must be supplied.
    pub required: &'static [Param],
    /// Parameters that may be supplied.
    pub optional: &'static [Param],
}

impl ParamSpec {
    /// An endpoint that takes no parameters.
    pub const EMPTY: ParamSpec = ParamSpec::new(&[], &[]);

    /// Create a spec from required and optional parameters.
    pub const fn new(required: &'static [Param], optional: &'static [Param]) -> Self {
        Self { required, optional }
    }

    /// Look up a declared parameter, required first.
    pub fn find(&self, name: &str) -> Option<&'static Param> {
        let (required, optional): (&'static [Param], &'static [Param]) =
            (self.required, self.optional);
        required
            .iter()
            .chain(optional.iter())
            .find(|param| param.name == name)
    }

    /// Whether `name` is declared as required or optional.
    pub fn declares(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Validate `arguments` against this spec.
    pub fn validate(&self, arguments: &Arguments) -> Result<(), BitcoinTradeError> {
        validate(arguments, self.required, self.optional)
    }
}

/// Check `arguments` against required and optional parameter lists.
///
/// Every missing required name is reported at once, in declaration order.
/// `Absent` values count as not supplied. Names declared in neither list are
/// ignored.
pub fn validate(
    arguments: &Arguments,
    required: &[Param],
    optional: &[Param],
) -> Result<(), BitcoinTradeError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|param| !arguments.is_present(param.name))
        .map(|param| param.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BitcoinTradeError::MissingParameter(missing));
    }

    for (name, value) in arguments.present() {
        let param = required
            .iter()
            .find(|p| p.name == name)
            .or_else(|| optional.iter().find(|p| p.name == name));
        if let Some(param) = param {
            param.check(value)?;
        }
    }

    Ok(())
}

/// A single argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text value
    Str(String),
    /// Whole number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Explicitly not supplied; never sent
    Absent,
}

impl ParamValue {
    /// The primitive type of this value, `None` for `Absent`.
    pub fn param_type(&self) -> Option<ParamType> {
        match self {
            ParamValue::Str(_) => Some(ParamType::String),
            ParamValue::Int(_) => Some(ParamType::Integer),
            ParamValue::Float(_) => Some(ParamType::Float),
            ParamValue::Absent => None,
        }
    }

    /// Whether this is the `Absent` sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, ParamValue::Absent)
    }

    /// The string value, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{:?}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Absent => write!(f, "<absent>"),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Int(n) => serializer.serialize_i64(*n),
            ParamValue::Float(x) => serializer.serialize_f64(*x),
            ParamValue::Absent => serializer.serialize_none(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

macro_rules! int_param_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_param_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

/// Arguments for one call, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: BTreeMap<String, ParamValue>,
}

impl Arguments {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an argument.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get an argument by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Whether `name` was supplied with a value other than `Absent`.
    pub fn is_present(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|v| !v.is_absent())
    }

    /// All arguments, `Absent` ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Arguments whose value is not `Absent`.
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.iter().filter(|(_, v)| !v.is_absent())
    }

    /// Number of arguments, `Absent` ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arguments that should go on the wire for `spec`: declared names only,
    /// `Absent` values dropped.
    pub fn outgoing<'a>(&'a self, spec: &'a ParamSpec) -> Vec<(&'a str, &'a ParamValue)> {
        self.present()
            .filter(|(name, _)| spec.declares(name))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Arguments::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ORDER: ParamSpec = ParamSpec::new(
        &[
            Param::one_of("pair", &["BRLBTC", "BRLETH"]),
            Param::float("amount"),
            Param::one_of("type", &["buy", "sell"]),
        ],
        &[Param::string("start_date"), Param::integer("page_size")],
    );

    fn order_args() -> Arguments {
        Arguments::new()
            .with("pair", "BRLBTC")
            .with("amount", 0.1)
            .with("type", "buy")
    }

    #[test]
    fn test_valid_arguments_pass() {
        assert!(ORDER.validate(&order_args()).is_ok());
        let args = order_args().with("start_date", "2018-01-01").with("page_size", 10);
        assert!(ORDER.validate(&args).is_ok());
    }

    #[test]
    fn test_missing_reports_every_key() {
        let args = Arguments::new().with("type", "buy");
        match ORDER.validate(&args) {
            Err(BitcoinTradeError::MissingParameter(missing)) => {
                assert_eq!(missing, vec!["pair".to_string(), "amount".to_string()]);
            }
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_required_counts_as_missing() {
        let args = order_args().with("amount", None::<f64>);
        match ORDER.validate(&args) {
            Err(BitcoinTradeError::MissingParameter(missing)) => assert_eq!(missing, vec!["amount"]),
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_optional_is_not_checked() {
        let args = order_args().with("page_size", None::<i64>);
        assert!(ORDER.validate(&args).is_ok());
    }

    #[test]
    fn test_integer_not_accepted_for_float() {
        let args = order_args().with("amount", 1);
        match ORDER.validate(&args) {
            Err(BitcoinTradeError::InvalidType { name, expected, actual }) => {
                assert_eq!(name, "amount");
                assert_eq!(expected, ParamType::Float);
                assert_eq!(actual, ParamValue::Int(1));
            }
            other => panic!("expected InvalidType, got {:?}", other),
        }
    }

    #[test]
    fn test_float_not_accepted_for_integer() {
        let args = order_args().with("page_size", 10.0);
        assert!(matches!(
            ORDER.validate(&args),
            Err(BitcoinTradeError::InvalidType { ref name, .. }) if name == "page_size"
        ));
    }

    #[test]
    fn test_non_finite_float_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let args = order_args().with("amount", bad);
            match ORDER.validate(&args) {
                Err(BitcoinTradeError::NonFiniteFloat { name, value }) => {
                    assert_eq!(name, "amount");
                    assert_eq!(value.to_bits(), bad.to_bits());
                }
                other => panic!("expected NonFiniteFloat, got {:?}", other),
            }
        }
        let err = ORDER
            .validate(&order_args().with("amount", f64::NAN))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_string_for_float_rejected() {
        let args = order_args().with("amount", "0.1");
        assert!(matches!(
            ORDER.validate(&args),
            Err(BitcoinTradeError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_enumerated_value_outside_set() {
        let args = order_args().with("type", "hold");
        match ORDER.validate(&args) {
            Err(BitcoinTradeError::InvalidValue { name, value, allowed }) => {
                assert_eq!(name, "type");
                assert_eq!(value, ParamValue::from("hold"));
                assert_eq!(allowed, vec!["buy", "sell"]);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_enumerated_rejects_non_string() {
        let args = order_args().with("type", 1);
        assert!(matches!(
            ORDER.validate(&args),
            Err(BitcoinTradeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_every_member_of_set_accepted() {
        for side in ["buy", "sell"] {
            assert!(ORDER.validate(&order_args().with("type", side)).is_ok());
        }
    }

    #[test]
    fn test_unknown_keys_ignored_and_not_outgoing() {
        let args = order_args().with("foo", "bar").with("page_size", None::<i64>);
        assert!(ORDER.validate(&args).is_ok());

        let outgoing: Vec<&str> = args.outgoing(&ORDER).into_iter().map(|(k, _)| k).collect();
        assert_eq!(outgoing, vec!["amount", "pair", "type"]);
    }

    #[test]
    fn test_required_takes_precedence() {
        static OVERLAP: ParamSpec =
            ParamSpec::new(&[Param::integer("n")], &[Param::string("n")]);
        assert!(OVERLAP.validate(&Arguments::new().with("n", 1)).is_ok());
        assert!(OVERLAP.validate(&Arguments::new().with("n", "1")).is_err());
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::from("buy").to_string(), "\"buy\"");
        assert_eq!(ParamValue::from(3_u32).to_string(), "3");
        assert_eq!(ParamValue::from(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::Absent.to_string(), "<absent>");
    }
}
