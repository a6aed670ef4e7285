//! Exact-precision monetary amount with an opaque currency code.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// Currency code such as `EUR` or `USD`.
///
/// Never validated here: only the upstream service decides whether a code is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the raw code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returned when text is not a valid decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal quantity {0:?}")]
pub struct InvalidQuantity(pub String);

/// Decimal quantity carried as its exact textual form.
///
/// Backed by a `serde_json::Number` built with `arbitrary_precision`, so the
/// digits read from a payload are the digits written to the upstream query and
/// back into the response. It is never converted to `f64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity(Number);

impl FromStr for Quantity {
    type Err = InvalidQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Number>()
            .map(Self)
            .map_err(|_| InvalidQuantity(s.to_owned()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    /// Accepts a JSON number, or a JSON string holding a number literal.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        const EXPECTED: &str = "a decimal number or a string holding one";

        match Value::deserialize(deserializer)? {
            Value::Number(number) => Ok(Self(number)),
            Value::String(text) => text.parse().map_err(de::Error::custom),
            Value::Bool(b) => Err(de::Error::invalid_type(Unexpected::Bool(b), &EXPECTED)),
            Value::Null => Err(de::Error::invalid_type(Unexpected::Unit, &EXPECTED)),
            Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &EXPECTED)),
            Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &EXPECTED)),
        }
    }
}

/// A quantity of a given currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    quantity: Quantity,
    currency: Currency,
}

impl Amount {
    /// Creates a new Amount.
    pub fn new(quantity: Quantity, currency: Currency) -> Self {
        Self { quantity, currency }
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    /// Returns the currency.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Splits the amount into its parts.
    pub fn into_parts(self) -> (Quantity, Currency) {
        (self.quantity, self.currency)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.currency)
    }
}
