//! vCard parameter and group types (RFC 6350 §3.3, §5).

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{RfcError, RfcResult};
use crate::rfc::validation::is_valid_group;

/// A parameter value as supplied by the caller.
///
/// The shape is deliberately loose: validators decide whether a given
/// shape is acceptable for a given parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Integer scalar (e.g., `PREF=1`).
    Integer(i64),
    /// Floating point scalar.
    Float(f64),
    /// Text scalar.
    Text(String),
    /// Multi-valued parameter (e.g., `TYPE=home,work`).
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Returns the value as text if it is a text scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer if it holds a whole number.
    ///
    /// Floats with no fractional part count as whole numbers; NaN and the
    /// infinities do not.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Only whole floats within the exactly representable range are cast"
    )]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(f)
                if f.is_finite()
                    && f.fract() == 0.0
                    && *f >= -9_007_199_254_740_992.0
                    && *f <= 9_007_199_254_740_992.0 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// Returns the scalar items of this value: itself, or the list members.
    #[must_use]
    pub fn items(&self) -> &[Self] {
        match self {
            Self::List(items) => items,
            _ => std::slice::from_ref(self),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Parameters attached to a property, keyed by uppercase name.
///
/// Iteration (and therefore serialization) follows sorted name order so the
/// same parameter set always produces the same content line. A parameter
/// set to an empty text value is distinct from an absent parameter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, ParamValue>")]
pub struct Parameters(BTreeMap<String, ParamValue>);

impl Parameters {
    pub(crate) const EMPTY: Self = Self(BTreeMap::new());

    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter, returning the previous value if one was present.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(name.to_ascii_uppercase(), value.into())
    }

    /// Returns the parameter value for `name` (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(&name.to_ascii_uppercase())
    }

    /// Returns whether the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(NAME, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, ParamValue>> for Parameters {
    fn from(map: BTreeMap<String, ParamValue>) -> Self {
        Self(
            map.into_iter()
                .map(|(k, v)| (k.to_ascii_uppercase(), v))
                .collect(),
        )
    }
}

/// Property group identifier (the `item1` in `item1.TEL`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum GroupId {
    /// Numeric group, written as its decimal digits.
    Index(u64),
    /// Named group.
    Name(String),
}

impl GroupId {
    /// Creates a named group, checking the RFC 6350 `group` grammar.
    ///
    /// # Errors
    /// Returns `RfcError::InvalidGroup` if the name is empty or contains
    /// anything other than ASCII letters, digits, and `-`.
    pub fn name(name: impl Into<String>) -> RfcResult<Self> {
        let group = Self::Name(name.into());
        group.validate()?;
        Ok(group)
    }

    /// Checks the group against the RFC 6350 `group` grammar.
    ///
    /// # Errors
    /// Returns `RfcError::InvalidGroup` for an empty or malformed name.
    pub fn validate(&self) -> RfcResult<()> {
        match self {
            Self::Index(_) => Ok(()),
            Self::Name(name) if is_name_token(name) => Ok(()),
            Self::Name(name) => Err(RfcError::InvalidGroup(name.clone())),
        }
    }
}

/// Returns whether `name` matches `1*(ALPHA / DIGIT / "-")`, the grammar of
/// group and parameter names.
pub(crate) fn is_name_token(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u64> for GroupId {
    fn from(i: u64) -> Self {
        Self::Index(i)
    }
}

impl From<String> for GroupId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&str> for GroupId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl TryFrom<ParamValue> for GroupId {
    type Error = RfcError;

    fn try_from(value: ParamValue) -> RfcResult<Self> {
        if !is_valid_group(&value) {
            return Err(RfcError::InvalidGroup(value.to_string()));
        }
        match value {
            ParamValue::Text(name) => Self::name(name),
            other => other
                .as_integer()
                .and_then(|i| u64::try_from(i).ok())
                .map(Self::Index)
                .ok_or_else(|| RfcError::InvalidGroup(other.to_string())),
        }
    }
}

/// Parameter names used by the engine (RFC 6350 §5, RFC 6715, RFC 8605, RFC 9554).
pub mod names {
    pub const PREF: &str = "PREF";
    pub const PID: &str = "PID";
    pub const VALUE: &str = "VALUE";
    pub const INDEX: &str = "INDEX";
    pub const CC: &str = "CC";
    pub const SCRIPT: &str = "SCRIPT";
}
