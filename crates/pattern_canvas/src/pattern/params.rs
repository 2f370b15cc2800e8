//! Loosely typed method parameters as supplied by a settings collaborator.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a drawing method.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Grid,
    Sine,
    #[default]
    Spiral,
    Circular,
    Fibonacci,
    Lissajous,
    Rose,
    Phyllotaxis,
    Custom,
}

impl MethodKind {
    pub const ALL: [MethodKind; 9] = [
        MethodKind::Grid,
        MethodKind::Sine,
        MethodKind::Spiral,
        MethodKind::Circular,
        MethodKind::Fibonacci,
        MethodKind::Lissajous,
        MethodKind::Rose,
        MethodKind::Phyllotaxis,
        MethodKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MethodKind::Grid => "grid",
            MethodKind::Sine => "sine",
            MethodKind::Spiral => "spiral",
            MethodKind::Circular => "circular",
            MethodKind::Fibonacci => "fibonacci",
            MethodKind::Lissajous => "lissajous",
            MethodKind::Rose => "rose",
            MethodKind::Phyllotaxis => "phyllotaxis",
            MethodKind::Custom => "custom",
        }
    }
}

impl FromStr for MethodKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MethodKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::InvalidConfig(format!("unknown drawing method '{s}'")))
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parameter value: a number or free text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric view of the value. Text is parsed; anything non-finite is `None`.
    pub fn as_number(&self) -> Option<f64> {
        let v = match self {
            ParamValue::Number(v) => *v,
            ParamValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// String-keyed parameter map read defensively: lookups never fail.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamBag {
    values: BTreeMap<String, ParamValue>,
}

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Numeric value for `key`, or `default` when the key is missing, malformed,
    /// non-finite, or zero.
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        match self.get(key).and_then(ParamValue::as_number) {
            Some(v) if v != 0.0 => v,
            _ => default,
        }
    }

    /// Positive whole count for `key`; fractional values round up.
    pub fn count_or(&self, key: &str, default: usize) -> usize {
        let v = self.number_or(key, default as f64);
        if v > 0.0 {
            v.ceil() as usize
        } else {
            default
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_text)
    }

    /// Multiply the numeric entries named in `keys` by `factor`.
    ///
    /// Keys that are absent or not stored as numbers are left alone, so defaults applied
    /// later stay unscaled.
    pub fn scaled(&self, keys: &[&str], factor: f64) -> ParamBag {
        let mut out = self.clone();
        for key in keys {
            if let Some(ParamValue::Number(v)) = out.values.get_mut(*key) {
                *v *= factor;
            }
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for ParamBag
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = ParamBag::new();
        for (k, v) in iter {
            bag.insert(k, v);
        }
        bag
    }
}

/// A method identifier plus its raw parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingMethodSpec {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MethodKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: ParamBag,
}

impl DrawingMethodSpec {
    pub fn new(kind: MethodKind) -> Self {
        Self {
            kind,
            params: ParamBag::new(),
        }
    }

    pub fn with_params(mut self, params: ParamBag) -> Self {
        self.params = params;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }
}
