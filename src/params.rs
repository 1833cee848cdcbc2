//! Navigation parameters and query string handling
//!
//! This module provides the typed key-value payload attached to navigation
//! calls (`?id=42&tab=info`) and the query string codec used when primary
//! destinations are mirrored into the address history.

use std::fmt;

/// A single typed parameter value
///
/// Values carried through the address bar are strings on the wire; decoding
/// coerces them back with [`ParamValue::coerce`].
///
/// # Example
///
/// ```
/// use gpui_backstack::ParamValue;
///
/// assert_eq!(ParamValue::coerce("42"), ParamValue::Int(42));
/// assert_eq!(ParamValue::coerce("true"), ParamValue::Bool(true));
/// assert_eq!(ParamValue::coerce("007"), ParamValue::Str("007".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Plain string value
    Str(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl ParamValue {
    /// Coerce a raw query string value into its typed form
    ///
    /// `"true"`/`"false"` become booleans. Numbers are accepted only when
    /// their canonical rendering matches the input, so `"42"`, `"0"` and
    /// `"4.5"` become numeric while `"007"`, `"+5"` and `"4.50"` stay
    /// strings and survive a round trip unchanged.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => return ParamValue::Bool(true),
            "false" => return ParamValue::Bool(false),
            _ => {}
        }

        if let Ok(n) = raw.parse::<i64>() {
            if n.to_string() == raw {
                return ParamValue::Int(n);
            }
        }

        if let Ok(x) = raw.parse::<f64>() {
            if x.is_finite() && x.to_string() == raw {
                return ParamValue::Float(x);
            }
        }

        ParamValue::Str(raw.to_string())
    }

    /// Get the string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer payload, if this is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a float; integers widen
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(x) => Some(*x),
            ParamValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get the boolean payload, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

/// Ordered key-value payload attached at navigation time
///
/// Keys are unique; insertion order is preserved so encoded query strings
/// are deterministic. Equality ignores ordering.
///
/// # Example
///
/// ```
/// use gpui_backstack::NavParams;
///
/// let params = NavParams::new().with("id", 42).with("tab", "info");
///
/// assert_eq!(params.get_int("id"), Some(42));
/// assert_eq!(params.get_str("tab"), Some("info"));
/// assert_eq!(params.to_query_string(), "id=42&tab=info");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavParams {
    pairs: Vec<(String, ParamValue)>,
}

impl NavParams {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any existing value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            pair.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Get a string parameter
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get an integer parameter
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_int()
    }

    /// Get a float parameter; integers widen
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_float()
    }

    /// Get a boolean parameter
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Check if a parameter exists
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Serialize to a query string (no leading `?`)
    ///
    /// Values are stringified and percent-encoded; pairs appear in
    /// insertion order. Empty params produce an empty string.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    encode_component(key),
                    encode_component(&value.to_string())
                )
            })
            .collect();

        pairs.join("&")
    }

    /// Parse a query string (no leading `?`), coercing each value
    ///
    /// # Example
    ///
    /// ```
    /// use gpui_backstack::NavParams;
    ///
    /// let params = NavParams::from_query_string("id=42&active=true&code=007");
    /// assert_eq!(params.get_int("id"), Some(42));
    /// assert_eq!(params.get_bool("active"), Some(true));
    /// assert_eq!(params.get_str("code"), Some("007"));
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::new();

        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                let key = decode_component(key);
                let value = decode_component(value);
                params.set(key, ParamValue::coerce(&value));
            }
        }

        params
    }
}

impl PartialEq for NavParams {
    fn eq(&self, other: &Self) -> bool {
        self.pairs.len() == other.pairs.len()
            && self.pairs.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

/// Percent-encode a single URI component
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}

/// Percent-decode a single URI component ('+' decodes as a space)
fn decode_component(s: &str) -> String {
    let raw = s.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        match raw[i] {
            b'%' if i + 2 < raw.len() => {
                if let (Some(hi), Some(lo)) = (hex_val(raw[i + 1]), hex_val(raw[i + 2])) {
                    bytes.push(hi * 16 + lo);
                    i += 3;
                    continue;
                }
                bytes.push(b'%');
                i += 1;
            }
            b'+' => {
                bytes.push(b' ');
                i += 1;
            }
            byte => {
                bytes.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

fn hex_val(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
