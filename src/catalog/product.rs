//! Product records as delivered by the backend.

use serde::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Product identifier. Collection APIs hand out either numbers or strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default = "missing_id")]
    pub id: ProductId,

    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<String>,

    #[serde(default = "missing_price", deserialize_with = "lenient_price")]
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            price,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

fn missing_id() -> ProductId {
    ProductId::Text(String::new())
}

fn missing_price() -> f64 {
    f64::NAN
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Empty and null categories fall back to the configured default at render time.
fn lenient_category<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Numeric coercion for prices: numbers pass through, numeric strings are
/// parsed with JavaScript `Number()` rules, null and blank strings are zero,
/// booleans are 1/0, the rest is NaN.
fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(coerce_price(&Value::deserialize(deserializer)?))
}

pub(crate) fn coerce_price(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                parse_numeric(trimmed)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Decimal literals, `Infinity` with an optional sign, and unsigned
/// `0x`/`0o`/`0b` integers. Rust-only spellings such as `inf` and `nan` are
/// rejected.
fn parse_numeric(text: &str) -> f64 {
    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    }

    if text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Decode a response payload.
///
/// Returns `None` when the payload is not an array. Entries that are not
/// objects are skipped.
pub fn decode_products(payload: Value) -> Option<Vec<Product>> {
    let entries = match payload {
        Value::Array(entries) => entries,
        other => {
            tracing::warn!(kind = json_kind(&other), "Catalog payload is not an array");
            return None;
        }
    };

    let mut products = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!(index, kind = json_kind(&entry), "Skipping non-object catalog entry");
            continue;
        }
        match serde_json::from_value::<Product>(entry) {
            Ok(product) => products.push(product),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping undecodable catalog entry");
            }
        }
    }
    Some(products)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
