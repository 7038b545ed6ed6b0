//! Widget attribute values and the storage seam the mutators write through

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// A single HTML attribute value
///
/// Numeric attributes such as `min` or `maxlength` keep their numeric type so
/// that they serialize as JSON numbers in a template context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
	Integer(i64),
	Float(f64),
	Text(String),
}

impl AttrValue {
	/// The value stored for bare flags such as `required`
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::AttrValue;
	///
	/// assert_eq!(AttrValue::empty().as_str(), Some(""));
	/// ```
	pub fn empty() -> Self {
		AttrValue::Text(String::new())
	}

	/// Returns the string content when this is a text value
	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttrValue::Text(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			AttrValue::Integer(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			AttrValue::Float(n) => Some(*n),
			_ => None,
		}
	}
}

impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Integer(n) => write!(f, "{n}"),
			AttrValue::Float(n) => write!(f, "{n}"),
			AttrValue::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Integer(value)
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Float(value)
	}
}

impl From<AttrValue> for Value {
	fn from(value: AttrValue) -> Self {
		match value {
			AttrValue::Integer(n) => Value::from(n),
			// Non-finite floats are rejected by the parser; `Null` only guards
			// values constructed by hand.
			AttrValue::Float(n) => serde_json::Number::from_f64(n)
				.map(Value::Number)
				.unwrap_or(Value::Null),
			AttrValue::Text(s) => Value::String(s),
		}
	}
}

/// Attribute map owned by a widget
pub type WidgetAttrs = HashMap<String, AttrValue>;

/// Mutable attribute storage that the tweak operations write into
///
/// Implemented for the typed [`WidgetAttrs`] map and for the JSON object that
/// represents `widget.attrs` inside a template context, so both go through the
/// same parsing and class-list logic.
pub trait AttrStore {
	/// Returns the attribute rendered as text, if present
	fn attr_text(&self, key: &str) -> Option<Cow<'_, str>>;

	fn put_attr(&mut self, key: String, value: AttrValue);

	/// Removes the attribute, returning whether it was present
	fn remove_attr(&mut self, key: &str) -> bool;

	fn has_attr(&self, key: &str) -> bool;
}

impl AttrStore for WidgetAttrs {
	fn attr_text(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).map(|value| match value {
			AttrValue::Text(s) => Cow::Borrowed(s.as_str()),
			other => Cow::Owned(other.to_string()),
		})
	}

	fn put_attr(&mut self, key: String, value: AttrValue) {
		self.insert(key, value);
	}

	fn remove_attr(&mut self, key: &str) -> bool {
		self.remove(key).is_some()
	}

	fn has_attr(&self, key: &str) -> bool {
		self.contains_key(key)
	}
}

impl AttrStore for Map<String, Value> {
	fn attr_text(&self, key: &str) -> Option<Cow<'_, str>> {
		match self.get(key)? {
			Value::String(s) => Some(Cow::Borrowed(s.as_str())),
			Value::Number(n) => Some(Cow::Owned(n.to_string())),
			Value::Bool(b) => Some(Cow::Owned(b.to_string())),
			Value::Null | Value::Array(_) | Value::Object(_) => None,
		}
	}

	fn put_attr(&mut self, key: String, value: AttrValue) {
		self.insert(key, value.into());
	}

	fn remove_attr(&mut self, key: &str) -> bool {
		self.remove(key).is_some()
	}

	fn has_attr(&self, key: &str) -> bool {
		self.contains_key(key)
	}
}
