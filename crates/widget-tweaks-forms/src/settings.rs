//! Numeric attribute classification settings
//!
//! The attribute grammar coerces a fixed set of attribute names to numbers.
//! `TweakSettings` holds those sets and can be loaded from TOML:
//!
//! ```toml
//! integer_attrs = ["size", "minlength", "maxlength", "cols", "rows"]
//! float_attrs = ["min", "max", "step"]
//! ```

use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

const DEFAULT_INTEGER_ATTRS: [&str; 5] = ["size", "minlength", "maxlength", "cols", "rows"];
const DEFAULT_FLOAT_ATTRS: [&str; 3] = ["min", "max", "step"];

static DEFAULT_SETTINGS: LazyLock<TweakSettings> = LazyLock::new(TweakSettings::default);

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Invalid widget tweak settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// How a `key=value` token is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
	Integer,
	Float,
	Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TweakSettings {
	/// Attribute names parsed as base-10 integers
	pub integer_attrs: BTreeSet<String>,
	/// Attribute names parsed as floating-point numbers
	pub float_attrs: BTreeSet<String>,
}

impl Default for TweakSettings {
	fn default() -> Self {
		Self {
			integer_attrs: DEFAULT_INTEGER_ATTRS.iter().map(|s| s.to_string()).collect(),
			float_attrs: DEFAULT_FLOAT_ATTRS.iter().map(|s| s.to_string()).collect(),
		}
	}
}

impl TweakSettings {
	/// Shared instance holding the default numeric sets
	pub fn global_default() -> &'static TweakSettings {
		&DEFAULT_SETTINGS
	}

	/// Loads settings from a TOML document
	///
	/// Keys that are not present keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{AttrKind, TweakSettings};
	///
	/// let settings = TweakSettings::from_toml_str(r#"float_attrs = ["min", "max", "step", "low"]"#).unwrap();
	/// assert_eq!(settings.classify("low"), AttrKind::Float);
	/// assert_eq!(settings.classify("rows"), AttrKind::Integer);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	pub fn with_integer_attr(mut self, name: impl Into<String>) -> Self {
		self.integer_attrs.insert(name.into());
		self
	}

	pub fn with_float_attr(mut self, name: impl Into<String>) -> Self {
		self.float_attrs.insert(name.into());
		self
	}

	/// Classifies an attribute name
	///
	/// A name listed in both sets is treated as an integer.
	pub fn classify(&self, key: &str) -> AttrKind {
		if self.integer_attrs.contains(key) {
			AttrKind::Integer
		} else if self.float_attrs.contains(key) {
			AttrKind::Float
		} else {
			AttrKind::Text
		}
	}
}
