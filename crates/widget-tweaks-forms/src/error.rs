//! Errors raised while applying attribute tweaks

use std::fmt;

/// Expected numeric type for a coerced attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
	Integer,
	Float,
}

impl fmt::Display for NumberKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NumberKind::Integer => f.write_str("integer"),
			NumberKind::Float => f.write_str("floating-point"),
		}
	}
}

/// Broad category of a [`TweakError`]
///
/// `Type` means the filter was applied to something that is not a form field.
/// `Format` means the string argument did not follow the attribute grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Type,
	Format,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TweakError {
	#[error("The '{filter}' filter can only be applied to form fields (bound fields).")]
	NotAField { filter: &'static str },
	#[error("Invalid format for set_attr filter: '{token}'. Use 'key=value' format.")]
	MalformedToken { token: String },
	#[error("The value '{value}' for '{key}' attribute must be a valid {expected}.")]
	InvalidNumber {
		key: String,
		value: String,
		expected: NumberKind,
	},
}

impl TweakError {
	/// Returns the category of this error
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{ErrorKind, TweakError};
	///
	/// let err = TweakError::NotAField { filter: "set_attr" };
	/// assert_eq!(err.kind(), ErrorKind::Type);
	/// ```
	pub fn kind(&self) -> ErrorKind {
		match self {
			TweakError::NotAField { .. } => ErrorKind::Type,
			TweakError::MalformedToken { .. } | TweakError::InvalidNumber { .. } => {
				ErrorKind::Format
			}
		}
	}
}

pub type TweakResult<T> = Result<T, TweakError>;
