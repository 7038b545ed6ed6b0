//! Attribute-string grammar
//!
//! An attribute string is a comma-separated list of tokens. Each token is
//! either a bare flag (`required`) or a `key=value` pair split on the first
//! `=`. A literal comma inside a value is written as `\,`. Whitespace around
//! keys and values is ignored.

use crate::attrs::AttrValue;
use crate::error::{NumberKind, TweakError, TweakResult};
use crate::settings::{AttrKind, TweakSettings};

const DELIMITER: char = ',';
const ESCAPE: char = '\\';

/// One parsed `key` or `key=value` token
#[derive(Debug, Clone, PartialEq)]
pub struct AttrToken {
	pub key: String,
	pub value: AttrValue,
}

/// Splits an attribute string on unescaped commas
///
/// `\,` becomes a literal comma in the current token. A backslash that is not
/// followed by a comma is kept as is. Tokens are returned untrimmed.
///
/// # Examples
///
/// ```
/// use widget_tweaks_forms::split_attributes;
///
/// let parts = split_attributes(r"class=a,placeholder=Email Address\, Username");
/// assert_eq!(parts, vec!["class=a", "placeholder=Email Address, Username"]);
/// ```
pub fn split_attributes(input: &str) -> Vec<String> {
	let mut parts = Vec::new();
	let mut current = String::new();
	let mut chars = input.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			DELIMITER => parts.push(std::mem::take(&mut current)),
			ESCAPE if chars.peek() == Some(&DELIMITER) => {
				current.push(DELIMITER);
				chars.next();
			}
			other => current.push(other),
		}
	}
	if !current.is_empty() {
		parts.push(current);
	}

	parts
}

/// Parses a single raw token
///
/// Returns `Ok(None)` for tokens that are blank after trimming.
pub fn parse_token(raw: &str, settings: &TweakSettings) -> TweakResult<Option<AttrToken>> {
	let token = raw.trim();
	if token.is_empty() {
		return Ok(None);
	}

	let Some((key, value)) = token.split_once('=') else {
		return Ok(Some(AttrToken {
			key: token.to_string(),
			value: AttrValue::empty(),
		}));
	};

	let key = key.trim();
	let value = value.trim();
	if key.is_empty() {
		return Err(TweakError::MalformedToken {
			token: token.to_string(),
		});
	}

	let value = match settings.classify(key) {
		AttrKind::Integer => value
			.parse::<i64>()
			.map(AttrValue::Integer)
			.map_err(|_| invalid_number(key, value, NumberKind::Integer))?,
		AttrKind::Float => match value.parse::<f64>() {
			Ok(n) if n.is_finite() => AttrValue::Float(n),
			_ => return Err(invalid_number(key, value, NumberKind::Float)),
		},
		AttrKind::Text => AttrValue::Text(value.to_string()),
	};

	Ok(Some(AttrToken {
		key: key.to_string(),
		value,
	}))
}

/// Lazily parses every token of an attribute string in input order
///
/// Parsing is lazy so that callers can apply the tokens preceding a
/// malformed one.
pub fn parse_attrs<'s>(
	input: &str,
	settings: &'s TweakSettings,
) -> impl Iterator<Item = TweakResult<AttrToken>> + 's {
	split_attributes(input)
		.into_iter()
		.filter_map(move |raw| parse_token(&raw, settings).transpose())
}

fn invalid_number(key: &str, value: &str, expected: NumberKind) -> TweakError {
	TweakError::InvalidNumber {
		key: key.to_string(),
		value: value.to_string(),
		expected,
	}
}
