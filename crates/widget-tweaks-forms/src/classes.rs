//! `class` attribute helpers
//!
//! The `class` attribute is treated as a set of whitespace-separated tokens.
//! Class arguments may separate names with commas, whitespace, or both.

use crate::attrs::{AttrStore, AttrValue};

const CLASS_ATTR: &str = "class";

fn class_tokens(input: &str) -> impl Iterator<Item = &str> {
	input
		.split(',')
		.flat_map(str::split_whitespace)
		.filter(|name| !name.is_empty())
}

fn current_classes<S: AttrStore + ?Sized>(attrs: &S) -> Vec<String> {
	attrs
		.attr_text(CLASS_ATTR)
		.map(|value| value.split_whitespace().map(str::to_string).collect())
		.unwrap_or_default()
}

/// Adds classes to the `class` attribute, skipping ones already present
///
/// Existing classes keep their order and new ones follow in input order.
/// When the result would be empty the attribute is left untouched.
///
/// # Examples
///
/// ```
/// use widget_tweaks_forms::{AttrStore, WidgetAttrs, append_class};
///
/// let mut attrs = WidgetAttrs::new();
/// append_class(&mut attrs, "a,b c");
/// append_class(&mut attrs, "b");
/// assert_eq!(attrs.attr_text("class").as_deref(), Some("a b c"));
/// ```
pub fn append_class<S: AttrStore + ?Sized>(attrs: &mut S, classes: &str) {
	let mut current = current_classes(&*attrs);
	for name in class_tokens(classes) {
		if !current.iter().any(|existing| existing == name) {
			current.push(name.to_string());
		}
	}

	if current.is_empty() {
		return;
	}
	tracing::trace!(classes = %current.join(" "), "appended widget classes");
	attrs.put_attr(CLASS_ATTR.to_string(), AttrValue::Text(current.join(" ")));
}

/// Removes classes from the `class` attribute
///
/// The attribute is deleted when no class remains.
///
/// # Examples
///
/// ```
/// use widget_tweaks_forms::{AttrStore, AttrValue, WidgetAttrs, remove_class};
///
/// let mut attrs = WidgetAttrs::new();
/// attrs.insert("class".to_string(), AttrValue::from("a b"));
/// remove_class(&mut attrs, "a b");
/// assert!(!attrs.has_attr("class"));
/// ```
pub fn remove_class<S: AttrStore + ?Sized>(attrs: &mut S, classes: &str) {
	if !attrs.has_attr(CLASS_ATTR) {
		return;
	}

	let removed: Vec<&str> = class_tokens(classes).collect();
	let mut current = current_classes(&*attrs);
	current.retain(|existing| !removed.contains(&existing.as_str()));

	if current.is_empty() {
		tracing::trace!("removed all widget classes");
		attrs.remove_attr(CLASS_ATTR);
	} else {
		attrs.put_attr(CLASS_ATTR.to_string(), AttrValue::Text(current.join(" ")));
	}
}
