//! Widget attribute filters for Tera
//!
//! Each filter receives a form field as serialized by
//! `BoundField::to_context` (any object with a `widget.attrs` object works)
//! and returns a copy with its attributes changed, so filters chain:
//!
//! ```tera
//! {% set email = form.email | set_attr(attrs="placeholder=Email") | append_class(classes="form-control") %}
//! ```

use serde_json::Map;
use std::collections::HashMap;
use tera::{Result as TeraResult, Value};
use widget_tweaks_forms::{
	TweakError, TweakResult, TweakSettings, append_class as append_classes, clear_attrs,
	remove_class as remove_classes, set_attrs_with,
};

pub const SET_ATTR: &str = "set_attr";
pub const CLEAR_ATTR: &str = "clear_attr";
pub const APPEND_CLASS: &str = "append_class";
pub const REMOVE_CLASS: &str = "remove_class";

/// Locates the mutable attribute map of a field value
///
/// Fails with a type-kind error naming the filter when the value is not a
/// form field.
pub fn field_attrs_mut<'v>(
	field: &'v mut Value,
	filter: &'static str,
) -> TweakResult<&'v mut Map<String, Value>> {
	field
		.get_mut("widget")
		.and_then(|widget| widget.get_mut("attrs"))
		.and_then(Value::as_object_mut)
		.ok_or(TweakError::NotAField { filter })
}

fn into_tera_error(err: TweakError) -> tera::Error {
	tracing::debug!(error = %err, kind = ?err.kind(), "widget tweak filter failed");
	tera::Error::chain(err.to_string(), err)
}

fn string_arg<'a>(
	filter: &str,
	args: &'a HashMap<String, Value>,
	name: &str,
) -> TeraResult<&'a str> {
	args.get(name).and_then(Value::as_str).ok_or_else(|| {
		tera::Error::msg(format!(
			"{filter} filter requires a '{name}' string parameter"
		))
	})
}

fn apply<F>(
	filter: &'static str,
	value: &Value,
	args: &HashMap<String, Value>,
	arg_name: &str,
	op: F,
) -> TeraResult<Value>
where
	F: FnOnce(&mut Map<String, Value>, &str) -> TweakResult<()>,
{
	let mut field = value.clone();
	let attrs = field_attrs_mut(&mut field, filter).map_err(into_tera_error)?;
	let arg = string_arg(filter, args, arg_name)?;
	tracing::trace!(filter, arg, "applying widget tweak filter");
	op(attrs, arg).map_err(into_tera_error)?;
	Ok(field)
}

/// Set or update widget attributes
///
/// # Example
/// ```tera
/// {{ form.age | set_attr(attrs="min=18,max=100,required") }}
/// ```
pub fn set_attr(value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
	set_attr_using(TweakSettings::global_default(), value, args)
}

/// [`set_attr`] with custom numeric attribute settings
pub fn set_attr_using(
	settings: &TweakSettings,
	value: &Value,
	args: &HashMap<String, Value>,
) -> TeraResult<Value> {
	apply(SET_ATTR, value, args, "attrs", |attrs, spec| {
		set_attrs_with(attrs, spec, settings)
	})
}

/// Remove widget attributes by name
///
/// # Example
/// ```tera
/// {{ form.email | clear_attr(names="class,placeholder") }}
/// ```
pub fn clear_attr(value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
	apply(CLEAR_ATTR, value, args, "names", |attrs, names| {
		clear_attrs(attrs, names);
		Ok(())
	})
}

/// Add CSS classes to the widget's `class` attribute
///
/// # Example
/// ```tera
/// {{ form.email | append_class(classes="form-control is-valid") }}
/// ```
pub fn append_class(value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
	apply(APPEND_CLASS, value, args, "classes", |attrs, classes| {
		append_classes(attrs, classes);
		Ok(())
	})
}

/// Remove CSS classes from the widget's `class` attribute
///
/// # Example
/// ```tera
/// {{ form.email | remove_class(classes="is-invalid") }}
/// ```
pub fn remove_class(value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
	apply(REMOVE_CLASS, value, args, "classes", |attrs, classes| {
		remove_classes(attrs, classes);
		Ok(())
	})
}
