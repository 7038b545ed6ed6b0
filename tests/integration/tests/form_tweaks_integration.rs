//! Form Tweak Integration Tests
//!
//! Applies attribute tweaks to fields of a complete form through the Rust API
//! and checks what ends up on each widget.

use rstest::{fixture, rstest};
use std::collections::BTreeSet;
use widget_tweaks::forms::{
	AttrStore, AttrValue, ErrorKind, Form, TweakError, WidgetAttrs, WidgetTweaks,
};
use widget_tweaks_integration_tests::sample_form;

#[fixture]
fn form() -> Form {
	sample_form()
}

fn attrs<'f>(form: &'f Form, name: &str) -> &'f WidgetAttrs {
	&form.field(name).unwrap().widget.attrs
}

fn class_set(attrs: &WidgetAttrs) -> BTreeSet<String> {
	attrs
		.attr_text("class")
		.map(|classes| classes.split_whitespace().map(str::to_string).collect())
		.unwrap_or_default()
}

#[rstest]
fn test_numeric_attrs_keep_numeric_types(mut form: Form) {
	// Act
	form.bound_field_mut("age")
		.unwrap()
		.set_attr("min=18,max=100")
		.and_then(|age| age.set_attr("maxlength=50"))
		.unwrap();

	// Assert
	let age = attrs(&form, "age");
	assert_eq!(age.get("min"), Some(&AttrValue::Float(18.0)));
	assert_eq!(age.get("max"), Some(&AttrValue::Float(100.0)));
	assert_eq!(age.get("maxlength"), Some(&AttrValue::Integer(50)));
}

#[rstest]
fn test_flag_and_escaped_comma(mut form: Form) {
	// Act
	form.bound_field_mut("email")
		.unwrap()
		.set_attr(r"required,placeholder=Email Address\, Username")
		.unwrap();

	// Assert
	let email = attrs(&form, "email");
	assert_eq!(email.get("required"), Some(&AttrValue::empty()));
	assert_eq!(
		email.get("placeholder"),
		Some(&AttrValue::from("Email Address, Username"))
	);
}

#[rstest]
fn test_invalid_float_is_format_error(mut form: Form) {
	// Act
	let err = form
		.bound_field_mut("age")
		.unwrap()
		.set_attr("placeholder=Your age,min=abc")
		.map(|_| ())
		.unwrap_err();

	// Assert
	assert_eq!(err.kind(), ErrorKind::Format);
	assert_eq!(
		err,
		TweakError::InvalidNumber {
			key: "min".to_string(),
			value: "abc".to_string(),
			expected: widget_tweaks::forms::NumberKind::Float,
		}
	);
	// Tokens before the failing one stay applied
	assert_eq!(
		attrs(&form, "age").get("placeholder"),
		Some(&AttrValue::from("Your age"))
	);
	assert!(!attrs(&form, "age").has_attr("min"));
}

#[rstest]
fn test_clear_attr_twice(mut form: Form) {
	// Act
	for _ in 0..2 {
		form.bound_field_mut("first_name")
			.unwrap()
			.clear_attr("class,placeholder")
			.unwrap();
	}

	// Assert
	assert!(attrs(&form, "first_name").is_empty());
}

#[rstest]
fn test_append_class_is_a_union(mut form: Form) {
	// Act
	{
		let mut last_name = form.bound_field_mut("last_name").unwrap();
		last_name.clear_attr("class").unwrap();
		last_name
			.append_class("a,b c")
			.and_then(|f| f.append_class("b"))
			.unwrap();
	}

	// Assert
	let expected: BTreeSet<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
	assert_eq!(class_set(attrs(&form, "last_name")), expected);
}

#[rstest]
fn test_removing_every_class_deletes_class_key(mut form: Form) {
	// Arrange
	let mut password = form.bound_field_mut("password").unwrap();
	password.set_attr("class=a b").unwrap();

	// Act
	password.remove_class("a b").unwrap();

	// Assert
	assert!(!password.attrs().has_attr("class"));
	assert_eq!(password.attrs().len(), 1);
}

#[rstest]
fn test_tweaks_show_up_in_template_context(mut form: Form) {
	// Arrange
	form.bound_field_mut("agree")
		.unwrap()
		.append_class("form-check-input")
		.unwrap();

	// Act
	let context = form.to_context();

	// Assert
	assert_eq!(
		context["agree"]["widget"]["attrs"]["class"],
		"test-agree form-check-input"
	);
	assert_eq!(context["agree"]["widget"]["input_type"], "checkbox");
}
