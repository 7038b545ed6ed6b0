//! Shared fixtures for the widget-tweaks integration tests

use std::error::Error;
use tera::Tera;
use widget_tweaks::forms::{Form, FormField};

/// Sign-up style form covering every widget kind the filters are used with
pub fn sample_form() -> Form {
	Form::new()
		.with_field(
			FormField::char("first_name")
				.with_attr("class", "test-first-name")
				.with_attr("placeholder", "First Name"),
		)
		.with_field(FormField::char("last_name").with_attr("class", "test-last-name"))
		.with_field(
			FormField::email("email")
				.with_attr("class", "test-email")
				.with_attr("placeholder", "Enter your email")
				.required(false),
		)
		.with_field(
			FormField::password("password")
				.with_attr("class", "test-password")
				.with_attr("placeholder", "Password"),
		)
		.with_field(
			FormField::integer("age")
				.with_attr("class", "test-age")
				.with_attr("placeholder", "Age")
				.required(false),
		)
		.with_field(
			FormField::boolean("agree")
				.with_attr("class", "test-agree")
				.required(false),
		)
}

/// A Tera instance with the widget tweak filters registered
pub fn tera_with_filters() -> Tera {
	let mut tera = Tera::default();
	widget_tweaks::register_filters(&mut tera);
	tera
}

/// Messages of an error and all of its sources, outermost first
pub fn error_chain(err: &(dyn Error + 'static)) -> Vec<String> {
	let mut messages = vec![err.to_string()];
	let mut source = err.source();
	while let Some(inner) = source {
		messages.push(inner.to_string());
		source = inner.source();
	}
	messages
}
