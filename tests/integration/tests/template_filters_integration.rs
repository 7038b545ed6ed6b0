//! Template Filter Integration Tests
//!
//! Renders Tera templates that apply the widget tweak filters to fields of a
//! serialized form, the way a page template would.

use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tera::{Context, Tera};
use widget_tweaks::forms::{Form, TweakSettings};
use widget_tweaks_integration_tests::{error_chain, sample_form, tera_with_filters};

#[fixture]
fn engine() -> Tera {
	tera_with_filters()
}

#[fixture]
fn context() -> Context {
	let mut form: Form = sample_form();
	let mut context = Context::new();
	context.insert("form", &form.to_context());
	context
}

/// Renders `{% set f = <expr> %}` and returns `f.widget.attrs` as JSON
fn render_attrs(tera: &mut Tera, context: &Context, expr: &str) -> Value {
	let template = format!("{{% set f = {expr} %}}{{{{ f.widget.attrs | json_encode() | safe }}}}");
	let output = tera.render_str(&template, context).unwrap();
	serde_json::from_str(&output).unwrap()
}

fn render_err(tera: &mut Tera, context: &Context, template: &str) -> Vec<String> {
	let err = tera.render_str(template, context).unwrap_err();
	error_chain(&err)
}

#[rstest]
fn test_set_attr_in_template(mut engine: Tera, context: Context) {
	// Act
	let attrs = render_attrs(
		&mut engine,
		&context,
		r#"form.age | set_attr(attrs="min=18,max=100,size=3,required")"#,
	);

	// Assert
	assert_eq!(
		attrs,
		json!({
			"class": "test-age",
			"placeholder": "Age",
			"min": 18.0,
			"max": 100.0,
			"size": 3,
			"required": "",
		})
	);
}

#[rstest]
fn test_escaped_comma_from_context_variable(mut engine: Tera, mut context: Context) {
	// Arrange
	context.insert("spec", r"placeholder=Email Address\, Username");

	// Act
	let attrs = render_attrs(&mut engine, &context, "form.email | set_attr(attrs=spec)");

	// Assert
	assert_eq!(attrs["placeholder"], "Email Address, Username");
}

#[rstest]
fn test_chained_filters(mut engine: Tera, context: Context) {
	// Act
	let attrs = render_attrs(
		&mut engine,
		&context,
		r#"form.email | clear_attr(names="placeholder") | append_class(classes="form-control, is-valid") | remove_class(classes="test-email")"#,
	);

	// Assert
	assert_eq!(attrs, json!({ "class": "form-control is-valid" }));
}

#[rstest]
fn test_remove_all_classes_drops_class_attr(mut engine: Tera, context: Context) {
	// Act
	let attrs = render_attrs(
		&mut engine,
		&context,
		r#"form.agree | remove_class(classes="test-agree")"#,
	);

	// Assert
	assert_eq!(attrs, json!({}));
}

#[rstest]
fn test_filters_do_not_leak_into_context(mut engine: Tera, context: Context) {
	// Act
	let output = engine
		.render_str(
			r#"{% set f = form.password | clear_attr(names="class") %}{{ form.password.widget.attrs.class }}"#,
			&context,
		)
		.unwrap();

	// Assert
	assert_eq!(output, "test-password");
}

#[rstest]
fn test_filters_in_loop(mut engine: Tera, context: Context) {
	// Act
	let output = engine
		.render_str(
			r#"{% for name, field in form %}{% set f = field | append_class(classes="form-control") %}{{ name }}={{ f.widget.attrs.class }};{% endfor %}"#,
			&context,
		)
		.unwrap();

	// Assert
	let mut lines: Vec<&str> = output.split(';').filter(|l| !l.is_empty()).collect();
	lines.sort_unstable();
	assert_eq!(
		lines,
		vec![
			"age=test-age form-control",
			"agree=test-agree form-control",
			"email=test-email form-control",
			"first_name=test-first-name form-control",
			"last_name=test-last-name form-control",
			"password=test-password form-control",
		]
	);
}

#[rstest]
#[case(r#"{{ "plain text" | set_attr(attrs="class=x") }}"#, "set_attr")]
#[case(r#"{{ form.email.name | clear_attr(names="class") }}"#, "clear_attr")]
#[case(r#"{{ form | append_class(classes="x") }}"#, "append_class")]
#[case(r#"{{ 3 | remove_class(classes="x") }}"#, "remove_class")]
fn test_non_field_fails_render(
	mut engine: Tera,
	context: Context,
	#[case] template: &str,
	#[case] filter: &str,
) {
	// Act
	let chain = render_err(&mut engine, &context, template);

	// Assert
	let expected = format!("The '{filter}' filter can only be applied to form fields");
	assert!(
		chain.iter().any(|message| message.contains(&expected)),
		"{chain:?}"
	);
}

#[rstest]
#[case("min=abc", "'min'", "floating-point")]
#[case("maxlength=ten", "'maxlength'", "integer")]
#[case("=orphan", "'=orphan'", "key=value")]
fn test_bad_attribute_string_fails_render(
	mut engine: Tera,
	mut context: Context,
	#[case] spec: &str,
	#[case] key: &str,
	#[case] expected: &str,
) {
	// Arrange
	context.insert("spec", spec);

	// Act
	let chain = render_err(
		&mut engine,
		&context,
		"{% set f = form.age | set_attr(attrs=spec) %}{{ f.name }}",
	);

	// Assert
	assert!(
		chain
			.iter()
			.any(|message| message.contains(key) && message.contains(expected)),
		"{chain:?}"
	);
}

#[rstest]
fn test_custom_settings_registration(mut context: Context) {
	// Arrange
	let settings = TweakSettings::from_toml_str(
		r#"
		integer_attrs = ["size", "tabindex"]
		float_attrs = []
		"#,
	)
	.unwrap();
	let mut engine = Tera::default();
	widget_tweaks::register_filters_with(&mut engine, settings);
	context.insert("spec", "tabindex=4,min=eighteen");

	// Act
	let attrs = render_attrs(&mut engine, &context, "form.age | set_attr(attrs=spec)");

	// Assert
	assert_eq!(attrs["tabindex"], 4);
	assert_eq!(attrs["min"], "eighteen");
}
