//! # Widget Tweaks Templates
//!
//! Tera filters that change the HTML attributes of form field widgets while
//! a template renders.
//!
//! | Filter | Parameter | Effect |
//! |---|---|---|
//! | `set_attr` | `attrs` | set attributes from `key=value,flag` strings |
//! | `clear_attr` | `names` | remove attributes by name |
//! | `append_class` | `classes` | add CSS classes |
//! | `remove_class` | `classes` | remove CSS classes |
//!
//! ## Example
//!
//! ```rust
//! use tera::{Context, Tera};
//! use widget_tweaks_forms::{Form, FormField};
//!
//! let mut tera = Tera::default();
//! widget_tweaks_templates::register_filters(&mut tera);
//! tera.add_raw_template(
//! 	"field.txt",
//! 	r#"{% set f = form.age | set_attr(attrs="placeholder=Age") | append_class(classes="form-control") %}{{ f.widget.attrs.placeholder }}|{{ f.widget.attrs.class }}"#,
//! )
//! .unwrap();
//!
//! let mut form = Form::new().with_field(FormField::integer("age").with_attr("class", "test-age"));
//! let mut context = Context::new();
//! context.insert("form", &form.to_context());
//!
//! let output = tera.render("field.txt", &context).unwrap();
//! assert_eq!(output, "Age|test-age form-control");
//! ```

pub mod filters;

pub use tera;

pub use filters::{
	APPEND_CLASS, CLEAR_ATTR, REMOVE_CLASS, SET_ATTR, append_class, clear_attr, field_attrs_mut,
	remove_class, set_attr, set_attr_using,
};

use std::collections::HashMap;
use std::sync::Arc;
use tera::{Tera, Value};
use widget_tweaks_forms::TweakSettings;

/// Registers the widget tweak filters with the default numeric settings
pub fn register_filters(tera: &mut Tera) {
	tera.register_filter(SET_ATTR, set_attr);
	register_class_and_clear_filters(tera);
}

/// Registers the widget tweak filters using custom numeric settings
///
/// # Examples
///
/// ```
/// use tera::{Context, Tera};
/// use widget_tweaks_forms::TweakSettings;
///
/// let settings = TweakSettings::from_toml_str(r#"integer_attrs = ["tabindex"]"#).unwrap();
/// let mut tera = Tera::default();
/// widget_tweaks_templates::register_filters_with(&mut tera, settings);
///
/// let field = serde_json::json!({ "widget": { "attrs": {} } });
/// let mut context = Context::new();
/// context.insert("field", &field);
///
/// let output = tera
/// 	.render_str(
/// 		r#"{% set f = field | set_attr(attrs="tabindex=2") %}{{ f.widget.attrs.tabindex + 1 }}"#,
/// 		&context,
/// 	)
/// 	.unwrap();
/// assert_eq!(output, "3");
/// ```
pub fn register_filters_with(tera: &mut Tera, settings: TweakSettings) {
	let settings = Arc::new(settings);
	tera.register_filter(
		SET_ATTR,
		move |value: &Value, args: &HashMap<String, Value>| {
			set_attr_using(&settings, value, args)
		},
	);
	register_class_and_clear_filters(tera);
}

fn register_class_and_clear_filters(tera: &mut Tera) {
	tera.register_filter(CLEAR_ATTR, clear_attr);
	tera.register_filter(APPEND_CLASS, append_class);
	tera.register_filter(REMOVE_CLASS, remove_class);
}
