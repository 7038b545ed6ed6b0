//! A minimal form: an ordered list of fields plus optional bound data

use crate::bound_field::BoundField;
use crate::field::FormField;
use std::collections::HashMap;

/// Form data structure
#[derive(Debug, Clone, Default)]
pub struct Form {
	fields: Vec<FormField>,
	data: HashMap<String, serde_json::Value>,
	is_bound: bool,
	prefix: String,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_bound());
	/// assert!(form.fields().is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn add_field(&mut self, field: FormField) {
		self.fields.push(field);
	}

	/// Builder-style variant of [`Form::add_field`]
	pub fn with_field(mut self, field: FormField) -> Self {
		self.add_field(field);
		self
	}

	/// Bind submitted data to the form
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::HashMap;
	/// use widget_tweaks_forms::{Form, FormField};
	///
	/// let mut form = Form::new().with_field(FormField::char("name"));
	/// let mut data = HashMap::new();
	/// data.insert("name".to_string(), serde_json::json!("Ada"));
	/// form.bind(data);
	///
	/// assert!(form.is_bound());
	/// ```
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	pub fn fields(&self) -> &[FormField] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FormField> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Borrow a field bound to this form's data and prefix
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{AttrValue, Form, FormField, WidgetTweaks};
	///
	/// let mut form = Form::new().with_field(FormField::integer("age"));
	/// form.bound_field_mut("age").unwrap().set_attr("min=18")?;
	///
	/// let age = form.field("age").unwrap();
	/// assert_eq!(age.widget.attrs.get("min"), Some(&AttrValue::Float(18.0)));
	/// # Ok::<(), widget_tweaks_forms::TweakError>(())
	/// ```
	pub fn bound_field_mut(&mut self, name: &str) -> Option<BoundField<'_>> {
		let field = self.fields.iter_mut().find(|f| f.name == name)?;
		let data = self.data.get(name);
		Some(BoundField::new(field, data, &self.prefix))
	}

	/// Template context: one entry per field, keyed by field name
	pub fn to_context(&mut self) -> serde_json::Value {
		let names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
		let mut context = serde_json::Map::new();
		for name in names {
			if let Some(bound) = self.bound_field_mut(&name) {
				context.insert(name, bound.to_context());
			}
		}
		serde_json::Value::Object(context)
	}
}
