use crate::attrs::WidgetAttrs;
use crate::field::FormField;
use crate::tweaks::HasWidgetAttrs;
use crate::widget::Widget;

/// BoundField pairs a field definition with its bound data and form prefix
///
/// It borrows the field mutably so that attribute tweaks applied through it
/// land on the field's widget.
pub struct BoundField<'a> {
	field: &'a mut FormField,
	data: Option<&'a serde_json::Value>,
	prefix: &'a str,
}

impl<'a> BoundField<'a> {
	/// Bind a field to optional data under a form prefix
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{BoundField, FormField};
	///
	/// let mut field = FormField::char("name");
	/// let data = serde_json::json!("John");
	///
	/// let bound = BoundField::new(&mut field, Some(&data), "");
	/// assert_eq!(bound.name(), "name");
	/// assert_eq!(bound.value(), Some(&data));
	/// ```
	pub fn new(
		field: &'a mut FormField,
		data: Option<&'a serde_json::Value>,
		prefix: &'a str,
	) -> Self {
		Self {
			field,
			data,
			prefix,
		}
	}

	pub fn name(&self) -> &str {
		&self.field.name
	}

	/// Get the HTML name attribute (with prefix)
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{BoundField, FormField};
	///
	/// let mut field = FormField::email("email");
	/// assert_eq!(BoundField::new(&mut field, None, "").html_name(), "email");
	/// assert_eq!(BoundField::new(&mut field, None, "user").html_name(), "user-email");
	/// ```
	pub fn html_name(&self) -> String {
		if self.prefix.is_empty() {
			self.field.name.clone()
		} else {
			format!("{}-{}", self.prefix, self.field.name)
		}
	}

	/// Get the HTML id attribute
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.html_name())
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label.as_deref()
	}

	/// Bound data, falling back to the field's initial value
	pub fn value(&self) -> Option<&serde_json::Value> {
		self.data.or(self.field.initial.as_ref())
	}

	pub fn is_required(&self) -> bool {
		self.field.required
	}

	pub fn widget(&self) -> &Widget {
		&self.field.widget
	}

	pub fn attrs(&self) -> &WidgetAttrs {
		&self.field.widget.attrs
	}

	pub fn attrs_mut(&mut self) -> &mut WidgetAttrs {
		&mut self.field.widget.attrs
	}

	/// JSON shape of this field inside a template context
	///
	/// Template filters locate the attribute map at `widget.attrs`.
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{BoundField, FormField};
	///
	/// let mut field = FormField::email("email").with_attr("class", "test-email");
	/// let context = BoundField::new(&mut field, None, "").to_context();
	/// assert_eq!(context["id_for_label"], "id_email");
	/// assert_eq!(context["widget"]["attrs"]["class"], "test-email");
	/// ```
	pub fn to_context(&self) -> serde_json::Value {
		serde_json::json!({
			"name": self.name(),
			"html_name": self.html_name(),
			"id_for_label": self.id_for_label(),
			"label": self.label(),
			"help_text": self.field.help_text,
			"required": self.is_required(),
			"value": self.value(),
			"widget": self.widget().to_context(),
		})
	}
}

impl HasWidgetAttrs for BoundField<'_> {
	fn widget_attrs(&self) -> &WidgetAttrs {
		self.attrs()
	}

	fn widget_attrs_mut(&mut self) -> &mut WidgetAttrs {
		self.attrs_mut()
	}
}
