//! Form field definitions

use crate::attrs::{AttrValue, WidgetAttrs};
use crate::tweaks::HasWidgetAttrs;
use crate::widget::{Widget, WidgetKind};

/// A form field definition owning its widget
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub initial: Option<serde_json::Value>,
	pub widget: Widget,
}

impl FormField {
	/// Create a new field with the given widget kind
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{FormField, WidgetKind};
	///
	/// let field = FormField::new("bio", WidgetKind::TextArea);
	/// assert_eq!(field.name, "bio");
	/// assert!(field.required);
	/// assert!(field.widget.attrs.is_empty());
	/// ```
	pub fn new(name: impl Into<String>, kind: WidgetKind) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: true,
			help_text: None,
			initial: None,
			widget: Widget::new(kind),
		}
	}

	pub fn char(name: impl Into<String>) -> Self {
		Self::new(name, WidgetKind::TextInput)
	}

	pub fn email(name: impl Into<String>) -> Self {
		Self::new(name, WidgetKind::EmailInput)
	}

	pub fn password(name: impl Into<String>) -> Self {
		Self::new(name, WidgetKind::PasswordInput)
	}

	pub fn integer(name: impl Into<String>) -> Self {
		Self::new(name, WidgetKind::NumberInput)
	}

	pub fn boolean(name: impl Into<String>) -> Self {
		Self::new(name, WidgetKind::CheckboxInput)
	}

	/// Set whether the field is required
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::FormField;
	///
	/// let field = FormField::email("email").required(false);
	/// assert!(!field.required);
	/// ```
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn with_initial(mut self, initial: serde_json::Value) -> Self {
		self.initial = Some(initial);
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	/// Add an initial widget attribute
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{AttrValue, FormField};
	///
	/// let field = FormField::char("first_name").with_attr("class", "test-first-name");
	/// assert_eq!(field.widget.attrs.get("class"), Some(&AttrValue::from("test-first-name")));
	/// ```
	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.widget.attrs.insert(key.into(), value.into());
		self
	}
}

impl HasWidgetAttrs for FormField {
	fn widget_attrs(&self) -> &WidgetAttrs {
		&self.widget.attrs
	}

	fn widget_attrs_mut(&mut self) -> &mut WidgetAttrs {
		&mut self.widget.attrs
	}
}
