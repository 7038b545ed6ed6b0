//! Form widgets and their HTML attributes

use crate::attrs::{AttrValue, WidgetAttrs};
use crate::tweaks::HasWidgetAttrs;
use serde::{Deserialize, Serialize};

/// Kind of HTML input a widget renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetKind {
	TextInput,
	EmailInput,
	PasswordInput,
	NumberInput,
	CheckboxInput,
	TextArea,
	Select,
}

impl WidgetKind {
	/// Value of the `type` attribute, or the element name for non-`input` widgets
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::WidgetKind;
	///
	/// assert_eq!(WidgetKind::EmailInput.input_type(), "email");
	/// assert_eq!(WidgetKind::TextArea.input_type(), "textarea");
	/// ```
	pub fn input_type(&self) -> &'static str {
		match self {
			WidgetKind::TextInput => "text",
			WidgetKind::EmailInput => "email",
			WidgetKind::PasswordInput => "password",
			WidgetKind::NumberInput => "number",
			WidgetKind::CheckboxInput => "checkbox",
			WidgetKind::TextArea => "textarea",
			WidgetKind::Select => "select",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
	pub kind: WidgetKind,
	#[serde(default)]
	pub attrs: WidgetAttrs,
}

impl Widget {
	pub fn new(kind: WidgetKind) -> Self {
		Self {
			kind,
			attrs: WidgetAttrs::new(),
		}
	}

	/// Adds an initial attribute
	///
	/// # Examples
	///
	/// ```
	/// use widget_tweaks_forms::{AttrValue, Widget, WidgetKind};
	///
	/// let widget = Widget::new(WidgetKind::TextInput).with_attr("placeholder", "First Name");
	/// assert_eq!(widget.attrs.get("placeholder"), Some(&AttrValue::from("First Name")));
	/// ```
	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(key.into(), value.into());
		self
	}

	/// JSON shape exposed to templates: `{"input_type": ..., "attrs": {...}}`
	pub fn to_context(&self) -> serde_json::Value {
		let attrs: serde_json::Map<String, serde_json::Value> = self
			.attrs
			.iter()
			.map(|(key, value)| (key.clone(), value.clone().into()))
			.collect();
		serde_json::json!({
			"input_type": self.kind.input_type(),
			"attrs": attrs,
		})
	}
}

impl HasWidgetAttrs for Widget {
	fn widget_attrs(&self) -> &WidgetAttrs {
		&self.attrs
	}

	fn widget_attrs_mut(&mut self) -> &mut WidgetAttrs {
		&mut self.attrs
	}
}
