//! Attribute mutators
//!
//! `set_attrs` and `clear_attrs` operate on any [`AttrStore`]. The
//! [`WidgetTweaks`] extension trait exposes all four operations on anything
//! that owns widget attributes and returns `&mut Self` so calls chain:
//!
//! ```
//! use widget_tweaks_forms::{AttrStore, FormField, WidgetTweaks};
//!
//! let mut field = FormField::email("email").with_attr("class", "test-email");
//! field
//! 	.set_attr(r"placeholder=Email Address\, Username")?
//! 	.clear_attr("class")?;
//!
//! let attrs = &field.widget.attrs;
//! assert_eq!(attrs.attr_text("placeholder").as_deref(), Some("Email Address, Username"));
//! assert!(!attrs.has_attr("class"));
//! # Ok::<(), widget_tweaks_forms::TweakError>(())
//! ```

use crate::attrs::{AttrStore, WidgetAttrs};
use crate::classes;
use crate::error::TweakResult;
use crate::parser::parse_attrs;
use crate::settings::TweakSettings;

/// Types that expose a mutable widget attribute map
pub trait HasWidgetAttrs {
	fn widget_attrs(&self) -> &WidgetAttrs;
	fn widget_attrs_mut(&mut self) -> &mut WidgetAttrs;
}

/// Applies an attribute string using the default numeric settings
pub fn set_attrs<S: AttrStore + ?Sized>(attrs: &mut S, spec: &str) -> TweakResult<()> {
	set_attrs_with(attrs, spec, TweakSettings::global_default())
}

/// Applies an attribute string
///
/// Tokens are applied in order; a later token overwrites an earlier one with
/// the same key. On error the tokens preceding the failing one stay applied.
pub fn set_attrs_with<S: AttrStore + ?Sized>(
	attrs: &mut S,
	spec: &str,
	settings: &TweakSettings,
) -> TweakResult<()> {
	for token in parse_attrs(spec, settings) {
		let token = token.inspect_err(|err| {
			tracing::debug!(error = %err, "rejected widget attribute string");
		})?;
		tracing::trace!(key = %token.key, value = %token.value, "set widget attribute");
		attrs.put_attr(token.key, token.value);
	}
	Ok(())
}

/// Removes the comma-separated attribute names that are present
pub fn clear_attrs<S: AttrStore + ?Sized>(attrs: &mut S, names: &str) {
	for name in names.split(',').map(str::trim).filter(|name| !name.is_empty()) {
		if attrs.remove_attr(name) {
			tracing::trace!(key = name, "cleared widget attribute");
		}
	}
}

/// Chainable attribute operations for field wrappers
pub trait WidgetTweaks: HasWidgetAttrs {
	fn set_attr(&mut self, spec: &str) -> TweakResult<&mut Self> {
		set_attrs(self.widget_attrs_mut(), spec)?;
		Ok(self)
	}

	fn set_attr_with(&mut self, spec: &str, settings: &TweakSettings) -> TweakResult<&mut Self> {
		set_attrs_with(self.widget_attrs_mut(), spec, settings)?;
		Ok(self)
	}

	fn clear_attr(&mut self, names: &str) -> TweakResult<&mut Self> {
		clear_attrs(self.widget_attrs_mut(), names);
		Ok(self)
	}

	fn append_class(&mut self, classes: &str) -> TweakResult<&mut Self> {
		classes::append_class(self.widget_attrs_mut(), classes);
		Ok(self)
	}

	fn remove_class(&mut self, classes: &str) -> TweakResult<&mut Self> {
		classes::remove_class(self.widget_attrs_mut(), classes);
		Ok(self)
	}
}

impl<T: HasWidgetAttrs + ?Sized> WidgetTweaks for T {}
