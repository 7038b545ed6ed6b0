//! Widget attribute tweaks for form fields
//!
//! This crate provides the pieces needed to adjust the HTML attributes of a
//! form field's widget from a compact attribute string:
//! - A typed attribute map (`WidgetAttrs`) and the `AttrStore` seam that lets
//!   the same mutators work on template-context JSON objects
//! - The attribute-string grammar (`key`, `key=value`, `\,` escapes) with
//!   integer and floating-point coercion for numeric attributes
//! - Class-list helpers that treat `class` as a set of tokens
//! - A minimal form / bound field / widget model that owns the attributes
//!
//! # Examples
//!
//! ```
//! use widget_tweaks_forms::{AttrValue, FormField, WidgetTweaks};
//!
//! let mut field = FormField::integer("age");
//! field
//! 	.set_attr("min=18,max=100,required")?
//! 	.append_class("form-control")?;
//!
//! assert_eq!(field.widget.attrs.get("min"), Some(&AttrValue::Float(18.0)));
//! assert_eq!(field.widget.attrs.get("required"), Some(&AttrValue::empty()));
//! # Ok::<(), widget_tweaks_forms::TweakError>(())
//! ```

pub mod attrs;
pub mod bound_field;
pub mod classes;
pub mod error;
pub mod field;
pub mod form;
pub mod parser;
pub mod settings;
pub mod tweaks;
pub mod widget;

pub use attrs::{AttrStore, AttrValue, WidgetAttrs};
pub use bound_field::BoundField;
pub use classes::{append_class, remove_class};
pub use error::{ErrorKind, NumberKind, TweakError, TweakResult};
pub use field::FormField;
pub use form::Form;
pub use parser::{AttrToken, parse_attrs, split_attributes};
pub use settings::{AttrKind, SettingsError, TweakSettings};
pub use tweaks::{HasWidgetAttrs, WidgetTweaks, clear_attrs, set_attrs, set_attrs_with};
pub use widget::{Widget, WidgetKind};
