//! # Widget Tweaks
//!
//! Template filters that set, clear and toggle the HTML attributes of form
//! field widgets, inspired by Django's widget-tweaking template tags.
//!
//! ## Feature Flags
//!
//! - `templates` (default) - Tera filter adapters (`set_attr`, `clear_attr`,
//!   `append_class`, `remove_class`)
//!
//! The attribute model and mutators in [`forms`] are always available.
//!
//! ## Example
//!
//! ```rust
//! use widget_tweaks::forms::{AttrValue, Form, FormField, WidgetTweaks};
//!
//! let mut form = Form::new().with_field(FormField::integer("age").with_attr("class", "test-age"));
//! form.bound_field_mut("age")
//! 	.unwrap()
//! 	.set_attr("min=18,max=100")?
//! 	.remove_class("test-age")?;
//!
//! let attrs = &form.field("age").unwrap().widget.attrs;
//! assert_eq!(attrs.get("max"), Some(&AttrValue::Float(100.0)));
//! assert!(attrs.get("class").is_none());
//! # Ok::<(), widget_tweaks::forms::TweakError>(())
//! ```

pub mod forms;
#[cfg(feature = "templates")]
pub mod template;

pub use forms::{TweakError, TweakResult, WidgetTweaks};
#[cfg(feature = "templates")]
pub use template::{register_filters, register_filters_with};
