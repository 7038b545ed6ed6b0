//! Template module.
//!
//! Tera filters wrapping the widget attribute operations.
//!
//! # Examples
//!
//! ```rust
//! use widget_tweaks::template::tera::Tera;
//!
//! let mut tera = Tera::default();
//! widget_tweaks::template::register_filters(&mut tera);
//! ```

pub use widget_tweaks_templates::*;
