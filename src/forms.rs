//! Forms module.
//!
//! Widget attribute model, attribute-string parser and the chainable
//! [`WidgetTweaks`] operations.

pub use widget_tweaks_forms::*;
