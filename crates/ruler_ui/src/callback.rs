//! Callback wrappers for scale widget hooks
//!
//! Widgets built on a scale never own their collaborators. A haptic engine, a
//! value listener or a logging hook is handed in as a closure and stored in one
//! of the wrappers below, so the widget can fire it without knowing what sits
//! behind it.
//!
//! # Examples
//!
//! ```
//! use ruler_ui::{Callback, SideEffect};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let pulses = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&pulses);
//! let pulse = SideEffect::new(move || counter.set(counter.get() + 1));
//! pulse.emit();
//! assert_eq!(pulses.get(), 1);
//!
//! let on_change: Callback<i32> = Callback::none();
//! assert!(!on_change.call(150));
//! ```

use std::fmt;

/// An optional handler receiving one value per invocation.
pub struct Callback<T> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> Callback<T> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the handler with a value, if one is registered.
    ///
    /// Returns `true` when a handler ran.
    pub fn call(&self, value: T) -> bool {
        match self.f {
            Some(ref f) => {
                f(value);
                true
            }
            None => false,
        }
    }

    /// Check if a handler is registered.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if no handler is registered.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

// =============================================================================
// Side-effect Callback (SideEffect)
// =============================================================================

/// A parameterless hook fired purely for its side effect.
///
/// Used for the feedback pulse of a scale: the widget fires it once per
/// detected value transition and never inspects a result.
pub struct SideEffect {
    f: Option<Box<dyn Fn()>>,
}

impl SideEffect {
    /// Create a new side-effect callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty side-effect callback.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Fire the hook, if it exists.
    pub fn emit(&self) {
        if let Some(ref f) = self.f {
            f();
        }
    }

    /// Check if the hook is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the hook is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl Default for SideEffect {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideEffect")
            .field("set", &self.is_some())
            .finish()
    }
}
