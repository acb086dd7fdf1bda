//! ruler_ui - building blocks for scrollable ruler-style scales
//!
//! Rendering-agnostic pieces shared by scale widgets: pixel geometry
//! newtypes, a fixed tick layout, scroll bookkeeping, and callback wrappers
//! for the hooks a widget fires.

mod callback;
pub mod constants;
mod error;
mod scroll;
mod ticks;
mod units;

pub use callback::{Callback, SideEffect};
pub use error::LayoutError;
pub use scroll::ScrollState;
pub use ticks::{TickKind, TickLayout, TickMark};
pub use units::{PixelDensity, Pixels};
