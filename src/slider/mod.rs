//! Quantized continuous-value slider.
//!
//! A drag surface over `[min, max]` that is either a free continuous scalar or,
//! in quantized mode, exactly `value_count` evenly spaced levels. The widget
//! owns no presentation: it keeps the handle position, the touched flag, the
//! stored score, and the class name a renderer should apply.
//!
//! # Degenerate configurations
//!
//! - `value_count <= 0` with `enabled = true` produces no levels, and the
//!   slider behaves as a continuous one.
//! - `min == max` produces a single-point scale; every raw value snaps there.

pub mod config;
pub mod levels;
pub mod widget;


pub use config::SliderConfig;
pub use levels::{discrete_levels, nearest_level_index, snap_to_levels};
pub use widget::{QuantizedSlider, SliderChange, SliderObserver};
