//! Winit input adapter for rangekit
//!
//! Converts winit window events into rangekit's backend-agnostic
//! [`PointerEvent`](rangekit::PointerEvent)s and feeds them to a
//! [`RangeSliderView`](rangekit_interactive::RangeSliderView).

mod input;

pub use input::*;
