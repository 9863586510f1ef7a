//! # rangekit-interactive
//!
//! Window-facing pieces built on the `rangekit` state machine: a positioned
//! [`RangeSliderView`] that consumes pointer events, its [`RangeSliderStyle`],
//! numeric labels for values and range endpoints, and a [`RangeBinding`]
//! model that keeps text fields in step with the slider.

mod binding;
mod label;
mod style;
mod view;

pub use binding::*;
pub use label::*;
pub use style::*;
pub use view::*;
