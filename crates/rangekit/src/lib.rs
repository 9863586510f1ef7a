//! # rangekit
//!
//! Backend agnostic dual-handle range slider engine.
//!
//! This crate provides the value, geometry and drag-state logic of a range
//! slider with zero dependencies on any specific UI toolkit. Rendering and
//! event delivery are handled by separate crates like `rangekit-interactive`
//! and `rangekit-winit`.
//!
//! ## Core Types
//!
//! - [`NumericRange`] - Bounds every value is clamped against
//! - [`GeometryMapper`] - Converts track offsets to values and back
//! - [`RangeSliderState`] - Lower/upper values, handle assignment and drag session
//!
//! ## Input & Events
//!
//! - [`PointerEvent`] - Pointer down/move/up/cancel in window coordinates
//! - [`PointerState`] - Builds pointer events from cursor and button state
//! - [`SliderEvent`] - Notifications published to collaborators
//!
//! ## Layout
//!
//! - [`TrackMetrics`] - Frame size and handle proportions
//! - [`SliderLayout`] - Track segments and handle rectangles for rendering
//! - [`hit_test_slider`] - Finds the region under a pointer

mod events;
mod geometry;
mod input;
mod layout;
mod primitives;
mod range;
mod slider;

pub use events::*;
pub use geometry::*;
pub use hit_test::*;
pub use input::*;
pub use layout::*;
pub use primitives::*;
pub use range::*;
pub use slider::*;
