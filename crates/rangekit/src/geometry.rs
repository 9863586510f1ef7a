//! Conversion between positions along a slider track and range values
//!
//! All functions here are pure: they run on every layout pass and on every
//! drag delta, so identical inputs must give identical outputs.

use crate::{NumericRange, Orientation, Point, Rect};

/// Maps track offsets to values and back for one slider configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryMapper {
    /// Length of the track along its axis (frame width when horizontal)
    pub track_length: f64,
    /// Radius of a handle thumb
    pub handle_radius: f64,
    /// Value range the track represents
    pub range: NumericRange,
    /// Axis of the track
    pub orientation: Orientation,
}

impl GeometryMapper {
    pub fn new(
        track_length: f64,
        handle_radius: f64,
        range: NumericRange,
        orientation: Orientation,
    ) -> Self {
        Self {
            track_length,
            handle_radius,
            range,
            orientation,
        }
    }

    /// Portion of the track a handle centre can travel over
    fn usable_length(&self) -> f64 {
        self.track_length - self.handle_radius
    }

    /// Flip a raw axis coordinate so that offsets grow towards higher values
    fn logical_offset(&self, offset: f64) -> f64 {
        match self.orientation {
            Orientation::Horizontal => offset,
            Orientation::Vertical => self.track_length - offset,
        }
    }

    /// Value under a raw axis offset
    ///
    /// The result is not clamped; callers clamp against the range themselves.
    /// A track too short to hold a handle maps everything to the lower bound.
    pub fn value_from_offset(&self, offset: f64) -> f64 {
        let usable = self.usable_length();
        if usable <= 0.0 {
            return self.range.lower_bound();
        }

        let fraction = (self.logical_offset(offset) - self.handle_radius) / usable;
        self.range.denormalize(fraction)
    }

    /// Raw axis offset of the handle centre for `value`
    ///
    /// Exact inverse of [`value_from_offset`](Self::value_from_offset).
    pub fn offset_from_value(&self, value: f64) -> f64 {
        let usable = self.usable_length().max(0.0);
        let logical = self.range.normalize(value) * usable + self.handle_radius;
        self.logical_offset(logical)
    }

    /// Raw coordinate of a track-local point along the track axis
    pub fn axis_offset(&self, point: Point) -> f64 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    pub fn value_from_point(&self, point: Point) -> f64 {
        self.value_from_offset(self.axis_offset(point))
    }

    /// Map a rect computed in horizontal track space into the slider frame
    pub fn to_frame(&self, rect: Rect, frame_height: f64) -> Rect {
        match self.orientation {
            Orientation::Horizontal => rect,
            Orientation::Vertical => rect.rotate_within_frame(frame_height),
        }
    }
}
