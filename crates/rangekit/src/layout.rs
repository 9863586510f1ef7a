//! Slider layout computation
//!
//! Geometry is computed as if the slider were horizontal, with the track
//! centred across the frame's girth, and rotated into the frame afterwards
//! for vertical sliders.

use crate::{
    GeometryMapper, Handle, NumericRange, Orientation, Point, RangeSliderState, Rect,
};
use glam::DVec2;

/// Size and proportions of a slider inside its frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMetrics {
    /// Size of the slider frame
    pub frame_size: DVec2,
    /// Radius of a handle thumb
    pub handle_radius: f64,
    /// Thickness of the track line
    pub track_thickness: f64,
    /// Touch padding around each handle, as a fraction of the radius
    pub padding_to_radius_ratio: f64,
    /// Axis of the track
    pub orientation: Orientation,
}

impl TrackMetrics {
    /// Extent along the track (frame width when horizontal)
    pub fn length(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.frame_size.x,
            Orientation::Vertical => self.frame_size.y,
        }
    }

    /// Extent across the track (frame height when horizontal)
    pub fn girth(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.frame_size.y,
            Orientation::Vertical => self.frame_size.x,
        }
    }

    /// Radius of the touch target around a handle centre
    pub fn touch_radius(&self) -> f64 {
        self.handle_radius * (1.0 + self.padding_to_radius_ratio)
    }

    /// Side of the square container holding a handle and its padding
    pub fn handle_container_size(&self) -> f64 {
        2.0 * self.touch_radius()
    }

    pub fn mapper(&self, range: NumericRange) -> GeometryMapper {
        GeometryMapper::new(self.length(), self.handle_radius, range, self.orientation)
    }

    /// Mapper for the unrotated, horizontal layout space
    pub fn track_mapper(&self, range: NumericRange) -> GeometryMapper {
        GeometryMapper::new(
            self.length(),
            self.handle_radius,
            range,
            Orientation::Horizontal,
        )
    }

    /// Convert a frame-local point into horizontal layout space
    pub fn to_track_space(&self, point: Point) -> Point {
        match self.orientation {
            Orientation::Horizontal => point,
            // Inverse of `rotate_point_within_frame`
            Orientation::Vertical => Point::new(self.length() - point.y, point.x),
        }
    }

    /// Strip along the whole track, one handle container tall
    pub fn touch_band(&self) -> Rect {
        let size = self.handle_container_size();
        Rect::from_xywh(0.0, self.girth() / 2.0 - size / 2.0, self.length(), size)
    }

    /// Centre of a handle at `value`, in horizontal layout space
    pub fn handle_center(&self, range: NumericRange, value: f64) -> Point {
        Point::new(
            self.track_mapper(range).offset_from_value(value),
            self.girth() / 2.0,
        )
    }
}

/// Frame-local rectangles a renderer needs to draw a range slider
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderLayout {
    /// Track from the low end to the lower handle
    pub track_below: Rect,
    /// Selected part of the track between the handles
    pub track_between: Rect,
    /// Track from the upper handle to the high end
    pub track_above: Rect,
    /// Container of the foreground handle (drawn last)
    pub foreground_handle: Rect,
    /// Container of the background handle
    pub background_handle: Rect,
}

impl SliderLayout {
    pub fn handle(&self, handle: Handle) -> Rect {
        match handle {
            Handle::Foreground => self.foreground_handle,
            Handle::Background => self.background_handle,
        }
    }
}

/// Lay out the track segments and handles for the current slider state
pub fn compute_layout(metrics: &TrackMetrics, state: &RangeSliderState) -> SliderLayout {
    let range = *state.range();
    let mapper = metrics.mapper(range);
    let length = metrics.length();
    let center_y = metrics.girth() / 2.0;

    let lower = metrics.handle_center(range, state.lower_value()).x;
    let upper = metrics.handle_center(range, state.upper_value()).x;

    let track_y = center_y - metrics.track_thickness / 2.0;
    let track = |from: f64, to: f64| {
        let rect = Rect::from_xywh(from, track_y, (to - from).max(0.0), metrics.track_thickness);
        mapper.to_frame(rect, length)
    };

    let container = metrics.handle_container_size();
    let touch_radius = metrics.touch_radius();
    let handle = |value: f64| {
        let x = metrics.handle_center(range, value).x;
        let rect = Rect::from_xywh(
            x - touch_radius,
            center_y - touch_radius,
            container,
            container,
        );
        mapper.to_frame(rect, length)
    };

    SliderLayout {
        track_below: track(0.0, lower),
        track_between: track(lower, upper),
        track_above: track(upper, length),
        foreground_handle: handle(state.handle_value(Handle::Foreground)),
        background_handle: handle(state.handle_value(Handle::Background)),
    }
}
