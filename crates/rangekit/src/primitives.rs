//! Geometric primitives shared by the slider modules
//!
//! Points are `f64` glam vectors. Rects are stored as min/max corners, with
//! the y axis pointing down as in window coordinates.

pub use glam::DVec2;

/// A 2D point in slider or window space
pub type Point = DVec2;

/// Axis along which a slider track runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Track runs left to right, lower values on the left
    #[default]
    Horizontal,
    /// Track runs bottom to top, lower values at the bottom
    Vertical,
}

impl Orientation {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Point, size: DVec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Build a rect from its top-left corner and extent
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_min_size(DVec2::new(x, y), DVec2::new(width, height))
    }

    pub fn x(&self) -> f64 {
        self.min.x
    }

    pub fn y(&self) -> f64 {
        self.min.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside this rectangle (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Rotate this rect counter-clockwise inside a frame of the given height
    ///
    /// Geometry for a vertical slider is computed as if it were horizontal and
    /// then mapped with `(x, y, w, h) -> (y, frame_height - x - w, h, w)`.
    pub fn rotate_within_frame(&self, frame_height: f64) -> Rect {
        Rect::from_xywh(
            self.y(),
            frame_height - self.x() - self.width(),
            self.height(),
            self.width(),
        )
    }
}

/// Rotate a point the same way [`Rect::rotate_within_frame`] rotates a rect
pub fn rotate_point_within_frame(point: Point, frame_height: f64) -> Point {
    Point::new(point.y, frame_height - point.x)
}
