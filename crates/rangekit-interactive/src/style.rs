use rangekit::{Orientation, TrackMetrics, DVec2};
use rangekit_macros::WithBuilders;

/// Proportions and orientation of a range slider
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct RangeSliderStyle {
    /// Radius of each handle thumb
    #[with_builders(non_negative)]
    pub handle_radius: f64,
    /// Thickness of the track line
    #[with_builders(non_negative)]
    pub track_thickness: f64,
    /// Touch padding around each handle, as a fraction of the handle radius
    #[with_builders(non_negative)]
    pub padding_to_radius_ratio: f64,
    /// Run the track bottom to top instead of left to right
    pub vertical: bool,
}

impl Default for RangeSliderStyle {
    fn default() -> Self {
        Self {
            handle_radius: 15.0,
            track_thickness: 2.0,
            padding_to_radius_ratio: 0.6,
            vertical: false,
        }
    }
}

impl RangeSliderStyle {
    pub fn orientation(&self) -> Orientation {
        Orientation::from_vertical(self.vertical)
    }

    /// Track metrics for a slider frame of the given size
    pub fn metrics(&self, frame_size: DVec2) -> TrackMetrics {
        TrackMetrics {
            frame_size,
            handle_radius: self.handle_radius,
            track_thickness: self.track_thickness,
            padding_to_radius_ratio: self.padding_to_radius_ratio,
            orientation: self.orientation(),
        }
    }
}
