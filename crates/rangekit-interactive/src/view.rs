//! Range slider view
//!
//! [`RangeSliderView`] places a [`RangeSliderState`] inside a window-space
//! frame. It converts pointer events into track-local offsets, hit-tests
//! them against the handles and the track, and drives the state machine.
//! Rendering is left to the caller, who draws the rectangles returned by
//! [`RangeSliderView::layout`].

use crate::RangeSliderStyle;
use rangekit::{
    compute_layout, hit_test_slider, GeometryMapper, HitRegion, Point, PointerEvent,
    RangeSliderState, Rect, SliderLayout, TrackMetrics,
};

/// A range slider placed in a window
#[derive(Debug, Default)]
pub struct RangeSliderView {
    state: RangeSliderState,
    frame: Rect,
    style: RangeSliderStyle,
}

impl RangeSliderView {
    pub fn new(state: RangeSliderState, frame: Rect, style: RangeSliderStyle) -> Self {
        Self {
            state,
            frame,
            style,
        }
    }

    pub fn state(&self) -> &RangeSliderState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RangeSliderState {
        &mut self.state
    }

    /// Frame of the slider in window coordinates
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn style(&self) -> &RangeSliderStyle {
        &self.style
    }

    /// Replace the style
    ///
    /// An active drag is cancelled when the orientation changes, since its
    /// last offset was measured along the old axis.
    pub fn set_style(&mut self, style: RangeSliderStyle) {
        if style.vertical != self.style.vertical && self.state.cancel_drag() {
            log::debug!("orientation changed mid-drag, session cancelled");
        }
        self.style = style;
    }

    pub fn set_vertical(&mut self, vertical: bool) {
        self.set_style(self.style.with_vertical(vertical));
    }

    pub fn metrics(&self) -> TrackMetrics {
        self.style.metrics(self.frame.size())
    }

    pub fn mapper(&self) -> GeometryMapper {
        self.metrics().mapper(*self.state.range())
    }

    /// Convert a window point into frame-local coordinates
    pub fn to_local(&self, point: Point) -> Point {
        point - self.frame.min
    }

    /// Find the slider region under a frame-local point
    pub fn hit_test(&self, local: Point) -> HitRegion {
        hit_test_slider(&self.metrics(), &self.state, local)
    }

    /// Frame-local rectangles for the current values
    pub fn layout(&self) -> SliderLayout {
        compute_layout(&self.metrics(), &self.state)
    }

    /// Feed a pointer event in window coordinates
    ///
    /// # Returns
    /// `true` if the event was consumed by the slider
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(point) => {
                let local = self.to_local(point);
                let hit = self.hit_test(local);
                if !hit.is_hit() {
                    return false;
                }

                let mapper = self.mapper();
                let offset = mapper.axis_offset(local);
                self.state
                    .begin_drag(hit, mapper.value_from_offset(offset), offset)
            }
            PointerEvent::Move(point) => {
                if !self.state.is_dragging() {
                    return false;
                }

                let mapper = self.mapper();
                let offset = mapper.axis_offset(self.to_local(point));
                self.state.continue_drag(offset, &mapper)
            }
            PointerEvent::Up(_) => self.state.end_drag(),
            PointerEvent::Cancel => self.state.cancel_drag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangekit::{DragMode, Handle, NumericRange, SliderValue};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn view(lower: f64, upper: f64) -> RangeSliderView {
        RangeSliderView::new(
            RangeSliderState::new(NumericRange::default(), lower, upper),
            Rect::from_xywh(10.0, 20.0, 215.0, 60.0),
            RangeSliderStyle::default(),
        )
    }

    fn assert_value(view: &RangeSliderView, lower: f64, upper: f64) {
        let value = view.state().value();
        assert!((value.lower - lower).abs() < 1e-9, "lower {}", value.lower);
        assert!((value.upper - upper).abs() < 1e-9, "upper {}", value.upper);
    }

    #[test]
    fn test_drag_lower_handle() {
        let mut view = view(25.0, 75.0);

        // Lower handle centre sits at local (65, 30)
        assert!(view.handle_pointer(PointerEvent::Down(Point::new(75.0, 50.0))));
        assert_eq!(
            view.state().drag_mode(),
            Some(DragMode::Handle(Handle::Foreground))
        );

        assert!(view.handle_pointer(PointerEvent::Move(Point::new(95.0, 50.0))));
        assert_value(&view, 35.0, 75.0);

        assert!(view.handle_pointer(PointerEvent::Up(Point::new(95.0, 50.0))));
        assert!(!view.state().is_dragging());
        assert_value(&view, 35.0, 75.0);
    }

    #[test]
    fn test_press_outside_is_not_consumed() {
        let mut view = view(25.0, 75.0);

        assert!(!view.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0))));
        assert!(!view.state().is_dragging());
        assert!(!view.handle_pointer(PointerEvent::Move(Point::new(50.0, 50.0))));
        assert!(!view.handle_pointer(PointerEvent::Up(Point::new(50.0, 50.0))));
    }

    #[test]
    fn test_track_touch_snaps_lower() {
        let mut view = view(30.0, 70.0);

        // Local x = 35 is value 10, well clear of the handle at 75
        assert_eq!(view.hit_test(Point::new(35.0, 30.0)), HitRegion::Track);
        assert!(view.handle_pointer(PointerEvent::Down(Point::new(45.0, 50.0))));
        assert_value(&view, 10.0, 70.0);
    }

    #[test]
    fn test_touch_between_drags_range() {
        let mut view = view(25.0, 75.0);

        // Local x = 115 is value 50, centred between the handles
        assert!(view.handle_pointer(PointerEvent::Down(Point::new(125.0, 50.0))));
        assert_eq!(view.state().drag_mode(), Some(DragMode::Range));

        view.handle_pointer(PointerEvent::Move(Point::new(145.0, 50.0)));
        assert_value(&view, 35.0, 85.0);
    }

    #[test]
    fn test_vertical_drag_grows_upwards() {
        let mut view = RangeSliderView::new(
            RangeSliderState::new(NumericRange::default(), 25.0, 75.0),
            Rect::from_xywh(0.0, 0.0, 60.0, 215.0),
            RangeSliderStyle::default().with_vertical(true),
        );

        // Lower handle sits near the bottom at local (30, 150)
        assert_eq!(
            view.hit_test(Point::new(30.0, 150.0)),
            HitRegion::ForegroundHandle
        );
        assert!(view.handle_pointer(PointerEvent::Down(Point::new(30.0, 150.0))));
        view.handle_pointer(PointerEvent::Move(Point::new(30.0, 130.0)));

        assert_value(&view, 35.0, 75.0);
    }

    #[test]
    fn test_cancel_fires_end_movement() {
        let mut view = view(25.0, 75.0);
        let ends = Rc::new(RefCell::new(Vec::new()));
        let e = ends.clone();
        view.state_mut().on_end_movement(move |v| e.borrow_mut().push(v));

        view.handle_pointer(PointerEvent::Down(Point::new(75.0, 50.0)));
        assert!(view.handle_pointer(PointerEvent::Cancel));
        assert!(!view.handle_pointer(PointerEvent::Cancel));

        assert_eq!(*ends.borrow(), vec![SliderValue::new(25.0, 75.0)]);
    }

    #[test]
    fn test_second_press_is_ignored() {
        let mut view = view(25.0, 75.0);

        assert!(view.handle_pointer(PointerEvent::Down(Point::new(75.0, 50.0))));
        assert!(!view.handle_pointer(PointerEvent::Down(Point::new(175.0, 50.0))));
        assert_eq!(
            view.state().drag_mode(),
            Some(DragMode::Handle(Handle::Foreground))
        );
    }

    #[test]
    fn test_orientation_change_cancels_drag() {
        let mut view = view(25.0, 75.0);
        view.handle_pointer(PointerEvent::Down(Point::new(75.0, 50.0)));

        view.set_vertical(true);
        assert!(!view.state().is_dragging());
        assert!(view.style().vertical);

        // Same orientation keeps the session
        view.set_frame(Rect::from_xywh(0.0, 0.0, 60.0, 215.0));
        view.handle_pointer(PointerEvent::Down(Point::new(30.0, 150.0)));
        view.set_style(RangeSliderStyle::default().with_vertical(true).with_handle_radius(12.0));
        assert!(view.state().is_dragging());
    }

    #[test]
    fn test_layout_is_frame_local() {
        let view = view(25.0, 75.0);
        let layout = view.layout();

        assert_eq!(layout.foreground_handle.center(), Point::new(65.0, 30.0));
        assert_eq!(layout.track_between, Rect::from_xywh(65.0, 29.0, 100.0, 2.0));
    }
}
