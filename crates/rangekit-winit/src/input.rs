use rangekit::{Point, PointerEvent, PointerState, TouchPhase};
use rangekit_interactive::RangeSliderView;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Extension trait for PointerState to handle winit events
pub trait WinitPointerExt {
    /// Process a winit WindowEvent, yielding a pointer event if it produced one
    ///
    /// Only the left mouse button and the first finger down drive gestures.
    fn handle_winit_event(&mut self, event: &WindowEvent) -> Option<PointerEvent>;
}

impl WinitPointerExt for PointerState {
    fn handle_winit_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(convert_position(*position))
            }
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.press(),
                ElementState::Released => self.release(),
            },
            WindowEvent::Touch(touch) => self.touch(
                touch.id,
                convert_touch_phase(touch.phase),
                convert_position(touch.location),
            ),
            WindowEvent::Focused(false) => self.cancel(),
            _ => None,
        }
    }
}

/// Extension trait for RangeSliderView to consume winit events
pub trait WinitSliderExt {
    /// Route a winit WindowEvent through `pointer` into the slider
    ///
    /// # Returns
    /// `true` if the slider consumed the resulting pointer event
    fn handle_winit_event(&mut self, pointer: &mut PointerState, event: &WindowEvent) -> bool;
}

impl WinitSliderExt for RangeSliderView {
    fn handle_winit_event(&mut self, pointer: &mut PointerState, event: &WindowEvent) -> bool {
        pointer
            .handle_winit_event(event)
            .is_some_and(|pointer_event| self.handle_pointer(pointer_event))
    }
}

/// Convert a winit physical position to a rangekit Point
pub fn convert_position(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x, position.y)
}

/// Convert winit TouchPhase to rangekit TouchPhase
pub fn convert_touch_phase(phase: winit::event::TouchPhase) -> TouchPhase {
    match phase {
        winit::event::TouchPhase::Started => TouchPhase::Started,
        winit::event::TouchPhase::Moved => TouchPhase::Moved,
        winit::event::TouchPhase::Ended => TouchPhase::Ended,
        winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}
