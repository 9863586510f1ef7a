//! Backend-agnostic pointer input for sliders
//!
//! Windowing backends either deliver complete pointer events (touch) or
//! separate cursor motion and button state (mouse). [`PointerState`] turns
//! the latter into [`PointerEvent`]s so sliders only ever see one stream.

use crate::Point;

/// A single pointer event in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed or finger down
    Down(Point),
    /// Pointer moved while down
    Move(Point),
    /// Primary button released or finger lifted
    Up(Point),
    /// The platform cancelled the gesture
    Cancel,
}

impl PointerEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Down(p) | Self::Move(p) | Self::Up(p) => Some(*p),
            Self::Cancel => None,
        }
    }

    /// Whether this event ends a gesture
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Up(_) | Self::Cancel)
    }
}

/// Phase of a touch point as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Tracks cursor position and primary button state across backend events
///
/// Only one gesture is followed at a time: either the mouse button or the
/// first finger down. Other fingers are ignored until it is lifted.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Current cursor position in window coordinates, if known
    pub cursor_position: Option<Point>,
    /// Whether the primary button is held down
    pub pressed: bool,
    /// Id of the finger driving the current gesture
    pub active_touch: Option<u64>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record cursor motion, yielding a move event while pressed
    pub fn cursor_moved(&mut self, position: Point) -> Option<PointerEvent> {
        self.cursor_position = Some(position);
        self.pressed.then_some(PointerEvent::Move(position))
    }

    /// Record a primary button press at the last known cursor position
    pub fn press(&mut self) -> Option<PointerEvent> {
        if self.pressed || self.active_touch.is_some() {
            return None;
        }
        let position = self.cursor_position?;
        self.pressed = true;
        Some(PointerEvent::Down(position))
    }

    /// Record a primary button release
    pub fn release(&mut self) -> Option<PointerEvent> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(match self.cursor_position {
            Some(position) => PointerEvent::Up(position),
            None => PointerEvent::Cancel,
        })
    }

    /// Record the cursor leaving the window; an active press is cancelled
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        self.cursor_position = None;
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(PointerEvent::Cancel)
    }

    /// Record a touch point update
    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: Point) -> Option<PointerEvent> {
        match phase {
            TouchPhase::Started => {
                if self.pressed || self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(id);
                Some(PointerEvent::Down(position))
            }
            _ if self.active_touch != Some(id) => None,
            TouchPhase::Moved => Some(PointerEvent::Move(position)),
            TouchPhase::Ended => {
                self.active_touch = None;
                Some(PointerEvent::Up(position))
            }
            TouchPhase::Cancelled => {
                self.active_touch = None;
                Some(PointerEvent::Cancel)
            }
        }
    }

    /// Abandon any gesture in progress, e.g. when the window loses focus
    pub fn cancel(&mut self) -> Option<PointerEvent> {
        let active = self.pressed || self.active_touch.is_some();
        self.pressed = false;
        self.active_touch = None;
        active.then_some(PointerEvent::Cancel)
    }
}
