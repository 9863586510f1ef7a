//! Slider notifications
//!
//! Collaborators (value labels, bound models) subscribe to a slider through
//! plain callback lists. Callbacks run synchronously, in registration order,
//! on the thread that feeds pointer events into the slider.

use crate::SliderValue;
use std::fmt;

/// Notification emitted by a range slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Values changed during a drag or through a programmatic set
    Moved {
        value: SliderValue,
        /// Whether a drag session was active when the values changed
        dragging: bool,
    },
    /// A drag session ended (pointer-up or cancel) with these final values
    EndMovement(SliderValue),
}

impl SliderEvent {
    pub fn value(&self) -> SliderValue {
        match self {
            Self::Moved { value, .. } | Self::EndMovement(value) => *value,
        }
    }
}

type Callback = Box<dyn FnMut(SliderValue)>;
type EventCallback = Box<dyn FnMut(&SliderEvent)>;

/// Callback lists for [`SliderEvent`]s
#[derive(Default)]
pub struct SliderObservers {
    on_move: Vec<Callback>,
    on_end_movement: Vec<Callback>,
    on_event: Vec<EventCallback>,
}

impl SliderObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_on_move(&mut self, f: impl FnMut(SliderValue) + 'static) {
        self.on_move.push(Box::new(f));
    }

    pub fn add_on_end_movement(&mut self, f: impl FnMut(SliderValue) + 'static) {
        self.on_end_movement.push(Box::new(f));
    }

    /// Register a callback that receives every event, whatever its kind
    pub fn add_on_event(&mut self, f: impl FnMut(&SliderEvent) + 'static) {
        self.on_event.push(Box::new(f));
    }

    /// Invoke every callback registered for this kind of event
    ///
    /// Kind-specific callbacks run before the catch-all ones.
    pub fn notify(&mut self, event: SliderEvent) {
        let callbacks = match event {
            SliderEvent::Moved { .. } => &mut self.on_move,
            SliderEvent::EndMovement(_) => &mut self.on_end_movement,
        };

        for callback in callbacks.iter_mut() {
            callback(event.value());
        }
        for callback in self.on_event.iter_mut() {
            callback(&event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_move.is_empty() && self.on_end_movement.is_empty() && self.on_event.is_empty()
    }

    pub fn clear(&mut self) {
        self.on_move.clear();
        self.on_end_movement.clear();
        self.on_event.clear();
    }
}

impl fmt::Debug for SliderObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderObservers")
            .field("on_move", &self.on_move.len())
            .field("on_end_movement", &self.on_end_movement.len())
            .field("on_event", &self.on_event.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn moved(lower: f64, upper: f64) -> SliderEvent {
        SliderEvent::Moved {
            value: SliderValue::new(lower, upper),
            dragging: true,
        }
    }

    #[test]
    fn test_notify_routes_by_kind() {
        let mut observers = SliderObservers::new();
        let moves = Rc::new(RefCell::new(Vec::new()));
        let ends = Rc::new(RefCell::new(Vec::new()));

        let m = moves.clone();
        observers.add_on_move(move |v| m.borrow_mut().push(v));
        let e = ends.clone();
        observers.add_on_end_movement(move |v| e.borrow_mut().push(v));

        observers.notify(moved(1.0, 2.0));
        observers.notify(moved(1.0, 3.0));
        observers.notify(SliderEvent::EndMovement(SliderValue::new(1.0, 3.0)));

        assert_eq!(moves.borrow().len(), 2);
        assert_eq!(*ends.borrow(), vec![SliderValue::new(1.0, 3.0)]);
    }

    #[test]
    fn test_catch_all_sees_every_event() {
        let mut observers = SliderObservers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        observers.add_on_event(move |event| s.borrow_mut().push(*event));

        observers.notify(moved(1.0, 2.0));
        observers.notify(SliderEvent::EndMovement(SliderValue::new(1.0, 2.0)));

        assert_eq!(
            *seen.borrow(),
            vec![
                moved(1.0, 2.0),
                SliderEvent::EndMovement(SliderValue::new(1.0, 2.0))
            ]
        );
    }

    #[test]
    fn test_registration_order() {
        let mut observers = SliderObservers::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            observers.add_on_move(move |_| order.borrow_mut().push(i));
        }
        observers.notify(moved(0.0, 1.0));

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut observers = SliderObservers::new();
        assert!(observers.is_empty());

        observers.add_on_move(|_| {});
        assert!(!observers.is_empty());

        observers.clear();
        assert!(observers.is_empty());
    }
}
