//! Shared value model for a range slider and its text fields
//!
//! A [`RangeBinding`] mirrors the slider values as rounded numbers and
//! editable text, and tracks whether the slider is being dragged. The slider
//! pushes updates into it through an observer; committing a text field pushes
//! the parsed number back into the slider.

use crate::NumericLabel;
use rangekit::{RangeSliderState, SliderEvent, SliderValue};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeBinding {
    pub min: NumericLabel,
    pub max: NumericLabel,
    /// A drag is in progress
    pub moving: bool,
    /// The user is typing into one of the text fields
    pub editing: bool,
}

impl RangeBinding {
    pub fn new(value: SliderValue) -> Self {
        Self {
            min: NumericLabel::new(value.lower),
            max: NumericLabel::new(value.upper),
            moving: false,
            editing: false,
        }
    }

    pub fn min_value(&self) -> f64 {
        self.min.value()
    }

    pub fn max_value(&self) -> f64 {
        self.max.value()
    }

    pub fn min_text(&self) -> &str {
        self.min.text()
    }

    pub fn max_text(&self) -> &str {
        self.max.text()
    }

    /// Create a binding for `state` and subscribe it to the slider's events
    pub fn attach(state: &mut RangeSliderState) -> Rc<RefCell<Self>> {
        let binding = Rc::new(RefCell::new(Self::new(state.value())));
        Self::subscribe(&binding, state);
        binding
    }

    /// Subscribe an existing binding to the slider's events
    pub fn subscribe(binding: &Rc<RefCell<Self>>, state: &mut RangeSliderState) {
        binding.borrow_mut().sync(state.value());

        let binding = binding.clone();
        state.on_event(move |event| binding.borrow_mut().handle_event(event));
    }

    pub fn handle_event(&mut self, event: &SliderEvent) {
        match *event {
            SliderEvent::Moved { value, dragging } => {
                self.sync(value);
                self.editing = false;
                if dragging {
                    self.moving = true;
                }
            }
            SliderEvent::EndMovement(value) => {
                self.sync(value);
                self.moving = false;
            }
        }
    }

    /// Start editing the text fields
    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    fn sync(&mut self, value: SliderValue) {
        self.min.set_value(value.lower);
        self.max.set_value(value.upper);
    }

    /// Push the minimum text field into the slider
    ///
    /// Returns `false` and restores the text when it does not parse or the
    /// slider refused the value.
    pub fn commit_min_text(binding: &RefCell<Self>, state: &mut RangeSliderState) -> bool {
        let upper = state.upper_value();
        let parsed = binding.borrow().min.parsed();
        Self::commit(binding, state, parsed.map(|min| (min, upper)))
    }

    /// Push the maximum text field into the slider
    pub fn commit_max_text(binding: &RefCell<Self>, state: &mut RangeSliderState) -> bool {
        let lower = state.lower_value();
        let parsed = binding.borrow().max.parsed();
        Self::commit(binding, state, parsed.map(|max| (lower, max)))
    }

    fn commit(
        binding: &RefCell<Self>,
        state: &mut RangeSliderState,
        value: Option<(f64, f64)>,
    ) -> bool {
        // The slider's observer borrows the binding, so no borrow may be held here
        let accepted = match value {
            Some((lower, upper)) => state.set_value(lower, upper),
            None => false,
        };

        let mut binding = binding.borrow_mut();
        if accepted {
            binding.sync(state.value());
        } else {
            log::debug!("text commit rejected: {:?}", value);
            binding.min.reset_text();
            binding.max.reset_text();
        }
        binding.editing = false;
        accepted
    }
}
