//! Range slider state machine
//!
//! [`RangeSliderState`] owns the lower/upper values, which visual handle
//! currently stands for which bound, and the drag session between
//! pointer-down and pointer-up. It knows nothing about pixels: positions come
//! in as offsets and are converted through a [`GeometryMapper`].
//!
//! ```text
//! Idle --begin_drag--> Dragging{mode} --end_drag/cancel_drag--> Idle
//! ```

use crate::{GeometryMapper, HitRegion, NumericRange, SliderEvent, SliderObservers};

/// The two values selected by a range slider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderValue {
    pub lower: f64,
    pub upper: f64,
}

impl SliderValue {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn get(&self, bound: Bound) -> f64 {
        match bound {
            Bound::Lower => self.lower,
            Bound::Upper => self.upper,
        }
    }
}

/// Which logical value a handle stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    Lower,
    Upper,
}

/// One of the two visual handles
///
/// The foreground handle is drawn on top and wins hit-testing when both
/// handles overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Foreground,
    Background,
}

/// Mapping between visual handles and logical bounds
///
/// Flips whenever the dragged handle passes the other one, so the finger
/// keeps tracking the same handle while it changes from lower to upper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HandleAssignment {
    #[default]
    ForegroundIsLower,
    ForegroundIsUpper,
}

impl HandleAssignment {
    pub fn flipped(self) -> Self {
        match self {
            Self::ForegroundIsLower => Self::ForegroundIsUpper,
            Self::ForegroundIsUpper => Self::ForegroundIsLower,
        }
    }

    /// The bound `handle` currently represents
    pub fn bound_of(self, handle: Handle) -> Bound {
        match (self, handle) {
            (Self::ForegroundIsLower, Handle::Foreground)
            | (Self::ForegroundIsUpper, Handle::Background) => Bound::Lower,
            (Self::ForegroundIsLower, Handle::Background)
            | (Self::ForegroundIsUpper, Handle::Foreground) => Bound::Upper,
        }
    }

    /// The handle currently representing `bound`
    pub fn handle_for(self, bound: Bound) -> Handle {
        match (self, bound) {
            (Self::ForegroundIsLower, Bound::Lower) | (Self::ForegroundIsUpper, Bound::Upper) => {
                Handle::Foreground
            }
            _ => Handle::Background,
        }
    }

    pub fn lower_handle(self) -> Handle {
        self.handle_for(Bound::Lower)
    }

    pub fn upper_handle(self) -> Handle {
        self.handle_for(Bound::Upper)
    }
}

/// What an active drag moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// A single handle follows the pointer
    Handle(Handle),
    /// Both values move together, keeping the span
    Range,
}

/// Transient state between pointer-down and pointer-up/cancel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub mode: DragMode,
    /// Axis offset of the previous pointer event
    pub last_offset: f64,
}

/// Apply one drag delta
///
/// Single-handle drags that would push a handle past the other one swap
/// roles instead of sticking: the stationary handle's value becomes the new
/// lower (or upper) bound, the dragged handle continues with `old + delta`,
/// and the assignment flips.
///
/// Range drags clamp `delta` to `[lower_bound - lower, upper_bound - upper]`.
pub fn transition(
    value: SliderValue,
    assignment: HandleAssignment,
    mode: DragMode,
    delta: f64,
    range: &NumericRange,
) -> (SliderValue, HandleAssignment) {
    match mode {
        DragMode::Range => {
            let delta = delta
                .max(range.lower_bound() - value.lower)
                .min(range.upper_bound() - value.upper);
            let moved = SliderValue::new(
                range.clamp(value.lower + delta),
                range.clamp(value.upper + delta),
            );
            (moved, assignment)
        }
        DragMode::Handle(handle) => match assignment.bound_of(handle) {
            Bound::Lower if value.lower + delta > value.upper => (
                SliderValue::new(value.upper, range.clamp(value.lower + delta)),
                assignment.flipped(),
            ),
            Bound::Lower => (
                SliderValue::new(range.clamp(value.lower + delta), value.upper),
                assignment,
            ),
            Bound::Upper if value.upper + delta < value.lower => (
                SliderValue::new(range.clamp(value.upper + delta), value.lower),
                assignment.flipped(),
            ),
            Bound::Upper => (
                SliderValue::new(value.lower, range.clamp(value.upper + delta)),
                assignment,
            ),
        },
    }
}

/// State of a dual-handle range slider
#[derive(Debug)]
pub struct RangeSliderState {
    range: NumericRange,
    value: SliderValue,
    assignment: HandleAssignment,
    session: Option<DragSession>,
    observers: SliderObservers,
    invariant_repairs: u32,
}

impl RangeSliderState {
    /// Create a slider with the given range and initial values
    ///
    /// Values are clamped into the range and put in order.
    pub fn new(range: NumericRange, lower: f64, upper: f64) -> Self {
        let lower = range.clamp(lower);
        let upper = range.clamp(upper);
        Self {
            range,
            value: SliderValue::new(lower.min(upper), lower.max(upper)),
            assignment: HandleAssignment::default(),
            session: None,
            observers: SliderObservers::new(),
            invariant_repairs: 0,
        }
    }

    pub fn range(&self) -> &NumericRange {
        &self.range
    }

    pub fn value(&self) -> SliderValue {
        self.value
    }

    pub fn lower_value(&self) -> f64 {
        self.value.lower
    }

    pub fn upper_value(&self) -> f64 {
        self.value.upper
    }

    pub fn assignment(&self) -> HandleAssignment {
        self.assignment
    }

    /// Value currently represented by `handle`
    pub fn handle_value(&self, handle: Handle) -> f64 {
        self.value.get(self.assignment.bound_of(handle))
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn drag_mode(&self) -> Option<DragMode> {
        self.session.map(|s| s.mode)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Number of times the ordering safety net had to repair the value
    ///
    /// Anything other than zero points at a bug in the transition rules.
    pub fn invariant_repairs(&self) -> u32 {
        self.invariant_repairs
    }

    /// Register a callback fired on every accepted move or programmatic set
    pub fn on_move(&mut self, f: impl FnMut(SliderValue) + 'static) {
        self.observers.add_on_move(f);
    }

    /// Register a callback fired once when a drag session ends
    pub fn on_end_movement(&mut self, f: impl FnMut(SliderValue) + 'static) {
        self.observers.add_on_end_movement(f);
    }

    /// Register a callback receiving every [`SliderEvent`]
    pub fn on_event(&mut self, f: impl FnMut(&SliderEvent) + 'static) {
        self.observers.add_on_event(f);
    }

    /// Replace the range and re-clamp the current values
    ///
    /// Returns `true` if the values had to move.
    pub fn set_range(&mut self, min: f64, max: f64) -> bool {
        self.range = NumericRange::new(min, max);

        let before = self.value;
        self.value.upper = self.range.clamp(self.value.upper);
        self.value.lower = self.range.clamp(self.value.lower);
        self.ensure_ordered();

        log::debug!(
            "slider range set to [{}, {}]",
            self.range.lower_bound(),
            self.range.upper_bound()
        );

        let changed = before != self.value;
        if changed {
            self.notify_moved();
        }
        changed
    }

    /// Set both values programmatically
    ///
    /// Values are clamped and put in order; a NaN component keeps its current
    /// value. Ignored while a drag is active so the pointer keeps control.
    pub fn set_value(&mut self, lower: f64, upper: f64) -> bool {
        if self.session.is_some() {
            log::debug!("ignoring set_value({lower}, {upper}) during drag");
            return false;
        }

        let lower = if lower.is_nan() { self.value.lower } else { lower };
        let upper = if upper.is_nan() { self.value.upper } else { upper };
        let lower = self.range.clamp(lower);
        let upper = self.range.clamp(upper);

        self.value = SliderValue::new(lower.min(upper), lower.max(upper));
        self.ensure_ordered();
        self.notify_moved();
        true
    }

    /// Set the lower value; the upper value follows if it would be passed
    pub fn set_lower(&mut self, lower: f64) -> bool {
        if self.session.is_some() || lower.is_nan() {
            return false;
        }

        self.value.lower = self.range.clamp(lower);
        if self.value.lower > self.value.upper {
            self.value.upper = self.value.lower;
        }
        self.ensure_ordered();
        self.notify_moved();
        true
    }

    /// Set the upper value; the lower value follows if it would be passed
    pub fn set_upper(&mut self, upper: f64) -> bool {
        if self.session.is_some() || upper.is_nan() {
            return false;
        }

        self.value.upper = self.range.clamp(upper);
        if self.value.upper < self.value.lower {
            self.value.lower = self.value.upper;
        }
        self.ensure_ordered();
        self.notify_moved();
        true
    }

    /// Start a drag session for a pointer-down
    ///
    /// * `hit` - region of the slider under the pointer
    /// * `pointer_value` - value under the pointer
    /// * `offset` - raw axis offset of the pointer, used for later deltas
    ///
    /// A touch on the track outside the selection snaps the nearer bound to
    /// the pointer and drags its handle; a touch inside the selection drags
    /// the whole range. Returns `false` when the pointer is outside the
    /// slider or a session is already running.
    pub fn begin_drag(&mut self, hit: HitRegion, pointer_value: f64, offset: f64) -> bool {
        if self.session.is_some() {
            log::debug!("ignoring pointer-down while a drag is active");
            return false;
        }

        let mut snapped = false;
        let mode = match hit {
            HitRegion::ForegroundHandle => DragMode::Handle(Handle::Foreground),
            HitRegion::BackgroundHandle => DragMode::Handle(Handle::Background),
            HitRegion::Track => {
                if pointer_value < self.value.lower {
                    self.value.lower = self.range.clamp(pointer_value);
                    snapped = true;
                    DragMode::Handle(self.assignment.lower_handle())
                } else if pointer_value > self.value.upper {
                    self.value.upper = self.range.clamp(pointer_value);
                    snapped = true;
                    DragMode::Handle(self.assignment.upper_handle())
                } else {
                    DragMode::Range
                }
            }
            HitRegion::Outside => return false,
        };

        self.session = Some(DragSession {
            mode,
            last_offset: offset,
        });
        log::debug!("drag started: {mode:?} at offset {offset}");

        if snapped {
            self.ensure_ordered();
            self.notify_moved();
        }
        true
    }

    /// Feed a pointer-move into the active session
    ///
    /// The value delta between this and the previous offset is applied, not
    /// the absolute value under the pointer.
    pub fn continue_drag(&mut self, offset: f64, mapper: &GeometryMapper) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let delta = mapper.value_from_offset(offset) - mapper.value_from_offset(session.last_offset);
        session.last_offset = offset;
        self.drag_by(delta)
    }

    /// Apply a value delta to the active session
    pub fn drag_by(&mut self, delta: f64) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if !delta.is_finite() {
            return false;
        }

        let (value, assignment) =
            transition(self.value, self.assignment, session.mode, delta, &self.range);

        if assignment != self.assignment {
            log::trace!("handles crossed, now {assignment:?}");
        }
        log::trace!("drag {:?} by {delta}: {:?} -> {:?}", session.mode, self.value, value);

        self.value = value;
        self.assignment = assignment;
        self.ensure_ordered();
        self.notify_moved();
        true
    }

    /// End the active session after pointer-up
    pub fn end_drag(&mut self) -> bool {
        self.finish_session("ended")
    }

    /// End the active session after the platform cancelled the pointer
    pub fn cancel_drag(&mut self) -> bool {
        self.finish_session("cancelled")
    }

    fn finish_session(&mut self, how: &str) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        log::debug!(
            "drag {how}: {:?} -> [{}, {}]",
            session.mode,
            self.value.lower,
            self.value.upper
        );
        self.observers.notify(SliderEvent::EndMovement(self.value));
        true
    }

    fn notify_moved(&mut self) {
        self.observers.notify(SliderEvent::Moved {
            value: self.value,
            dragging: self.session.is_some(),
        });
    }

    /// Last-resort check that `lower <= upper` and both lie in the range
    fn ensure_ordered(&mut self) {
        let clamped = SliderValue::new(
            self.range.clamp(self.value.lower),
            self.range.clamp(self.value.upper),
        );
        let repaired = SliderValue::new(
            clamped.lower.min(clamped.upper),
            clamped.lower.max(clamped.upper),
        );

        if repaired != self.value {
            log::error!(
                "slider invariant violated: {:?} repaired to {:?}",
                self.value,
                repaired
            );
            self.invariant_repairs += 1;
            self.value = repaired;
        }
    }
}

impl Default for RangeSliderState {
    fn default() -> Self {
        Self::new(NumericRange::default(), 40.0, 60.0)
    }
}
