//! Property tests for range slider invariants.
//!
//! Uses proptest to verify:
//! 1. Offset -> value -> offset -> value mapping is stable
//! 2. `lower_bound <= lower <= upper <= upper_bound` after every drag step
//! 3. Re-ranging never leaves values outside the new range

use proptest::prelude::*;
use rangekit::{
    GeometryMapper, Handle, HitRegion, NumericRange, Orientation, RangeSliderState,
};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_range() -> impl Strategy<Value = NumericRange> {
    (-1_000.0..1_000.0_f64, 0.5..2_000.0_f64).prop_map(|(min, span)| NumericRange::new(min, min + span))
}

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn arb_hit() -> impl Strategy<Value = HitRegion> {
    prop_oneof![
        Just(HitRegion::ForegroundHandle),
        Just(HitRegion::BackgroundHandle),
        Just(HitRegion::Track),
    ]
}

fn assert_ordered(state: &RangeSliderState) -> Result<(), TestCaseError> {
    let range = state.range();
    prop_assert!(range.lower_bound() <= state.lower_value());
    prop_assert!(state.lower_value() <= state.upper_value());
    prop_assert!(state.upper_value() <= range.upper_bound());
    prop_assert_eq!(state.invariant_repairs(), 0);
    Ok(())
}

// ── 1. Mapping stability ─────────────────────────────────────────────

proptest! {
    #[test]
    fn offset_value_round_trip(
        range in arb_range(),
        orientation in arb_orientation(),
        track_length in 60.0..800.0_f64,
        handle_radius in 0.0..25.0_f64,
        fraction in 0.0..=1.0_f64,
    ) {
        let mapper = GeometryMapper::new(track_length, handle_radius, range, orientation);
        let offset = fraction * track_length;

        let value = mapper.value_from_offset(offset);
        let again = mapper.value_from_offset(mapper.offset_from_value(value));

        let tolerance = 1e-9 * range.span().max(1.0);
        prop_assert!((again - value).abs() <= tolerance, "{} vs {}", value, again);
    }
}

// ── 2. Drag invariants ───────────────────────────────────────────────

proptest! {
    #[test]
    fn drag_keeps_values_ordered(
        range in arb_range(),
        start in (0.0..=1.0_f64, 0.0..=1.0_f64),
        hit in arb_hit(),
        pointer in 0.0..=1.0_f64,
        deltas in prop::collection::vec(-1.5..1.5_f64, 1..40),
    ) {
        let mut state = RangeSliderState::new(
            range,
            range.denormalize(start.0),
            range.denormalize(start.1),
        );
        assert_ordered(&state)?;

        prop_assert!(state.begin_drag(hit, range.denormalize(pointer), 0.0));
        assert_ordered(&state)?;

        for delta in deltas {
            state.drag_by(delta * range.span());
            assert_ordered(&state)?;
        }

        prop_assert!(state.end_drag());
        assert_ordered(&state)?;
    }

    #[test]
    fn range_drag_keeps_span(
        range in arb_range(),
        start in (0.0..=1.0_f64, 0.0..=1.0_f64),
        deltas in prop::collection::vec(-1.5..1.5_f64, 1..20),
    ) {
        let mut state = RangeSliderState::new(
            range,
            range.denormalize(start.0),
            range.denormalize(start.1),
        );
        let span = state.value().span();
        let middle = (state.lower_value() + state.upper_value()) / 2.0;

        prop_assert!(state.begin_drag(HitRegion::Track, middle, 0.0));
        for delta in deltas {
            state.drag_by(delta * range.span());
            prop_assert!((state.value().span() - span).abs() <= 1e-9 * range.span());
            assert_ordered(&state)?;
        }
    }

    #[test]
    fn dragged_handle_keeps_following_pointer(
        start in (0.0..=100.0_f64, 0.0..=100.0_f64),
        deltas in prop::collection::vec(-20.0..20.0_f64, 1..30),
    ) {
        let mut state = RangeSliderState::new(NumericRange::default(), start.0, start.1);
        prop_assert!(state.begin_drag(HitRegion::ForegroundHandle, state.lower_value(), 0.0));

        let mut expected = state.handle_value(Handle::Foreground);
        for delta in deltas {
            state.drag_by(delta);
            expected = (expected + delta).clamp(0.0, 100.0);
            prop_assert!((state.handle_value(Handle::Foreground) - expected).abs() < 1e-9);
        }
    }
}

// ── 3. Re-ranging ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn set_range_reclamps(
        start in (0.0..=100.0_f64, 0.0..=100.0_f64),
        min in -500.0..500.0_f64,
        max in -500.0..500.0_f64,
    ) {
        let mut state = RangeSliderState::new(NumericRange::default(), start.0, start.1);
        state.set_range(min, max);

        prop_assert!(state.range().lower_bound() < state.range().upper_bound());
        assert_ordered(&state)?;
    }
}
