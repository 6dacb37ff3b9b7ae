use super::*;
use crate::config::RulerConfig;
use crate::error::RulerError;

fn setup(current_value: i32) -> (GestureInterpreter, RulerState, ViewportGeometry) {
    let config = RulerConfig::default().with_range(150, current_value);
    let state = RulerState::new(&config, 20.0).expect("valid config");
    let geometry = ViewportGeometry::new(&state, 400, 60);
    (
        GestureInterpreter::new(&ViewConfiguration::default()),
        state,
        geometry,
    )
}

#[test]
fn phases_follow_the_touch() {
    let (mut gestures, mut state, geometry) = setup(50);
    assert_eq!(gestures.phase(), GesturePhase::Idle);

    assert_eq!(gestures.pointer_down(200, 30), GestureAction::Pressed);
    assert_eq!(gestures.phase(), GesturePhase::PendingDrag);

    gestures
        .pointer_move(&mut state, &geometry, 180, 30)
        .expect("finite");
    assert_eq!(gestures.phase(), GesturePhase::Dragging);

    gestures
        .pointer_up(&mut state, 180, 30, 0.0)
        .expect("finite");
    assert_eq!(gestures.phase(), GesturePhase::Idle);
}

#[test]
fn movement_within_slop_is_ignored() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    let action = gestures
        .pointer_move(&mut state, &geometry, 208, 30)
        .expect("finite");
    assert_eq!(action, GestureAction::Ignored);
    assert_eq!(state.current_value(), 50);
    assert_eq!(state.current_distance(), 1000.0);
}

#[test]
fn mostly_vertical_movement_is_ignored() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    let action = gestures
        .pointer_move(&mut state, &geometry, 185, 60)
        .expect("finite");
    assert_eq!(action, GestureAction::Ignored);
    assert_eq!(gestures.phase(), GesturePhase::PendingDrag);
}

#[test]
fn classifying_move_applies_its_own_delta() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    // 5 px: inside the slop, but last_x still follows the pointer.
    gestures
        .pointer_move(&mut state, &geometry, 195, 30)
        .expect("finite");
    let action = gestures
        .pointer_move(&mut state, &geometry, 160, 30)
        .expect("finite");
    // Only the 35 px since the previous event scrolls the ruler.
    assert_eq!(action, GestureAction::Dragged { value: 51 });
    assert_eq!(state.current_distance(), 1035.0);
}

#[test]
fn classification_sticks_for_the_rest_of_the_gesture() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    gestures
        .pointer_move(&mut state, &geometry, 160, 30)
        .expect("finite");
    let action = gestures
        .pointer_move(&mut state, &geometry, 159, 90)
        .expect("finite");
    assert_eq!(action, GestureAction::Dragged { value: 52 });
    assert_eq!(state.current_distance(), 1041.0);
}

#[test]
fn drag_truncates_and_slow_release_rounds() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    gestures
        .pointer_move(&mut state, &geometry, 170, 30)
        .expect("finite");
    let action = gestures
        .pointer_move(&mut state, &geometry, 161, 30)
        .expect("finite");
    // 1039 px: the live value lags on 51
    assert_eq!(action, GestureAction::Dragged { value: 51 });

    let action = gestures
        .pointer_up(&mut state, 161, 30, 10.0)
        .expect("finite");
    assert_eq!(action, GestureAction::Settled { value: 52 });
    assert_eq!(state.current_distance(), 1040.0);
}

#[test]
fn fast_release_requests_inverted_fling() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    gestures
        .pointer_move(&mut state, &geometry, 250, 30)
        .expect("finite");
    let action = gestures
        .pointer_up(&mut state, 250, 30, 1_500.7)
        .expect("finite");
    assert_eq!(
        action,
        GestureAction::Fling {
            start: 950.0,
            velocity: -1_500.0
        }
    );
}

#[test]
fn release_velocity_is_capped() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    gestures
        .pointer_move(&mut state, &geometry, 100, 30)
        .expect("finite");
    let action = gestures
        .pointer_up(&mut state, 100, 30, -20_000.0)
        .expect("finite");
    assert_eq!(
        action,
        GestureAction::Fling {
            start: 1100.0,
            velocity: 8_000.0
        }
    );
}

#[test]
fn velocity_just_below_threshold_settles() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    gestures
        .pointer_move(&mut state, &geometry, 152, 30)
        .expect("finite");
    let action = gestures
        .pointer_up(&mut state, 152, 30, -49.9)
        .expect("finite");
    assert_eq!(action, GestureAction::Settled { value: 52 });
}

#[test]
fn tap_changes_nothing() {
    let (mut gestures, mut state, _) = setup(50);
    let before = state.clone();
    gestures.pointer_down(200, 30);
    let action = gestures
        .pointer_up(&mut state, 203, 31, 9_000.0)
        .expect("finite");
    assert_eq!(action, GestureAction::Tapped);
    assert_eq!(state, before);
}

#[test]
fn drag_clamps_at_zero() {
    let (mut gestures, mut state, geometry) = setup(0);
    gestures.pointer_down(100, 30);
    let action = gestures
        .pointer_move(&mut state, &geometry, 150, 30)
        .expect("finite");
    assert_eq!(action, GestureAction::Dragged { value: 0 });
    assert_eq!(state.current_distance(), 0.0);
}

#[test]
fn cancel_ends_the_session() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    gestures
        .pointer_move(&mut state, &geometry, 150, 30)
        .expect("finite");
    assert_eq!(gestures.pointer_cancel(), GestureAction::Cancelled);
    assert_eq!(gestures.phase(), GesturePhase::Idle);
    let action = gestures
        .pointer_move(&mut state, &geometry, 100, 30)
        .expect("finite");
    assert_eq!(action, GestureAction::Ignored);
    assert_eq!(state.current_distance(), 1050.0);
}

#[test]
fn non_finite_velocity_rejected_without_ending_session() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(200, 30);
    gestures
        .pointer_move(&mut state, &geometry, 150, 30)
        .expect("finite");
    let result = gestures.pointer_up(&mut state, 150, 30, f32::NAN);
    assert_eq!(
        result,
        Err(RulerError::NonFiniteInput {
            what: "release velocity"
        })
    );
    assert_eq!(gestures.phase(), GesturePhase::Dragging);
}

#[test]
fn extreme_coordinates_clamp_instead_of_wrapping() {
    let (mut gestures, mut state, geometry) = setup(50);
    gestures.pointer_down(i32::MAX, 0);
    let action = gestures
        .pointer_move(&mut state, &geometry, i32::MIN, 0)
        .expect("finite");
    assert_eq!(action, GestureAction::Dragged { value: 150 });
    assert_eq!(state.current_distance(), 3000.0);
}
