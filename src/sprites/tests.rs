//! Sprites module: tests for animator flags and state selection.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::{Sprite, World};

use super::{AnimationState, AnimationStateChanged, AnimatorFlags, animation_state_machine};
use crate::movement::{AnimationFlag, AnimationFlags, AnimationSink};

#[test]
fn test_animator_flags_store_named_parameters() {
    let mut animator = AnimatorFlags::default();
    animator.set_flag(AnimationFlag::IsRunning, true);
    animator.set_flag(AnimationFlag::IsAgainstWall, true);
    animator.set_flag(AnimationFlag::IsAgainstWall, false);

    assert!(animator.get(AnimationFlag::IsRunning));
    assert!(!animator.get(AnimationFlag::IsAgainstWall));
    assert!(!animator.get(AnimationFlag::IsDashing));
}

#[test]
fn test_idle_when_no_flags() {
    assert_eq!(
        AnimationState::from_flags(&AnimationFlags::default()),
        AnimationState::Idle
    );
}

#[test]
fn test_state_priority() {
    let all = AnimationFlags {
        running: true,
        jumping: true,
        dashing: true,
        against_wall: true,
    };
    assert_eq!(AnimationState::from_flags(&all), AnimationState::Dash);

    let no_dash = AnimationFlags {
        dashing: false,
        ..all
    };
    assert_eq!(AnimationState::from_flags(&no_dash), AnimationState::WallCling);

    let airborne_run = AnimationFlags {
        running: true,
        jumping: true,
        ..Default::default()
    };
    assert_eq!(AnimationState::from_flags(&airborne_run), AnimationState::Jump);

    let run = AnimationFlags {
        running: true,
        ..Default::default()
    };
    assert_eq!(AnimationState::from_flags(&run), AnimationState::Run);
}

#[test]
fn test_each_state_has_distinct_tint() {
    let states = [
        AnimationState::Idle,
        AnimationState::Run,
        AnimationState::Jump,
        AnimationState::Dash,
        AnimationState::WallCling,
    ];
    for (i, a) in states.iter().enumerate() {
        for b in &states[i + 1..] {
            assert_ne!(a.tint(), b.tint(), "{a:?} and {b:?} share a tint");
        }
    }
}

#[test]
fn test_state_machine_reports_transitions_and_tints() {
    let mut world = World::new();
    world.init_resource::<Messages<AnimationStateChanged>>();

    let mut dashing = AnimatorFlags::default();
    dashing.set_flag(AnimationFlag::IsDashing, true);
    let dasher = world
        .spawn((dashing, AnimationState::Idle, Sprite::default()))
        .id();
    let idler = world
        .spawn((AnimatorFlags::default(), AnimationState::Idle, Sprite::default()))
        .id();

    world.run_system_once(animation_state_machine).unwrap();

    assert_eq!(world.get::<AnimationState>(dasher), Some(&AnimationState::Dash));
    assert_eq!(
        world.get::<Sprite>(dasher).unwrap().color,
        AnimationState::Dash.tint()
    );
    assert_eq!(world.get::<AnimationState>(idler), Some(&AnimationState::Idle));

    let changes: Vec<_> = world
        .resource_mut::<Messages<AnimationStateChanged>>()
        .drain()
        .collect();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].entity, dasher);
    assert_eq!(changes[0].from, AnimationState::Idle);
    assert_eq!(changes[0].to, AnimationState::Dash);
}
