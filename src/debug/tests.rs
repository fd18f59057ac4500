//! Debug domain: tests for the motion overlay.

use bevy::prelude::*;

use super::{DebugState, describe_motion, track_hero_animations};
use crate::movement::{
    AnimationEvent, HeroAnimation, InputOrchestrator, MotionModel, MovementTuning,
};

// -----------------------------------------------------------------------------
// Animation tracking
// -----------------------------------------------------------------------------

fn animation_app() -> App {
    let mut app = App::new();
    app.init_resource::<DebugState>()
        .add_message::<HeroAnimation>()
        .add_systems(Update, track_hero_animations);
    app
}

#[test]
fn test_latest_hero_animation_is_tracked() {
    let mut app = animation_app();
    assert_eq!(app.world().resource::<DebugState>().last_animation, None);

    app.world_mut().write_message(HeroAnimation {
        entity: Entity::PLACEHOLDER,
        event: AnimationEvent::Running(true),
    });
    app.world_mut().write_message(HeroAnimation {
        entity: Entity::PLACEHOLDER,
        event: AnimationEvent::Jump,
    });
    app.update();
    assert_eq!(
        app.world().resource::<DebugState>().last_animation,
        Some(AnimationEvent::Jump)
    );

    // No new messages: the last event stays on display.
    app.update();
    assert_eq!(
        app.world().resource::<DebugState>().last_animation,
        Some(AnimationEvent::Jump)
    );
}

#[test]
fn test_overlay_text_shows_last_animation() {
    let tuning = MovementTuning::default();
    let model = MotionModel::new(tuning.clone()).expect("default tuning is valid");
    let orchestrator = InputOrchestrator::new(&tuning);

    let text = describe_motion(&model, &orchestrator, Some(AnimationEvent::Running(false)));
    assert!(text.contains("Animation: Some(Running(false))"));
    assert!(text.contains("MultiJump: 0/2"));

    let text = describe_motion(&model, &orchestrator, None);
    assert!(text.contains("Animation: None"));
}
