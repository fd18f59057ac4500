//! Debug overlay for tuning hero movement.
//!
//! F3 toggles a text panel with the live motion state and input timers.

#[cfg(test)]
mod tests;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{AnimationEvent, HeroAnimation, InputOrchestrator, MotionModel, Player};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
    /// Most recent animation event written by the hero.
    pub last_animation: Option<AnimationEvent>,
}

/// Marker for the motion info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                track_hero_animations,
                toggle_debug_info,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}

fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!("[DEBUG] Motion info {}", if debug_state.show_info { "ON" } else { "OFF" });

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

fn track_hero_animations(
    mut animations: MessageReader<HeroAnimation>,
    mut debug_state: ResMut<DebugState>,
) {
    for animation in animations.read() {
        debug!("Hero {:?} animation: {:?}", animation.entity, animation.event);
        debug_state.last_animation = Some(animation.event);
    }
}

fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    hero: Query<(&MotionModel, &InputOrchestrator), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }

    let (Ok((model, orchestrator)), Ok(mut text)) = (hero.single(), overlay.single_mut()) else {
        return;
    };
    **text = describe_motion(model, orchestrator, debug_state.last_animation);
}

fn describe_motion(
    model: &MotionModel,
    orchestrator: &InputOrchestrator,
    last_animation: Option<AnimationEvent>,
) -> String {
    let state = model.state();
    let contact = |touching: bool| if touching { "yes" } else { "no" };
    format!(
        "MoveDirX: {:.2}\nOrientX: {}\nJump: {:?}\nMultiJump: {}/{}\n\
         Ground: {}\nLeft wall: {}\nRight wall: {}\nDashing: {}\n\
         Horizontal speed: {:.1}\nVertical speed: {:.1}\n\
         Jump buffer: {:.3}/{:.3}\nCoyote: {:.3}\nAnimation: {:?}",
        state.move_dir_x,
        state.orient_x,
        state.jump_phase,
        state.multi_jump_index,
        model.multi_jump_count_max(),
        contact(state.contacts.ground),
        contact(state.contacts.left_wall),
        contact(state.contacts.right_wall),
        state.is_dashing,
        state.horizontal_speed,
        state.vertical_speed,
        orchestrator.jump_buffer().timer,
        orchestrator.jump_buffer().duration,
        orchestrator.coyote().countdown,
        last_animation,
    )
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
