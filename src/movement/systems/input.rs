//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis (Q for AZERTY layouts)
    let mut x = 0.0;
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::KeyQ, KeyCode::ArrowLeft]) {
        x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        x += 1.0;
    }

    input.move_x = x;
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.dash_just_pressed = keyboard.just_pressed(KeyCode::KeyF);
}
