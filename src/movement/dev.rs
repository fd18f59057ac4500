//! Movement domain: debug-only test room for trying out the hero.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

struct Block {
    layer: GameLayer,
    center: Vec2,
    size: Vec2,
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let blocks = [
        // Floor
        Block {
            layer: GameLayer::Ground,
            center: Vec2::new(0.0, -200.0),
            size: Vec2::new(800.0, 40.0),
        },
        // Side walls
        Block {
            layer: GameLayer::Wall,
            center: Vec2::new(-420.0, 50.0),
            size: Vec2::new(40.0, 500.0),
        },
        Block {
            layer: GameLayer::Wall,
            center: Vec2::new(420.0, 50.0),
            size: Vec2::new(40.0, 500.0),
        },
        // Stepping platforms for multi-jump practice
        Block {
            layer: GameLayer::Ground,
            center: Vec2::new(-250.0, -50.0),
            size: Vec2::new(150.0, 20.0),
        },
        Block {
            layer: GameLayer::Ground,
            center: Vec2::new(250.0, 50.0),
            size: Vec2::new(150.0, 20.0),
        },
        Block {
            layer: GameLayer::Ground,
            center: Vec2::new(0.0, 150.0),
            size: Vec2::new(120.0, 20.0),
        },
        // Pillar to test wall blocking mid-room
        Block {
            layer: GameLayer::Wall,
            center: Vec2::new(-100.0, -130.0),
            size: Vec2::new(30.0, 100.0),
        },
    ];

    for block in &blocks {
        let color = match block.layer {
            GameLayer::Wall => Color::srgb(0.3, 0.3, 0.4),
            _ => Color::srgb(0.4, 0.5, 0.4),
        };
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            CollisionLayers::new(block.layer, [GameLayer::Player]),
        ));
    }

    debug!("Spawned test room with {} blocks", blocks.len());
}
