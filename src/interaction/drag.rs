// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pointer drag: a kinematic anchor follows the pointer and a spring joint ties it to
//! whichever dynamic body the engine reports under the pointer on press.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::WorldPhase;
use crate::core::components::SandboxBody;
use crate::core::config::SandboxConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::pointer::PointerState;

/// The drag constraint. One exists per world; it is recreated on reset.
#[derive(Component, Debug, Default)]
pub struct PointerConstraint {
    pub grabbed: Option<Entity>,
}

pub struct DragBridgePlugin;

impl Plugin for DragBridgePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>().add_systems(
            Update,
            (
                release_grab,
                grab_under_pointer.run_if(any_with_component::<DefaultRapierContext>),
                follow_pointer,
            )
                .chain()
                .in_set(PrePhysicsSet)
                .run_if(in_state(WorldPhase::Running)),
        );
    }
}

pub fn spawn_pointer_constraint(commands: &mut Commands, at: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("PointerConstraint"),
            PointerConstraint::default(),
            RigidBody::KinematicPositionBased,
            Transform::from_translation(at.extend(0.0)),
        ))
        .id()
}

/// Grab point in the body's local frame so the body hangs from where it was clicked.
pub fn grab_offset(body: &Transform, point: Vec2) -> Vec2 {
    let delta = (point - body.translation.truncate()).extend(0.0);
    (body.rotation.inverse() * delta).truncate()
}

pub fn follow_pointer(
    pointer: Res<PointerState>,
    mut anchors: Query<&mut Transform, With<PointerConstraint>>,
) {
    let Some(p) = pointer.position else {
        return;
    };
    for mut tf in anchors.iter_mut() {
        if tf.translation.truncate() != p {
            tf.translation = p.extend(tf.translation.z);
        }
    }
}

pub fn grab_under_pointer(
    mut commands: Commands,
    pointer: Res<PointerState>,
    cfg: Res<SandboxConfig>,
    rapier: ReadRapierContext,
    mut anchors: Query<(Entity, &mut PointerConstraint)>,
    bodies: Query<&Transform, With<SandboxBody>>,
) {
    // A tap that presses and releases within one frame never grabs.
    if !cfg.drag.enabled || !pointer.just_pressed || pointer.just_released || !pointer.pressed {
        return;
    }
    let Some(point) = pointer.position else {
        return;
    };
    let Ok((anchor, mut constraint)) = anchors.single_mut() else {
        return;
    };
    if constraint.grabbed.is_some() {
        return;
    }
    let Ok(context) = rapier.single() else {
        return;
    };
    let mut hit = None;
    let filter = bevy_rapier2d::prelude::QueryFilter::only_dynamic();
    context.intersect_point(point, filter, |entity| {
        if bodies.contains(entity) {
            hit = Some(entity);
            false
        } else {
            true
        }
    });
    let Some(body) = hit else {
        return;
    };
    let Ok(body_tf) = bodies.get(body) else {
        return;
    };
    let joint = SpringJointBuilder::new(0.0, cfg.drag.stiffness, cfg.drag.damping)
        .local_anchor1(Vec2::ZERO)
        .local_anchor2(grab_offset(body_tf, point));
    commands.entity(body).insert(ImpulseJoint::new(anchor, joint));
    constraint.grabbed = Some(body);
    info!("Drag grab {:?} at {:?}", body, point);
}

pub fn release_grab(
    mut commands: Commands,
    pointer: Res<PointerState>,
    mut anchors: Query<&mut PointerConstraint>,
) {
    if !pointer.just_released {
        return;
    }
    for mut constraint in anchors.iter_mut() {
        let Some(body) = constraint.grabbed.take() else {
            continue;
        };
        if let Ok(mut ec) = commands.get_entity(body) {
            ec.remove::<ImpulseJoint>();
        }
        info!("Drag release {:?}", body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_offset_is_body_local() {
        let body = Transform::from_xyz(100.0, 50.0, 0.0)
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        // World +x relative to a body rotated 90 degrees is local -y.
        let local = grab_offset(&body, Vec2::new(110.0, 50.0));
        assert!((local - Vec2::new(0.0, -10.0)).length() < 1e-4, "{local:?}");
    }
}
