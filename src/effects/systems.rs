use bevy::prelude::*;
use bevy_hanabi::prelude::{
    Attribute, ColorBlendMask, ColorBlendMode, ColorOverLifetimeModifier, EffectAsset, ExprWriter,
    Gradient as HanabiGradient, ParticleEffect, SetAttributeModifier, SetPositionCircleModifier,
    SetVelocitySphereModifier, ShapeDimension, SizeOverLifetimeModifier, SpawnerSettings,
};

use crate::effects::components::PickupSparkles;
use crate::effects::resources::PickupSparkleEffect;
use crate::pickup::components::Pickup;

const SPARKLE_SPAWN_RATE: f32 = 30.0; // particles per second
const SPARKLE_LIFETIME: f32 = 0.8;
const SPARKLE_SPEED: f32 = 25.0;
const SPARKLE_RING_RADIUS: f32 = 20.0;
const SPARKLE_SIZE_START: f32 = 4.0;
const SPARKLE_SIZE_END: f32 = 0.0;

/// Creates the sparkle effect asset once on startup.
/// Silently skips if HanabiPlugin is not loaded.
pub fn setup_pickup_sparkle_effect(
    mut commands: Commands,
    effects: Option<ResMut<Assets<EffectAsset>>>,
) {
    let Some(mut effects) = effects else {
        return;
    };

    let mut color_gradient = HanabiGradient::new();
    color_gradient.add_key(0.0, Vec4::new(1.0, 1.0, 0.8, 1.0));
    color_gradient.add_key(0.6, Vec4::new(1.0, 0.9, 0.5, 0.7));
    color_gradient.add_key(1.0, Vec4::new(1.0, 0.8, 0.3, 0.0));

    let mut size_gradient = HanabiGradient::new();
    size_gradient.add_key(0.0, Vec3::splat(SPARKLE_SIZE_START));
    size_gradient.add_key(1.0, Vec3::splat(SPARKLE_SIZE_END));

    let writer = ExprWriter::new();

    // Ring around the pickup on the ground plane
    let init_pos = SetPositionCircleModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        axis: writer.lit(Vec3::Y).expr(),
        radius: writer.lit(SPARKLE_RING_RADIUS).expr(),
        dimension: ShapeDimension::Surface,
    };

    let init_vel = SetVelocitySphereModifier {
        center: writer.lit(Vec3::new(0.0, -SPARKLE_RING_RADIUS, 0.0)).expr(),
        speed: writer.lit(SPARKLE_SPEED).expr(),
    };

    let lifetime = writer.lit(SPARKLE_LIFETIME).expr();
    let init_lifetime = SetAttributeModifier::new(Attribute::LIFETIME, lifetime);

    let module = writer.finish();

    let spawner = SpawnerSettings::rate(SPARKLE_SPAWN_RATE.into());
    let effect = EffectAsset::new(256, spawner, module)
        .with_name("pickup_sparkles")
        .init(init_pos)
        .init(init_vel)
        .init(init_lifetime)
        .render(ColorOverLifetimeModifier {
            gradient: color_gradient,
            blend: ColorBlendMode::Overwrite,
            mask: ColorBlendMask::RGBA,
        })
        .render(SizeOverLifetimeModifier {
            gradient: size_gradient,
            screen_space_size: false,
        });

    commands.insert_resource(PickupSparkleEffect(effects.add(effect)));
}

/// Gives every new pickup a sparkle child. The child inherits the pickup's visibility, so the
/// sparkles go away while it waits to respawn.
pub fn attach_pickup_sparkles(
    mut commands: Commands,
    effect: Option<Res<PickupSparkleEffect>>,
    query: Query<Entity, Added<Pickup>>,
) {
    let Some(effect) = effect else {
        return;
    };

    for entity in query.iter() {
        let Ok(mut entity_commands) = commands.get_entity(entity) else {
            continue;
        };
        entity_commands.with_children(|parent| {
            parent.spawn((
                PickupSparkles,
                ParticleEffect::new(effect.0.clone()),
                Transform::default(),
                Visibility::Inherited,
            ));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_setup_without_hanabi_is_skipped() {
        let mut app = App::new();

        let _ = app.world_mut().run_system_once(setup_pickup_sparkle_effect);

        assert!(app.world().get_resource::<PickupSparkleEffect>().is_none());
    }

    #[test]
    fn test_setup_registers_effect_asset() {
        let mut app = App::new();
        app.init_resource::<Assets<EffectAsset>>();

        let _ = app.world_mut().run_system_once(setup_pickup_sparkle_effect);

        let handle = app.world().resource::<PickupSparkleEffect>().0.clone();
        let effects = app.world().resource::<Assets<EffectAsset>>();
        assert!(effects.get(&handle).is_some());
    }

    #[test]
    fn test_no_sparkles_without_effect() {
        let mut app = App::new();
        app.add_systems(Update, attach_pickup_sparkles);
        app.world_mut().spawn(Pickup::default());

        app.update();

        let sparkles = app
            .world_mut()
            .query::<&PickupSparkles>()
            .iter(app.world())
            .count();
        assert_eq!(sparkles, 0);
    }

    #[test]
    fn test_new_pickups_get_one_sparkle_child() {
        let mut app = App::new();
        app.insert_resource(PickupSparkleEffect(Handle::default()));
        app.add_systems(Update, attach_pickup_sparkles);

        let pickup = app.world_mut().spawn(Pickup::default()).id();
        app.update();
        app.update();

        let children = app.world().get::<Children>(pickup).unwrap();
        assert_eq!(children.len(), 1);
        assert!(app.world().get::<PickupSparkles>(children[0]).is_some());
    }
}
