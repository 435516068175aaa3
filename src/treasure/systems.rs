use bevy::prelude::*;

use crate::pickup::components::PickupTint;
use crate::treasure::components::TreasurePickup;

/// Requests a tint matching the category for treasure with auto appearance, on spawn and on
/// every category change
pub fn refresh_treasure_appearance(
    mut commands: Commands,
    query: Query<(Entity, &TreasurePickup), Changed<TreasurePickup>>,
) {
    for (entity, treasure) in query.iter() {
        if treasure.auto_appearance {
            commands
                .entity(entity)
                .try_insert(PickupTint(treasure.category().tint()));
        }
    }
}

/// Gives each tinted entity its own material instance colored with the tint.
/// Skipped when no material assets exist (headless runs).
pub fn apply_pickup_tints(
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    mut query: Query<(&PickupTint, &mut MeshMaterial3d<StandardMaterial>), Changed<PickupTint>>,
) {
    let Some(mut materials) = materials else {
        return;
    };

    for (tint, mut material) in query.iter_mut() {
        let mut instance = materials.get(&material.0).cloned().unwrap_or_default();
        instance.base_color = tint.0;
        material.0 = materials.add(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treasure::components::TreasureCategory;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_new_treasure_gets_category_tint() {
        let mut app = App::new();
        app.add_systems(Update, refresh_treasure_appearance);

        let entity = app
            .world_mut()
            .spawn(TreasurePickup::new(TreasureCategory::Gem))
            .id();
        app.update();

        assert_eq!(
            app.world().get::<PickupTint>(entity),
            Some(&PickupTint(TreasureCategory::Gem.tint()))
        );
    }

    #[test]
    fn test_category_change_refreshes_tint() {
        let mut app = App::new();
        app.add_systems(Update, refresh_treasure_appearance);

        let entity = app
            .world_mut()
            .spawn(TreasurePickup::new(TreasureCategory::Gold))
            .id();
        app.update();

        app.world_mut()
            .get_mut::<TreasurePickup>(entity)
            .unwrap()
            .set_category(TreasureCategory::Bronze);
        app.update();

        assert_eq!(
            app.world().get::<PickupTint>(entity),
            Some(&PickupTint(TreasureCategory::Bronze.tint()))
        );
    }

    #[test]
    fn test_manual_appearance_is_left_alone() {
        let mut app = App::new();
        app.add_systems(Update, refresh_treasure_appearance);

        let mut treasure = TreasurePickup::new(TreasureCategory::Chest);
        treasure.auto_appearance = false;
        let entity = app.world_mut().spawn(treasure).id();
        app.update();

        assert!(app.world().get::<PickupTint>(entity).is_none());
    }

    #[test]
    fn test_apply_pickup_tints_creates_tinted_material_instance() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>();

        let original = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let tint = TreasureCategory::Gold.tint();
        let entity = app
            .world_mut()
            .spawn((MeshMaterial3d(original.clone()), PickupTint(tint)))
            .id();

        let _ = app.world_mut().run_system_once(apply_pickup_tints);

        let handle = app
            .world()
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .unwrap()
            .0
            .clone();
        assert_ne!(handle, original);

        let materials = app.world().resource::<Assets<StandardMaterial>>();
        assert_eq!(materials.get(&handle).unwrap().base_color, tint);
        assert_eq!(materials.get(&original).unwrap().base_color, Color::WHITE);
    }

    #[test]
    fn test_apply_pickup_tints_without_material_assets_does_nothing() {
        let mut app = App::new();
        app.world_mut()
            .spawn((
                MeshMaterial3d(Handle::<StandardMaterial>::default()),
                PickupTint(Color::BLACK),
            ));

        // Should not panic
        let _ = app.world_mut().run_system_once(apply_pickup_tints);
    }
}
