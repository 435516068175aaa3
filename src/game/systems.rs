use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::components::*;
use crate::game::resources::*;
use crate::key::components::{KeyPickup, LockedDoor};
use crate::overlap::components::CollisionSphere;
use crate::pickup::components::{Pickup, PickupSound, PickupTint};
use crate::progress::components::{Collector, LocalPlayer, PlayerProgress, ScoreMultiplier};
use crate::states::*;
use crate::treasure::components::{TreasureCategory, TreasurePickup};

pub const TREASURE_SOUND: &str = "sounds/treasure.wav";
pub const KEY_SOUND: &str = "sounds/key.wav";
pub const AVATAR_SPHERE_RADIUS: f32 = 30.0;

const KEY_TINT: Color = Color::linear_rgb(0.9, 0.9, 0.2);
const DOOR_TINT: Color = Color::linear_rgb(0.35, 0.2, 0.1);

/// Shared meshes for the level, only built when a renderer is present
struct LevelVisuals {
    pickup_mesh: Handle<Mesh>,
    door_mesh: Handle<Mesh>,
    avatar_mesh: Handle<Mesh>,
}

pub fn start_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Spawns the session, the avatar and the pickup ring.
/// Coming back from pause re-enters `InGame`, so an existing level is left alone. A session
/// left over from an earlier level starts a new run, keeping only its high score.
#[allow(clippy::too_many_arguments)]
pub fn setup_level(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    existing: Query<(), With<LevelEntity>>,
    mut sessions: Query<(Entity, &mut PlayerProgress), With<LocalPlayer>>,
    cameras: Query<(), With<Camera>>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    if !existing.is_empty() {
        return;
    }

    let session = match sessions.single_mut() {
        Ok((session, mut progress)) => {
            progress.start_new_run();
            info!("New run, high score to beat: {}", progress.high_score());
            session
        }
        Err(_) => commands
            .spawn((
                Name::new("Session"),
                PlayerProgress::default(),
                ScoreMultiplier(layout.score_multiplier),
                LocalPlayer,
            ))
            .id(),
    };

    let visuals = meshes.map(|mut meshes| LevelVisuals {
        pickup_mesh: meshes.add(Sphere::new(20.0)),
        door_mesh: meshes.add(Cuboid::new(80.0, 160.0, 20.0)),
        avatar_mesh: meshes.add(Capsule3d::new(AVATAR_SPHERE_RADIUS, 60.0)),
    });

    let mut rng = match layout.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let slots = layout.ring_slots();
    let slot_angle = std::f32::consts::TAU / slots as f32;
    let slot_position = |slot: usize| point_on_ring(layout.ring_radius, slot as f32 * slot_angle);

    // Keys come first along the walk so the door can open on the first lap
    for slot in 0..layout.key_count {
        let entity = spawn_key(&mut commands, slot_position(slot));
        if let (Some(visuals), Some(materials)) = (&visuals, materials.as_mut()) {
            commands.entity(entity).insert((
                Mesh3d(visuals.pickup_mesh.clone()),
                MeshMaterial3d(materials.add(StandardMaterial::default())),
                PickupTint(KEY_TINT),
            ));
        }
    }

    for index in 0..layout.treasure_count {
        let category = TreasureCategory::ALL[rng.gen_range(0..TreasureCategory::ALL.len())];
        let entity = spawn_treasure(&mut commands, category, slot_position(layout.key_count + index));
        if let (Some(visuals), Some(materials)) = (&visuals, materials.as_mut()) {
            commands.entity(entity).insert((
                Mesh3d(visuals.pickup_mesh.clone()),
                MeshMaterial3d(materials.add(StandardMaterial::default())),
            ));
        }
    }

    let door = spawn_door(&mut commands, slot_position(slots - 1));
    let bonus = spawn_bonus(&mut commands, Vec3::ZERO, layout.bonus_life_span);
    let avatar = spawn_avatar(
        &mut commands,
        session,
        Patrol::new(Vec3::ZERO, layout.ring_radius, layout.patrol_speed),
    );

    if let (Some(visuals), Some(materials)) = (&visuals, materials.as_mut()) {
        commands.entity(door).insert((
            Mesh3d(visuals.door_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: DOOR_TINT,
                ..default()
            })),
        ));
        commands.entity(bonus).insert((
            Mesh3d(visuals.pickup_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial::default())),
        ));
        commands.entity(avatar).insert((
            Mesh3d(visuals.avatar_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::linear_rgb(0.1, 0.8, 0.2),
                ..default()
            })),
        ));

        if cameras.is_empty() {
            commands.spawn((
                Camera3d::default(),
                Transform::from_xyz(0.0, 1200.0, 1200.0).looking_at(Vec3::ZERO, Vec3::Y),
            ));
            commands.spawn((
                DirectionalLight {
                    illuminance: 10_000.0,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_xyz(400.0, 800.0, 400.0).looking_at(Vec3::ZERO, Vec3::Y),
            ));
        }
    }

    info!(
        "Level ready: {} treasure, {} keys, 1 locked door",
        layout.treasure_count, layout.key_count
    );
}

pub fn spawn_treasure(commands: &mut Commands, category: TreasureCategory, position: Vec3) -> Entity {
    commands
        .spawn((
            Name::new(format!("{} treasure", category.display_name())),
            TreasurePickup::new(category),
            Transform::from_translation(position),
            PickupSound(TREASURE_SOUND.to_string()),
            LevelEntity,
        ))
        .id()
}

pub fn spawn_key(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Name::new("Key"),
            KeyPickup::default(),
            Transform::from_translation(position),
            PickupSound(KEY_SOUND.to_string()),
            LevelEntity,
        ))
        .id()
}

pub fn spawn_door(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Name::new("Locked door"),
            LockedDoor::default(),
            Transform::from_translation(position),
            LevelEntity,
        ))
        .id()
}

/// Generic pickup that does nothing when collected and despawns after `life_span` seconds
pub fn spawn_bonus(commands: &mut Commands, position: Vec3, life_span: f32) -> Entity {
    commands
        .spawn((
            Name::new("Bonus"),
            Pickup::default().with_life_span(life_span),
            Transform::from_translation(position),
            LevelEntity,
        ))
        .id()
}

pub fn spawn_avatar(commands: &mut Commands, session: Entity, patrol: Patrol) -> Entity {
    commands
        .spawn((
            Name::new("Avatar"),
            Avatar,
            Collector { session },
            CollisionSphere::new(AVATAR_SPHERE_RADIUS),
            Transform::from_translation(patrol.position()),
            patrol,
            LevelEntity,
        ))
        .id()
}

pub fn patrol_avatars(time: Res<Time>, mut query: Query<(&mut Transform, &mut Patrol)>) {
    for (mut transform, mut patrol) in query.iter_mut() {
        patrol.advance(time.delta_secs());
        transform.translation = patrol.position();
    }
}

/// Escape toggles pause. Backspace while paused abandons the level, Enter starts a new one.
pub fn game_input(
    keyboard_input: Option<Res<ButtonInput<KeyCode>>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(keyboard_input) = keyboard_input else {
        return;
    };

    match state.get() {
        GameState::InGame if keyboard_input.just_pressed(KeyCode::Escape) => {
            next_state.set(GameState::Paused);
        }
        GameState::Paused if keyboard_input.just_pressed(KeyCode::Escape) => {
            next_state.set(GameState::InGame);
        }
        GameState::Paused if keyboard_input.just_pressed(KeyCode::Backspace) => {
            next_state.set(GameState::Intro);
        }
        GameState::Intro if keyboard_input.just_pressed(KeyCode::Enter) => {
            next_state.set(GameState::InGame);
        }
        _ => {}
    }
}

/// Despawns the level. The session survives so the high score carries over.
pub fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in query.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}

/// Exits once the frame limit is reached, logging where the session ended up
pub fn exit_after_frame_limit(
    limit: Res<FrameLimit>,
    mut frames: Local<u32>,
    sessions: Query<&PlayerProgress, With<LocalPlayer>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(max_frames) = limit.0 else {
        return;
    };

    *frames += 1;
    if *frames < max_frames {
        return;
    }

    for progress in sessions.iter() {
        info!(
            "Session finished: score {}, high score {}, treasure {}, keys {}",
            progress.score(),
            progress.high_score(),
            progress.treasure_count(),
            progress.key_count()
        );
    }
    exit.write(AppExit::Success);
}
