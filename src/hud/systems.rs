use bevy::prelude::*;

use crate::hud::components::*;
use crate::progress::components::{LocalPlayer, PlayerProgress};

pub fn progress_text(progress: &PlayerProgress) -> String {
    format!(
        "Score: {}   High: {}   Treasure: {}   Keys: {}",
        progress.score(),
        progress.high_score(),
        progress.treasure_count(),
        progress.key_count()
    )
}

pub fn setup_progress_display(mut commands: Commands, existing: Query<(), With<ProgressDisplay>>) {
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        Text::new(progress_text(&PlayerProgress::default())),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            left: Val::Px(20.0),
            ..default()
        },
        ProgressDisplay,
    ));
}

pub fn update_progress_display(
    sessions: Query<&PlayerProgress, (With<LocalPlayer>, Changed<PlayerProgress>)>,
    mut query: Query<&mut Text, With<ProgressDisplay>>,
) {
    let Some(progress) = sessions.iter().next() else {
        return;
    };

    for mut text in &mut query {
        **text = progress_text(progress);
    }
}

pub fn show_pause_banner(mut commands: Commands) {
    commands.spawn((
        Text::new("Paused (Esc to resume, Backspace to quit)"),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(45.0),
            left: Val::Percent(25.0),
            ..default()
        },
        PauseBanner,
    ));
}

pub fn hide_pause_banner(mut commands: Commands, query: Query<Entity, With<PauseBanner>>) {
    for entity in query.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}
