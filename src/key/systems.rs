use bevy::prelude::*;

use crate::key::components::LockedDoor;
use crate::key::events::{DoorDeniedEvent, DoorOpenedEvent};
use crate::overlap::components::CollisionSphere;
use crate::overlap::events::OverlapBeginEvent;
use crate::progress::components::{Collector, PlayerProgress};

/// Opens closed doors touched by a collector whose session can spend a key
pub fn open_locked_doors(
    mut overlaps: MessageReader<OverlapBeginEvent>,
    mut doors: Query<(&mut LockedDoor, &mut Visibility, &mut CollisionSphere)>,
    collectors: Query<&Collector>,
    mut sessions: Query<&mut PlayerProgress>,
    mut opened: MessageWriter<DoorOpenedEvent>,
    mut denied: MessageWriter<DoorDeniedEvent>,
) {
    for event in overlaps.read() {
        let Ok((mut door, mut visibility, mut sphere)) = doors.get_mut(event.target) else {
            continue;
        };

        if door.open {
            continue;
        }

        let Ok(collector) = collectors.get(event.other) else {
            continue;
        };

        let Ok(mut progress) = sessions.get_mut(collector.session) else {
            continue;
        };

        if progress.use_key() {
            door.open = true;
            *visibility = Visibility::Hidden;
            sphere.enabled = false;
            opened.write(DoorOpenedEvent {
                door: event.target,
                collector: event.other,
            });
            info!(
                "Door {:?} opened by {:?}, {} keys left",
                event.target,
                event.other,
                progress.key_count()
            );
        } else {
            denied.write(DoorDeniedEvent {
                door: event.target,
                collector: event.other,
            });
            debug!("Door {:?} stays locked for {:?}", event.target, event.other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct DoorLog {
        opened: Vec<DoorOpenedEvent>,
        denied: Vec<DoorDeniedEvent>,
    }

    fn record_doors(
        mut opened: MessageReader<DoorOpenedEvent>,
        mut denied: MessageReader<DoorDeniedEvent>,
        mut log: ResMut<DoorLog>,
    ) {
        log.opened.extend(opened.read().copied());
        log.denied.extend(denied.read().copied());
    }

    fn setup_app() -> App {
        let mut app = App::new();
        app.init_resource::<DoorLog>();
        app.add_message::<OverlapBeginEvent>()
            .add_message::<DoorOpenedEvent>()
            .add_message::<DoorDeniedEvent>();
        app.add_systems(Update, (open_locked_doors, record_doors).chain());
        app
    }

    fn spawn_player(app: &mut App, keys: i32) -> (Entity, Entity) {
        let mut progress = PlayerProgress::default();
        progress.add_keys(keys);
        let session = app.world_mut().spawn(progress).id();
        let avatar = app.world_mut().spawn(Collector { session }).id();
        (session, avatar)
    }

    fn touch(app: &mut App, door: Entity, avatar: Entity) {
        app.world_mut().write_message(OverlapBeginEvent {
            target: door,
            other: avatar,
        });
        app.update();
    }

    #[test]
    fn test_door_opens_and_spends_one_key() {
        let mut app = setup_app();
        let (session, avatar) = spawn_player(&mut app, 2);
        let door = app.world_mut().spawn(LockedDoor::default()).id();

        touch(&mut app, door, avatar);

        assert!(app.world().get::<LockedDoor>(door).unwrap().open);
        assert_eq!(app.world().get::<Visibility>(door), Some(&Visibility::Hidden));
        assert!(!app.world().get::<CollisionSphere>(door).unwrap().enabled);
        assert_eq!(app.world().get::<PlayerProgress>(session).unwrap().key_count(), 1);
        assert_eq!(
            app.world().resource::<DoorLog>().opened,
            vec![DoorOpenedEvent { door, collector: avatar }]
        );
    }

    #[test]
    fn test_door_without_keys_is_denied() {
        let mut app = setup_app();
        let (session, avatar) = spawn_player(&mut app, 0);
        let door = app.world_mut().spawn(LockedDoor::default()).id();

        touch(&mut app, door, avatar);

        assert!(!app.world().get::<LockedDoor>(door).unwrap().open);
        assert_eq!(app.world().get::<PlayerProgress>(session).unwrap().key_count(), 0);
        assert_eq!(
            app.world().resource::<DoorLog>().denied,
            vec![DoorDeniedEvent { door, collector: avatar }]
        );
    }

    #[test]
    fn test_open_door_does_not_take_more_keys() {
        let mut app = setup_app();
        let (session, avatar) = spawn_player(&mut app, 3);
        let door = app.world_mut().spawn(LockedDoor::default()).id();

        touch(&mut app, door, avatar);
        touch(&mut app, door, avatar);

        assert_eq!(app.world().get::<PlayerProgress>(session).unwrap().key_count(), 2);
        assert_eq!(app.world().resource::<DoorLog>().opened.len(), 1);
    }

    #[test]
    fn test_non_collector_is_ignored() {
        let mut app = setup_app();
        let stranger = app.world_mut().spawn_empty().id();
        let door = app.world_mut().spawn(LockedDoor::default()).id();

        touch(&mut app, door, stranger);

        assert!(!app.world().get::<LockedDoor>(door).unwrap().open);
        let log = app.world().resource::<DoorLog>();
        assert!(log.opened.is_empty());
        assert!(log.denied.is_empty());
    }
}
