use physics::Vec2;
use rooms::{Room, RoomGeometry, RoomType, CLEARANCE};

#[test]
fn every_layout_has_reachable_positions() {
    for room_type in RoomType::ALL {
        let room = Room::default_for(room_type);
        assert!(!room.reachable_positions().is_empty(), "{room_type}");
    }
}

#[test]
fn reachable_positions_avoid_walls_and_boundary() {
    for room_type in RoomType::ALL {
        let room = Room::default_for(room_type);
        let inner = room.bounds().inflate(-CLEARANCE + 1e-5);
        for &p in room.reachable_positions() {
            assert!(inner.contains(p), "{room_type}: {p:?}");
            for wall in room.walls() {
                assert!(wall.distance_to(p) >= CLEARANCE, "{room_type}: {p:?} near {wall:?}");
            }
        }
    }
}

#[test]
fn walls_remove_positions() {
    let empty = Room::default_for(RoomType::Empty).reachable_positions().len();
    let wall = Room::default_for(RoomType::Wall).reachable_positions().len();
    let rooms = Room::default_for(RoomType::Rooms).reachable_positions().len();
    assert!(wall < empty);
    assert!(rooms < wall);
}

#[test]
fn every_reachable_position_is_connected_to_start() {
    for room_type in RoomType::ALL {
        let room = Room::default_for(room_type);
        let start = room.start_position();
        for &p in room.reachable_positions().iter().step_by(37) {
            assert!(room.shaped_distance(start, p).is_ok(), "{room_type}: {p:?}");
        }
    }
}

#[test]
fn room_type_serde_names() {
    let parsed: RoomType = serde_json::from_str("\"rooms\"").unwrap();
    assert_eq!(parsed, RoomType::Rooms);
    let alias: RoomType = serde_json::from_str("\"four_room\"").unwrap();
    assert_eq!(alias, RoomType::Rooms);
    assert_eq!(serde_json::to_string(&RoomType::Wall).unwrap(), "\"wall\"");
    assert!(Room::default_for(RoomType::Empty).contains(Vec2::new(1.2, -1.2)));
}
