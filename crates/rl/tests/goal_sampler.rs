use rl::GoalSampler;
use rooms::{Room, RoomGeometry, RoomType};

#[test]
fn samples_stay_in_reachable_set() {
    let room = Room::default_for(RoomType::Empty);
    let reachable = room.reachable_positions();
    let mut sampler = GoalSampler::new(Some(1234));
    for _ in 0..10_000 {
        let goal = sampler.sample(&room).unwrap();
        assert!(room.contains(goal));
        assert!(reachable.contains(&goal), "{goal:?} not in reachable set");
    }
}

#[test]
fn same_seed_same_goals() {
    let room = Room::default_for(RoomType::Rooms);
    let mut a = GoalSampler::new(Some(9));
    let mut b = GoalSampler::new(Some(9));
    for _ in 0..100 {
        assert_eq!(a.sample(&room).unwrap(), b.sample(&room).unwrap());
    }
}

#[test]
fn sampling_covers_the_room() {
    let room = Room::default_for(RoomType::Wall);
    let mut sampler = GoalSampler::new(Some(5));
    let goals: Vec<_> = (0..1000).map(|_| sampler.sample(&room).unwrap()).collect();
    assert!(goals.iter().any(|g| g.y > 0.0));
    assert!(goals.iter().any(|g| g.y < 0.0));
}
