use physics::{Aabb, PhysicsBackend, PointMassSim, Vec2};

#[test]
fn particle_stays_inside_room_bounds() {
    let bounds = Aabb::new(Vec2::new(-1.2, -1.2), Vec2::new(1.2, 1.2));
    let mut sim = PointMassSim::new(Vec2::ZERO, bounds, Vec::new());
    sim.advance(&[1.0, 1.0], 2000).unwrap();

    let r = sim.params.radius;
    let com = sim.com();
    assert!(com.x <= 1.2 - r + 1e-5, "x={}", com.x);
    assert!(com.y <= 1.2 - r + 1e-5, "y={}", com.y);
    assert!(sim.qvel()[0].abs() < 1e-6);
}

#[test]
fn wall_blocks_straight_motion() {
    let bounds = Aabb::new(Vec2::new(-1.2, -1.2), Vec2::new(1.2, 1.2));
    let wall = Aabb::new(Vec2::new(-1.2, -0.05), Vec2::new(0.6, 0.05));
    let mut sim = PointMassSim::new(Vec2::new(0.0, -0.6), bounds, vec![wall]);

    sim.advance(&[0.0, 1.0], 1000).unwrap();

    let com = sim.com();
    assert!(com.y < -0.05, "particle passed through the wall: {com:?}");
    assert!((com.y - (-0.05 - sim.params.radius)).abs() < 1e-3);
}

#[test]
fn out_of_range_control_is_clamped() {
    let bounds = Aabb::new(Vec2::new(-10.0, -10.0), Vec2::new(10.0, 10.0));
    let mut a = PointMassSim::new(Vec2::ZERO, bounds, Vec::new());
    let mut b = a.clone();
    a.advance(&[1.0, -1.0], 10).unwrap();
    b.advance(&[50.0, -50.0], 10).unwrap();
    assert_eq!(a.qpos(), b.qpos());
}

#[test]
fn wall_on_room_edge_pushes_particle_sideways_not_out() {
    let bounds = Aabb::new(Vec2::new(-1.2, -1.2), Vec2::new(1.2, 1.2));
    let wall = Aabb::new(Vec2::new(-0.05, -1.2), Vec2::new(0.05, -0.6));
    // start embedded in the wall, right next to the bottom edge
    let mut sim = PointMassSim::new(Vec2::new(0.0, -1.19), bounds, vec![wall]);

    sim.advance(&[0.0, 0.0], 1).unwrap();

    let r = sim.params.radius;
    let com = sim.com();
    assert!(bounds.inflate(-r).contains(com), "particle left the room: {com:?}");
    assert!(com.x.abs() >= 0.05 + r - 1e-5, "particle still inside the wall: {com:?}");
}
