use approx::assert_relative_eq;
use physics::Vec2;
use rl::{BaseRewardSign, PotentialType, Reward, RewardBatch, RewardEngine, RewardType, TaskError};
use rooms::{Room, RoomGeometry, RoomType};

fn engine(reward_type: RewardType) -> RewardEngine {
    RewardEngine::new(PotentialType::Euclidean, BaseRewardSign::Negative, reward_type, 0.05)
}

#[test]
fn sparse_boundary_is_strict() {
    let e = engine(RewardType::Sparse);
    let eps = 1e-3;
    let origin = Vec2::ZERO;
    assert_eq!(e.reward(origin, Vec2::new(0.05 - eps, 0.0)), Reward::Scalar(0.0));
    assert_eq!(e.reward(origin, Vec2::new(0.05 + eps, 0.0)), Reward::Scalar(-1.0));
}

#[test]
fn dense_is_negative_distance() {
    let e = engine(RewardType::Dense);
    let r = e.reward(Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.4)).as_scalar().unwrap();
    assert_relative_eq!(r, -0.5, epsilon = 1e-6);
}

#[test]
fn vectorized_dense_is_per_axis() {
    let e = engine(RewardType::VectorizedDense);
    let Reward::PerAxis([x, y]) = e.reward(Vec2::new(0.1, 0.2), Vec2::new(0.4, -0.1)) else {
        panic!("expected a per-axis reward");
    };
    assert_relative_eq!(x, -0.3, epsilon = 1e-6);
    assert_relative_eq!(y, -0.3, epsilon = 1e-6);
}

#[test]
fn batch_broadcasts_a_single_goal() {
    let e = engine(RewardType::Sparse);
    let achieved = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.01, 0.01)];
    let batch = e.batch_reward(&achieved, &[Vec2::ZERO]).unwrap();
    assert_eq!(batch, RewardBatch::Scalar(vec![0.0, -1.0, 0.0]));
    assert_eq!(batch.get(1), Some(Reward::Scalar(-1.0)));
}

#[test]
fn batch_matches_pairwise_rewards() {
    let e = engine(RewardType::VectorizedDense);
    let achieved = [Vec2::new(0.5, 0.5), Vec2::new(-0.2, 0.1)];
    let desired = [Vec2::new(0.0, 1.0), Vec2::new(0.3, 0.1)];
    let batch = e.batch_reward(&achieved, &desired).unwrap();
    assert_eq!(batch.len(), 2);
    for i in 0..2 {
        assert_eq!(batch.get(i), Some(e.reward(achieved[i], desired[i])));
    }
}

#[test]
fn mismatched_batches_are_rejected() {
    let e = engine(RewardType::Dense);
    let err = e.batch_reward(&[Vec2::ZERO; 2], &[Vec2::ZERO; 3]).unwrap_err();
    assert!(matches!(err, TaskError::BatchShape { achieved: 2, desired: 3 }));
}

#[test]
fn base_reward_sign_is_a_unit_shift() {
    let pos = RewardEngine::new(PotentialType::None, BaseRewardSign::Positive, RewardType::Sparse, 0.5);
    let neg = RewardEngine::new(PotentialType::None, BaseRewardSign::Negative, RewardType::Sparse, 0.5);
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..500 {
        let a = Vec2::new(rng.f32() * 0.2, rng.f32() * 0.2);
        let d = Vec2::new(rng.f32() * 0.2, rng.f32() * 0.2);
        assert_eq!(pos.base_reward(a, d), neg.base_reward(a, d) + 1.0);
    }
}

#[test]
fn base_reward_uses_its_own_radius() {
    // indicator_threshold is 0.5, but the base reward radius stays 0.05
    let e = RewardEngine::new(PotentialType::None, BaseRewardSign::Negative, RewardType::Sparse, 0.5);
    assert_eq!(e.base_reward(Vec2::ZERO, Vec2::new(0.04, 0.0)), 0.0);
    assert_eq!(e.base_reward(Vec2::ZERO, Vec2::new(0.2, 0.0)), -1.0);
}

#[test]
fn potentials() {
    let room = Room::default_for(RoomType::Wall);
    let a = Vec2::new(0.0, -0.5);
    let d = Vec2::new(0.0, 0.5);

    let none = RewardEngine::new(PotentialType::None, BaseRewardSign::Positive, RewardType::Sparse, 0.05);
    assert_eq!(none.potential(&room, a, d).unwrap(), 0.0);

    let euclid = RewardEngine::new(PotentialType::Euclidean, BaseRewardSign::Positive, RewardType::Sparse, 0.05);
    assert_relative_eq!(euclid.potential(&room, a, d).unwrap(), -1.0, epsilon = 1e-6);

    let shaped = RewardEngine::new(PotentialType::Shaped, BaseRewardSign::Positive, RewardType::Sparse, 0.05);
    let p = shaped.potential(&room, a, d).unwrap();
    assert_relative_eq!(p, -room.shaped_distance(a, d).unwrap());
    assert!(p < -1.0);
}

#[test]
fn shaped_potential_rejects_points_outside_the_room() {
    let room = Room::default_for(RoomType::Empty);
    let shaped = RewardEngine::new(PotentialType::Shaped, BaseRewardSign::Positive, RewardType::Sparse, 0.05);
    let err = shaped.potential(&room, Vec2::new(5.0, 0.0), Vec2::ZERO).unwrap_err();
    assert!(matches!(err, TaskError::Geometry(rooms::GeometryError::OutOfBounds(_))));
}
