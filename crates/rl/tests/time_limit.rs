mod common;

use common::task;
use rl::{diagnostics, final_success_rate, Env, RewardType, TimeLimit};
use rooms::RoomType;

#[test]
fn episode_ends_at_the_cap() {
    let mut env = TimeLimit::new(task(RoomType::Empty, RewardType::Sparse), 3);
    env.reset().unwrap();
    assert!(!env.step(&[0.1, 0.1]).unwrap().done);
    assert!(!env.step(&[0.1, 0.1]).unwrap().done);
    assert!(env.step(&[0.1, 0.1]).unwrap().done);
    assert_eq!(env.elapsed(), 3);

    env.reset().unwrap();
    assert_eq!(env.elapsed(), 0);
    assert_eq!(env.inner().step_count(), 0);
}

#[test]
fn rollouts_feed_diagnostics() {
    let mut env = TimeLimit::new(task(RoomType::Wall, RewardType::Sparse), 25);
    let mut paths = Vec::new();
    for _ in 0..4 {
        env.reset().unwrap();
        let mut path = Vec::new();
        loop {
            let step = env.step(&[0.5, -0.25]).unwrap();
            path.push(step.info);
            if step.done {
                break;
            }
        }
        assert_eq!(path.len(), 25);
        paths.push(path);
    }

    let stats = diagnostics(&paths, "");
    let mean = stats.get("euclidean_distance Mean").unwrap();
    assert!(mean > 0.0);
    assert!(stats.get("Final shaped_distance Min").unwrap() >= stats.get("Final euclidean_distance Min").unwrap() - 1e-4);
    let rate = final_success_rate(&paths);
    assert!((0.0..=1.0).contains(&rate));
    assert_eq!(env.obs_size(), 2);
    assert_eq!(env.action_size(), 2);
}
