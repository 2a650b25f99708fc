use criterion::{criterion_group, criterion_main, Criterion};
use rl::{Env, PointMassTask, PotentialType, RewardBatch, RewardEngine, TaskConfig};
use rooms::RoomType;

fn bench_task_step(c: &mut Criterion) {
    for room_type in RoomType::ALL {
        let config = TaskConfig { room_type, seed: Some(0), ..TaskConfig::default() };
        let mut task = PointMassTask::new(config).unwrap();
        task.reset().unwrap();
        c.bench_function(&format!("step_{room_type}"), |b| {
            b.iter(|| task.step(&[0.4, -0.2]).unwrap());
        });
    }
}

fn bench_batch_reward(c: &mut Criterion) {
    let config = TaskConfig::default();
    let engine = RewardEngine::from_config(&TaskConfig { potential_type: PotentialType::None, ..config });
    let mut rng = fastrand::Rng::with_seed(1);
    let achieved: Vec<_> = (0..4096).map(|_| physics::Vec2::new(rng.f32(), rng.f32())).collect();
    let desired: Vec<_> = (0..4096).map(|_| physics::Vec2::new(rng.f32(), rng.f32())).collect();
    c.bench_function("batch_reward_4096", |b| {
        b.iter(|| {
            let batch: RewardBatch = engine.batch_reward(&achieved, &desired).unwrap();
            batch.len()
        });
    });
}

criterion_group!(benches, bench_task_step, bench_batch_reward);
criterion_main!(benches);
