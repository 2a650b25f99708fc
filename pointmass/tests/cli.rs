use std::io::Write;

use clap::Parser;
use pointmass::{app, cli::Args};
use rl::{RewardType, TaskError};
use rooms::RoomType;

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["pointmass"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn flags_override_defaults() {
    let config = args(&["--room-type", "wall", "--reward-type", "dense", "--speed", "1.5", "--seed", "4"])
        .task_config()
        .unwrap();
    assert_eq!(config.room_type, RoomType::Wall);
    assert_eq!(config.reward_type, RewardType::Dense);
    assert_eq!(config.speed, 1.5);
    assert_eq!(config.seed, Some(4));
}

#[test]
fn unknown_reward_type_is_reported() {
    let err = args(&["--reward-type", "quadratic"]).task_config().unwrap_err();
    assert!(matches!(err, TaskError::UnsupportedConfiguration(_)));
}

#[test]
fn flags_override_config_file() {
    let dir = std::env::temp_dir().join(format!("pointmass-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("task.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{ "room_type": "rooms", "reward_type": "dense", "indicator_threshold": 0.1 }}"#).unwrap();

    let config = args(&["--config", path.to_str().unwrap(), "--reward-type", "sparse"])
        .task_config()
        .unwrap();
    assert_eq!(config.room_type, RoomType::Rooms);
    assert_eq!(config.reward_type, RewardType::Sparse);
    assert_eq!(config.indicator_threshold, 0.1);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn run_collects_requested_episodes() {
    let report = app::run(&args(&["--room-type", "rooms", "--episodes", "3", "--steps", "15", "--seed", "11"]))
        .unwrap();
    assert_eq!(report.episodes.len(), 3);
    assert!(report.episodes.iter().all(|e| e.steps == 15));
    assert_eq!(report.substeps, 5);
    assert!(report.diagnostics.get("Final euclidean_distance Mean").is_some());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["config"]["room_type"], "rooms");
    assert!(json["episodes"][0].get("return").is_some());
}

#[test]
fn seeded_runs_are_identical() {
    let argv = ["--room-type", "wall", "--episodes", "2", "--steps", "30", "--seed", "5"];
    let a = serde_json::to_string(&app::run(&args(&argv)).unwrap()).unwrap();
    let b = serde_json::to_string(&app::run(&args(&argv)).unwrap()).unwrap();
    assert_eq!(a, b);
}
