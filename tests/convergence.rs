//! Seeded end-to-end learning on the classic maze

use qmaze::{
    app::{AgentConfig, build_agent},
    gridworld::MazeEnv,
    pipeline::{
        DEFAULT_ROLLOUT_STEPS, MetricsObserver, TrainingConfig, TrainingPipeline, greedy_rollout,
    },
    types::Position,
};

fn train(seed: u64) -> (MazeEnv, qmaze::QLearningAgent) {
    let mut env = MazeEnv::default();
    let mut agent = build_agent(&AgentConfig::default().with_seed(seed)).unwrap();
    let config = TrainingConfig {
        num_episodes: 500,
        max_steps: 100,
        seed: Some(seed),
    };
    TrainingPipeline::new(config)
        .run(&mut env, &mut agent)
        .unwrap();
    (env, agent)
}

#[test]
fn greedy_policy_finds_a_shortest_path() {
    let (mut env, mut agent) = train(42);

    let rollout = greedy_rollout(&mut env, &mut agent, DEFAULT_ROLLOUT_STEPS);

    assert!(rollout.reached_goal, "greedy rollout: {:?}", rollout.path);
    assert_eq!(rollout.steps, 6);
    assert_eq!(rollout.path.first(), Some(&Position::new(0, 0)));
    assert_eq!(rollout.path.last(), Some(&Position::new(3, 3)));
    for pair in rollout.path.windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1, "no blocked moves on a shortest path");
    }
}

#[test]
fn learned_values_prefer_the_move_into_the_goal() {
    let (mut env, mut agent) = train(7);
    let rollout = greedy_rollout(&mut env, &mut agent, DEFAULT_ROLLOUT_STEPS);
    assert!(rollout.reached_goal);

    let before_goal = rollout.path[rollout.path.len() - 2];
    let last_action = rollout.actions[rollout.actions.len() - 1];
    let best = agent.q_value(before_goal, last_action);
    assert!(best > 0.0);
    assert_eq!(best, agent.max_value(before_goal));

    // The goal row is never written
    assert_eq!(agent.max_value(Position::new(3, 3)), 0.0);
    assert!(!agent.q_table().states().contains(&Position::new(3, 3)));
}

#[test]
fn later_episodes_are_shorter_than_early_ones() {
    let mut env = MazeEnv::default();
    let mut agent = build_agent(&AgentConfig::default().with_seed(3)).unwrap();
    let config = TrainingConfig {
        num_episodes: 500,
        max_steps: 100,
        seed: Some(3),
    };
    let result = TrainingPipeline::new(config)
        .with_observer(Box::new(MetricsObserver::new()))
        .run(&mut env, &mut agent)
        .unwrap();

    let early: f64 = result.episode_steps[..50].iter().sum::<usize>() as f64 / 50.0;
    let late: f64 = result.episode_steps[450..].iter().sum::<usize>() as f64 / 50.0;
    assert!(late < early, "late mean {late} should be below early mean {early}");
    assert!(result.episode_success[450..].iter().all(|&s| s));
}

#[test]
fn identical_seeds_give_identical_runs() {
    let (_, a) = train(99);
    let (_, b) = train(99);
    assert_eq!(a.q_table().states(), b.q_table().states());
    for state in a.q_table().states() {
        assert_eq!(a.q_table().values(state), b.q_table().values(state));
    }
}
