//! Q-learning update rule and action selection through the public API

use qmaze::{
    app::AgentConfig,
    gridworld::{Action, GOAL_REWARD, MazeEnv},
    ports::Learner,
    q_learning::QLearningAgent,
    types::{Position, Transition},
};

const START: Position = Position::new(0, 0);

#[test]
fn first_update_from_empty_table() {
    let mut agent = QLearningAgent::new(0.1, 0.9, 0.1);
    agent.update(START, Action::Right, -0.1, Position::new(0, 1));

    // 0 + 0.1 * (-0.1 + 0.9 * 0 - 0) = -0.01
    assert!((agent.q_value(START, Action::Right) - -0.01).abs() < 1e-12);
    assert_eq!(agent.q_value(START, Action::Left), 0.0);
    assert_eq!(agent.q_table_size(), 1);
}

#[test]
fn update_touches_exactly_one_entry() {
    let mut agent = QLearningAgent::new(0.5, 0.9, 0.1);
    let before: Vec<f64> = Action::ALL
        .iter()
        .map(|&a| agent.q_value(START, a))
        .collect();

    agent.update(START, Action::Down, -1.0, START);

    for (idx, action) in Action::ALL.into_iter().enumerate() {
        if action == Action::Down {
            assert!((agent.q_value(START, action) - -0.5).abs() < 1e-12);
        } else {
            assert_eq!(agent.q_value(START, action), before[idx]);
        }
    }
}

#[test]
fn reads_never_materialize_states() {
    let mut agent = QLearningAgent::new(0.1, 0.9, 0.0).with_seed(3);
    let unseen = Position::new(2, 2);

    assert_eq!(agent.max_value(unseen), 0.0);
    assert_eq!(agent.q_value(unseen, Action::Up), 0.0);
    let _ = agent.policy(unseen);
    let _ = agent.choose_action(unseen, true);

    assert_eq!(agent.q_table_size(), 0);
}

#[test]
fn goal_reward_flows_back_one_step_per_update() {
    let mut agent = QLearningAgent::new(1.0, 0.9, 0.0);
    let before_goal = Position::new(3, 2);
    let two_before = Position::new(2, 2);

    agent.update(before_goal, Action::Right, GOAL_REWARD, Position::new(3, 3));
    agent.update(two_before, Action::Down, -0.1, before_goal);

    assert_eq!(agent.q_value(before_goal, Action::Right), 100.0);
    assert!((agent.q_value(two_before, Action::Down) - 89.9).abs() < 1e-9);
    assert_eq!(agent.policy(two_before), Action::Down);
}

#[test]
fn learn_applies_the_update_rule() {
    let mut agent = QLearningAgent::new(0.1, 0.9, 0.1);
    let transition = Transition {
        state: Position::new(3, 2),
        action: Action::Right,
        reward: GOAL_REWARD,
        next_state: Position::new(3, 3),
        done: true,
    };

    agent.learn(&transition).unwrap();

    assert!((agent.q_value(transition.state, transition.action) - 10.0).abs() < 1e-12);
    assert_eq!(agent.action_values(transition.next_state), Some([0.0; 4]));
}

#[test]
fn ties_are_broken_between_every_maximal_action() {
    let mut agent = QLearningAgent::new(0.1, 0.9, 0.0).with_seed(11);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(agent.policy(START));
    }
    assert_eq!(seen.len(), Action::COUNT);
}

#[test]
fn seeded_agents_follow_identical_trajectories() {
    let config = AgentConfig::default().with_epsilon(0.3).with_seed(21);
    let mut a = QLearningAgent::from_config(&config).unwrap();
    let mut b = QLearningAgent::from_config(&config).unwrap();
    let mut env_a = MazeEnv::default();
    let mut env_b = MazeEnv::default();

    let mut state_a = env_a.reset();
    let mut state_b = env_b.reset();
    for _ in 0..200 {
        let action_a = a.select_action(state_a);
        let action_b = b.select_action(state_b);
        assert_eq!(action_a, action_b);

        let next_a = env_a.step(action_a);
        let next_b = env_b.step(action_b);
        a.update(state_a, action_a, next_a.reward, next_a.position);
        b.update(state_b, action_b, next_b.reward, next_b.position);
        state_a = if next_a.terminated {
            env_a.reset()
        } else {
            next_a.position
        };
        state_b = if next_b.terminated {
            env_b.reset()
        } else {
            next_b.position
        };
    }

    assert_eq!(a.q_table().states(), b.q_table().states());
}

#[test]
fn invalid_config_is_rejected() {
    let config = AgentConfig::default().with_learning_rate(0.0);
    assert!(QLearningAgent::from_config(&config).is_err());

    let config = AgentConfig::default().with_epsilon(1.5);
    assert!(QLearningAgent::from_config(&config).is_err());
}

#[test]
fn reset_forgets_learned_values() {
    let mut agent = QLearningAgent::new(0.1, 0.9, 0.1).with_seed(4);
    agent.update(START, Action::Right, -0.1, Position::new(0, 1));
    assert_eq!(agent.q_table_size(), 1);

    agent.reset().unwrap();
    assert_eq!(agent.q_table_size(), 0);
    assert_eq!(agent.name(), "Q-Learning");
}
