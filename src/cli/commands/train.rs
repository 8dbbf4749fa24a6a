//! Train command - Train a Q-learning agent in the maze

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;
use tracing::info;

use crate::{
    analysis::CurveStats,
    app::{AgentConfig, build_agent, build_env},
    cli::output::{
        format_percent, print_kv, print_q_table_excerpt, print_section, print_stats_table,
        print_subsection,
    },
    export::CurveCsvExporter,
    gridworld::{Maze, MazeView, PathView},
    pipeline::{
        IntervalReportObserver, JsonlObserver, Learner, ProgressObserver, Rollout, TrainingConfig,
        TrainingPipeline, TrainingResult, greedy_rollout,
    },
    types::Position,
};

#[derive(Debug, Serialize)]
struct SummaryStats {
    total_episodes: usize,
    successes: usize,
    success_rate: f64,
    mean_reward: f64,
    mean_steps: f64,
}

impl From<&TrainingResult> for SummaryStats {
    fn from(result: &TrainingResult) -> Self {
        Self {
            total_episodes: result.total_episodes,
            successes: result.successes,
            success_rate: result.success_rate,
            mean_reward: result.mean_reward,
            mean_steps: result.mean_steps,
        }
    }
}

#[derive(Debug, Serialize)]
struct RolloutStats {
    reached_goal: bool,
    steps: usize,
    total_reward: f64,
    path: Vec<Position>,
}

impl From<&Rollout> for RolloutStats {
    fn from(rollout: &Rollout) -> Self {
        Self {
            reached_goal: rollout.reached_goal,
            steps: rollout.steps,
            total_reward: rollout.total_reward,
            path: rollout.path.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: SummaryStats,
    final_window: Option<CurveStats>,
    rollout: RolloutStats,
    agent: AgentConfig,
    config: TrainingConfig,
    maze: String,
    final_epsilon: Option<f64>,
    q_table_states: usize,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat existing directories, trailing separators or a missing filename as
    // a directory target.
    if raw.is_dir()
        || raw_str.ends_with(std::path::MAIN_SEPARATOR)
        || normalized.file_name().is_none()
    {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent in the maze", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 500)]
    pub episodes: usize,

    /// Step budget per training episode
    #[arg(long, default_value_t = 100)]
    pub max_steps: usize,

    /// Learning rate α (0.0-1.0]
    #[arg(long, short = 'a', default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Discount factor γ [0.0-1.0]
    #[arg(long, short = 'g', default_value_t = 0.9)]
    pub discount_factor: f64,

    /// Exploration probability ε [0.0-1.0]
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Multiplicative epsilon decay per episode
    #[arg(long, default_value_t = 1.0)]
    pub epsilon_decay: f64,

    /// Minimum epsilon after decay
    #[arg(long, default_value_t = 0.0)]
    pub min_epsilon: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maze layout file (S start, G goal, # obstacle, . free); defaults to the 4x4 demo maze
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Log a progress report every N episodes (0 disables)
    #[arg(long, default_value_t = 100)]
    pub report_every: usize,

    /// Step cap for the greedy evaluation rollout
    #[arg(long, default_value_t = crate::pipeline::DEFAULT_ROLLOUT_STEPS)]
    pub rollout_steps: usize,

    /// Number of Q-table states to print after training
    #[arg(long, default_value_t = 5)]
    pub show_states: usize,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional CSV file for per-episode training curves
    #[arg(long)]
    pub curves: Option<PathBuf>,

    /// Window for the curves CSV moving averages and the final-window statistics
    #[arg(long, default_value_t = crate::export::DEFAULT_WINDOW)]
    pub curve_window: usize,

    /// Optional file for JSONL episode observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl TrainArgs {
    fn agent_config(&self) -> AgentConfig {
        let config = AgentConfig::default()
            .with_learning_rate(self.learning_rate)
            .with_discount_factor(self.discount_factor)
            .with_epsilon(self.epsilon)
            .with_epsilon_decay(self.epsilon_decay, self.min_epsilon);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            num_episodes: self.episodes,
            max_steps: self.max_steps,
            seed: self.seed,
        }
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let maze = match &args.layout {
        Some(path) => Some(
            Maze::load(path)
                .with_context(|| format!("Failed to load maze layout {}", path.display()))?,
        ),
        None => None,
    };
    let mut env = build_env(maze);

    let agent_config = args.agent_config();
    let mut agent = build_agent(&agent_config).context("Invalid agent configuration")?;
    let config = args.training_config();

    print_section("Q-Learning Maze Training");
    print_stats_table(&[
        ("Episodes", config.num_episodes.to_string().as_str()),
        ("Max steps", config.max_steps.to_string().as_str()),
        ("Learning rate α", agent_config.learning_rate.to_string().as_str()),
        ("Discount γ", agent_config.discount_factor.to_string().as_str()),
        ("Epsilon ε", agent_config.epsilon.to_string().as_str()),
    ]);
    println!("\n{}", MazeView::new(env.maze()));

    let mut pipeline = TrainingPipeline::new(config.clone())
        .with_observer(Box::new(IntervalReportObserver::new(args.report_every)));
    if !args.no_progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("Failed to create observations file {}", path.display()))?;
        pipeline = pipeline.with_observer(Box::new(observer));
    }

    let result = pipeline.run(&mut env, &mut agent)?;

    print_section("Training Results");
    print_stats_table(&[
        ("Episodes", result.total_episodes.to_string().as_str()),
        ("Reached goal", result.successes.to_string().as_str()),
        ("Success rate", format_percent(result.success_rate).as_str()),
        ("Mean reward", format!("{:.2}", result.mean_reward).as_str()),
        ("Mean steps", format!("{:.2}", result.mean_steps).as_str()),
    ]);

    let tail = result.total_episodes.saturating_sub(args.curve_window);
    let final_window = CurveStats::from_series(
        &result.episode_rewards[tail..],
        &result.episode_steps[tail..],
    );
    if let Some(stats) = &final_window {
        print_subsection(&format!("Last {} episodes", stats.episodes));
        print_stats_table(&[
            (
                "Reward",
                format!("{:.2} ± {:.2}", stats.mean_reward, stats.reward_std_dev).as_str(),
            ),
            ("Mean steps", format!("{:.2}", stats.mean_steps).as_str()),
            (
                "Steps range",
                format!("{}-{}", stats.min_steps, stats.max_steps).as_str(),
            ),
        ]);
    }

    if args.show_states > 0 {
        print_section(&format!("Q-Table (first {} states)", args.show_states));
        let rows: Vec<_> = agent
            .q_table()
            .states()
            .into_iter()
            .take(args.show_states)
            .map(|state| (state, agent.q_table().values(state)))
            .collect();
        print_q_table_excerpt(&rows);
    }

    print_section("Greedy Rollout");
    let rollout = greedy_rollout(&mut env, &mut agent, args.rollout_steps);
    print_rollout(&rollout);
    println!("\nLearned path:");
    println!("{}", PathView::new(env.maze(), &rollout.path));

    if let Some(path) = &args.curves {
        CurveCsvExporter::write(path, &result, args.curve_window)
            .with_context(|| format!("Failed to write curves to {}", path.display()))?;
        info!(path = %path.display(), "training curves written");
    }

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let summary = TrainingSummaryFile {
            training: SummaryStats::from(&result),
            final_window,
            rollout: RolloutStats::from(&rollout),
            agent: agent_config,
            config,
            maze: env.maze().to_string(),
            final_epsilon: agent.exploration_rate(),
            q_table_states: agent.q_table_size(),
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create summary file {}", path.display()))?;
        to_writer_pretty(file, &summary).context("Failed to serialize training summary")?;
        print_kv("Summary", &path.display().to_string());
        info!(path = %path.display(), "training summary written");
    }

    Ok(())
}

/// One line per rollout step, e.g. `Step 1: (0, 0) --right--> (0, 1), reward -0.10`
fn rollout_steps(rollout: &Rollout) -> Vec<String> {
    rollout
        .path
        .windows(2)
        .zip(rollout.actions.iter().zip(&rollout.rewards))
        .enumerate()
        .map(|(step, (cells, (action, reward)))| {
            format!(
                "Step {}: {} --{action}--> {}, reward {reward:.2}",
                step + 1,
                cells[0],
                cells[1]
            )
        })
        .collect()
}

fn print_rollout(rollout: &Rollout) {
    println!("Start: {}", rollout.path[0]);
    for line in rollout_steps(rollout) {
        println!("{line}");
    }
    if rollout.reached_goal {
        println!(
            "\nReached the goal in {} steps, total reward {:.2}",
            rollout.steps, rollout.total_reward
        );
    } else {
        println!("\nDid not reach the goal within {} steps", rollout.steps);
    }
}
