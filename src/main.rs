//! fncal - FN-Calisthenics training cycles from the command line
//!
//! Thin driver over the core: parses input, calls the cycle controller, and
//! prints whatever structured plan comes back.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use fn_calisthenics::classifier;
use fn_calisthenics::cycle::CycleController;
use fn_calisthenics::db;
use fn_calisthenics::models::{completion_key, Goal, Level, TrainingPlan};

#[derive(Parser)]
#[command(name = "fncal")]
#[command(version, about = "FN-Calisthenics - planche and front-lever training cycles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create your profile
    Onboard {
        /// Your name
        name: String,
    },

    /// Submit goals, strength levels, and questionnaire answers
    Goals {
        /// Goal with its level, e.g. "planche=beginner" (repeatable)
        #[arg(short, long = "goal", value_name = "GOAL=LEVEL", required = true)]
        goals: Vec<String>,

        /// Answer to a question by index, e.g. "planche:0=4" (repeatable)
        #[arg(short, long = "answer", value_name = "GOAL:INDEX=VALUE")]
        answers: Vec<String>,
    },

    /// Show the questionnaire for a goal and level
    Questions {
        goal: String,
        level: String,
    },

    /// Show this cycle's training plan with completion marks
    Plan,

    /// Show profile and recorded benchmarks
    Status,

    /// Toggle a day's completion mark (indices start at 0)
    Toggle {
        week: usize,
        day: usize,
    },

    /// Keep the profile, start a fresh cycle
    NewCycle,

    /// Wipe everything, including the profile
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let pool = db::initialize_db().await?;
    let mut controller = CycleController::start(pool).await;

    match cli.command {
        Commands::Onboard { name } => {
            controller.submit_name(&name).await?;
            println!("Welcome to FN-Calisthenics, {}!", name.trim());
            println!("Next: submit your goals with `fncal goals`.");
        }

        Commands::Goals { goals, answers } => {
            let mut goal_set = BTreeSet::new();
            let mut levels = BTreeMap::new();
            for spec in &goals {
                let (goal, level) = parse_goal_level(spec)?;
                goal_set.insert(goal);
                levels.insert(goal, level);
            }

            let mut responses = BTreeMap::new();
            for spec in &answers {
                let (key, value) = parse_answer(spec, &levels)?;
                responses.insert(key, value);
            }

            controller.submit_goal_data(goal_set, levels, responses).await?;
            println!("Goal data saved.");

            let plan = controller.view_plan()?;
            print_plan(&plan, &controller.data().completed_days);
        }

        Commands::Questions { goal, level } => {
            let goal: Goal = goal.parse().map_err(anyhow::Error::msg)?;
            let level: Level = level.parse().map_err(anyhow::Error::msg)?;
            for (index, question) in classifier::questions_for(level, goal).iter().enumerate() {
                println!("{}. {}", index, question);
            }
        }

        Commands::Plan => {
            let plan = controller.view_plan()?;
            print_plan(&plan, &controller.data().completed_days);
        }

        Commands::Status => {
            print_status(&controller);
        }

        Commands::Toggle { week, day } => {
            let completed = controller.toggle_day(week, day).await?;
            println!(
                "Week {}, day {}: {}",
                week + 1,
                day + 1,
                if completed { "completed" } else { "not completed" }
            );
        }

        Commands::NewCycle => {
            controller.new_cycle().await?;
            println!(
                "New cycle started for {}. Submit fresh benchmarks with `fncal goals`.",
                controller.data().profile.name
            );
        }

        Commands::Reset => {
            controller.reset().await;
            println!("All data cleared.");
        }
    }

    Ok(())
}

/// Parse "planche=beginner" into a (goal, level) pair.
fn parse_goal_level(spec: &str) -> Result<(Goal, Level)> {
    let (goal, level) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("expected GOAL=LEVEL, got '{}'", spec))?;
    let goal: Goal = goal.trim().parse().map_err(anyhow::Error::msg)?;
    let level: Level = level.trim().parse().map_err(anyhow::Error::msg)?;
    Ok((goal, level))
}

/// Parse "planche:0=4" into a stored (response key, value) pair, using the
/// level already chosen for that goal.
fn parse_answer(spec: &str, levels: &BTreeMap<Goal, Level>) -> Result<(String, String)> {
    let (target, value) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("expected GOAL:INDEX=VALUE, got '{}'", spec))?;
    let (goal, index) = target
        .split_once(':')
        .ok_or_else(|| anyhow!("expected GOAL:INDEX=VALUE, got '{}'", spec))?;

    let goal: Goal = goal.trim().parse().map_err(anyhow::Error::msg)?;
    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| anyhow!("question index in '{}' is not a number", spec))?;
    let level = levels
        .get(&goal)
        .ok_or_else(|| anyhow!("no level given for {} (add --goal {}=<level>)", goal, goal))?;

    Ok((
        classifier::response_key(goal, *level, index),
        value.trim().to_string(),
    ))
}

fn print_plan(plan: &TrainingPlan, completed: &BTreeMap<String, bool>) {
    if plan.is_empty() {
        println!("No plan available for the current goals and levels.");
        return;
    }

    for (week_index, week) in plan.weeks.iter().enumerate() {
        println!("{}", week.label);
        for (day_index, day) in week.days.iter().enumerate() {
            let done = completed
                .get(&completion_key(week_index, day_index))
                .copied()
                .unwrap_or(false);
            println!("  [{}] {}", if done { 'x' } else { ' ' }, day.day_name);
            for exercise in &day.exercises {
                println!(
                    "      {} | {} | Sets: {} | Rest: {}",
                    exercise.name, exercise.dose, exercise.sets, exercise.rest
                );
            }
        }
    }
}

fn print_status(controller: &CycleController) {
    let data = controller.data();
    if data.profile.name.is_empty() {
        println!("No profile yet - run `fncal onboard <name>`.");
        return;
    }

    println!("Name: {}", data.profile.name);
    if data.goals.is_empty() {
        println!("No goals selected");
        return;
    }

    for &goal in &data.goals {
        match data.levels.get(&goal) {
            Some(&level) => {
                println!("Goal: {} ({})", goal, level);
                for (index, question) in classifier::questions_for(level, goal).iter().enumerate() {
                    let key = classifier::response_key(goal, level, index);
                    let answer = data.responses.get(&key).map(String::as_str).unwrap_or("-");
                    println!("  {} {}", question, answer);
                }

                let answers = classifier::beginner_answers(goal, &data.responses);
                match classifier::classify(goal, level, answers) {
                    Some(tier) => println!("  Tier: {}", tier),
                    None => println!("  Tier: none (no routines for these benchmarks)"),
                }
            }
            None => println!("Goal: {} (no level selected)", goal),
        }
    }
}
