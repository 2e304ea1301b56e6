use std::path::PathBuf;

use clap::{Args, FromArgMatches, Parser, Subcommand};
use smartme_test::config::{Difficulty, DEFAULT_COUNT, DEFAULT_PLAYER, DEFAULT_TIME_LIMIT};
use smartme_test::history::DEFAULT_HISTORY_PATH;
use smartme_test::logging::{self, LogTarget};
use smartme_test::models::{category, Level, DEFAULT_CATEGORY};
use smartme_test::{HistoryStore, QuestionBank, Quiz, QuizConfig, QuizError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with extra question pools, keyed by category id
    #[arg(short, long, global = true, env = "SMARTME_QUESTIONS")]
    questions: Option<PathBuf>,

    /// File where finished quizzes are recorded
    #[arg(long, global = true, env = "SMARTME_HISTORY", default_value = DEFAULT_HISTORY_PATH)]
    history: PathBuf,

    /// Write logs to this file (the quiz screen owns the terminal)
    #[arg(long, global = true, env = "SMARTME_LOG")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take a quiz (default)
    Play(PlayArgs),
    /// List the available subjects
    Categories,
    /// Show the best players
    Leaderboard {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Show one player's results
    Stats {
        #[arg(short, long, env = "SMARTME_PLAYER", default_value = DEFAULT_PLAYER)]
        player: String,
    },
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[arg(short, long, default_value = DEFAULT_CATEGORY)]
    category: String,

    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of questions
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Seconds per question, 0 for no limit
    #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT)]
    time_limit: u32,

    /// Study mode: no countdown
    #[arg(long)]
    study: bool,

    /// Start with sound cues off
    #[arg(long)]
    mute: bool,

    #[arg(short, long, env = "SMARTME_PLAYER", default_value = DEFAULT_PLAYER)]
    player: String,
}

impl From<PlayArgs> for QuizConfig {
    fn from(args: PlayArgs) -> Self {
        Self {
            category: args.category,
            difficulty: args.difficulty,
            count: args.count,
            time_limit: args.time_limit,
            study_mode: args.study,
            sound: !args.mute,
            player: args.player,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `play` is the default subcommand. Its arguments still go through clap so
/// defaults and environment fallbacks match an explicit `play`.
fn resolve_command(command: Option<Command>) -> Result<Command, clap::Error> {
    match command {
        Some(command) => Ok(command),
        None => {
            let matches = PlayArgs::augment_args(clap::Command::new("play"))
                .try_get_matches_from(["play"])?;
            Ok(Command::Play(PlayArgs::from_arg_matches(&matches)?))
        }
    }
}

async fn run(cli: Cli) -> Result<(), QuizError> {
    let command = resolve_command(cli.command).unwrap_or_else(|err| err.exit());

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Command::Play(_)) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(target)?;

    let bank = match &cli.questions {
        Some(path) => QuestionBank::from_json(path)?,
        None => QuestionBank::builtin(),
    };

    match command {
        Command::Play(args) => {
            let history = HistoryStore::open(&cli.history)?;
            let quiz = Quiz::new(args.into(), bank, Some(history))?;
            quiz.run().await
        }
        Command::Categories => {
            print_categories(&bank);
            Ok(())
        }
        Command::Leaderboard { limit } => {
            let history = HistoryStore::open(&cli.history)?;
            let board = history.leaderboard(limit);
            if board.is_empty() {
                println!("No quizzes recorded yet");
            }
            for entry in board {
                println!(
                    "#{:<3} {:<16} {:>5} pts  {:>3} quizzes  {:>3}% avg",
                    entry.rank,
                    entry.player,
                    entry.total_score,
                    entry.quizzes_taken,
                    entry.average_percentage
                );
            }
            Ok(())
        }
        Command::Stats { player } => {
            let history = HistoryStore::open(&cli.history)?;
            match history.player_stats(&player) {
                Some(stats) => {
                    println!("{}", stats.player);
                    println!("  quizzes taken: {}", stats.quizzes_taken);
                    println!("  total score:   {}", stats.total_score);
                    println!("  average:       {}%", stats.average_percentage);
                    println!("  best:          {}%", stats.best_percentage);
                }
                None => println!("No quizzes recorded for {}", player),
            }
            Ok(())
        }
    }
}

fn print_categories(bank: &QuestionBank) {
    for level in [Level::Jhs, Level::Shs] {
        println!("{}", level.label());
        for subject in category::categories_for(level) {
            let size = bank.pool_size(subject.id).unwrap_or(0);
            println!("  {:<20} {:<22} {} questions", subject.id, subject.name, size);
        }
    }

    let custom: Vec<_> = bank
        .categories()
        .filter(|(id, _)| category::find_category(id).is_none())
        .collect();
    if !custom.is_empty() {
        println!("Custom");
        for (id, size) in custom {
            println!("  {:<20} {:<22} {} questions", id, "", size);
        }
    }
}
