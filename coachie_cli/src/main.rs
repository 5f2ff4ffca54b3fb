use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use coachie_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coachie")]
#[command(about = "Voice-driven health logging and daily Coachie Score", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a spoken command and print the result as JSON
    Parse {
        /// The transcript, e.g. "I drank 2 glasses of water"
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Parse a spoken command and add it to today's log
    Log {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Dry run - show what would be logged without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Add a step count to today's log
    Steps {
        count: u32,
    },

    /// Compute the Coachie Score for a day
    Score {
        /// Day to score (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Interacted with a circle today
        #[arg(long)]
        circle: bool,

        /// Completed today's focus tasks
        #[arg(long)]
        focus_done: bool,

        /// Print the score without recording it in the history
        #[arg(long)]
        no_save: bool,
    },

    /// Show current and longest streaks
    Streak {
        /// Minimum daily score that counts toward a streak
        #[arg(long)]
        threshold: Option<u8>,
    },
}

fn main() -> Result<()> {
    coachie_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Commands::Parse { words } => cmd_parse(&words.join(" ")),
        Commands::Log { words, dry_run } => cmd_log(data_dir, &words.join(" "), dry_run),
        Commands::Steps { count } => cmd_steps(data_dir, count),
        Commands::Score {
            date,
            circle,
            focus_done,
            no_save,
        } => {
            let date = date.unwrap_or_else(today);
            let signals = DaySignals {
                circle_interaction: circle,
                focus_tasks_completed: focus_done,
            };
            cmd_score(data_dir, date, signals, no_save, &config)
        }
        Commands::Streak { threshold } => {
            let threshold = threshold.unwrap_or(config.score.streak_threshold);
            cmd_streak(data_dir, threshold)
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn cmd_parse(transcript: &str) -> Result<()> {
    let result = parse_voice_command(transcript);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn cmd_log(data_dir: PathBuf, transcript: &str, dry_run: bool) -> Result<()> {
    let result = parse_voice_command(transcript);

    let reason = match &result {
        VoiceCommandResult::Unknown => Some(format!("\"{}\"", transcript)),
        VoiceCommandResult::ParseError { message } => Some(message.clone()),
        _ => None,
    };
    if let Some(reason) = reason {
        eprintln!("Sorry, I couldn't log that: {}", reason);
        return Err(Error::Unrecognized(reason));
    }

    let summary = result.summary();
    if dry_run {
        println!("{}", summary);
        println!("\n[Dry run - not logging]");
        return Ok(());
    }

    let entry = result
        .into_log_entry()
        .ok_or_else(|| Error::Other(format!("Nothing to log for \"{}\"", transcript)))?;
    let log = HealthLog::new(entry);

    let mut store = LogStore::new(&data_dir);
    store.append(today(), &log)?;

    println!("✓ Logged {}", summary);
    Ok(())
}

fn cmd_steps(data_dir: PathBuf, count: u32) -> Result<()> {
    let mut store = LogStore::new(&data_dir);
    store.append(today(), &HealthLog::new(LogEntry::Steps { count }))?;

    let day = store.load_day(today())?;
    println!("✓ Logged {} steps", count);
    if let Some(total) = day.steps {
        println!("  Today: {} steps", total);
    }
    Ok(())
}

fn cmd_score(
    data_dir: PathBuf,
    date: NaiveDate,
    signals: DaySignals,
    no_save: bool,
    config: &Config,
) -> Result<()> {
    let store = LogStore::new(&data_dir);
    let day = store.load_day(date)?;
    let habits = HabitProgress::from_day(&config.habits.tracked, &day);

    let score = calculate_daily_score(&day, habits, &config.goals, signals, &config.score.weights());

    println!("Coachie Score for {}: {}", date, score.daily_score);
    println!("  Health:   {}", score.health_score);
    println!("  Wellness: {}", score.wellness_score);
    println!("  Habits:   {}", score.habits_score);
    if day.is_empty() {
        println!("\n  No logs for this day yet.");
    }

    if !no_save {
        ScoreHistory::new(&data_dir).record(date, &score)?;
        tracing::info!("Recorded score for {}", date);
    }

    Ok(())
}

fn cmd_streak(data_dir: PathBuf, threshold: u8) -> Result<()> {
    let history = ScoreHistory::new(&data_dir).load()?;

    let current = current_streak(&history, today(), threshold);
    let longest = longest_streak(&history, threshold);

    println!("Current streak: {} {}", current, days(current));
    println!("Longest streak: {} {}", longest, days(longest));
    println!("  (days scoring {} or more)", threshold);
    Ok(())
}

fn days(n: u32) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}
